//! Filtering, aggregation, search, and meal planning over the loaded dataset.
//!
//! Every operation here is pure: it takes a slice of records, returns a fresh
//! value, and touches no shared state. A user interaction re-runs
//! [`filter()`] against the full store and feeds the resulting subset to
//! whichever of the other operations the presentation layer needs. "No rows
//! matched" is always an empty subset, never an error.
//!
//! Currently implemented:
//!
//! - [`filter()`]: multi-criteria subset selection
//! - [`count_by()`] / [`count_by_pair()`] / [`densify()`]: grouped counts
//! - [`mean()`] / [`summarize()`]: scalar metrics
//! - [`search_ingredients()`] / [`ingredient_frequencies()`]: text search
//! - [`plan_meals()`]: randomized sample meal plan
//!
//! ## Example: filter → aggregate → plan
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use recipe_explorer::query::{count_by, filter, plan_meals, summarize, Selection};
//! use recipe_explorer::types::{CategoricalField, Recipe, RecipeStore};
//!
//! let store = RecipeStore::new(vec![
//!     Recipe {
//!         name: "Poha".to_owned(),
//!         ingredients: Some("flattened rice, onion, mustard seeds".to_owned()),
//!         diet: "vegetarian".to_owned(),
//!         prep_time: Some(10),
//!         cook_time: Some(5),
//!         flavor_profile: Some("spicy".to_owned()),
//!         course: "snack".to_owned(),
//!         state: "Maharashtra".to_owned(),
//!         region: Some("West".to_owned()),
//!         total_time: None,
//!     },
//!     Recipe {
//!         name: "Gulab Jamun".to_owned(),
//!         ingredients: Some("khoya, sugar, cardamom".to_owned()),
//!         diet: "vegetarian".to_owned(),
//!         prep_time: Some(15),
//!         cook_time: Some(25),
//!         flavor_profile: Some("sweet".to_owned()),
//!         course: "dessert".to_owned(),
//!         state: "West Bengal".to_owned(),
//!         region: Some("East".to_owned()),
//!         total_time: None,
//!     },
//! ]);
//!
//! // Keep only vegetarian recipes.
//! let mut selection = Selection::default();
//! selection.diet.insert("vegetarian".to_owned());
//! let subset = filter(store.recipes(), &selection);
//! assert_eq!(subset.len(), 2);
//!
//! // Aggregate the subset.
//! let by_course = count_by(&subset, CategoricalField::Course);
//! assert_eq!(by_course.get("snack"), Some(&1));
//! assert_eq!(summarize(&subset).avg_prep_time, Some(12.5));
//!
//! // Sample a meal plan (seeded for a deterministic pick).
//! let mut rng = StdRng::seed_from_u64(1);
//! let plan = plan_meals(&subset, &["snack", "dessert"], &mut rng).unwrap();
//! assert_eq!(plan.len(), 2);
//! ```

pub mod aggregate;
pub mod filter;
pub mod plan;
pub mod search;

pub use aggregate::{Summary, count_by, count_by_pair, densify, mean, summarize};
pub use filter::{Selection, TimeRange, filter};
pub use plan::{DEFAULT_COURSES, PlannedMeal, plan_meals};
pub use search::{ingredient_frequencies, search_ingredients};
