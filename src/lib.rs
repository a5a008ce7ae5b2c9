//! `recipe-explorer` is a small library for exploring a fixed tabular recipe
//! dataset entirely in memory: load the dataset once into an immutable
//! [`types::RecipeStore`], then answer each user interaction by filtering the
//! full record set and deriving aggregates from the filtered subset.
//!
//! The primary entrypoints are [`ingestion::load_recipes`] (CSV into a store)
//! and the [`query`] operations (filter / aggregate / search / plan).
//!
//! ## What a store holds
//!
//! One [`types::Recipe`] per dataset row: `name`, free-text `ingredients`,
//! categorical `diet` / `course` / `state` / `region` / `flavor_profile`, and
//! `prep_time` / `cook_time` minutes. A derived `total_time` is computed once
//! when the store is built. Blank cells and the dataset's `-1` placeholder
//! map to "no value" — never to 0 — so range filters and means stay honest.
//!
//! ## Quick example: load and explore
//!
//! ```no_run
//! use recipe_explorer::ingestion::{load_recipes, LoadOptions};
//! use recipe_explorer::query::{filter, summarize, Selection};
//!
//! # fn main() -> Result<(), recipe_explorer::LoadError> {
//! let store = load_recipes("indian_food.csv", &LoadOptions::default())?;
//!
//! let mut selection = Selection::default();
//! selection.diet.insert("vegetarian".to_owned());
//! let subset = filter(store.recipes(), &selection);
//!
//! let summary = summarize(&subset);
//! println!("recipes={} avg_prep={:?}", summary.recipe_count, summary.avg_prep_time);
//! # Ok(())
//! # }
//! ```
//!
//! ## Query semantics
//!
//! - A [`query::Selection`] combines set-membership constraints per field
//!   (OR within a field, AND across fields) with an inclusive total-time
//!   range; an empty set or absent range means "unrestricted", so the default
//!   selection returns the whole store unchanged.
//! - A record with no value for a field never matches a non-empty constraint
//!   on that field.
//! - Aggregations are rebuilt from the subset on every call; a mean over
//!   zero usable values and an unplannable meal are explicit
//!   [`error::QueryError`] signals, never NaN or a silent empty success.
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading and load observability
//! - [`types`]: recipe records, the immutable store, field names
//! - [`query`]: filtering, aggregation, ingredient search, meal planning
//! - [`error`]: error types used across loading and querying

pub mod error;
pub mod ingestion;
pub mod query;
pub mod types;

pub use error::{LoadError, LoadResult, QueryError, QueryResult};
