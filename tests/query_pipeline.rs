use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use recipe_explorer::ingestion::csv::load_csv_from_path;
use recipe_explorer::query::{
    DEFAULT_COURSES, Selection, TimeRange, count_by, count_by_pair, densify, filter, mean,
    plan_meals, search_ingredients, summarize,
};
use recipe_explorer::types::{CategoricalField, NumericField, Recipe, RecipeStore};

fn recipe(
    name: &str,
    diet: &str,
    course: &str,
    region: &str,
    prep: u32,
    cook: u32,
) -> Recipe {
    Recipe {
        name: name.to_owned(),
        ingredients: None,
        diet: diet.to_owned(),
        prep_time: Some(prep),
        cook_time: Some(cook),
        flavor_profile: None,
        course: course.to_owned(),
        state: "Punjab".to_owned(),
        region: Some(region.to_owned()),
        total_time: None,
    }
}

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

#[test]
fn vegetarian_filter_counts_and_mean() {
    let store = RecipeStore::new(vec![
        recipe("Poha", "vegetarian", "snack", "West", 10, 5),
        recipe("Chicken Curry", "non vegetarian", "main course", "North", 20, 40),
        recipe("Gulab Jamun", "vegetarian", "dessert", "North", 15, 25),
    ]);

    let selection = Selection {
        diet: set(&["vegetarian"]),
        ..Default::default()
    };
    let subset = filter(store.recipes(), &selection);

    let names: Vec<&str> = subset.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Poha", "Gulab Jamun"]);

    let by_course = count_by(&subset, CategoricalField::Course);
    assert_eq!(by_course.get("snack"), Some(&1));
    assert_eq!(by_course.get("dessert"), Some(&1));
    assert_eq!(by_course.len(), 2);

    assert_eq!(mean(&subset, NumericField::PrepTime).unwrap(), 12.5);
}

#[test]
fn fixture_store_supports_the_full_dashboard_pass() {
    let store = load_csv_from_path("tests/fixtures/recipes.csv").unwrap();

    // One synchronous recomputation pass: filter, then every downstream view.
    let selection = Selection {
        diet: set(&["vegetarian"]),
        time_range: Some(TimeRange::new(0, 120).unwrap()),
        ..Default::default()
    };
    let subset = filter(store.recipes(), &selection);

    // Kheer and Shukto have no derivable total, so the explicit range drops them.
    let names: Vec<&str> = subset.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Balu shahi", "Poha"]);

    let summary = summarize(&subset);
    assert_eq!(summary.recipe_count, 2);
    assert_eq!(summary.avg_prep_time, Some(27.5));
    assert_eq!(summary.avg_cook_time, Some(15.0));

    let by_region = count_by(&subset, CategoricalField::Region);
    assert_eq!(by_region.get("East"), Some(&1));
    assert_eq!(by_region.get("West"), Some(&1));

    let found = search_ingredients(&subset, "MAIDA");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Balu shahi");

    // Totals 70 and 15.
    assert_eq!(mean(&subset, NumericField::TotalTime).unwrap(), 42.5);

    let mut rng = StdRng::seed_from_u64(11);
    let plan = plan_meals(&subset, &DEFAULT_COURSES, &mut rng).unwrap();
    let courses: Vec<&str> = plan.iter().map(|m| m.course.as_str()).collect();
    assert_eq!(courses, vec!["snack", "dessert"]);
}

#[test]
fn cross_tab_densification_over_the_fixture() {
    let store = load_csv_from_path("tests/fixtures/recipes.csv").unwrap();

    let sparse = count_by_pair(
        store.recipes(),
        CategoricalField::Region,
        CategoricalField::Course,
    );
    let dense = densify(&sparse);

    // Regions observed: East, North, West. Courses observed: dessert, main course, snack.
    assert_eq!(dense.len(), 9);
    assert_eq!(
        dense.get(&("East".to_owned(), "dessert".to_owned())),
        Some(&1)
    );
    // Not present in the data, filled by densification.
    assert_eq!(dense.get(&("West".to_owned(), "dessert".to_owned())), Some(&0));
    assert_eq!(
        dense.get(&("North".to_owned(), "snack".to_owned())),
        Some(&0)
    );

    // Kheer has no region, so the sparse table only counts 4 of 5 records.
    let sparse_total: usize = sparse.values().sum();
    assert_eq!(sparse_total, 4);

    // state is present on every record, `-1` included, so nothing is dropped.
    let by_state_course = count_by_pair(
        store.recipes(),
        CategoricalField::State,
        CategoricalField::Course,
    );
    let state_total: usize = by_state_course.values().sum();
    assert_eq!(state_total, 5);
    assert_eq!(
        by_state_course.get(&("-1".to_owned(), "dessert".to_owned())),
        Some(&1)
    );
}

#[test]
fn tightening_a_selection_never_grows_the_subset() {
    let store = load_csv_from_path("tests/fixtures/recipes.csv").unwrap();

    let mut selection = Selection::default();
    let mut previous = filter(store.recipes(), &selection).len();

    selection.diet = set(&["vegetarian"]);
    let after_diet = filter(store.recipes(), &selection).len();
    assert!(after_diet <= previous);
    previous = after_diet;

    selection.course = set(&["dessert"]);
    let after_course = filter(store.recipes(), &selection).len();
    assert!(after_course <= previous);
    previous = after_course;

    selection.time_range = Some(TimeRange::new(0, 80).unwrap());
    let after_range = filter(store.recipes(), &selection).len();
    assert!(after_range <= previous);
}

#[test]
fn boundary_values_serialize_as_plain_shapes() {
    let store = load_csv_from_path("tests/fixtures/recipes.csv").unwrap();

    let summary = summarize(store.recipes());
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["recipe_count"], 5);
    assert!(json["avg_prep_time"].is_number());

    let mut rng = StdRng::seed_from_u64(2);
    let plan = plan_meals(store.recipes(), &["snack"], &mut rng).unwrap();
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json[0]["course"], "snack");
    assert_eq!(json[0]["dish"], "Poha");
    assert_eq!(json[0]["state"], "Maharashtra");
}
