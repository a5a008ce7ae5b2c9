use criterion::{Criterion, black_box, criterion_group, criterion_main};
use recipe_explorer::query::{Selection, count_by, filter};
use recipe_explorer::types::{CategoricalField, Recipe, RecipeStore};

fn synthetic_store(rows: usize) -> RecipeStore {
    let regions = ["North", "South", "East", "West", "Central"];
    let courses = ["snack", "main course", "dessert", "starter"];
    let diets = ["vegetarian", "non vegetarian"];

    let recipes = (0..rows)
        .map(|i| Recipe {
            name: format!("dish-{i}"),
            ingredients: Some("rice, onion, garlic, cumin".to_owned()),
            diet: diets[i % diets.len()].to_owned(),
            prep_time: Some((i % 60) as u32),
            cook_time: Some((i % 90) as u32),
            flavor_profile: Some("spicy".to_owned()),
            course: courses[i % courses.len()].to_owned(),
            state: format!("state-{}", i % 20),
            region: Some(regions[i % regions.len()].to_owned()),
            total_time: None,
        })
        .collect();

    RecipeStore::new(recipes)
}

fn bench_filter(c: &mut Criterion) {
    let store = synthetic_store(10_000);
    let mut selection = Selection::default();
    selection.diet.insert("vegetarian".to_owned());
    selection.course.insert("snack".to_owned());

    c.bench_function("filter_10k", |b| {
        b.iter(|| filter(black_box(store.recipes()), black_box(&selection)))
    });
}

fn bench_count_by(c: &mut Criterion) {
    let store = synthetic_store(10_000);

    c.bench_function("count_by_region_10k", |b| {
        b.iter(|| count_by(black_box(store.recipes()), CategoricalField::Region))
    });
}

criterion_group!(benches, bench_filter, bench_count_by);
criterion_main!(benches);
