//! Free-text search over recipe ingredients.

use std::collections::BTreeMap;

use crate::types::Recipe;

/// Keep records whose ingredient list contains `query`, case-insensitively.
///
/// Records without an ingredient list never match. Callers are expected to
/// treat an empty query as "no search" and skip this call entirely; search is
/// not responsible for that policy.
pub fn search_ingredients(recipes: &[Recipe], query: &str) -> Vec<Recipe> {
    let needle = query.to_lowercase();
    recipes
        .iter()
        .filter(|r| {
            r.ingredients
                .as_deref()
                .is_some_and(|list| list.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Occurrence counts of individual ingredients across a subset.
///
/// Ingredient lists are split on commas, trimmed, and lowercased; records
/// without a list contribute nothing. Feeds tag-cloud style summaries.
pub fn ingredient_frequencies(recipes: &[Recipe]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for recipe in recipes {
        let Some(list) = recipe.ingredients.as_deref() else {
            continue;
        };
        for token in list.split(',') {
            let token = token.trim().to_lowercase();
            if token.is_empty() {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}
