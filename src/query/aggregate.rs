//! Aggregation over filtered subsets.
//!
//! Every function here is pure and recomputes from the subset it is handed;
//! nothing is cached between calls. Group keys use exact value equality, and
//! a category absent from the subset simply does not appear in the output.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::error::{QueryError, QueryResult};
use crate::types::{CategoricalField, NumericField, Recipe};

/// Count records per value of one categorical field.
///
/// Records with no value for the field are skipped; only categories present
/// in `recipes` appear as keys (no zero-fill).
pub fn count_by(recipes: &[Recipe], field: CategoricalField) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for recipe in recipes {
        if let Some(value) = recipe.categorical(field) {
            *counts.entry(value.to_owned()).or_insert(0) += 1;
        }
    }
    counts
}

/// Count records per `(first, second)` value pair.
///
/// Records with no value for either field are skipped, as in [`count_by`].
pub fn count_by_pair(
    recipes: &[Recipe],
    first: CategoricalField,
    second: CategoricalField,
) -> BTreeMap<(String, String), usize> {
    let mut counts = BTreeMap::new();
    for recipe in recipes {
        let (Some(a), Some(b)) = (recipe.categorical(first), recipe.categorical(second)) else {
            continue;
        };
        *counts.entry((a.to_owned(), b.to_owned())).or_insert(0) += 1;
    }
    counts
}

/// Fill absent combinations of the observed keys with zero.
///
/// Turns a sparse pair count into a dense matrix over the cartesian product
/// of the first keys and second keys that appear anywhere in `counts`. This
/// is an explicit post-step for consumers that need a complete grid (e.g. a
/// region x course heatmap); the base group-by never zero-fills.
pub fn densify(counts: &BTreeMap<(String, String), usize>) -> BTreeMap<(String, String), usize> {
    let firsts: BTreeSet<&String> = counts.keys().map(|(a, _)| a).collect();
    let seconds: BTreeSet<&String> = counts.keys().map(|(_, b)| b).collect();

    let mut dense = BTreeMap::new();
    for a in &firsts {
        for b in &seconds {
            let key = ((*a).clone(), (*b).clone());
            let count = counts.get(&key).copied().unwrap_or(0);
            dense.insert(key, count);
        }
    }
    dense
}

/// Mean of a numeric field over the subset, skipping records with no value.
///
/// Returns [`QueryError::EmptyAggregation`] when not a single record carries
/// a value, so a missing statistic can never be rendered as a real number.
pub fn mean(recipes: &[Recipe], field: NumericField) -> QueryResult<f64> {
    let mut sum: u64 = 0;
    let mut count: usize = 0;
    for recipe in recipes {
        if let Some(value) = recipe.numeric(field) {
            sum += u64::from(value);
            count += 1;
        }
    }

    if count == 0 {
        return Err(QueryError::EmptyAggregation {
            field: field.as_str().to_owned(),
        });
    }
    Ok(sum as f64 / count as f64)
}

/// Headline metrics for a filtered subset.
///
/// The averages are `None` when no record carried the corresponding value;
/// presentation renders that as "no data" rather than a number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of records in the subset.
    pub recipe_count: usize,
    /// Average preparation time in minutes.
    pub avg_prep_time: Option<f64>,
    /// Average cooking time in minutes.
    pub avg_cook_time: Option<f64>,
}

/// Compute the headline metrics for a subset.
pub fn summarize(recipes: &[Recipe]) -> Summary {
    Summary {
        recipe_count: recipes.len(),
        avg_prep_time: mean(recipes, NumericField::PrepTime).ok(),
        avg_cook_time: mean(recipes, NumericField::CookTime).ok(),
    }
}
