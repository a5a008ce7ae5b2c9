//! Multi-criteria filtering over recipe records.

use std::collections::BTreeSet;

use crate::error::{QueryError, QueryResult};
use crate::types::{CategoricalField, Recipe};

/// Inclusive `[min, max]` bound applied to a record's derived total time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    min: u32,
    max: u32,
}

impl TimeRange {
    /// Create a range, rejecting `min > max` with
    /// [`QueryError::InvalidRange`] instead of silently swapping the bounds.
    pub fn new(min: u32, max: u32) -> QueryResult<Self> {
        if min > max {
            return Err(QueryError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound, inclusive.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound, inclusive.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether a total time falls inside the range (both ends inclusive).
    pub fn contains(&self, total: u32) -> bool {
        self.min <= total && total <= self.max
    }
}

/// A transient, per-interaction set of constraints.
///
/// An empty set places no restriction on its field; `time_range: None` places
/// no time restriction. [`Selection::default`] therefore matches every
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Allowed `region` values.
    pub region: BTreeSet<String>,
    /// Allowed `state` values.
    pub state: BTreeSet<String>,
    /// Allowed `diet` values.
    pub diet: BTreeSet<String>,
    /// Allowed `course` values.
    pub course: BTreeSet<String>,
    /// Allowed `flavor_profile` values.
    pub flavor_profile: BTreeSet<String>,
    /// Inclusive bound on the derived `total_time`.
    pub time_range: Option<TimeRange>,
}

impl Selection {
    /// Whether this selection places no constraint at all.
    pub fn is_unrestricted(&self) -> bool {
        self.region.is_empty()
            && self.state.is_empty()
            && self.diet.is_empty()
            && self.course.is_empty()
            && self.flavor_profile.is_empty()
            && self.time_range.is_none()
    }

    /// Whether a single record passes every constraint.
    ///
    /// Each dimension is an independent predicate; the record must satisfy
    /// all of them.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        set_allows(&self.region, recipe.categorical(CategoricalField::Region))
            && set_allows(&self.state, recipe.categorical(CategoricalField::State))
            && set_allows(&self.diet, recipe.categorical(CategoricalField::Diet))
            && set_allows(&self.course, recipe.categorical(CategoricalField::Course))
            && set_allows(
                &self.flavor_profile,
                recipe.categorical(CategoricalField::FlavorProfile),
            )
            && range_allows(self.time_range, recipe.total_time)
    }
}

/// OR within a field: an empty set places no constraint, a non-empty set
/// requires membership. A record with no value never satisfies a non-empty
/// set.
fn set_allows(selected: &BTreeSet<String>, value: Option<&str>) -> bool {
    if selected.is_empty() {
        return true;
    }
    match value {
        Some(v) => selected.contains(v),
        None => false,
    }
}

/// A record with no derivable total passes when no range is set, and fails
/// any explicit range.
fn range_allows(range: Option<TimeRange>, total: Option<u32>) -> bool {
    match (range, total) {
        (None, _) => true,
        (Some(r), Some(t)) => r.contains(t),
        (Some(_), None) => false,
    }
}

/// Apply `selection` to `recipes`, preserving input order.
///
/// Returns a new owned subset; the input is untouched. An empty input yields
/// an empty output.
pub fn filter(recipes: &[Recipe], selection: &Selection) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect()
}
