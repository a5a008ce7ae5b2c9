//! Core data model types for the recipe explorer.
//!
//! The dataset is loaded once into an immutable [`RecipeStore`]; every query
//! (filtering, aggregation, search, meal planning) reads from the store
//! without mutating it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};

/// A single recipe record.
///
/// Fields the dataset leaves blank are `None`. Numeric times use `None` for
/// "no value" rather than zero or a sentinel, so range filters and means
/// never see a fabricated number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Dish name. Not guaranteed unique across the dataset.
    pub name: String,
    /// Free-text ingredient list, comma separated.
    pub ingredients: Option<String>,
    /// Diet category, e.g. "vegetarian" / "non vegetarian".
    pub diet: String,
    /// Preparation time in minutes.
    pub prep_time: Option<u32>,
    /// Cooking time in minutes.
    pub cook_time: Option<u32>,
    /// Flavor category, e.g. "spicy" / "sweet".
    pub flavor_profile: Option<String>,
    /// Course category, e.g. "snack" / "main course" / "dessert".
    pub course: String,
    /// State of origin.
    pub state: String,
    /// Region of origin.
    pub region: Option<String>,
    /// Derived `prep_time + cook_time`.
    ///
    /// Recomputed for every record when the [`RecipeStore`] is built; any
    /// value supplied here is overwritten. `None` unless both inputs are
    /// present.
    pub total_time: Option<u32>,
}

impl Recipe {
    /// The record's value for a categorical field, `None` when absent.
    pub fn categorical(&self, field: CategoricalField) -> Option<&str> {
        match field {
            CategoricalField::Diet => Some(&self.diet),
            CategoricalField::Course => Some(&self.course),
            CategoricalField::State => Some(&self.state),
            CategoricalField::Region => self.region.as_deref(),
            CategoricalField::FlavorProfile => self.flavor_profile.as_deref(),
        }
    }

    /// The record's value for a numeric field, `None` when absent.
    pub fn numeric(&self, field: NumericField) -> Option<u32> {
        match field {
            NumericField::PrepTime => self.prep_time,
            NumericField::CookTime => self.cook_time,
            NumericField::TotalTime => self.total_time,
        }
    }
}

/// Categorical recipe fields that queries can filter or group on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CategoricalField {
    /// `diet`
    Diet,
    /// `course`
    Course,
    /// `state`
    State,
    /// `region`
    Region,
    /// `flavor_profile`
    FlavorProfile,
}

impl CategoricalField {
    /// Column name as it appears in the dataset.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diet => "diet",
            Self::Course => "course",
            Self::State => "state",
            Self::Region => "region",
            Self::FlavorProfile => "flavor_profile",
        }
    }

    /// Resolve a field name coming from an outer surface (UI, config).
    ///
    /// An unknown name is a caller/loader contract mismatch and fails with
    /// [`QueryError::MissingField`] rather than degrading silently.
    pub fn from_name(name: &str) -> QueryResult<Self> {
        match name {
            "diet" => Ok(Self::Diet),
            "course" => Ok(Self::Course),
            "state" => Ok(Self::State),
            "region" => Ok(Self::Region),
            "flavor_profile" => Ok(Self::FlavorProfile),
            _ => Err(QueryError::MissingField {
                name: name.to_owned(),
            }),
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric recipe fields that queries can average or range-filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NumericField {
    /// `prep_time`
    PrepTime,
    /// `cook_time`
    CookTime,
    /// Derived `total_time`
    TotalTime,
}

impl NumericField {
    /// Column name as it appears in the dataset (or the derived column name).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrepTime => "prep_time",
            Self::CookTime => "cook_time",
            Self::TotalTime => "total_time",
        }
    }

    /// Resolve a field name coming from an outer surface (UI, config).
    pub fn from_name(name: &str) -> QueryResult<Self> {
        match name {
            "prep_time" => Ok(Self::PrepTime),
            "cook_time" => Ok(Self::CookTime),
            "total_time" => Ok(Self::TotalTime),
            _ => Err(QueryError::MissingField {
                name: name.to_owned(),
            }),
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The loaded dataset: an ordered, immutable sequence of [`Recipe`] records.
///
/// Built once at startup. `total_time` is derived here, after which no
/// record is mutated again; queries receive the records as a shared slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Build the store, deriving `total_time` for every record.
    pub fn new(mut recipes: Vec<Recipe>) -> Self {
        for recipe in &mut recipes {
            recipe.total_time = match (recipe.prep_time, recipe.cook_time) {
                (Some(prep), Some(cook)) => Some(prep + cook),
                _ => None,
            };
        }
        Self { recipes }
    }

    /// All records, in dataset order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Sorted distinct non-null values of a categorical field.
    ///
    /// This is what an outer filter surface offers as the selectable options
    /// for that field.
    pub fn distinct(&self, field: CategoricalField) -> Vec<String> {
        let mut values: Vec<String> = self
            .recipes
            .iter()
            .filter_map(|r| r.categorical(field))
            .map(str::to_owned)
            .collect();
        values.sort();
        values.dedup();
        values
    }

    /// Smallest and largest known `total_time`, `None` if no record has one.
    ///
    /// Outer surfaces use this to size a time-range widget.
    pub fn total_time_bounds(&self) -> Option<(u32, u32)> {
        let mut bounds: Option<(u32, u32)> = None;
        for total in self.recipes.iter().filter_map(|r| r.total_time) {
            bounds = Some(match bounds {
                Some((min, max)) => (min.min(total), max.max(total)),
                None => (total, total),
            });
        }
        bounds
    }
}
