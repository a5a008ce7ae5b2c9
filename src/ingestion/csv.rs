//! CSV loading for the recipe dataset.

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::types::{Recipe, RecipeStore};

/// Placeholder the source dataset uses for unknown values.
const MISSING_SENTINEL: &str = "-1";

/// Load a recipe CSV into a [`RecipeStore`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all recipe columns (order can differ).
/// - Empty cells and the `-1` placeholder map to "no value" for optional
///   text columns and for the minute columns, never to 0.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> LoadResult<RecipeStore> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load recipe CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> LoadResult<RecipeStore> {
    let headers = rdr.headers()?.clone();
    let cols = Columns::from_headers(&headers)?;

    let mut recipes: Vec<Recipe> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row numbers for users; +1 again because the header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        recipes.push(parse_recipe(user_row, &cols, &record)?);
    }

    Ok(RecipeStore::new(recipes))
}

/// CSV column indexes for the recipe schema (allows re-ordered CSV columns).
struct Columns {
    name: usize,
    ingredients: usize,
    diet: usize,
    prep_time: usize,
    cook_time: usize,
    flavor_profile: usize,
    course: usize,
    state: usize,
    region: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> LoadResult<Self> {
        let find = |name: &str| match headers.iter().position(|h| h == name) {
            Some(idx) => Ok(idx),
            None => Err(LoadError::SchemaMismatch {
                message: format!(
                    "missing required column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            }),
        };

        Ok(Self {
            name: find("name")?,
            ingredients: find("ingredients")?,
            diet: find("diet")?,
            prep_time: find("prep_time")?,
            cook_time: find("cook_time")?,
            flavor_profile: find("flavor_profile")?,
            course: find("course")?,
            state: find("state")?,
            region: find("region")?,
        })
    }
}

fn parse_recipe(row: usize, cols: &Columns, record: &csv::StringRecord) -> LoadResult<Recipe> {
    let cell = |idx: usize| record.get(idx).unwrap_or("");

    Ok(Recipe {
        name: required_text(row, "name", cell(cols.name))?,
        ingredients: optional_text(cell(cols.ingredients)),
        diet: required_text(row, "diet", cell(cols.diet))?,
        prep_time: minutes(row, "prep_time", cell(cols.prep_time))?,
        cook_time: minutes(row, "cook_time", cell(cols.cook_time))?,
        flavor_profile: optional_text(cell(cols.flavor_profile)),
        course: required_text(row, "course", cell(cols.course))?,
        state: required_text(row, "state", cell(cols.state))?,
        region: optional_text(cell(cols.region)),
        // Derived when the store is built.
        total_time: None,
    })
}

/// Required text column. An empty cell here is a loader contract violation.
///
/// The `-1` placeholder is kept as a literal category for these columns; the
/// source dataset uses it as a real (if ugly) value, e.g. for `state`.
fn required_text(row: usize, column: &str, raw: &str) -> LoadResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LoadError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: "expected a non-empty value".to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

/// Optional text column: empty cells and the `-1` placeholder are "no value".
fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == MISSING_SENTINEL {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Minute column: empty cells and the `-1` placeholder are "no value".
fn minutes(row: usize, column: &str, raw: &str) -> LoadResult<Option<u32>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == MISSING_SENTINEL {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|e| LoadError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: e.to_string(),
        })
}
