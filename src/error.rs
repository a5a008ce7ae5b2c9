use thiserror::Error;

/// Convenience result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Convenience result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error type returned when loading the recipe dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not have the columns the recipe schema requires.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A cell could not be parsed into the required value.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

/// Error type returned by query operations.
///
/// "No rows matched" is never an error in the query layer; an empty subset is
/// a valid outcome. These variants cover contract mismatches and empty-input
/// cases that must not be rendered as real statistics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A field name from an outer surface does not exist on recipe records.
    #[error("unknown recipe field '{name}'")]
    MissingField { name: String },

    /// An aggregate was requested over records carrying no usable values.
    #[error("no data to aggregate for field '{field}'")]
    EmptyAggregation { field: String },

    /// A time range whose lower bound exceeds its upper bound.
    ///
    /// Rejected rather than silently normalized.
    #[error("invalid time range: min {min} > max {max}")]
    InvalidRange { min: u32, max: u32 },

    /// No target course had a single matching recipe.
    #[error("not enough recipes to build a meal plan")]
    InsufficientPlanData,
}
