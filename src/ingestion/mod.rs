//! Dataset loading entrypoints.
//!
//! Most callers should use [`load_recipes`], which:
//!
//! - loads the recipe CSV into an immutable [`crate::types::RecipeStore`]
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The format-specific functions are also available under [`csv`].

pub mod csv;
pub mod observability;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{LoadError, LoadResult};
use crate::types::RecipeStore;

pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    StdErrObserver,
};

/// Options controlling dataset loading behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load the recipe dataset from a CSV path.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with record count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= the configured
///   alert threshold (default [`LoadSeverity::Critical`])
///
/// # Examples
///
/// ```no_run
/// use recipe_explorer::ingestion::{load_recipes, LoadOptions};
///
/// # fn main() -> Result<(), recipe_explorer::LoadError> {
/// let store = load_recipes("indian_food.csv", &LoadOptions::default())?;
/// println!("rows={}", store.len());
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (stderr logging)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use recipe_explorer::ingestion::{load_recipes, LoadOptions, StdErrObserver};
///
/// # fn main() -> Result<(), recipe_explorer::LoadError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     ..Default::default()
/// };
/// let store = load_recipes("indian_food.csv", &opts)?;
/// println!("rows={}", store.len());
/// # Ok(())
/// # }
/// ```
pub fn load_recipes(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<RecipeStore> {
    let ctx = LoadContext {
        path: path.as_ref().to_path_buf(),
    };

    match csv::load_csv_from_path(&ctx.path) {
        Ok(store) => {
            if let Some(observer) = &options.observer {
                let rows_without_total = store
                    .recipes()
                    .iter()
                    .filter(|r| r.total_time.is_none())
                    .count();
                observer.on_success(
                    &ctx,
                    LoadStats {
                        rows: store.len(),
                        rows_without_total,
                    },
                );
            }
            Ok(store)
        }
        Err(error) => {
            let severity = severity_for(&error);
            if let Some(observer) = &options.observer {
                observer.on_failure(&ctx, severity, &error);
                if severity >= options.alert_at_or_above {
                    observer.on_alert(&ctx, severity, &error);
                }
            }
            Err(error)
        }
    }
}

/// I/O failures are infrastructure problems; everything else means the file
/// was readable but did not hold a valid recipe dataset.
fn severity_for(error: &LoadError) -> LoadSeverity {
    match error {
        LoadError::Io(_) => LoadSeverity::Critical,
        // The csv crate wraps failures to open the file; surface those as I/O too.
        LoadError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        LoadError::SchemaMismatch { .. } | LoadError::ParseError { .. } => LoadSeverity::Error,
    }
}
