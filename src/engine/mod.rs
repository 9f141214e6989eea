/// Tabular analysis engine: five pure components over one [`Dataset`]
/// snapshot. Nothing here performs I/O, blocks, or mutates shared state;
/// every result is recomputed from the current snapshot.
///
/// ```text
///        Dataset (immutable snapshot)
///           │
///           ▼
///   ┌────────────┐
///   │  classify   │  which columns are numeric
///   └────────────┘
///      │        │
///      ▼        ▼
///   ┌───────┐ ┌────────┐
///   │ stats  │ │ chart   │  per selected column
///   └───────┘ └────────┘
///      │
///      ▼
///   ┌─────────┐   ┌────────┐
///   │ outlier  │   │ search  │  filtered / paginated window
///   └─────────┘   └────────┘
/// ```
///
/// [`Dataset`]: crate::data::model::Dataset
pub mod chart;
pub mod classify;
pub mod outlier;
pub mod search;
pub mod stats;

use thiserror::Error;

/// Errors for invalid or empty selections.
///
/// Coercion failures are never errors: statistics drop non-numeric cells,
/// chart series carry them as NaN. An error here means a requested derived
/// view is unavailable; nothing is fatal and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("column '{0}' not found")]
    UnknownColumn(String),
    #[error("column '{0}' is not numeric")]
    NotNumeric(String),
    #[error("column '{0}' has no usable numeric values")]
    NoUsableValues(String),
}
