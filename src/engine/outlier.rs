use serde::Serialize;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Multiples of the column mean beyond which a value is flagged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierThresholds {
    /// Flag values above `upper * mean`. Default: 1.5.
    pub upper: f64,
    /// Flag values below `lower * mean`. Default: 0.5.
    pub lower: f64,
}

impl Default for OutlierThresholds {
    fn default() -> Self {
        Self {
            upper: 1.5,
            lower: 0.5,
        }
    }
}

// ---------------------------------------------------------------------------
// OutlierReport
// ---------------------------------------------------------------------------

/// Summary of anomalous values in one numeric column. A count and a
/// follow-up suggestion, not a list of offending rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlierReport {
    pub column: String,
    #[serde(rename = "outlierCount")]
    pub outlier_count: usize,
    pub suggestion: String,
}

// ---------------------------------------------------------------------------
// detect_outliers
// ---------------------------------------------------------------------------

/// Flag values far from the mean with the default thresholds.
///
/// `values` is the column's usable value list and `mean` its full-precision
/// mean, both as produced by the statistics engine.
///
/// When `mean` is 0 both thresholds collapse to 0 and every nonzero value
/// is flagged; treat a report against a zero-mean column as informational
/// only.
pub fn detect_outliers(column: &str, values: &[f64], mean: f64) -> OutlierReport {
    detect_outliers_with(column, values, mean, OutlierThresholds::default())
}

/// Flag values outside `[lower * mean, upper * mean]`.
pub fn detect_outliers_with(
    column: &str,
    values: &[f64],
    mean: f64,
    thresholds: OutlierThresholds,
) -> OutlierReport {
    let outlier_count = values
        .iter()
        .filter(|&&v| v > thresholds.upper * mean || v < thresholds.lower * mean)
        .count();

    OutlierReport {
        column: column.to_string(),
        outlier_count,
        suggestion: format!("Check {column} for anomalies"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
