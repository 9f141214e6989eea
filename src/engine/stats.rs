use serde::Serialize;

use super::EngineError;
use super::classify::NumericColumns;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// ColumnStatistics
// ---------------------------------------------------------------------------

/// Descriptive statistics for one numeric column of one dataset snapshot.
///
/// All fields are full-precision; rounding for display (2 decimal places in
/// the UI) happens at the presentation boundary, never here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStatistics {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub std: f64,
}

// ---------------------------------------------------------------------------
// Usable value extraction
// ---------------------------------------------------------------------------

/// The usable value list: every cell of `column` that coerces to a finite
/// number, in row order. Nulls, missing cells, and non-numeric text are
/// dropped.
pub fn usable_values(dataset: &Dataset, column: &str) -> Vec<f64> {
    dataset
        .rows
        .iter()
        .filter_map(|row| row.get(column))
        .filter_map(|v| v.as_number())
        .collect()
}

// ---------------------------------------------------------------------------
// compute_statistics
// ---------------------------------------------------------------------------

/// Compute descriptive statistics for `column`.
///
/// The column must be a member of the snapshot's numeric set. A column with
/// zero usable values yields [`EngineError::NoUsableValues`] rather than a
/// NaN-filled record, so callers branch on "no data" explicitly.
///
/// The median is the element at index `count / 2` of the ascending-sorted
/// usable values, for odd and even counts alike. For even counts this picks
/// the upper of the two middle elements (`{1,2,3,4}` → `3`) rather than
/// averaging them; the convention is pinned by test and kept for
/// compatibility with the dashboards this engine replaces.
pub fn compute_statistics(
    dataset: &Dataset,
    numeric: &NumericColumns,
    column: &str,
) -> Result<ColumnStatistics, EngineError> {
    if !dataset.columns.iter().any(|c| c == column) {
        return Err(EngineError::UnknownColumn(column.to_string()));
    }
    if !numeric.contains(column) {
        return Err(EngineError::NotNumeric(column.to_string()));
    }

    let values = usable_values(dataset, column);
    if values.is_empty() {
        return Err(EngineError::NoUsableValues(column.to_string()));
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let mut sorted = values.clone();
    sorted.sort_by(f64::total_cmp);
    let median = sorted[count / 2];

    let min = sorted[0];
    let max = sorted[count - 1];

    // Population standard deviation, from the full-precision mean.
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
    let std = variance.sqrt();

    Ok(ColumnStatistics {
        column: column.to_string(),
        count,
        mean,
        median,
        min,
        max,
        std,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Row, Value};
    use crate::engine::classify::{ClassifyPolicy, classify};

    /// Single-column dataset from a list of raw cell values.
    fn column_dataset(cells: Vec<Value>) -> (Dataset, NumericColumns) {
        let rows: Vec<Row> = cells
            .into_iter()
            .map(|v| [("v".to_string(), v)].into_iter().collect())
            .collect();
        let ds = Dataset::new(rows, vec!["v".into()]);
        let numeric = classify(&ds, ClassifyPolicy::FirstRowSample);
        (ds, numeric)
    }

    #[test]
    fn count_counts_only_coercible_values() {
        let (ds, numeric) = column_dataset(vec![
            Value::String("3".into()),
            Value::String("x".into()),
            Value::Integer(5),
            Value::Null,
            Value::String("7".into()),
        ]);
        let stats = compute_statistics(&ds, &numeric, "v").expect("stats");
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.min, 3.0);
        assert_eq!(stats.max, 7.0);
    }

    #[test]
    fn population_std_from_full_precision_mean() {
        let (ds, numeric) = column_dataset(vec![
            Value::Integer(3),
            Value::Integer(5),
            Value::Integer(7),
        ]);
        let stats = compute_statistics(&ds, &numeric, "v").expect("stats");
        assert_eq!(stats.mean, 5.0);
        let expected = (8.0f64 / 3.0).sqrt();
        assert!((stats.std - expected).abs() < 1e-12);
    }

    #[test]
    fn median_odd_count_is_the_middle_element() {
        let (ds, numeric) = column_dataset(vec![
            Value::Integer(9),
            Value::Integer(1),
            Value::Integer(5),
        ]);
        let stats = compute_statistics(&ds, &numeric, "v").expect("stats");
        assert_eq!(stats.median, 5.0);
    }

    #[test]
    fn median_even_count_takes_the_upper_of_the_two_middles() {
        // sorted {1,2,3,4}: index 4/2 = 2 → 3, not the textbook average 2.5.
        let (ds, numeric) = column_dataset(vec![
            Value::Integer(4),
            Value::Integer(1),
            Value::Integer(3),
            Value::Integer(2),
        ]);
        let stats = compute_statistics(&ds, &numeric, "v").expect("stats");
        assert_eq!(stats.median, 3.0);
    }

    #[test]
    fn zero_usable_values_is_an_explicit_error() {
        let (ds, numeric) = column_dataset(vec![Value::Integer(1)]);
        // A second dataset sharing the classification but holding no
        // coercible cells: simulate by emptying the rows.
        let empty = Dataset::new(Vec::new(), ds.columns.clone());
        assert_eq!(
            compute_statistics(&empty, &numeric, "v"),
            Err(EngineError::NoUsableValues("v".into()))
        );
    }

    #[test]
    fn non_numeric_and_unknown_columns_are_rejected() {
        let rows: Vec<Row> = vec![
            [
                ("name".to_string(), Value::String("Alice".into())),
                ("age".to_string(), Value::Integer(42)),
            ]
            .into_iter()
            .collect(),
        ];
        let ds = Dataset::new(rows, vec!["name".into(), "age".into()]);
        let numeric = classify(&ds, ClassifyPolicy::FirstRowSample);

        assert_eq!(
            compute_statistics(&ds, &numeric, "name"),
            Err(EngineError::NotNumeric("name".into()))
        );
        assert_eq!(
            compute_statistics(&ds, &numeric, "salary"),
            Err(EngineError::UnknownColumn("salary".into()))
        );
    }

    #[test]
    fn usable_values_preserve_row_order() {
        let (ds, _) = column_dataset(vec![
            Value::Integer(7),
            Value::String("no".into()),
            Value::Integer(1),
            Value::Integer(4),
        ]);
        assert_eq!(usable_values(&ds, "v"), vec![7.0, 1.0, 4.0]);
    }
}
