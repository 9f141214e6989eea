use serde::Serialize;

use super::EngineError;
use super::classify::NumericColumns;
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Deterministic series colors
// ---------------------------------------------------------------------------

/// RGB channels for the series at a selection index.
///
/// `R = (idx*70) % 255`, `G = (idx*50) % 255`, `B = (idx*100) % 255`.
/// Purely positional, so the same selection renders the same colors across
/// re-renders and in tests.
pub fn series_rgb(idx: usize) -> (u8, u8, u8) {
    (
        ((idx * 70) % 255) as u8,
        ((idx * 50) % 255) as u8,
        ((idx * 100) % 255) as u8,
    )
}

// ---------------------------------------------------------------------------
// ChartDataset – the "labels + datasets" structure
// ---------------------------------------------------------------------------

/// One named series: values aligned to dataset row order plus display
/// colors. Non-coercible cells stay in place as NaN so every series lines
/// up with the labels (unlike statistics, which drop them).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub column: String,
    pub values: Vec<f64>,
    pub fill_color: String,
    pub stroke_color: String,
}

/// Chart-ready data for any bar/line/pie renderer. Which chart kind gets
/// drawn is the renderer's concern, not this structure's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

// ---------------------------------------------------------------------------
// assemble_chart
// ---------------------------------------------------------------------------

/// Build the chart dataset for the selected numeric columns, in selection
/// order (selection order, not column order, drives the color index).
///
/// Labels are `Row 1`..`Row N` over the whole dataset regardless of
/// selection. Every selected column must be in the snapshot's numeric set.
pub fn assemble_chart(
    dataset: &Dataset,
    numeric: &NumericColumns,
    selected: &[String],
) -> Result<ChartDataset, EngineError> {
    for column in selected {
        if !dataset.columns.iter().any(|c| c == column) {
            return Err(EngineError::UnknownColumn(column.clone()));
        }
        if !numeric.contains(column) {
            return Err(EngineError::NotNumeric(column.clone()));
        }
    }

    let labels = (0..dataset.len()).map(|i| format!("Row {}", i + 1)).collect();

    let series = selected
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let (r, g, b) = series_rgb(idx);
            let values = dataset
                .rows
                .iter()
                .map(|row| {
                    row.get(column)
                        .and_then(|v| v.as_number())
                        .unwrap_or(f64::NAN)
                })
                .collect();
            ChartSeries {
                column: column.clone(),
                values,
                fill_color: format!("rgba({r},{g},{b},0.6)"),
                stroke_color: format!("rgba({r},{g},{b},1)"),
            }
        })
        .collect();

    Ok(ChartDataset { labels, series })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
