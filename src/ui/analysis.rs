use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Polygon};

use crate::color::{generate_palette, series_fill, series_stroke};
use crate::engine::EngineError;
use crate::engine::chart::{ChartDataset, assemble_chart};
use crate::engine::outlier::detect_outliers;
use crate::engine::stats::{compute_statistics, usable_values};
use crate::state::{AppState, ChartKind};

// ---------------------------------------------------------------------------
// Analysis tab – charts, summary statistics, insights
// ---------------------------------------------------------------------------

/// Render the analysis view for the current selection.
pub fn analysis(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to analyze data  (File → Open…)");
        });
        return;
    };

    if state.selected_columns.is_empty() {
        ui.label("Select numeric columns in the side panel to visualize.");
        return;
    }

    match assemble_chart(dataset, &state.numeric_columns, &state.selected_columns) {
        Ok(chart) => match state.chart_kind {
            ChartKind::Bar => bar_chart(ui, &chart),
            ChartKind::Line => line_chart(ui, &chart),
            ChartKind::Pie => pie_chart(ui, &chart),
        },
        Err(e) => {
            ui.colored_label(Color32::RED, e.to_string());
        }
    }

    ui.separator();
    ui.strong("Summary Statistics");
    for col in &state.selected_columns {
        match compute_statistics(dataset, &state.numeric_columns, col) {
            Ok(s) => {
                // Display precision only; the engine keeps full precision.
                ui.label(format!(
                    "{}: Count: {}, Mean: {:.2}, Median: {:.2}, Min: {:.2}, Max: {:.2}, Std: {:.2}",
                    s.column, s.count, s.mean, s.median, s.min, s.max, s.std
                ));
            }
            Err(EngineError::NoUsableValues(_)) => {
                ui.label(format!("{col}: not enough data"));
            }
            Err(e) => {
                ui.colored_label(Color32::RED, e.to_string());
            }
        }
    }

    ui.separator();
    ui.strong("Insights");
    for col in state.numeric_columns.iter() {
        let values = usable_values(dataset, col);
        if values.is_empty() {
            continue;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let report = detect_outliers(col, &values, mean);
        ui.label(format!(
            "{}: Outliers detected: {} - {}",
            report.column, report.outlier_count, report.suggestion
        ));
    }
}

// ---------------------------------------------------------------------------
// Chart renderers
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, chart: &ChartDataset) {
    let n_series = chart.series.len().max(1);
    let bar_width = 0.8 / n_series as f64;

    Plot::new("analysis_bar")
        .legend(Legend::default())
        .height(ui.available_height() * 0.55)
        .show(ui, |plot_ui| {
            for (idx, series) in chart.series.iter().enumerate() {
                let offset = (idx as f64 - (n_series as f64 - 1.0) / 2.0) * bar_width;
                let bars: Vec<Bar> = series
                    .values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.is_finite())
                    .map(|(i, &v)| {
                        Bar::new(i as f64 + offset, v)
                            .width(bar_width)
                            .fill(series_fill(idx))
                    })
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .name(&series.column)
                        .color(series_stroke(idx)),
                );
            }
        });
}

fn line_chart(ui: &mut Ui, chart: &ChartDataset) {
    Plot::new("analysis_line")
        .legend(Legend::default())
        .height(ui.available_height() * 0.55)
        .show(ui, |plot_ui| {
            for (idx, series) in chart.series.iter().enumerate() {
                // Missing cells are NaN in the series; skip the points but
                // keep the surviving ones on their row positions.
                let points: PlotPoints = series
                    .values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.is_finite())
                    .map(|(i, &v)| [i as f64, v])
                    .collect();
                plot_ui.line(
                    Line::new(points)
                        .name(&series.column)
                        .color(series_stroke(idx))
                        .width(1.5),
                );
            }
        });
}

/// Pie of the first selected series: one slice per row, weighted by value.
/// Only finite, positive values make sense as slice weights.
fn pie_chart(ui: &mut Ui, chart: &ChartDataset) {
    let Some(series) = chart.series.first() else {
        return;
    };

    let slices: Vec<(usize, f64)> = series
        .values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite() && **v > 0.0)
        .map(|(i, &v)| (i, v))
        .collect();
    let total: f64 = slices.iter().map(|(_, v)| v).sum();

    if total <= 0.0 {
        ui.label(format!(
            "'{}' has no positive values to slice into a pie.",
            series.column
        ));
        return;
    }

    let palette = generate_palette(slices.len());

    Plot::new("analysis_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .height(ui.available_height() * 0.55)
        .show(ui, |plot_ui| {
            let mut angle = 0.0_f64;
            for (slice_idx, &(row_idx, value)) in slices.iter().enumerate() {
                let sweep = value / total * std::f64::consts::TAU;
                let points = sector_points(angle, angle + sweep);
                angle += sweep;

                let label = chart
                    .labels
                    .get(row_idx)
                    .cloned()
                    .unwrap_or_else(|| format!("Row {}", row_idx + 1));
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(points))
                        .name(label)
                        .fill_color(palette[slice_idx])
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );
            }
        });
}

/// Unit-circle sector as a closed point list (center plus sampled arc).
fn sector_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = (((end - start) / 0.05).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let a = start + (end - start) * i as f64 / steps as f64;
        points.push([a.cos(), a.sin()]);
    }
    points
}
