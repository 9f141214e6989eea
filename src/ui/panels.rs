use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::engine::classify::ClassifyPolicy;
use crate::state::{AppState, ChartKind, Tab};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Clear").clicked() {
                state.clear_dataset();
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .selectable_label(state.tab == Tab::Preview, "Preview")
            .clicked()
        {
            state.tab = Tab::Preview;
        }
        if ui
            .selectable_label(state.tab == Tab::Analysis, "Analysis")
            .clicked()
        {
            state.tab = Tab::Analysis;
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows, {} columns ({} numeric)",
                ds.len(),
                ds.columns.len(),
                state.numeric_columns.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – column selection
// ---------------------------------------------------------------------------

/// Render the left panel: classification policy, numeric-column selection,
/// chart kind.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Columns");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // ---- Classification policy ----
    ui.strong("Numeric detection");
    let current_policy = state.classify_policy;
    egui::ComboBox::from_id_salt("classify_policy")
        .selected_text(current_policy.label())
        .show_ui(ui, |ui: &mut Ui| {
            for policy in [
                ClassifyPolicy::FirstRowSample,
                ClassifyPolicy::FullColumnMajorityVote,
            ] {
                if ui
                    .selectable_label(current_policy == policy, policy.label())
                    .clicked()
                {
                    state.set_classify_policy(policy);
                }
            }
        });
    ui.separator();

    // ---- Numeric column checkboxes (selection order drives colors) ----
    ui.strong("Plot columns");
    let numeric: Vec<String> = state.numeric_columns.iter().map(String::from).collect();
    if numeric.is_empty() {
        ui.label("No numeric columns detected.");
    }

    ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for col in &numeric {
                let mut checked = state.selected_columns.iter().any(|c| c == col);
                if ui.checkbox(&mut checked, col).changed() {
                    state.toggle_column(col);
                }
            }
        });
    ui.separator();

    // ---- Chart kind ----
    ui.strong("Chart");
    egui::ComboBox::from_id_salt("chart_kind")
        .selected_text(state.chart_kind.label())
        .show_ui(ui, |ui: &mut Ui| {
            for kind in ChartKind::ALL {
                ui.selectable_value(&mut state.chart_kind, kind, kind.label());
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open tabular data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.len(),
                    dataset.columns
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
