use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::engine::search::filter_and_page;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Preview tab – searchable, paginated table
// ---------------------------------------------------------------------------

/// Render the data preview: search box, table window, pager.
pub fn preview(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to preview data  (File → Open…)");
        });
        return;
    }

    // ---- Search box ----
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Search:");
        let mut query = state.view.query.clone();
        if ui.text_edit_singleline(&mut query).changed() {
            state.set_query(query);
        }
    });
    ui.separator();

    let view = state.view.clone();
    let Some(dataset) = &state.dataset else {
        return;
    };

    let page = filter_and_page(dataset, &view.query, view.page_index, view.page_size);
    let (current, total) = (page.page_index, page.total_pages);

    // ---- Table window ----
    if page.rows.is_empty() {
        ui.label("No matching rows.");
    } else {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::auto().at_least(60.0), dataset.columns.len())
            .header(20.0, |mut header| {
                for col in &dataset.columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(col);
                    });
                }
            })
            .body(|mut body| {
                for row in &page.rows {
                    body.row(18.0, |mut table_row| {
                        for col in &dataset.columns {
                            table_row.col(|ui: &mut Ui| {
                                let text =
                                    row.get(col).map(|v| v.to_string()).unwrap_or_default();
                                ui.label(text);
                            });
                        }
                    });
                }
            });
    }
    ui.separator();

    // ---- Pager ----
    let mut new_page = None;
    ui.horizontal(|ui: &mut Ui| {
        if ui
            .add_enabled(current > 1, egui::Button::new("Prev"))
            .clicked()
        {
            new_page = Some(current - 1);
        }
        ui.label(format!("Page {current} of {total}"));
        if ui
            .add_enabled(current < total, egui::Button::new("Next"))
            .clicked()
        {
            new_page = Some(current + 1);
        }
    });

    // Keep the cursor in sync with the clamped window the engine returned.
    state.view.page_index = new_page.unwrap_or(current);
}
