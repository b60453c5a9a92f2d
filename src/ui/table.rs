use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::view::TableView;

// ---------------------------------------------------------------------------
// Data table (bottom panel)
// ---------------------------------------------------------------------------

/// Render the first rows of the loaded table.
pub fn data_table(ui: &mut Ui, view: &TableView) {
    if view.headers.is_empty() {
        ui.label("No data.");
        return;
    }

    if view.is_truncated() {
        ui.label(format!(
            "Showing first {} of {} rows",
            view.rows.len(),
            view.total_rows
        ));
    }

    let text_height = egui::TextStyle::Body.resolve(ui.style()).size;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(
            Column::auto().at_least(60.0).clip(true),
            view.headers.len(),
        )
        .header(24.0, |mut header| {
            for name in &view.headers {
                header.col(|ui| {
                    ui.label(RichText::new(name).strong());
                });
            }
        })
        .body(|body| {
            body.rows(text_height + 8.0, view.rows.len(), |mut row| {
                let cells = &view.rows[row.index()];
                for cell in cells {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
