use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::view::selector_options;
use crate::plot::projector::SortMode;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – axis selectors and plot trigger
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Plot");
    ui.separator();

    if state.table.is_empty() {
        ui.label("No dataset loaded.");
        return;
    }

    let options = selector_options(&state.table);

    ui.strong("X axis");
    if let Some(key) = column_combo(ui, "x_select", state.x_key.as_deref(), &options) {
        state.set_x_key(key);
    }

    ui.add_space(4.0);
    ui.strong("Y axis");
    if let Some(key) = column_combo(ui, "y_select", state.y_key.as_deref(), &options) {
        state.set_y_key(key);
    }

    ui.add_space(4.0);
    ui.strong("Order");
    let current = state.sort_mode;
    egui::ComboBox::from_id_salt("sort_mode")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for mode in SortMode::ALL {
                if ui.selectable_label(current == mode, mode.to_string()).clicked() && current != mode {
                    state.set_sort_mode(mode);
                }
            }
        });

    ui.add_space(8.0);
    if ui.button("Plot").clicked() {
        state.request_plot();
    }
}

/// A header selector; returns the newly picked header, if any.
fn column_combo(ui: &mut Ui, id: &str, current: Option<&str>, options: &[String]) -> Option<String> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.unwrap_or_default())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for header in options {
                let selected = current == Some(header.as_str());
                if ui.selectable_label(selected, header).clicked() && !selected {
                    picked = Some(header.clone());
                }
            }
        });
    picked
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(ui.ctx(), state);
                ui.close_menu();
            }
        });

        ui.separator();

        if state.loading() {
            ui.spinner();
        } else if let Some(path) = &state.source {
            ui.label(format!(
                "{}: {} rows, {} columns",
                path.display(),
                state.table.row_count(),
                state.table.column_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Notice window
// ---------------------------------------------------------------------------

/// Blocking notice (e.g. nothing to plot) until the user dismisses it.
pub fn notice_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(msg) = state.notice.clone() else {
        return;
    };
    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label(msg);
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                state.dismiss_notice();
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(ctx: &egui::Context, state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open dataset")
        .add_filter("Delimited text", &["csv", "txt"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        let ctx = ctx.clone();
        state.start_load(path, move || ctx.request_repaint());
    }
}
