use eframe::egui::{self, Color32, FontId, Pos2, Sense, Stroke, Ui, Vec2};

use crate::plot::draw::{Anchor, DrawCommand, LineStyle};
use crate::state::AppState;

const SERIES_COLOR: Color32 = Color32::from_rgb(30, 90, 220);

// ---------------------------------------------------------------------------
// Scatter / line plot (central panel)
// ---------------------------------------------------------------------------

/// Render the plot canvas in the central panel.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    if state.table.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a file to explore it  (File → Open…)");
        });
        return;
    }

    let canvas = state.config.canvas;
    let (response, painter) =
        ui.allocate_painter(Vec2::new(canvas.width, canvas.height), Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);

    let Some(plot) = &state.plot else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Pick X and Y columns, then press Plot",
            FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    };

    let origin = rect.min;
    let to_screen = |[x, y]: [f64; 2]| -> Pos2 { origin + Vec2::new(x as f32, y as f32) };
    let axis_stroke = Stroke::new(1.0, ui.visuals().text_color());
    let text_color = ui.visuals().text_color();

    for cmd in &plot.commands {
        match cmd {
            DrawCommand::Polyline { points, style } => {
                let stroke = match style {
                    LineStyle::Axis => axis_stroke,
                    LineStyle::Series => Stroke::new(2.0, SERIES_COLOR),
                };
                let pts: Vec<Pos2> = points.iter().copied().map(to_screen).collect();
                painter.add(egui::Shape::line(pts, stroke));
            }
            DrawCommand::Marker { at, radius } => {
                painter.circle_filled(to_screen(*at), *radius as f32, SERIES_COLOR);
            }
            DrawCommand::Label { at, text, anchor } => {
                let align = match anchor {
                    Anchor::Center => egui::Align2::CENTER_CENTER,
                    Anchor::TopCenter => egui::Align2::CENTER_TOP,
                    Anchor::RightCenter => egui::Align2::RIGHT_CENTER,
                };
                painter.text(
                    to_screen(*at),
                    align,
                    text,
                    FontId::proportional(12.0),
                    text_color,
                );
            }
        }
    }

    ui.label(format!(
        "{} of {} rows plotted",
        plot.projection.points.len(),
        state.table.row_count()
    ));
    for axis in plot.degenerate_axes() {
        ui.label(
            egui::RichText::new(format!("{axis} values are all equal; centred on the axis"))
                .color(ui.visuals().warn_fg_color),
        );
    }
}
