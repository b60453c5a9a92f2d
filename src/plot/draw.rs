use super::projector::{Canvas, Projection};

// ---------------------------------------------------------------------------
// Renderer-agnostic drawing instructions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Axis reference lines.
    Axis,
    /// The data polyline.
    Series,
}

/// Which point of the text box sits on `at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    TopCenter,
    RightCenter,
}

/// One primitive in canvas pixel coordinates (origin top-left).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polyline {
        points: Vec<[f64; 2]>,
        style: LineStyle,
    },
    Marker {
        at: [f64; 2],
        radius: f64,
    },
    Label {
        at: [f64; 2],
        text: String,
        anchor: Anchor,
    },
}

/// The two axis lines: left edge and bottom edge of the plotting rectangle,
/// drawn as one polyline through the origin corner.
pub fn axis_lines(canvas: &Canvas) -> DrawCommand {
    let m = canvas.margin;
    DrawCommand::Polyline {
        points: vec![
            [m, m],
            [m, canvas.height - m],
            [canvas.width - m, canvas.height - m],
        ],
        style: LineStyle::Axis,
    }
}

/// Everything needed to draw a projection: axes, extent and axis labels, the
/// series polyline in point order, and optional point markers.
pub fn plot_commands(
    proj: &Projection,
    canvas: &Canvas,
    x_label: &str,
    y_label: &str,
    marker_radius: f64,
) -> Vec<DrawCommand> {
    let m = canvas.margin;
    let bottom = canvas.height - m;
    let right = canvas.width - m;
    let e = &proj.extents;

    let mut cmds = vec![axis_lines(canvas)];

    let label = |at: [f64; 2], text: String, anchor: Anchor| DrawCommand::Label { at, text, anchor };
    cmds.push(label([m, bottom + 4.0], format_value(e.x_min), Anchor::TopCenter));
    cmds.push(label([right, bottom + 4.0], format_value(e.x_max), Anchor::TopCenter));
    cmds.push(label([m - 4.0, bottom], format_value(e.y_min), Anchor::RightCenter));
    cmds.push(label([m - 4.0, m], format_value(e.y_max), Anchor::RightCenter));
    cmds.push(label(
        [m + canvas.plot_width() / 2.0, bottom + m * 0.6],
        x_label.to_string(),
        Anchor::Center,
    ));
    cmds.push(label([m, m / 2.0], y_label.to_string(), Anchor::Center));

    let pixels = proj.to_pixels(canvas);
    if marker_radius > 0.0 {
        cmds.extend(pixels.iter().map(|&at| DrawCommand::Marker {
            at,
            radius: marker_radius,
        }));
    }
    cmds.push(DrawCommand::Polyline {
        points: pixels,
        style: LineStyle::Series,
    });

    cmds
}

fn format_value(v: f64) -> String {
    // folds -0.0 into 0.0
    let v = v + 0.0;
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else if v.abs() >= 1e-3 && v.abs() < 1e15 {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        format!("{v:.3e}")
    }
}
