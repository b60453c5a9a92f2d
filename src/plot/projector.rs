use std::fmt;

use crate::data::model::ColumnTable;
use crate::error::ProjectError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A data-space point; both coordinates are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Ordering applied to the numeric points before drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Keep row order.
    #[default]
    None,
    /// Ascending by x.
    X,
    /// Ascending by y.
    Y,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::None, SortMode::X, SortMode::Y];
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::None => write!(f, "Unsorted"),
            SortMode::X => write!(f, "Sort by X"),
            SortMode::Y => write!(f, "Sort by Y"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// Fixed pixel surface the plot is mapped onto. The plotting rectangle is
/// the canvas inset by `margin` on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Canvas {
    pub fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.margin).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.margin).max(0.0)
    }
}

// ---------------------------------------------------------------------------
// Extents
// ---------------------------------------------------------------------------

/// Per-axis minimum and maximum of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extents {
    /// `None` for an empty set.
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Extents {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        Some(points[1..].iter().fold(init, |e, p| Extents {
            x_min: e.x_min.min(p.x),
            x_max: e.x_max.max(p.x),
            y_min: e.y_min.min(p.y),
            y_max: e.y_max.max(p.y),
        }))
    }

    /// Axes whose values are all identical.
    pub fn degenerate_axes(&self) -> Vec<Axis> {
        let mut axes = Vec::new();
        if self.x_max <= self.x_min {
            axes.push(Axis::X);
        }
        if self.y_max <= self.y_min {
            axes.push(Axis::Y);
        }
        axes
    }

    /// Map a data point to canvas pixels, Y pointing down.
    ///
    /// A zero-range axis maps every value to the middle of its span.
    pub fn to_pixel(&self, p: Point, canvas: &Canvas) -> [f64; 2] {
        let px = canvas.margin + fraction(p.x, self.x_min, self.x_max) * canvas.plot_width();
        let py = canvas.height
            - canvas.margin
            - fraction(p.y, self.y_min, self.y_max) * canvas.plot_height();
        [px, py]
    }
}

/// Position of `v` within `[min, max]` as a value in `0.0..=1.0`.
fn fraction(v: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.5;
    }
    let range = max - min;
    if range.is_finite() {
        (v - min) / range
    } else {
        // range overflows f64; halve everything first
        (v / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    }
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Numeric points ready for drawing, with the extents used to scale them.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub points: Vec<Point>,
    pub extents: Extents,
}

impl Projection {
    /// Every point in sequence order, mapped to canvas pixels.
    pub fn to_pixels(&self, canvas: &Canvas) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|&p| self.extents.to_pixel(p, canvas))
            .collect()
    }
}

/// Parse the leading number of a raw cell, so `"3.5 hrs"` reads as `3.5`.
/// Leading whitespace is skipped and trailing text ignored; absent cells,
/// cells without a leading number, NaN and infinities are rejected.
pub fn parse_number(cell: Option<&str>) -> Option<f64> {
    let prefix = numeric_prefix(cell?.trim_start());
    if prefix.is_empty() {
        return None;
    }
    let v: f64 = prefix.parse().ok()?;
    v.is_finite().then_some(v)
}

/// Longest prefix shaped like `[+-]?(d+[.d*]|.d+)([eE][+-]?d+)?`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    // exponent counts only with at least one digit after it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    &s[..end]
}

/// Pair up `x_key` and `y_key` by row, keeping rows numeric on both axes.
pub fn numeric_points(
    table: &ColumnTable,
    x_key: &str,
    y_key: &str,
) -> Result<Vec<Point>, ProjectError> {
    let xs = table
        .column(x_key)
        .ok_or_else(|| ProjectError::UnknownColumn(x_key.to_string()))?;
    let ys = table
        .column(y_key)
        .ok_or_else(|| ProjectError::UnknownColumn(y_key.to_string()))?;

    Ok(xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| {
            let x = parse_number(x.as_deref())?;
            let y = parse_number(y.as_deref())?;
            Some(Point { x, y })
        })
        .collect())
}

/// Sort points in place. Order among equal keys is unspecified.
pub fn sort_points(points: &mut [Point], mode: SortMode) {
    match mode {
        SortMode::None => {}
        SortMode::X => points.sort_by(|a, b| a.x.total_cmp(&b.x)),
        SortMode::Y => points.sort_by(|a, b| a.y.total_cmp(&b.y)),
    }
}

/// Extract, filter and sort the points of two columns and compute the
/// extents they will be scaled with.
pub fn project(
    table: &ColumnTable,
    x_key: &str,
    y_key: &str,
    sort: SortMode,
) -> Result<Projection, ProjectError> {
    let mut points = numeric_points(table, x_key, y_key)?;
    sort_points(&mut points, sort);

    let extents = Extents::of(&points).ok_or_else(|| ProjectError::NoNumericData {
        x_key: x_key.to_string(),
        y_key: y_key.to_string(),
    })?;

    log::info!(
        "Projected {}/{} rows for {x_key} vs {y_key} ({sort})",
        points.len(),
        table.row_count()
    );
    for axis in extents.degenerate_axes() {
        log::warn!("{axis} axis has zero range; centring it");
    }

    Ok(Projection { points, extents })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse;
    use proptest::prelude::*;

    const CANVAS: Canvas = Canvas {
        width: 600.0,
        height: 400.0,
        margin: 40.0,
    };

    #[test]
    fn test_project_drops_non_numeric_rows() {
        let table = parse("a,b\n1,2\n3,x\n5,6");
        let proj = project(&table, "a", "b", SortMode::None).unwrap();
        assert_eq!(proj.points, vec![Point::new(1.0, 2.0), Point::new(5.0, 6.0)]);
        assert_eq!(
            proj.extents,
            Extents {
                x_min: 1.0,
                x_max: 5.0,
                y_min: 2.0,
                y_max: 6.0
            }
        );
    }

    #[test]
    fn test_project_sort_by_y() {
        let table = parse("a,b\n1,9\n2,1");
        let proj = project(&table, "a", "b", SortMode::Y).unwrap();
        assert_eq!(proj.points, vec![Point::new(2.0, 1.0), Point::new(1.0, 9.0)]);
    }

    #[test]
    fn test_project_sort_by_x() {
        let table = parse("a,b\n3,1\n-1,2\n2,3");
        let proj = project(&table, "a", "b", SortMode::X).unwrap();
        let xs: Vec<f64> = proj.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, [-1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_project_all_text_is_no_data() {
        let table = parse("Gender,City\nMale,Pune\nFemale,Delhi");
        let err = project(&table, "Gender", "City", SortMode::None).unwrap_err();
        assert_eq!(
            err,
            ProjectError::NoNumericData {
                x_key: "Gender".to_string(),
                y_key: "City".to_string()
            }
        );
    }

    #[test]
    fn test_project_header_only_is_no_data() {
        let table = parse("a,b");
        assert!(matches!(
            project(&table, "a", "b", SortMode::X),
            Err(ProjectError::NoNumericData { .. })
        ));
    }

    #[test]
    fn test_project_unknown_column() {
        let table = parse("a,b\n1,2");
        assert_eq!(
            project(&table, "a", "c", SortMode::None).unwrap_err(),
            ProjectError::UnknownColumn("c".to_string())
        );
    }

    #[test]
    fn test_project_absent_cells_are_skipped() {
        let table = parse("a,b\n1\n2,4");
        let proj = project(&table, "a", "b", SortMode::None).unwrap();
        assert_eq!(proj.points, vec![Point::new(2.0, 4.0)]);
    }

    #[test]
    fn test_same_column_on_both_axes() {
        let table = parse("a\n1\n2");
        let proj = project(&table, "a", "a", SortMode::None).unwrap();
        assert_eq!(proj.points, vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(Some("8.97")), Some(8.97));
        assert_eq!(parse_number(Some(" -2 ")), Some(-2.0));
        assert_eq!(parse_number(Some("1e3")), Some(1000.0));
        assert_eq!(parse_number(Some("")), None);
        assert_eq!(parse_number(Some("'5-6 hours'")), None);
        assert_eq!(parse_number(Some("NaN")), None);
        assert_eq!(parse_number(Some("inf")), None);
        assert_eq!(parse_number(Some("Infinity")), None);
        assert_eq!(parse_number(Some("-Infinity")), None);
        assert_eq!(parse_number(None), None);
    }

    #[test]
    fn test_parse_number_reads_leading_prefix() {
        assert_eq!(parse_number(Some("12abc")), Some(12.0));
        assert_eq!(parse_number(Some(" 3.5 hrs")), Some(3.5));
        assert_eq!(parse_number(Some("1e")), Some(1.0));
        assert_eq!(parse_number(Some("2e+x")), Some(2.0));
        assert_eq!(parse_number(Some("5-6 hours")), Some(5.0));
        assert_eq!(parse_number(Some(".5kg")), Some(0.5));
        assert_eq!(parse_number(Some("-7.")), Some(-7.0));
        assert_eq!(parse_number(Some("+1.5e2m")), Some(150.0));
        assert_eq!(parse_number(Some(".")), None);
        assert_eq!(parse_number(Some("-")), None);
        assert_eq!(parse_number(Some("abc12")), None);
    }

    #[test]
    fn test_project_keeps_rows_with_numeric_prefix() {
        let table = parse("a,b\n12abc,3.5 hrs\n1,2");
        let proj = project(&table, "a", "b", SortMode::None).unwrap();
        assert_eq!(proj.points, vec![Point::new(12.0, 3.5), Point::new(1.0, 2.0)]);
    }

    #[test]
    fn test_pixel_mapping_corners() {
        let proj = Projection {
            points: vec![Point::new(0.0, 0.0), Point::new(10.0, 5.0)],
            extents: Extents {
                x_min: 0.0,
                x_max: 10.0,
                y_min: 0.0,
                y_max: 5.0,
            },
        };
        let px = proj.to_pixels(&CANVAS);
        // min lands bottom-left, max top-right
        assert_eq!(px[0], [40.0, 360.0]);
        assert_eq!(px[1], [560.0, 40.0]);
    }

    #[test]
    fn test_identical_x_maps_to_midpoint() {
        let table = parse("a,b\n5,1\n5,2");
        let proj = project(&table, "a", "b", SortMode::None).unwrap();
        assert_eq!(proj.extents.x_min, 5.0);
        assert_eq!(proj.extents.x_max, 5.0);
        assert_eq!(proj.extents.degenerate_axes(), [Axis::X]);

        for [x, y] in proj.to_pixels(&CANVAS) {
            assert!(x.is_finite() && y.is_finite());
            assert_eq!(x, 300.0);
        }
    }

    #[test]
    fn test_single_point_centres_both_axes() {
        let table = parse("a,b\n7,7");
        let proj = project(&table, "a", "b", SortMode::None).unwrap();
        assert_eq!(proj.extents.degenerate_axes(), [Axis::X, Axis::Y]);
        assert_eq!(proj.to_pixels(&CANVAS), vec![[300.0, 200.0]]);
    }

    #[test]
    fn test_huge_range_stays_finite() {
        let e = Extents {
            x_min: -f64::MAX,
            x_max: f64::MAX,
            y_min: 0.0,
            y_max: 1.0,
        };
        let [x, _] = e.to_pixel(Point::new(0.0, 0.5), &CANVAS);
        assert!((x - 300.0).abs() < 1e-9);
    }

    fn cell() -> impl Strategy<Value = String> {
        prop_oneof![
            (-1.0e6..1.0e6f64).prop_map(|v| v.to_string()),
            (-1000i64..1000).prop_map(|v| v.to_string()),
            "[a-z]{0,4}",
        ]
    }

    fn two_columns() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec((cell(), cell()), 0..40)
    }

    fn table_of(rows: &[(String, String)]) -> ColumnTable {
        let body: Vec<String> = rows.iter().map(|(a, b)| format!("{a},{b}")).collect();
        parse(&format!("x,y\n{}", body.join("\n")))
    }

    fn sort_mode() -> impl Strategy<Value = SortMode> {
        prop_oneof![Just(SortMode::None), Just(SortMode::X), Just(SortMode::Y)]
    }

    proptest! {
        #[test]
        fn test_prop_points_never_exceed_rows(rows in two_columns(), sort in sort_mode()) {
            let table = table_of(&rows);
            let numeric = rows
                .iter()
                .filter(|(a, b)| parse_number(Some(a)).is_some() && parse_number(Some(b)).is_some())
                .count();
            match project(&table, "x", "y", sort) {
                Ok(proj) => {
                    prop_assert!(proj.points.len() <= table.row_count());
                    prop_assert_eq!(proj.points.len(), numeric);
                    prop_assert_eq!(
                        proj.points.len() == table.row_count(),
                        numeric == rows.len()
                    );
                }
                Err(err) => {
                    prop_assert_eq!(numeric, 0);
                    let is_no_data = matches!(err, ProjectError::NoNumericData { .. });
                    prop_assert!(is_no_data);
                }
            }
        }

        #[test]
        fn test_prop_sorted_output_is_monotone(rows in two_columns()) {
            let table = table_of(&rows);
            if let Ok(proj) = project(&table, "x", "y", SortMode::X) {
                prop_assert!(proj.points.windows(2).all(|w| w[0].x <= w[1].x));
            }
            if let Ok(proj) = project(&table, "x", "y", SortMode::Y) {
                prop_assert!(proj.points.windows(2).all(|w| w[0].y <= w[1].y));
            }
        }

        #[test]
        fn test_prop_pixels_stay_on_canvas(rows in two_columns(), sort in sort_mode()) {
            if let Ok(proj) = project(&table_of(&rows), "x", "y", sort) {
                for [x, y] in proj.to_pixels(&CANVAS) {
                    prop_assert!(x.is_finite() && y.is_finite());
                    prop_assert!((39.999..=560.001).contains(&x));
                    prop_assert!((39.999..=360.001).contains(&y));
                }
            }
        }
    }
}
