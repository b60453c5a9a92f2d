use std::path::PathBuf;

use crate::config::Config;
use crate::data::loader::{spawn_load, LoadOutcome, PendingLoad};
use crate::data::model::ColumnTable;
use crate::data::view::{default_axes, table_view, TableView};
use crate::error::ProjectError;
use crate::plot::draw::{plot_commands, DrawCommand};
use crate::plot::projector::{project, Axis, Projection, SortMode};

// ---------------------------------------------------------------------------
// Plot state
// ---------------------------------------------------------------------------

/// The most recent successful plot.
#[derive(Debug, Clone)]
pub struct PlotView {
    pub x_key: String,
    pub y_key: String,
    pub projection: Projection,
    pub commands: Vec<DrawCommand>,
}

impl PlotView {
    pub fn degenerate_axes(&self) -> Vec<Axis> {
        self.projection.extents.degenerate_axes()
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
pub struct AppState {
    pub config: Config,

    /// Current table; empty until a source loads.
    pub table: ColumnTable,

    /// Table rows prepared for the table renderer.
    pub table_view: TableView,

    /// File the current table came from.
    pub source: Option<PathBuf>,

    /// Selected X / Y headers.
    pub x_key: Option<String>,
    pub y_key: Option<String>,

    pub sort_mode: SortMode,

    /// Last plot drawn (None until the user plots).
    pub plot: Option<PlotView>,

    /// Blocking notice shown as a modal window.
    pub notice: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Load currently in flight. Replacing it abandons the older load.
    pending: Option<PendingLoad>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            table: ColumnTable::default(),
            table_view: TableView::default(),
            source: None,
            x_key: None,
            y_key: None,
            sort_mode: SortMode::default(),
            plot: None,
            notice: None,
            status_message: None,
            pending: None,
        }
    }

    /// Whether a file loading operation is in progress.
    pub fn loading(&self) -> bool {
        self.pending.is_some()
    }

    // ---- Loading ----

    /// Start loading `path` in the background; `notify` fires when done.
    pub fn start_load<F>(&mut self, path: PathBuf, notify: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(old) = &self.pending {
            log::info!("Abandoning load of {}", old.path().display());
        }
        self.status_message = Some(format!("Loading {}…", path.display()));
        self.pending = Some(spawn_load(path, notify));
    }

    /// Pick up a finished background load, if any. Returns `true` when the
    /// state changed.
    pub fn poll_load(&mut self) -> bool {
        let Some(outcome) = self.pending.as_ref().and_then(PendingLoad::poll) else {
            return false;
        };
        let path = self
            .pending
            .take()
            .map(|p| p.path().to_path_buf())
            .unwrap_or_default();
        self.finish_load(path, outcome);
        true
    }

    /// Apply a load outcome. A failure leaves the current table untouched.
    pub fn finish_load(&mut self, path: PathBuf, outcome: LoadOutcome) {
        match outcome {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows with columns {:?} from {}",
                    table.row_count(),
                    table.headers(),
                    path.display()
                );
                self.set_table(table, path);
            }
            Err(e) => {
                log::error!("Failed to load source: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Ingest a freshly parsed table: rebuild the table view, reset the axis
    /// selection and drop the old plot.
    pub fn set_table(&mut self, table: ColumnTable, path: PathBuf) {
        self.table_view = table_view(&table, self.config.max_table_rows);
        let (x, y) = default_axes(&table).unzip();
        self.x_key = x;
        self.y_key = y;
        self.plot = None;
        self.table = table;
        self.source = Some(path);
        self.status_message = None;
    }

    // ---- Plotting ----

    /// Project the selected columns and rebuild the draw commands.
    ///
    /// On failure the previous plot is cleared and a notice is raised.
    pub fn request_plot(&mut self) {
        let (Some(x_key), Some(y_key)) = (self.x_key.clone(), self.y_key.clone()) else {
            return;
        };
        log::info!("Drawing graph for: {x_key}, {y_key}");

        match project(&self.table, &x_key, &y_key, self.sort_mode) {
            Ok(projection) => {
                let commands = plot_commands(
                    &projection,
                    &self.config.canvas.canvas(),
                    &x_key,
                    &y_key,
                    self.config.marker_radius as f64,
                );
                self.plot = Some(PlotView {
                    x_key,
                    y_key,
                    projection,
                    commands,
                });
            }
            Err(e) => {
                log::warn!("Plot request failed: {e}");
                self.plot = None;
                self.notice = Some(match e {
                    ProjectError::NoNumericData { .. } => "No numeric data to plot.".to_string(),
                    other => other.to_string(),
                });
            }
        }
    }

    /// Change the X column; redraws if a plot is showing.
    pub fn set_x_key(&mut self, key: String) {
        self.x_key = Some(key);
        self.replot();
    }

    /// Change the Y column; redraws if a plot is showing.
    pub fn set_y_key(&mut self, key: String) {
        self.y_key = Some(key);
        self.replot();
    }

    /// Change the sort mode; redraws if a plot is showing.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        self.replot();
    }

    fn replot(&mut self) {
        if self.plot.is_some() {
            self.request_plot();
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::parse;
    use crate::error::LoadError;
    use crate::plot::projector::Point;

    fn loaded(text: &str) -> AppState {
        let mut state = AppState::new(Config::default());
        state.set_table(parse(text), PathBuf::from("test.csv"));
        state
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = AppState::new(Config::default());
        assert!(state.table.is_empty());
        assert!(state.table_view.headers.is_empty());
        assert!(!state.loading());
        assert!(state.x_key.is_none());
    }

    #[test]
    fn test_set_table_selects_default_axes() {
        let state = loaded("id,Age,CGPA\n1,20,7.5");
        assert_eq!(state.x_key.as_deref(), Some("id"));
        assert_eq!(state.y_key.as_deref(), Some("Age"));
        assert_eq!(state.table_view.rows.len(), 1);
        assert_eq!(state.source, Some(PathBuf::from("test.csv")));
    }

    #[test]
    fn test_table_view_respects_config_cap() {
        let mut state = AppState::new(Config {
            max_table_rows: 2,
            ..Config::default()
        });
        state.set_table(parse("n\n1\n2\n3"), PathBuf::from("n.csv"));
        assert_eq!(state.table_view.rows.len(), 2);
        assert_eq!(state.table_view.total_rows, 3);
    }

    #[test]
    fn test_request_plot_builds_commands() {
        let mut state = loaded("a,b\n1,2\n3,x\n5,6");
        state.request_plot();
        let plot = state.plot.as_ref().unwrap();
        assert_eq!(
            plot.projection.points,
            vec![Point::new(1.0, 2.0), Point::new(5.0, 6.0)]
        );
        assert!(!plot.commands.is_empty());
        assert!(plot.degenerate_axes().is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_no_numeric_data_raises_notice() {
        let mut state = loaded("Gender,City\nMale,Pune");
        state.request_plot();
        assert!(state.plot.is_none());
        assert_eq!(state.notice.as_deref(), Some("No numeric data to plot."));
        state.dismiss_notice();
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_sort_change_replots() {
        let mut state = loaded("a,b\n1,9\n2,1");
        state.request_plot();
        state.set_sort_mode(SortMode::Y);
        let points = &state.plot.as_ref().unwrap().projection.points;
        assert_eq!(points, &vec![Point::new(2.0, 1.0), Point::new(1.0, 9.0)]);
    }

    #[test]
    fn test_selection_change_without_plot_does_not_draw() {
        let mut state = loaded("a,b\n1,9\n2,1");
        state.set_x_key("b".to_string());
        assert!(state.plot.is_none());
        assert_eq!(state.x_key.as_deref(), Some("b"));
    }

    #[test]
    fn test_failed_load_keeps_table() {
        let mut state = loaded("a,b\n1,2");
        state.finish_load(
            PathBuf::from("broken.csv"),
            Err(LoadError::InvalidUtf8 {
                path: PathBuf::from("broken.csv"),
            }),
        );
        assert_eq!(state.table.headers(), ["a", "b"]);
        assert_eq!(state.source, Some(PathBuf::from("test.csv")));
        assert!(state.status_message.unwrap().starts_with("Error:"));
    }

    #[test]
    fn test_new_load_resets_plot() {
        let mut state = loaded("a,b\n1,2\n3,4");
        state.request_plot();
        state.finish_load(PathBuf::from("next.csv"), Ok(parse("c,d\n1,1")));
        assert!(state.plot.is_none());
        assert_eq!(state.x_key.as_deref(), Some("c"));
    }

    #[test]
    fn test_background_load_round_trip() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"x,y\n1,2\n2,4").unwrap();

        let mut state = AppState::new(Config::default());
        state.start_load(file.path().to_path_buf(), || {});
        assert!(state.loading());

        for _ in 0..200 {
            if state.poll_load() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(!state.loading());
        assert_eq!(state.table.row_count(), 2);
        assert_eq!(state.y_key.as_deref(), Some("y"));
    }
}
