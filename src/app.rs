use eframe::egui;

use crate::config::Config;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DataCatalogApp {
    pub state: AppState,
}

impl DataCatalogApp {
    /// Build the app and kick off the configured startup load, if any.
    pub fn new(ctx: &egui::Context, config: Config) -> Self {
        let initial = config.initial_source.clone();
        let mut state = AppState::new(config);
        if let Some(path) = initial {
            let ctx = ctx.clone();
            state.start_load(path, move || ctx.request_repaint());
        }
        Self { state }
    }
}

impl eframe::App for DataCatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_load();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: axis selection ----
        egui::SidePanel::left("plot_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: table ----
        egui::TopBottomPanel::bottom("table_panel")
            .default_height(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                table::data_table(ui, &self.state.table_view);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &self.state);
        });

        panels::notice_window(ctx, &mut self.state);
    }
}
