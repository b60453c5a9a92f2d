use data_catalog::app::DataCatalogApp;
use data_catalog::config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Data Catalog",
        options,
        Box::new(|cc| Ok(Box::new(DataCatalogApp::new(&cc.egui_ctx, config)))),
    )
}
