use eframe::egui;
use mahasiswa::{
    core::{
        config::SETTINGS_FILE,
        ApiConfig,
        SettingsData,
    },
    gui::MahasiswaApp,
    persistence::load_json_or_default,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings: SettingsData = load_json_or_default(SETTINGS_FILE);
    let config = ApiConfig::from_env(&settings);
    info!(base_url = %config.base_url, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([560.0, 420.0])
            .with_title("CRUD Mahasiswa"),
        ..Default::default()
    };

    eframe::run_native(
        "CRUD Mahasiswa",
        options,
        Box::new(move |cc| Ok(Box::new(MahasiswaApp::new(cc, settings, config)?))),
    )
}
