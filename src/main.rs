use config::Config;
use detector::render::DetectorApp;
use detector::startup::{build, show_startup_error};
use detector::theme::apply_theme;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::Arc;

mod analysis_log;
mod analyzer;
mod config;
mod detector;
mod error;
mod image_classifier;
mod image_decoder;
mod library;
mod preprocessor;
mod preview;
mod result_policy;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let session = match build(config, logger.clone()) {
        Ok(session) => session,
        Err(err) => {
            let _ = logger.error(&err.to_string());
            show_startup_error(&err);
            return Err(err.into());
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Brain Tumor Detector")
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([640.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Brain Tumor Detector",
        options,
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx);
            Box::new(DetectorApp::new(session))
        }),
    )?;

    Ok(())
}
