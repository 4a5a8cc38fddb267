mod app;
mod prompts;

use anyhow::Result;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("framefit")
            .with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "framefit",
        options,
        Box::new(|cc| Ok(Box::new(app::PreviewApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start ui: {e}"))
}
