//! GUI runner: window options and the eframe event loop.

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::DashboardApp;
use super::fetcher::start_fetcher;
use crate::api::ApiClient;

/// Launch the dashboard window against the given API base URL.
pub fn run_gui(api_url: String) -> Result<()> {
    info!("starting dashboard against {}", api_url);

    let fetcher = start_fetcher(ApiClient::with_url(api_url));
    let app = DashboardApp::new(fetcher);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Mixo Ads - Campaign Dashboard"),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "mixo-dash",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
