//! GUI runner - launches the setup console window.

use anyhow::Result;
use eframe::egui;
use tracing::{info, warn};

use super::app::SetupApp;
use crate::client::SetupClient;
use crate::config::Config;

/// Run the setup GUI.
///
/// The template list is loaded up front so the window opens with the
/// selector populated, the way the deploy form arrives from the server.
/// A failed load leaves the selector empty; the initial refresh is issued
/// either way.
pub fn run_gui(config: Config) -> Result<()> {
    let client = SetupClient::new(&config.gui.app_root);
    let templates = match client.templates() {
        Ok(templates) => templates,
        Err(e) => {
            warn!(
                "[deploydeck] Failed to load template list from {}: {}",
                config.gui.app_root, e
            );
            Vec::new()
        }
    };

    info!(
        "[deploydeck] Starting GUI against {} ({} templates)",
        config.gui.app_root,
        templates.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 240.0])
            .with_min_inner_size([420.0, 200.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = SetupApp::new(config, templates);

    eframe::run_native(
        "deploydeck",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
