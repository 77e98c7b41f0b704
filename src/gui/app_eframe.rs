//! eframe::App implementation for SetupApp
//!
//! Contains the main update loop that runs every frame.

use std::time::Duration;

use super::app::SetupApp;
use super::app_render;
use eframe::egui;

impl eframe::App for SetupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply completed refreshes before reading the current selection
        self.poll_prepop_outcomes();

        // A selection change in the previous frame triggers one refresh
        self.handle_template_change();

        app_render::render_central(self, ctx);
        app_render::render_status_bar(self, ctx);

        // Keep polling for in-flight refreshes without user input
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
