//! Rendering for the setup window.

use eframe::egui::{self, RichText};

use super::app::{ACCENT_AMBER, BG_PRIMARY, BG_SECONDARY, SetupApp, TEXT_MUTED, TEXT_PRIMARY};
use crate::domain::SelectControl;

/// Render the deploy form: template selector on top, prepop options below.
pub(super) fn render_central(app: &mut SetupApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(BG_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.heading(RichText::new("Deployment setup").color(TEXT_PRIMARY));
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Template:").color(TEXT_MUTED));
                render_select(ui, "deploy_template", app.template_select_mut());
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Prepop options:").color(TEXT_MUTED));
                render_select(ui, "deploy_prepop_options", app.prepop_select_mut());
            });
        });
}

/// Render the bottom status bar
pub(super) fn render_status_bar(app: &SetupApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar")
        .frame(egui::Frame::none().fill(BG_SECONDARY).inner_margin(4.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(app.config().gui.app_root.as_str())
                        .small()
                        .monospace()
                        .color(TEXT_MUTED),
                );

                ui.add_space(16.0);

                if app.is_refreshing() {
                    ui.label(
                        RichText::new("syncing prepop options…")
                            .small()
                            .color(ACCENT_AMBER),
                    );
                } else {
                    ui.label(RichText::new("ready").small().color(TEXT_MUTED));
                }
            });
        });
}

fn render_select(ui: &mut egui::Ui, id_salt: &str, control: &mut SelectControl) {
    egui::ComboBox::from_id_salt(id_salt)
        .width(260.0)
        .selected_text(control.selected_text().to_string())
        .show_ui(ui, |ui| {
            let mut selected = control.selected_index();
            for (index, option) in control.options().iter().enumerate() {
                ui.selectable_value(&mut selected, Some(index), option.label.as_str());
            }
            control.select(selected);
        });
}
