//! Main GUI application state.
//!
//! Hosts the two selection controls of the deploy form and keeps the
//! prepop-options dropdown in sync with the selected template: one refresh
//! at startup, one refresh per template change, responses applied from the
//! update loop only.

use eframe::egui::Color32;

use super::fetcher::PrepopFetcher;
use crate::client::SetupClient;
use crate::config::Config;
use crate::domain::{SelectControl, rebuild_options};

/// Background: deep charcoal
pub(super) const BG_PRIMARY: Color32 = Color32::from_rgb(20, 22, 26);
/// Secondary background for panels
pub(super) const BG_SECONDARY: Color32 = Color32::from_rgb(28, 31, 37);
/// Primary text
pub(super) const TEXT_PRIMARY: Color32 = Color32::from_rgb(220, 223, 228);
/// Muted text
pub(super) const TEXT_MUTED: Color32 = Color32::from_rgb(120, 126, 138);
/// Busy indicator
pub(super) const ACCENT_AMBER: Color32 = Color32::from_rgb(255, 176, 0);

/// Main application state
pub struct SetupApp {
    /// Configuration
    config: Config,
    /// Template selector
    template_select: SelectControl,
    /// Prepop-options dropdown, rebuilt on every successful refresh
    prepop_select: SelectControl,
    /// Background fetcher for prepop options
    fetcher: PrepopFetcher,
    /// Sequence number of the most recently issued refresh
    latest_seq: u64,
    /// Template selection as of the last update pass
    prev_template_selection: Option<usize>,
    /// Whether the latest refresh is still in flight
    refreshing: bool,
}

impl SetupApp {
    /// Build the app and perform the initial refresh for whatever template
    /// is selected by default.
    pub fn new(config: Config, templates: Vec<String>) -> Self {
        let client = SetupClient::new(&config.gui.app_root);
        let fetcher = PrepopFetcher::new(client);

        let template_select =
            SelectControl::with_options(templates.into_iter().map(|name| (name.clone(), name)));

        let mut app = Self {
            config,
            prev_template_selection: template_select.selected_index(),
            template_select,
            prepop_select: SelectControl::new(),
            fetcher,
            latest_seq: 0,
            refreshing: false,
        };
        app.refresh_prepop();
        app
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn template_select(&self) -> &SelectControl {
        &self.template_select
    }

    pub fn template_select_mut(&mut self) -> &mut SelectControl {
        &mut self.template_select
    }

    pub fn prepop_select(&self) -> &SelectControl {
        &self.prepop_select
    }

    pub fn prepop_select_mut(&mut self) -> &mut SelectControl {
        &mut self.prepop_select
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Issue one refresh using the currently selected template's text.
    /// The payload is read here, at call time, and lives only for this call.
    pub fn refresh_prepop(&mut self) {
        let template = self.template_select.selected_text().to_string();
        self.latest_seq = self.fetcher.request_refresh(&template);
        self.refreshing = true;
    }

    /// Trigger exactly one refresh when the template selection moved since
    /// the last pass.
    pub fn handle_template_change(&mut self) {
        if self.template_select.selected_index() != self.prev_template_selection {
            self.prev_template_selection = self.template_select.selected_index();
            self.refresh_prepop();
        }
    }

    /// Drain completed refreshes. Only the outcome of the most recently
    /// issued request is applied; anything older is a stale response whose
    /// result must not overwrite the newer selection's. A failed refresh
    /// leaves the dropdown exactly as it was.
    pub fn poll_prepop_outcomes(&mut self) {
        while let Some(outcome) = self.fetcher.try_recv() {
            if outcome.seq != self.latest_seq {
                continue;
            }
            self.refreshing = false;
            if let Ok(entries) = outcome.result {
                rebuild_options(&mut self.prepop_select, &entries);
            }
        }
    }
}
