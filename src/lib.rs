//! deploydeck - deployment setup console
//!
//! A small desktop console for preparing a deployment. The user picks a
//! deployment template; the console fetches the prepopulate options the
//! setup server associates with that template and rebuilds the dependent
//! dropdown with them. The repo also ships the setup server side of that
//! conversation, so the whole flow runs locally:
//!
//! 1. `deploydeck serve` exposes the template list and the prepop-setting
//!    endpoint, backed by a templates directory on disk.
//! 2. `deploydeck gui` (the default) opens the deploy form, refreshes the
//!    prepop dropdown on startup and on every template change.

pub mod client;
pub mod config;
pub mod domain;
pub mod gui;
pub mod server;

pub use domain::*;
