//! Core domain types for the setup console

mod prepop;
mod select;

pub use prepop::{PrepopEntry, TEMPLATE_VALUE_PREFIX, rebuild_options};
pub use select::{SelectControl, SelectOption};
