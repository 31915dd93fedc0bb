//! Configuration module for the shotchart application.

pub mod chart;
pub mod court;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;

// Re-export commonly used items
pub use chart::{CHART, ZONE_LABEL_ANCHORS};
pub use court::BINNING;
pub use persistence::{PERSISTENCE, league_average_path, season_shots_path};
