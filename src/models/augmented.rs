use serde::{Deserialize, Serialize};

use crate::domain::{BinKey, ShotRecord, ZoneKey};

/// How a shot's bin and dominant zone compare with the league baseline.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LeagueComparison {
    /// Bin percentage minus baseline, percentage points, clamped
    pub shot_vs_league: f64,
    /// Dominant zone percentage minus baseline, percentage points, clamped
    pub zone_vs_league: f64,
    /// Dominant zone percentage as a fraction, not clamped
    pub zone_pct: f64,
}

/// A shot plus everything derived for it from its bin.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AugmentedShotRecord {
    pub shot: ShotRecord,
    pub bin: BinKey,
    pub bin_center_x: f64,
    pub bin_center_y: f64,
    /// 0-100
    pub bin_pct: f64,
    pub size_weight: f64,
    pub raw_count: u32,
    pub zone_label: String,
    pub dominant_zone: ZoneKey,
    pub comparison: Option<LeagueComparison>,
}
