use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::ZoneKey;
use crate::error::BinningError;

/// League-wide field goal percentage for one zone.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeagueAverageEntry {
    pub zone: ZoneKey,
    pub fg_pct: f64,
}

/// Baselines keyed by zone, exactly one per zone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueAverageTable {
    baselines: HashMap<ZoneKey, f64>,
}

impl LeagueAverageTable {
    /// Fails on the first zone that appears twice.
    pub fn from_entries(
        entries: impl IntoIterator<Item = LeagueAverageEntry>,
    ) -> Result<Self, BinningError> {
        let mut baselines = HashMap::new();
        for entry in entries {
            if baselines.contains_key(&entry.zone) {
                return Err(BinningError::DuplicateBaseline { zone: entry.zone });
            }
            baselines.insert(entry.zone, entry.fg_pct);
        }
        Ok(LeagueAverageTable { baselines })
    }

    pub fn baseline(&self, zone: &ZoneKey) -> Result<f64, BinningError> {
        self.baselines
            .get(zone)
            .copied()
            .ok_or_else(|| BinningError::MissingBaseline { zone: zone.clone() })
    }

    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }

    /// Entries in zone order.
    pub fn entries(&self) -> Vec<LeagueAverageEntry> {
        let mut entries: Vec<LeagueAverageEntry> = self
            .baselines
            .iter()
            .map(|(zone, &fg_pct)| LeagueAverageEntry {
                zone: zone.clone(),
                fg_pct,
            })
            .collect();
        entries.sort_by(|a, b| a.zone.cmp(&b.zone));
        entries
    }
}
