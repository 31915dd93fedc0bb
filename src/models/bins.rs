use std::collections::HashMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::config::DEBUG_FLAGS;
use crate::domain::{BinKey, ShotRecord, ZoneKey};
use crate::models::grid::ShotGrid;
use crate::utils::maths_utils::{self, ratio};

/// Per-bin shot counts split by zone, kept in the order zones were first seen.
///
/// A bin can straddle zone boundaries, so it may hold several zones.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct ZoneTally {
    entries: Vec<(ZoneKey, u32)>,
}

impl ZoneTally {
    pub fn increment(&mut self, zone: &ZoneKey) {
        match self.entries.iter_mut().find(|(existing, _)| existing == zone) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((zone.clone(), 1)),
        }
    }

    /// Zone with the most shots. Ties keep the zone seen first.
    pub fn dominant(&self) -> Option<&ZoneKey> {
        let mut best: Option<(&ZoneKey, u32)> = None;
        for (zone, count) in &self.entries {
            if best.is_none_or(|(_, best_count)| *count > best_count) {
                best = Some((zone, *count));
            }
        }
        best.map(|(zone, _)| zone)
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ZoneKey, u32)> {
        self.entries.iter().map(|(zone, count)| (zone, *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct BinAggregate {
    pub shot_count: u32,
    pub made_count: u32,
    pub zones: ZoneTally,
    // At least one restricted area shot landed here
    pub restricted: bool,
}

impl BinAggregate {
    pub fn fraction_made(&self) -> f64 {
        ratio(self.made_count, self.shot_count)
    }
}

#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct ZoneAggregate {
    pub shot_count: u32,
    pub made_count: u32,
}

impl ZoneAggregate {
    pub fn fraction_made(&self) -> f64 {
        ratio(self.made_count, self.shot_count)
    }
}

/// Everything the first pass learns about a set of shots.
/// Read-only once `build` returns.
#[derive(Debug, Clone, Default)]
pub struct ShotAggregation {
    pub bins: HashMap<BinKey, BinAggregate>,
    pub zones: HashMap<ZoneKey, ZoneAggregate>,
    /// Bin of every input shot, in input order
    pub shot_bins: Vec<BinKey>,
}

impl ShotAggregation {
    pub fn build(shots: &[ShotRecord], grid: &ShotGrid) -> Self {
        let mut aggregation = ShotAggregation {
            bins: HashMap::new(),
            zones: HashMap::new(),
            shot_bins: Vec::with_capacity(shots.len()),
        };

        for shot in shots {
            let key = grid.bin_key(shot.loc_x, shot.loc_y);

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_out_of_range_bins && !grid.contains(key) {
                log::warn!(
                    "Shot at ({}, {}) falls outside the grid in bin {}",
                    shot.loc_x,
                    shot.loc_y,
                    key
                );
            }

            let zone_key = shot.zone_key();

            let bin = aggregation.bins.entry(key).or_default();
            bin.shot_count += 1;
            bin.made_count += shot.made_flag();
            bin.restricted |= shot.is_restricted_area();
            bin.zones.increment(&zone_key);

            let zone = aggregation.zones.entry(zone_key).or_default();
            zone.shot_count += 1;
            zone.made_count += shot.made_flag();

            aggregation.shot_bins.push(key);
        }

        if DEBUG_FLAGS.print_aggregation_summary {
            log::info!(
                "Aggregated {} shots into {} bins across {} zones ({} restricted bins)",
                shots.len(),
                aggregation.bins.len(),
                aggregation.zones.len(),
                aggregation.bins.values().filter(|bin| bin.restricted).count()
            );
        }

        aggregation
    }

    pub fn bin(&self, key: BinKey) -> Option<&BinAggregate> {
        self.bins.get(&key)
    }

    pub fn zone(&self, key: &ZoneKey) -> Option<&ZoneAggregate> {
        self.zones.get(key)
    }

    pub fn total_shots(&self) -> u32 {
        self.bins.values().map(|bin| bin.shot_count).sum()
    }

    /// Largest shot count among bins without restricted area shots.
    /// `None` when every bin is restricted (or there are no bins).
    pub fn max_out_of_restricted(&self) -> Option<u32> {
        let counts: Vec<f64> = self
            .bins
            .values()
            .filter(|bin| !bin.restricted)
            .map(|bin| bin.shot_count)
            .unique()
            .map(f64::from)
            .collect();
        if counts.is_empty() {
            return None;
        }
        Some(maths_utils::get_max(&counts) as u32)
    }

    /// Largest shot count of any bin.
    pub fn max_bin_count(&self) -> Option<u32> {
        self.bins.values().map(|bin| bin.shot_count).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::AxisBins;

    fn grid() -> ShotGrid {
        ShotGrid::new(
            AxisBins::new(500.0, 30.0, 250.0),
            AxisBins::new(300.0, 18.0, 48.0),
        )
    }

    fn rim(made: bool) -> ShotRecord {
        ShotRecord::new(0.0, 0.0, made, "Restricted Area", "Center(C)", "Less Than 8 ft.")
    }

    fn elbow(made: bool) -> ShotRecord {
        ShotRecord::new(-80.0, 140.0, made, "Mid-Range", "Right Side Center(RC)", "16-24 ft.")
    }

    #[test]
    fn test_zone_tally_tie_keeps_first_seen() {
        let a = ZoneKey::new("Mid-Range", "Center(C)", "16-24 ft.");
        let b = ZoneKey::new("Above the Break 3", "Center(C)", "24+ ft.");

        let mut tally = ZoneTally::default();
        tally.increment(&a);
        tally.increment(&b);
        assert_eq!(tally.dominant(), Some(&a));

        let mut reversed = ZoneTally::default();
        reversed.increment(&b);
        reversed.increment(&a);
        assert_eq!(reversed.dominant(), Some(&b));

        reversed.increment(&a);
        assert_eq!(reversed.dominant(), Some(&a));
        assert_eq!(reversed.total(), 3);
        assert_eq!(reversed.len(), 2);
    }

    #[test]
    fn test_empty_tally_has_no_dominant_zone() {
        let tally = ZoneTally::default();
        assert!(tally.is_empty());
        assert_eq!(tally.dominant(), None);
    }

    #[test]
    fn test_build_counts_bins_and_zones() {
        let shots = vec![rim(true), rim(false), elbow(true), rim(true)];
        let aggregation = ShotAggregation::build(&shots, &grid());

        assert_eq!(aggregation.shot_bins.len(), 4);
        assert_eq!(aggregation.bins.len(), 2);
        assert_eq!(aggregation.total_shots(), 4);

        let rim_bin = aggregation.bin(aggregation.shot_bins[0]).unwrap();
        assert_eq!(rim_bin.shot_count, 3);
        assert_eq!(rim_bin.made_count, 2);
        assert!(rim_bin.restricted);
        assert_eq!(rim_bin.zones.total(), rim_bin.shot_count);

        let elbow_zone = aggregation.zone(&elbow(true).zone_key()).unwrap();
        assert_eq!(elbow_zone.shot_count, 1);
        assert_eq!(elbow_zone.made_count, 1);
    }

    #[test]
    fn test_max_out_of_restricted_ignores_rim_bins() {
        let mut shots = vec![rim(true); 10];
        shots.extend(vec![elbow(false); 4]);
        let aggregation = ShotAggregation::build(&shots, &grid());

        assert_eq!(aggregation.max_out_of_restricted(), Some(4));
        assert_eq!(aggregation.max_bin_count(), Some(10));
    }

    #[test]
    fn test_max_out_of_restricted_none_when_all_restricted() {
        let shots = vec![rim(true), rim(false)];
        let aggregation = ShotAggregation::build(&shots, &grid());
        assert_eq!(aggregation.max_out_of_restricted(), None);
    }
}
