//! Shot binning and league comparison.
//!
//! Two passes over the shots:
//! 1. Aggregation: count shots and makes per bin, per zone, and per zone within each bin.
//! 2. Materialization: derive per-shot bin centre, percentage, marker size and
//!    league comparison from the (now frozen) aggregates, in input order.

use serde::{Deserialize, Serialize};

use crate::config::{BINNING, DEBUG_FLAGS};
use crate::domain::{ShotRecord, ZoneKey};
use crate::error::BinningError;
use crate::models::{
    AugmentedShotRecord, BinAggregate, LeagueAverageTable, LeagueComparison, ShotAggregation,
    ShotGrid,
};
use crate::utils::AxisBins;
use crate::utils::maths_utils::clamp_symmetric;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BinningParams {
    pub width: f64,
    pub height: f64,
    pub bin_number_x: f64,
    pub bin_number_y: f64,
    pub norm_x: f64,
    pub norm_y: f64,
    pub clamp_pct_points: f64,
}

impl Default for BinningParams {
    fn default() -> Self {
        Self::with_bin_number_x(BINNING.grid.bin_number_x)
    }
}

impl BinningParams {
    /// Default court with `bin_number_x` columns and as many rows as keeps bins square.
    pub fn with_bin_number_x(bin_number_x: f64) -> Self {
        let court = &BINNING.court;
        Self {
            width: court.width,
            height: court.height,
            bin_number_x,
            bin_number_y: court.height / (court.width / bin_number_x),
            norm_x: court.norm_x,
            norm_y: court.norm_y,
            clamp_pct_points: BINNING.comparison.clamp_pct_points,
        }
    }

    pub fn validate(&self) -> Result<(), BinningError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("bin_number_x", self.bin_number_x),
            ("bin_number_y", self.bin_number_y),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(BinningError::InvalidParameter(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !(self.clamp_pct_points.is_finite() && self.clamp_pct_points >= 0.0) {
            return Err(BinningError::InvalidParameter(format!(
                "clamp_pct_points must be non-negative, got {}",
                self.clamp_pct_points
            )));
        }
        Ok(())
    }

    pub fn grid(&self) -> ShotGrid {
        ShotGrid::new(
            AxisBins::new(self.width, self.bin_number_x, self.norm_x),
            AxisBins::new(self.height, self.bin_number_y, self.norm_y),
        )
    }
}

/// Bin the shots and, when a league average table is given, compare each bin with it.
///
/// Returns one record per input shot, in input order. Empty input gives empty output.
pub fn create_bins(
    shots: &[ShotRecord],
    league_average: Option<&LeagueAverageTable>,
    params: &BinningParams,
) -> Result<Vec<AugmentedShotRecord>, BinningError> {
    params.validate()?;

    if shots.is_empty() {
        log::debug!("No shots to bin");
        return Ok(Vec::new());
    }

    let grid = params.grid();
    let aggregation = ShotAggregation::build(shots, &grid);
    materialize(shots, &aggregation, league_average, &grid, params)
}

fn materialize(
    shots: &[ShotRecord],
    aggregation: &ShotAggregation,
    league_average: Option<&LeagueAverageTable>,
    grid: &ShotGrid,
    params: &BinningParams,
) -> Result<Vec<AugmentedShotRecord>, BinningError> {
    // Rim volume dwarfs everything else, so marker sizes are scaled to the busiest
    // non-restricted bin. With only rim shots, scale to the busiest bin instead.
    let max_out_of_restricted = match aggregation.max_out_of_restricted() {
        Some(max) => max,
        None => {
            log::debug!("All shots are in the restricted area, scaling markers to the busiest bin");
            aggregation
                .max_bin_count()
                .ok_or(BinningError::NoBins(shots.len()))?
        }
    };
    let max_marker_area = grid.max_marker_area();

    if DEBUG_FLAGS.print_aggregation_summary {
        log::info!(
            "Marker scale: max {} shots out of restricted area, max area {}",
            max_out_of_restricted,
            max_marker_area
        );
    }

    shots
        .iter()
        .zip(&aggregation.shot_bins)
        .map(|(shot, &key)| {
            let bin = aggregation
                .bin(key)
                .filter(|bin| bin.shot_count > 0)
                .ok_or(BinningError::EmptyBin(key))?;
            let dominant_zone = bin.zones.dominant().ok_or(BinningError::EmptyBin(key))?;

            let comparison = league_average
                .map(|table| compare_with_league(bin, aggregation, table, dominant_zone, params))
                .transpose()?;

            let value_to_scale = bin.shot_count.min(max_out_of_restricted);
            let size_weight =
                (f64::from(value_to_scale) / f64::from(max_out_of_restricted)) * max_marker_area;

            let (bin_center_x, bin_center_y) = grid.bin_center(key);

            Ok(AugmentedShotRecord {
                shot: shot.clone(),
                bin: key,
                bin_center_x,
                bin_center_y,
                bin_pct: bin.fraction_made() * 100.0,
                size_weight,
                raw_count: bin.shot_count,
                zone_label: shot.zone_key().label()?,
                dominant_zone: dominant_zone.clone(),
                comparison,
            })
        })
        .collect()
}

fn compare_with_league(
    bin: &BinAggregate,
    aggregation: &ShotAggregation,
    table: &LeagueAverageTable,
    dominant_zone: &ZoneKey,
    params: &BinningParams,
) -> Result<LeagueComparison, BinningError> {
    let baseline = table.baseline(dominant_zone)?;
    let zone_pct = aggregation
        .zone(dominant_zone)
        .map_or(0.0, |zone| zone.fraction_made());

    Ok(LeagueComparison {
        shot_vs_league: clamp_symmetric(
            (bin.fraction_made() - baseline) * 100.0,
            params.clamp_pct_points,
        ),
        zone_vs_league: clamp_symmetric((zone_pct - baseline) * 100.0, params.clamp_pct_points),
        zone_pct,
    })
}
