use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::analysis::binning::{BinningParams, create_bins};
use crate::analysis::chart_markers::{ChartMarker, ComparisonPalette, build_markers};
use crate::analysis::zone_summary::{AnnotationStyle, ZoneSummary, summarize_zones};
use crate::domain::ShotRecord;
use crate::models::{AugmentedShotRecord, LeagueAverageTable};

/// Everything the renderer needs for one player's chart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShotChart {
    pub records: Vec<AugmentedShotRecord>,
    pub markers: Vec<ChartMarker>,
    pub zones: Vec<ZoneSummary>,
}

#[derive(Clone, Debug, Default)]
pub struct ChartOptions {
    pub params: BinningParams,
    pub drop_single_shots: bool,
    pub annotation_style: AnnotationStyle,
}

pub fn build_shot_chart(
    shots: &[ShotRecord],
    league_average: Option<&LeagueAverageTable>,
    options: &ChartOptions,
) -> Result<ShotChart> {
    let records = create_bins(shots, league_average, &options.params)
        .context("Failed to bin shots")?;
    let palette = ComparisonPalette::from_config()?;
    let markers = build_markers(&records, &palette, options.drop_single_shots);
    let zones = summarize_zones(shots, &markers, options.annotation_style);

    log::debug!(
        "Shot chart: {} shots, {} markers, {} of {} zones annotated",
        records.len(),
        markers.len(),
        zones.iter().filter(|z| z.annotation.is_some()).count(),
        zones.len()
    );

    Ok(ShotChart {
        records,
        markers,
        zones,
    })
}
