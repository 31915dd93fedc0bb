use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Median};

use crate::analysis::chart_markers::ChartMarker;
use crate::config::{CHART, ZONE_LABEL_ANCHORS};
use crate::domain::{ShotRecord, ZoneKey};
use crate::utils::maths_utils::ratio;

/// What the zone annotation boxes show.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Default,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum AnnotationStyle {
    /// "45.00%"
    #[default]
    Percentage,
    /// "9/20"
    Attempts,
}

/// Totals for one zone over all of a player's shots.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ZoneSummary {
    pub zone: ZoneKey,
    pub made: u32,
    pub attempted: u32,
    /// 0-100
    pub zone_pct: f64,
    pub median_x: f64,
    pub median_y: f64,
    /// Deduplicated markers whose first shot belongs to this zone
    pub marker_count: usize,
    pub anchor: Option<(f64, f64)>,
    /// Text to draw at `anchor`; `None` when the zone is too sparse or has no anchor
    pub annotation: Option<String>,
}

pub fn zone_anchor(zone: &ZoneKey) -> Option<(f64, f64)> {
    ZONE_LABEL_ANCHORS
        .iter()
        .find(|(basic, area, range, _)| {
            zone.basic == *basic && zone.area == *area && zone.range == *range
        })
        .map(|(_, _, _, anchor)| *anchor)
}

#[derive(Default)]
struct ZoneTotals {
    made: u32,
    attempted: u32,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

/// One summary per zone, in zone order.
pub fn summarize_zones(
    shots: &[ShotRecord],
    markers: &[ChartMarker],
    style: AnnotationStyle,
) -> Vec<ZoneSummary> {
    let mut totals: BTreeMap<ZoneKey, ZoneTotals> = BTreeMap::new();
    for shot in shots {
        let entry = totals.entry(shot.zone_key()).or_default();
        entry.made += shot.made_flag();
        entry.attempted += shot.attempted_flag();
        entry.xs.push(shot.loc_x);
        entry.ys.push(shot.loc_y);
    }

    totals
        .into_iter()
        .map(|(zone, totals)| {
            let zone_pct = ratio(totals.made, totals.attempted) * 100.0;
            let marker_count = markers.iter().filter(|m| m.zone == zone).count();
            let anchor = zone_anchor(&zone);

            let annotation = anchor
                .filter(|_| marker_count >= CHART.min_zone_markers)
                .filter(|_| totals.attempted >= CHART.min_zone_attempts)
                .map(|_| match style {
                    AnnotationStyle::Percentage => format!("{:.2}%", zone_pct),
                    AnnotationStyle::Attempts => format!("{}/{}", totals.made, totals.attempted),
                });

            ZoneSummary {
                made: totals.made,
                attempted: totals.attempted,
                zone_pct,
                median_x: Data::new(totals.xs).median(),
                median_y: Data::new(totals.ys).median(),
                marker_count,
                anchor,
                annotation,
                zone,
            }
        })
        .collect()
}
