//! Marker data for the shot chart: one marker per occupied bin.
//! Drawing is left to the renderer, this only decides position, area and colour.

use anyhow::{Result, anyhow};
use colorgrad::Gradient;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::config::CHART;
use crate::domain::ZoneKey;
use crate::models::AugmentedShotRecord;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartMarker {
    pub x: f64,
    pub y: f64,
    /// Area for the renderer (size weight times the configured multiplier)
    pub area: f64,
    pub raw_count: u32,
    pub bin_pct: f64,
    /// Zone of the first shot seen in this bin
    pub zone: ZoneKey,
    pub zone_vs_league: Option<f64>,
    /// `#rrggbb`, only when a league comparison exists
    pub color: Option<String>,
}

/// Discrete below/above average palette, one entry per integer point of comparison.
pub struct ComparisonPalette {
    colors: Vec<String>,
}

impl ComparisonPalette {
    pub fn from_config() -> Result<Self> {
        Self::new(CHART.comparison_palette_stops, CHART.comparison_palette_len)
    }

    pub fn new(stops: &[&str], len: usize) -> Result<Self> {
        if len == 0 {
            return Err(anyhow!("Comparison palette needs at least one colour"));
        }
        let grad = colorgrad::GradientBuilder::new()
            .html_colors(stops)
            .build::<colorgrad::LinearGradient>()
            .map_err(|e| anyhow!("Failed to create comparison palette: {}", e))?;

        let colors = grad.colors(len).into_iter().map(to_hex).collect();
        Ok(ComparisonPalette { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entry `trunc(comparison) + len / 2`; comparisons are already clamped to ±10.
    pub fn color_for(&self, comparison: f64) -> &str {
        let middle = (self.colors.len() / 2) as i64;
        let index = (comparison.trunc() as i64 + middle).clamp(0, self.colors.len() as i64 - 1);
        &self.colors[index as usize]
    }
}

fn to_hex(color: colorgrad::Color) -> String {
    let rgba8 = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba8[0], rgba8[1], rgba8[2])
}

/// Keep the first row of every bin, optionally dropping bins with a single shot.
pub fn build_markers(
    records: &[AugmentedShotRecord],
    palette: &ComparisonPalette,
    drop_single_shots: bool,
) -> Vec<ChartMarker> {
    records
        .iter()
        .unique_by(|row| row.bin)
        .filter(|row| !drop_single_shots || row.raw_count > 1)
        .map(|row| {
            let zone_vs_league = row.comparison.map(|c| c.zone_vs_league);
            ChartMarker {
                x: row.bin_center_x,
                y: row.bin_center_y,
                area: row.size_weight * CHART.marker_area_multiplier,
                raw_count: row.raw_count,
                bin_pct: row.bin_pct,
                zone: row.shot.zone_key(),
                zone_vs_league,
                color: zone_vs_league.map(|value| palette.color_for(value).to_string()),
            }
        })
        .collect()
}

/// Player headshot shown in the corner of the chart.
pub fn headshot_url(team_id: u64, season: &str, player_id: u64) -> String {
    format!(
        "{}/{}/{}/{}/{}.png",
        CHART.headshot_url_base, team_id, season, CHART.headshot_size, player_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::binning::{BinningParams, create_bins};
    use crate::domain::ShotRecord;
    use crate::models::{LeagueAverageEntry, LeagueAverageTable};

    fn palette() -> ComparisonPalette {
        ComparisonPalette::from_config().unwrap()
    }

    #[test]
    fn test_palette_endpoints_match_stops() {
        let palette = palette();
        assert_eq!(palette.len(), 21);
        assert_eq!(palette.color_for(-10.0), "#4159e1");
        assert_eq!(palette.color_for(10.0), "#ab2020");
        assert_eq!(palette.color_for(0.0), "#ffff99");
    }

    #[test]
    fn test_palette_index_truncates_toward_zero() {
        let palette = palette();
        assert_eq!(palette.color_for(-0.9), palette.color_for(0.0));
        assert_eq!(palette.color_for(0.9), palette.color_for(0.0));
        assert_ne!(palette.color_for(1.0), palette.color_for(0.0));
        assert_eq!(palette.color_for(-1.5), palette.color_for(-1.0));
    }

    #[test]
    fn test_markers_dedupe_by_bin_keeping_first() {
        let shots = vec![
            ShotRecord::new(0.0, 0.0, true, "Restricted Area", "Center(C)", "Less Than 8 ft."),
            ShotRecord::new(235.0, 50.0, true, "Left Corner 3", "Left Side(L)", "24+ ft."),
            ShotRecord::new(1.0, 1.0, false, "In The Paint (Non-RA)", "Center(C)", "Less Than 8 ft."),
            ShotRecord::new(236.0, 49.0, false, "Left Corner 3", "Left Side(L)", "24+ ft."),
            ShotRecord::new(-120.0, 60.0, true, "Mid-Range", "Right Side(R)", "8-16 ft."),
        ];
        let binned = create_bins(&shots, None, &BinningParams::default()).unwrap();

        let markers = build_markers(&binned, &palette(), false);
        assert_eq!(markers.len(), 3);
        // Rim bin represented by its first shot
        assert!(markers[0].zone.is_restricted_area());
        assert_eq!(markers[0].raw_count, 2);
        assert_eq!(markers[0].area, binned[0].size_weight * 2.0);
        assert!(markers.iter().all(|m| m.color.is_none()));

        let without_singles = build_markers(&binned, &palette(), true);
        assert_eq!(without_singles.len(), 2);
        assert!(without_singles.iter().all(|m| m.raw_count > 1));
    }

    #[test]
    fn test_markers_are_coloured_by_zone_comparison() {
        let shots: Vec<ShotRecord> = (0..10)
            .map(|i| ShotRecord::new(235.0, 50.0, i < 9, "Left Corner 3", "Left Side(L)", "24+ ft."))
            .collect();
        let league = LeagueAverageTable::from_entries(vec![LeagueAverageEntry {
            zone: shots[0].zone_key(),
            fg_pct: 0.38,
        }])
        .unwrap();
        let binned = create_bins(&shots, Some(&league), &BinningParams::default()).unwrap();

        let markers = build_markers(&binned, &palette(), false);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].zone_vs_league, Some(10.0));
        assert_eq!(markers[0].color.as_deref(), Some("#ab2020"));
    }

    #[test]
    fn test_headshot_url() {
        assert_eq!(
            headshot_url(1610612744, "2019-20", 201939),
            "https://ak-static.cms.nba.com/wp-content/uploads/headshots/nba/1610612744/2019-20/260x190/201939.png"
        );
    }
}
