use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::analysis::{ShotChart, headshot_url};
use crate::config::PERSISTENCE;
use crate::models::AugmentedShotRecord;

/// Output file formats for the binned table.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Default,
    Debug,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Flat table, one row per shot
    #[default]
    Csv,
    /// Full report: rows, markers and zone summaries
    Json,
}

/// A binned shot as a flat CSV row: the input columns followed by the derived ones.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AugmentedRow {
    #[serde(rename = "LOC_X")]
    pub loc_x: f64,
    #[serde(rename = "LOC_Y")]
    pub loc_y: f64,
    #[serde(rename = "SHOT_MADE_FLAG")]
    pub made_flag: u8,
    #[serde(rename = "SHOT_ATTEMPTED_FLAG")]
    pub attempted_flag: u8,
    #[serde(rename = "SHOT_ZONE_BASIC")]
    pub zone_basic: String,
    #[serde(rename = "SHOT_ZONE_AREA")]
    pub zone_area: String,
    #[serde(rename = "SHOT_ZONE_RANGE")]
    pub zone_range: String,
    #[serde(rename = "PLAYER_ID")]
    pub player_id: u64,
    #[serde(rename = "TEAM_ID")]
    pub team_id: u64,
    #[serde(rename = "BIN_LOC_X")]
    pub bin_loc_x: f64,
    #[serde(rename = "BIN_LOC_Y")]
    pub bin_loc_y: f64,
    #[serde(rename = "PCT_LEAGUE_AVG_COMPARISON")]
    pub pct_league_avg_comparison: Option<f64>,
    #[serde(rename = "PCT_LEAGUE_COMPARISON_ZONE")]
    pub pct_league_comparison_zone: Option<f64>,
    /// 0-100, unlike `LeagueComparison::zone_pct`
    #[serde(rename = "LOC_ZONE_PERCENTAGE")]
    pub loc_zone_percentage: Option<f64>,
    #[serde(rename = "LOC_PERCENTAGE")]
    pub loc_percentage: f64,
    #[serde(rename = "LOC_COUNTS")]
    pub loc_counts: f64,
    #[serde(rename = "LOC_RAW_COUNTS")]
    pub loc_raw_counts: u32,
    #[serde(rename = "LOC_LABEL")]
    pub loc_label: String,
}

impl From<&AugmentedShotRecord> for AugmentedRow {
    fn from(record: &AugmentedShotRecord) -> Self {
        let shot = &record.shot;
        AugmentedRow {
            loc_x: shot.loc_x,
            loc_y: shot.loc_y,
            made_flag: u8::from(shot.made),
            attempted_flag: u8::from(shot.attempted),
            zone_basic: shot.zone_basic.clone(),
            zone_area: shot.zone_area.clone(),
            zone_range: shot.zone_range.clone(),
            player_id: shot.player_id,
            team_id: shot.team_id,
            bin_loc_x: record.bin_center_x,
            bin_loc_y: record.bin_center_y,
            pct_league_avg_comparison: record.comparison.map(|c| c.shot_vs_league),
            pct_league_comparison_zone: record.comparison.map(|c| c.zone_vs_league),
            loc_zone_percentage: record.comparison.map(|c| c.zone_pct * 100.0),
            loc_percentage: record.bin_pct,
            loc_counts: record.size_weight,
            loc_raw_counts: record.raw_count,
            loc_label: record.zone_label.clone(),
        }
    }
}

pub fn write_augmented_csv<W: Write>(writer: W, records: &[AugmentedShotRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer
            .serialize(AugmentedRow::from(record))
            .context("Failed to write binned shot row")?;
    }
    writer.flush().context("Failed to flush binned shot table")?;
    Ok(())
}

/// Serialized chart wrapper written by the CLI in JSON mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShotChartReport {
    pub version: f64,
    pub timestamp_ms: i64,
    pub season: Option<String>,
    pub player_id: Option<u64>,
    pub headshot_url: Option<String>,
    pub chart: ShotChart,
}

impl ShotChartReport {
    pub fn new(season: Option<String>, player_id: Option<u64>, chart: ShotChart) -> Self {
        let headshot = match (&season, player_id, chart.records.first()) {
            (Some(season), Some(player_id), Some(first)) => {
                Some(headshot_url(first.shot.team_id, season, player_id))
            }
            _ => None,
        };
        Self {
            version: PERSISTENCE.report_version,
            timestamp_ms: Utc::now().timestamp_millis(),
            season,
            player_id,
            headshot_url: headshot,
            chart,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open report file: {:?}", path))?;
        let reader = BufReader::new(file);
        let report = serde_json::from_reader(reader)
            .context(format!("Failed to deserialize report: {:?}", path))?;
        Ok(report)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self).context("Failed to serialize shot chart report")
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        create_parent_dir(path)?;
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer
            .flush()
            .context(format!("Failed to write report to: {}", path.display()))
    }
}

pub fn save_augmented_csv(path: &Path, records: &[AugmentedShotRecord]) -> Result<()> {
    create_parent_dir(path)?;
    let file = File::create(path).context(format!("Failed to create file: {}", path.display()))?;
    write_augmented_csv(BufWriter::new(file), records)
        .context(format!("Failed to write binned shots to: {}", path.display()))
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ChartOptions, build_shot_chart};
    use crate::domain::ShotRecord;
    use crate::models::{LeagueAverageEntry, LeagueAverageTable};

    fn corner_shots() -> Vec<ShotRecord> {
        (0..4)
            .map(|i| {
                ShotRecord::new(235.0, 50.0, i < 2, "Left Corner 3", "Left Side(L)", "24+ ft.")
                    .with_ids(201939, 1610612744)
            })
            .collect()
    }

    #[test]
    fn test_csv_has_comparison_columns_only_when_compared() {
        let shots = corner_shots();
        let chart = build_shot_chart(&shots, None, &ChartOptions::default()).unwrap();

        let mut buffer = Vec::new();
        write_augmented_csv(&mut buffer, &chart.records).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("LOC_X,LOC_Y,SHOT_MADE_FLAG"));
        assert!(header.ends_with("LOC_PERCENTAGE,LOC_COUNTS,LOC_RAW_COUNTS,LOC_LABEL"));
        let first = lines.next().unwrap();
        assert!(first.contains(",,,"), "comparison columns should be empty: {}", first);
        assert!(first.ends_with(",50.0,225.0,4,3L"));
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn test_zone_percentage_column_is_scaled_to_100() {
        let shots = corner_shots();
        let league = LeagueAverageTable::from_entries(vec![LeagueAverageEntry {
            zone: shots[0].zone_key(),
            fg_pct: 0.45,
        }])
        .unwrap();
        let chart = build_shot_chart(&shots, Some(&league), &ChartOptions::default()).unwrap();

        let row = AugmentedRow::from(&chart.records[0]);
        assert_eq!(row.loc_zone_percentage, Some(50.0));
        assert_eq!(row.made_flag, 1);
        assert!((row.pct_league_avg_comparison.unwrap() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_round_trip_on_disk() {
        let chart = build_shot_chart(&corner_shots(), None, &ChartOptions::default()).unwrap();
        let report = ShotChartReport::new(Some("2019-20".to_string()), Some(201939), chart);
        assert!(report.headshot_url.as_deref().unwrap().ends_with("/1610612744/2019-20/260x190/201939.png"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("201939.json");
        report.save_to_path(&path).unwrap();

        let loaded = ShotChartReport::load_from_path(&path).unwrap();
        assert_eq!(loaded.version, report.version);
        assert_eq!(loaded.timestamp_ms, report.timestamp_ms);
        assert_eq!(loaded.season.as_deref(), Some("2019-20"));
        assert_eq!(loaded.chart.records.len(), 4);
        assert_eq!(loaded.chart.markers.len(), 1);
        assert!((loaded.chart.records[0].bin_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_output_format_parses() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
