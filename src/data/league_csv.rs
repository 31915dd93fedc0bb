use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{ShotRecord, ZoneKey};
use crate::models::{LeagueAverageEntry, LeagueAverageTable};
use crate::utils::maths_utils::ratio;

/// One row of a league average file. `FGA`/`FGM` are optional on input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeagueAverageRow {
    #[serde(rename = "SHOT_ZONE_BASIC")]
    pub zone_basic: String,
    #[serde(rename = "SHOT_ZONE_AREA")]
    pub zone_area: String,
    #[serde(rename = "SHOT_ZONE_RANGE")]
    pub zone_range: String,
    #[serde(rename = "FGA", default)]
    pub fga: Option<f64>,
    #[serde(rename = "FGM", default)]
    pub fgm: Option<f64>,
    #[serde(rename = "FG_PCT")]
    pub fg_pct: f64,
}

impl LeagueAverageRow {
    pub fn zone_key(&self) -> ZoneKey {
        ZoneKey::new(&self.zone_basic, &self.zone_area, &self.zone_range)
    }
}

pub fn read_league_average<R: Read>(reader: R) -> Result<LeagueAverageTable> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut entries = Vec::new();
    for (index, result) in reader.deserialize::<LeagueAverageRow>().enumerate() {
        let row = result.with_context(|| format!("Invalid league average record {}", index + 1))?;
        entries.push(LeagueAverageEntry {
            zone: row.zone_key(),
            fg_pct: row.fg_pct,
        });
    }

    let table = LeagueAverageTable::from_entries(entries)?;
    log::debug!("Loaded league averages for {} zones", table.len());
    Ok(table)
}

pub fn load_league_average(path: &Path) -> Result<LeagueAverageTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open league average file: {}", path.display()))?;
    read_league_average(std::io::BufReader::new(file))
        .with_context(|| format!("Failed to read league average file: {}", path.display()))
}

/// League average rows from a full season of shots, in zone order.
pub fn league_rows_from_shots(shots: &[ShotRecord]) -> Vec<LeagueAverageRow> {
    let mut totals: BTreeMap<ZoneKey, (u32, u32)> = BTreeMap::new();
    for shot in shots {
        let (attempted, made) = totals.entry(shot.zone_key()).or_default();
        *attempted += shot.attempted_flag();
        *made += shot.made_flag();
    }

    totals
        .into_iter()
        .map(|(zone, (attempted, made))| LeagueAverageRow {
            zone_basic: zone.basic,
            zone_area: zone.area,
            zone_range: zone.range,
            fga: Some(f64::from(attempted)),
            fgm: Some(f64::from(made)),
            fg_pct: ratio(made, attempted),
        })
        .collect()
}

pub fn write_league_average<W: Write>(writer: W, rows: &[LeagueAverageRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer
            .serialize(row)
            .context("Failed to write league average row")?;
    }
    writer.flush().context("Failed to flush league average file")?;
    Ok(())
}
