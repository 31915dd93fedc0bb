use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::DEBUG_FLAGS;
use crate::domain::ShotRecord;

/// A shot row as stored in the season CSV. Flags are 0/1 integers;
/// any other columns in the file are ignored.
#[derive(Deserialize, Debug)]
struct ShotRow {
    #[serde(rename = "LOC_X")]
    loc_x: f64,
    #[serde(rename = "LOC_Y")]
    loc_y: f64,
    #[serde(rename = "SHOT_MADE_FLAG")]
    made_flag: u8,
    #[serde(rename = "SHOT_ATTEMPTED_FLAG", default)]
    attempted_flag: Option<u8>,
    #[serde(rename = "SHOT_ZONE_BASIC")]
    zone_basic: String,
    #[serde(rename = "SHOT_ZONE_AREA")]
    zone_area: String,
    #[serde(rename = "SHOT_ZONE_RANGE")]
    zone_range: String,
    #[serde(rename = "PLAYER_ID", default)]
    player_id: u64,
    #[serde(rename = "TEAM_ID", default)]
    team_id: u64,
}

impl From<ShotRow> for ShotRecord {
    fn from(row: ShotRow) -> Self {
        ShotRecord {
            loc_x: row.loc_x,
            loc_y: row.loc_y,
            made: row.made_flag != 0,
            // Every row in a shot log is an attempt unless the file says otherwise
            attempted: row.attempted_flag.is_none_or(|flag| flag != 0),
            zone_basic: row.zone_basic,
            zone_area: row.zone_area,
            zone_range: row.zone_range,
            player_id: row.player_id,
            team_id: row.team_id,
        }
    }
}

/// Read shots from CSV, optionally keeping a single player's. File order is preserved.
pub fn read_shots<R: Read>(reader: R, player_id: Option<u64>) -> Result<Vec<ShotRecord>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut shots = Vec::new();
    let mut total_rows = 0usize;
    for (index, result) in reader.deserialize::<ShotRow>().enumerate() {
        let row = result.with_context(|| format!("Invalid shot record {}", index + 1))?;
        total_rows += 1;
        if player_id.is_some_and(|id| id != row.player_id) {
            continue;
        }
        shots.push(ShotRecord::from(row));
    }

    if DEBUG_FLAGS.print_csv_loading {
        match player_id {
            Some(id) => log::info!("Loaded {} of {} shots for player {}", shots.len(), total_rows, id),
            None => log::info!("Loaded {} shots", shots.len()),
        }
    }
    Ok(shots)
}

pub fn load_shots(path: &Path, player_id: Option<u64>) -> Result<Vec<ShotRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open shot file: {}", path.display()))?;
    read_shots(std::io::BufReader::new(file), player_id)
        .with_context(|| format!("Failed to read shot file: {}", path.display()))
}
