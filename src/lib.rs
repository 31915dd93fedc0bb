#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod utils;

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

// Re-export commonly used types
pub use analysis::{BinningParams, ChartOptions, ShotChart, build_shot_chart, create_bins};
pub use domain::{BinKey, ShotRecord, ZoneKey};
pub use error::BinningError;
pub use models::{AugmentedShotRecord, LeagueAverageEntry, LeagueAverageTable, LeagueComparison};

use crate::analysis::{AnnotationStyle, chart_every_player};
use crate::config::{BINNING, PERSISTENCE, league_average_path, season_shots_path};
use crate::data::{OutputFormat, ShotChartReport, load_league_average, load_shots};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Season or player shot log (CSV). Defaults to <data-dir>/shots/<season>.csv
    #[arg(long)]
    pub shots: Option<PathBuf>,

    /// League average table (CSV). Defaults to <data-dir>/league_avg/<season>.csv
    #[arg(long)]
    pub league_average: Option<PathBuf>,

    /// Bin without comparing against the league average
    #[arg(long, default_value_t = false)]
    pub no_league_average: bool,

    /// Season name, e.g. 2019-20
    #[arg(long)]
    pub season: Option<String>,

    /// Only chart shots of this player
    #[arg(long)]
    pub player_id: Option<u64>,

    /// Chart every player in the shot log, one output file per player in --output
    #[arg(long, default_value_t = false, conflicts_with = "player_id")]
    pub all_players: bool,

    /// Root directory of the season data files
    #[arg(long, default_value = PERSISTENCE.data_dir)]
    pub data_dir: PathBuf,

    /// Number of bins across the court (rows follow to keep bins square)
    #[arg(long, default_value_t = BINNING.grid.bin_number_x)]
    pub bins_x: f64,

    /// Leave out markers of bins holding a single shot
    #[arg(long, default_value_t = false)]
    pub drop_single_shots: bool,

    /// Zone annotation text: percentage or attempts
    #[arg(long, default_value_t = AnnotationStyle::Percentage)]
    pub annotation: AnnotationStyle,

    /// Output format: csv or json
    #[arg(long, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Output file (directory with --all-players). Stdout when omitted.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn shots_path(&self) -> Result<PathBuf> {
        match (&self.shots, &self.season) {
            (Some(path), _) => Ok(path.clone()),
            (None, Some(season)) => Ok(season_shots_path(&self.data_dir, season)),
            (None, None) => bail!("Either --shots or --season is required"),
        }
    }

    pub fn league_average_path(&self) -> Option<PathBuf> {
        if self.no_league_average {
            return None;
        }
        self.league_average.clone().or_else(|| {
            self.season
                .as_ref()
                .map(|season| league_average_path(&self.data_dir, season))
        })
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            params: BinningParams::with_bin_number_x(self.bins_x),
            drop_single_shots: self.drop_single_shots,
            annotation_style: self.annotation,
        }
    }
}

/// Entry point for the binary: load, bin, write.
pub fn run_cli(cli: &Cli) -> Result<()> {
    let shots_path = cli.shots_path()?;
    let league_average = match cli.league_average_path() {
        Some(path) => Some(load_league_average(&path)?),
        None => {
            log::warn!("No league average table, comparison columns will be empty");
            None
        }
    };
    let options = cli.chart_options();

    if cli.all_players {
        let Some(output_dir) = &cli.output else {
            bail!("--all-players needs --output <directory>");
        };
        let shots = load_shots(&shots_path, None)?;
        let charts = chart_every_player(&shots, league_average.as_ref(), &options);

        let mut failures = 0usize;
        for (player_id, chart) in charts {
            match chart {
                Ok(chart) => {
                    let path = output_dir.join(format!("{}.{}", player_id, cli.format));
                    write_chart(chart, cli, Some(player_id), Some(path.as_path()))?;
                }
                Err(e) => {
                    failures += 1;
                    log::error!("⚠️  Skipping player {}: {:#}", player_id, e);
                }
            }
        }
        if failures > 0 {
            log::warn!("{} players could not be charted", failures);
        }
        return Ok(());
    }

    let shots = load_shots(&shots_path, cli.player_id)?;
    let chart = build_shot_chart(&shots, league_average.as_ref(), &options)
        .with_context(|| format!("Failed to chart shots from {}", shots_path.display()))?;
    write_chart(chart, cli, cli.player_id, cli.output.as_deref())
}

fn write_chart(
    chart: ShotChart,
    cli: &Cli,
    player_id: Option<u64>,
    output: Option<&Path>,
) -> Result<()> {
    match (cli.format, output) {
        (OutputFormat::Csv, Some(path)) => data::save_augmented_csv(path, &chart.records),
        (OutputFormat::Csv, None) => data::write_augmented_csv(std::io::stdout().lock(), &chart.records),
        (OutputFormat::Json, Some(path)) => {
            ShotChartReport::new(cli.season.clone(), player_id, chart).save_to_path(path)
        }
        (OutputFormat::Json, None) => {
            let mut writer = BufWriter::new(std::io::stdout().lock());
            ShotChartReport::new(cli.season.clone(), player_id, chart).write_to(&mut writer)?;
            writeln!(writer).context("Failed to write to stdout")
        }
    }?;

    if let Some(path) = output {
        log::info!("✅ Shot chart written to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    const SEASON_CSV: &str = "\
PLAYER_ID,TEAM_ID,SHOT_ZONE_BASIC,SHOT_ZONE_AREA,SHOT_ZONE_RANGE,LOC_X,LOC_Y,SHOT_ATTEMPTED_FLAG,SHOT_MADE_FLAG
201939,1610612744,Left Corner 3,Left Side(L),24+ ft.,235,50,1,1
201939,1610612744,Left Corner 3,Left Side(L),24+ ft.,235,50,1,0
201939,1610612744,Restricted Area,Center(C),Less Than 8 ft.,0,0,1,1
2544,1610612747,Restricted Area,Center(C),Less Than 8 ft.,0,0,1,1
";

    const LEAGUE_CSV: &str = "\
SHOT_ZONE_BASIC,SHOT_ZONE_AREA,SHOT_ZONE_RANGE,FG_PCT
Left Corner 3,Left Side(L),24+ ft.,0.38
Restricted Area,Center(C),Less Than 8 ft.,0.62
";

    fn season_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("shots")).unwrap();
        std::fs::create_dir_all(dir.path().join("league_avg")).unwrap();
        let mut shots = File::create(dir.path().join("shots/2019-20.csv")).unwrap();
        shots.write_all(SEASON_CSV.as_bytes()).unwrap();
        let mut league = File::create(dir.path().join("league_avg/2019-20.csv")).unwrap();
        league.write_all(LEAGUE_CSV.as_bytes()).unwrap();
        dir
    }

    #[test]
    fn test_paths_follow_season_layout() {
        let cli = Cli::parse_from(["shotchart", "--season", "2019-20", "--data-dir", "seasons"]);
        assert_eq!(cli.shots_path().unwrap(), PathBuf::from("seasons/shots/2019-20.csv"));
        assert_eq!(
            cli.league_average_path(),
            Some(PathBuf::from("seasons/league_avg/2019-20.csv"))
        );

        let bare = Cli::parse_from(["shotchart", "--shots", "a.csv", "--no-league-average"]);
        assert_eq!(bare.league_average_path(), None);

        let missing = Cli::parse_from(["shotchart"]);
        assert!(missing.shots_path().is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["shotchart", "--shots", "a.csv"]);
        assert_eq!(cli.format, OutputFormat::Csv);
        assert_eq!(cli.annotation, AnnotationStyle::Percentage);
        assert_eq!(cli.chart_options().params, BinningParams::default());
        assert_eq!(cli.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_run_single_player_to_csv() {
        let dir = season_dir();
        let output = dir.path().join("out/curry.csv");
        let cli = Cli::parse_from([
            "shotchart",
            "--season",
            "2019-20",
            "--player-id",
            "201939",
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        run_cli(&cli).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 4); // header + 3 shots
    }

    #[test]
    fn test_run_all_players_to_json() {
        let dir = season_dir();
        let output = dir.path().join("charts");
        let cli = Cli::parse_from([
            "shotchart",
            "--season",
            "2019-20",
            "--all-players",
            "--format",
            "json",
            "--data-dir",
            dir.path().to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        run_cli(&cli).unwrap();

        let report = ShotChartReport::load_from_path(&output.join("2544.json")).unwrap();
        assert_eq!(report.player_id, Some(2544));
        assert_eq!(report.chart.records.len(), 1);
        assert!(output.join("201939.json").exists());
    }

    #[test]
    fn test_all_players_needs_output_dir() {
        let dir = season_dir();
        let cli = Cli::parse_from([
            "shotchart",
            "--season",
            "2019-20",
            "--all-players",
            "--data-dir",
            dir.path().to_str().unwrap(),
        ]);
        assert!(run_cli(&cli).is_err());
    }
}
