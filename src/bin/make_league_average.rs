use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shotchart::config::{PERSISTENCE, league_average_path, season_shots_path};
use shotchart::data::{league_rows_from_shots, load_shots, write_league_average};

/// Build a season's league average table from its full shot log.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Season name, e.g. 2019-20
    #[arg(long)]
    season: String,

    #[arg(long, default_value = PERSISTENCE.data_dir)]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    build_league_average(&args)
}

fn build_league_average(args: &Args) -> Result<()> {
    let source_path = season_shots_path(&args.data_dir, &args.season);
    let shots = load_shots(&source_path, None)
        .with_context(|| format!("Failed to load season shots {:?}", source_path))?;

    let rows = league_rows_from_shots(&shots);
    log::info!(
        "Loaded {} shots from {:?} across {} zones",
        shots.len(),
        source_path,
        rows.len()
    );

    let output_path = league_average_path(&args.data_dir, &args.season);
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }
    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create {:?}", output_path))?;
    write_league_average(BufWriter::new(file), &rows)?;

    log::info!("✅ League average written to {:?}", output_path);
    Ok(())
}
