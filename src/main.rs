use std::process::ExitCode;

use clap::Parser;
use shotchart::{Cli, run_cli};

fn main() -> ExitCode {
    // A. Init Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Load, bin, write
    match run_cli(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("⚠️  {:#}", e);
            ExitCode::FAILURE
        }
    }
}
