// Data loading and writing
pub mod league_csv;
pub mod report;
pub mod shots_csv;

// Re-export commonly used types
pub use league_csv::{
    LeagueAverageRow, league_rows_from_shots, load_league_average, read_league_average,
    write_league_average,
};
pub use report::{
    AugmentedRow, OutputFormat, ShotChartReport, save_augmented_csv, write_augmented_csv,
};
pub use shots_csv::{load_shots, read_shots};
