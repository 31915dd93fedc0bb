//! File layout and serialization configuration

use std::path::{Path, PathBuf};

pub struct PersistenceConfig {
    /// Default root of the season data files
    pub data_dir: &'static str,
    /// Sub-directory holding one shot log per season, e.g. `shots/2019-20.csv`
    pub shots_dir: &'static str,
    /// Sub-directory holding one league average table per season
    pub league_avg_dir: &'static str,
    pub csv_extension: &'static str,
    /// Current version of the JSON report format
    pub report_version: f64,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    data_dir: "data",
    shots_dir: "shots",
    league_avg_dir: "league_avg",
    csv_extension: "csv",
    report_version: 1.0,
};

/// Example: `data/shots/2019-20.csv`
pub fn season_shots_path(data_dir: &Path, season: &str) -> PathBuf {
    data_dir
        .join(PERSISTENCE.shots_dir)
        .join(season)
        .with_extension(PERSISTENCE.csv_extension)
}

/// Example: `data/league_avg/2019-20.csv`
pub fn league_average_path(data_dir: &Path, season: &str) -> PathBuf {
    data_dir
        .join(PERSISTENCE.league_avg_dir)
        .join(season)
        .with_extension(PERSISTENCE.csv_extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_paths() {
        let root = Path::new("data");
        assert_eq!(
            season_shots_path(root, "2019-20"),
            PathBuf::from("data/shots/2019-20.csv")
        );
        assert_eq!(
            league_average_path(root, "2019-20"),
            PathBuf::from("data/league_avg/2019-20.csv")
        );
    }
}
