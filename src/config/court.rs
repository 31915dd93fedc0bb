//! Court geometry and grid configuration

/// Half-court extent in shot-log units (tenths of a foot)
pub struct CourtDimensions {
    pub width: f64,
    pub height: f64,
    // Offsets that move the hoop-centred origin so every on-court position is non-negative
    pub norm_x: f64,
    pub norm_y: f64,
}

/// Settings for the shot grid
pub struct GridSettings {
    // Number of bins across the court. The vertical count is derived so bins stay square.
    pub bin_number_x: f64,
}

/// Settings for league average comparison
pub struct ComparisonSettings {
    // Percentage-point band the comparison metrics are clamped to (symmetric)
    pub clamp_pct_points: f64,
}

/// The Master Binning Configuration
pub struct BinningConfig {
    pub court: CourtDimensions,
    pub grid: GridSettings,
    pub comparison: ComparisonSettings,
}

pub const BINNING: BinningConfig = BinningConfig {
    court: CourtDimensions {
        width: 500.0,
        height: 300.0,
        norm_x: 250.0,
        norm_y: 48.0,
    },

    grid: GridSettings { bin_number_x: 30.0 },

    comparison: ComparisonSettings {
        clamp_pct_points: 10.0,
    },
};
