//! Debugging feature flags.
//!
//! Toggle individual diagnostics here.

pub struct DebugFlags {
    /// Emit bin/zone totals after the aggregation pass.
    pub print_aggregation_summary: bool,
    /// Emit a warning for every shot whose bin index falls outside the grid.
    pub print_out_of_range_bins: bool,
    /// Emit per-player progress in season batch mode.
    pub print_batch_progress: bool,
    /// Emit details of CSV loading (row counts, player filter hits).
    pub print_csv_loading: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_aggregation_summary: false,
    print_out_of_range_bins: false,
    print_batch_progress: false,
    print_csv_loading: true,
};
