// Derived data structures for shot binning
// Pure business logic, independent of file formats

pub mod augmented;
pub mod bins;
pub mod grid;
pub mod league_average;

// Re-export key types for convenience
pub use augmented::{AugmentedShotRecord, LeagueComparison};
pub use bins::{BinAggregate, ShotAggregation, ZoneAggregate, ZoneTally};
pub use grid::ShotGrid;
pub use league_average::{LeagueAverageEntry, LeagueAverageTable};
