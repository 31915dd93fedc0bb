// Binning engine and the chart data built on top of it
pub mod binning;
pub mod chart_markers;
pub mod season_batch;
pub mod shot_chart;
pub mod zone_summary;

// Re-export commonly used types
pub use binning::{BinningParams, create_bins};
pub use chart_markers::{ChartMarker, ComparisonPalette, build_markers, headshot_url};
pub use season_batch::{PlayerShots, chart_every_player, group_by_player};
pub use shot_chart::{ChartOptions, ShotChart, build_shot_chart};
pub use zone_summary::{AnnotationStyle, ZoneSummary, summarize_zones};
