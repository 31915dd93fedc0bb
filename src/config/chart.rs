//! Shot chart marker and annotation configuration

pub struct ChartConfig {
    // Colour stops of the below-average -> above-average palette
    pub comparison_palette_stops: &'static [&'static str],
    // Number of discrete palette entries (one per integer percentage point in [-10, 10])
    pub comparison_palette_len: usize,
    // Marker area drawn per unit of size weight
    pub marker_area_multiplier: f64,
    /// A zone annotation needs at least this many distinct bins of its own zone
    pub min_zone_markers: usize,
    /// A zone annotation needs at least this many attempts
    pub min_zone_attempts: u32,
    pub headshot_url_base: &'static str,
    pub headshot_size: &'static str,
}

pub const CHART: ChartConfig = ChartConfig {
    // From below average (royal blue) to above average (dark red)
    comparison_palette_stops: &[
        "#4159E1", // Royal blue
        "#B0E0E6", // Powder blue
        "#FFFF99", // Pale yellow
        "#EF3330", // Red
        "#AB2020", // Dark red
    ],
    comparison_palette_len: 21,
    marker_area_multiplier: 2.0,
    min_zone_markers: 3,
    min_zone_attempts: 5,
    headshot_url_base: "https://ak-static.cms.nba.com/wp-content/uploads/headshots/nba",
    headshot_size: "260x190",
};

/// Where each zone's percentage text sits on the chart, in court coordinates.
/// Zones missing from this table are never annotated.
pub const ZONE_LABEL_ANCHORS: &[(&str, &str, &str, (f64, f64))] = &[
    ("Right Corner 3", "Right Side(R)", "24+ ft.", (-235.0, 50.0)),
    ("Left Corner 3", "Left Side(L)", "24+ ft.", (235.0, 50.0)),
    ("Above the Break 3", "Center(C)", "24+ ft.", (0.0, 260.0)),
    ("Above the Break 3", "Left Side Center(LC)", "24+ ft.", (155.0, 230.0)),
    ("Above the Break 3", "Right Side Center(RC)", "24+ ft.", (-155.0, 230.0)),
    ("Restricted Area", "Center(C)", "Less Than 8 ft.", (0.0, 20.0)),
    ("Mid-Range", "Center(C)", "16-24 ft.", (0.0, 190.0)),
    ("Mid-Range", "Center(C)", "8-16 ft.", (0.0, 150.0)),
    ("Mid-Range", "Left Side Center(LC)", "16-24 ft.", (110.0, 180.0)),
    ("Mid-Range", "Right Side Center(RC)", "16-24 ft.", (-110.0, 180.0)),
    ("In The Paint (Non-RA)", "Center(C)", "8-16 ft.", (0.0, 110.0)),
    ("In The Paint (Non-RA)", "Center(C)", "Less Than 8 ft.", (0.0, 60.0)),
    ("In The Paint (Non-RA)", "Left Side(L)", "8-16 ft.", (70.0, 80.0)),
    ("Mid-Range", "Left Side(L)", "8-16 ft.", (120.0, 50.0)),
    ("In The Paint (Non-RA)", "Right Side(R)", "8-16 ft.", (-70.0, 80.0)),
    ("Mid-Range", "Right Side(R)", "8-16 ft.", (-120.0, 50.0)),
    ("Mid-Range", "Left Side(L)", "16-24 ft.", (190.0, 50.0)),
    ("Mid-Range", "Right Side(R)", "16-24 ft.", (-190.0, 50.0)),
];
