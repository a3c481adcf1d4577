//! Default values and fixed constants of the preset-geometry model

/// Border used when the document gives none
pub const BORDER_COLOR: &str = "#000000";
pub const BORDER_WIDTH: f64 = 1.0;
pub const BORDER_DASH: &str = "none";

/// Divisor for length guides (`val 25000` = 25%)
pub const LENGTH_SCALE: f64 = 100_000.0;
/// Divisor for angle guides (`val 5400000` = 90 degrees)
pub const ANGLE_SCALE: f64 = 60_000.0;
/// Largest raw angle guide value, just under a full turn
pub const MAX_ANGLE_RAW: f64 = 21_599_999.0;

/// Radius substituted for a zero arc radius
pub const MIN_ARC_RADIUS: f64 = 0.01;

/// Significant digits written for every coordinate
pub const SIG_FIGS: i32 = 6;

/// Inner/outer radius ratio used for every star unless configured otherwise
pub const STAR_RATIO: f64 = 0.5;

/// Per-type star `adj` defaults of the presentation format, out of 50000
pub const STAR_ADJ_DEFAULTS: &[(u32, f64)] = &[
    (4, 12_500.0),
    (5, 19_098.0),
    (6, 28_868.0),
    (7, 34_601.0),
    (8, 37_500.0),
    (10, 42_533.0),
    (12, 37_500.0),
    (16, 37_500.0),
    (24, 37_500.0),
    (32, 37_500.0),
];

/// Star `adj` guides are expressed against this denominator
pub const STAR_ADJ_SCALE: f64 = 50_000.0;

/// Flow-chart symbols defined on a 21600-unit grid
pub const FLOWCHART_GRID: f64 = 21_600.0;
