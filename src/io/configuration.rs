//! Detection constants and runtime configuration defaults

// Input handling
/// File extensions accepted as sprite sheets (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
/// Largest value of an 8-bit alpha channel, used to normalize masks to `[0, 1]`
pub const ALPHA_SCALE: f64 = 255.0;

// Tile size estimation
/// Minimum projection length for at least one non-zero frequency bin
pub const MIN_PROJECTION_LENGTH: usize = 2;

// Normalized masks make an absolute tolerance meaningful
/// Largest projection spread still treated as constant
pub const FLATNESS_TOLERANCE: f64 = 1e-9;

/// Largest accepted ratio between the longer and shorter side of a detected tile
pub const MAX_TILE_ASPECT_RATIO: f64 = 16.0;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

// Output settings
/// Extension used for every exported tile
pub const OUTPUT_EXTENSION: &str = "png";
