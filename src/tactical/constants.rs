//! Tactical view constants - fixed scales in one place

/// Pixels per grid cell for the group-level range overlays.
///
/// Independent of the grid-derived cell size used for per-stack circles.
/// Known defect: the two scales disagree whenever the canvas is not 20
/// pixels per cell, so overlays drift from the per-stack circles. Kept as is
/// because unifying them changes rendered output.
pub const OVERLAY_UNITS_PER_CELL: f32 = 20.0;

/// Default fraction of a cell covered by a group marker
pub const DEFAULT_MARKER_SCALE: f32 = 0.8;

// Side palettes (RGB)
pub const RED_FILL: [u8; 3] = [255, 0, 0];
pub const RED_STROKE: [u8; 3] = [139, 0, 0];
pub const BLUE_FILL: [u8; 3] = [0, 0, 255];
pub const BLUE_STROKE: [u8; 3] = [0, 0, 139];
