//! Tactical model - unit stacks, force groups, and the per-frame view data
//! derived from them.
//!
//! Unit kinds are catalog rows, sides are a closed enum, and every metric is
//! a pure function of a borrowed group. Nothing here paints; the renderer
//! consumes `TacticalView`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod metrics;
pub mod scenario;
pub mod terrain;
pub mod units;

// Re-exports for convenient access
pub use catalog::{catalog, set_catalog, UnitCatalog, UnitTemplate};
pub use config::{config, set_config, TacticalConfig};
pub use constants::*;
pub use metrics::{
    compute_scene, compute_scene_with, compute_view, compute_view_with, group_overlay, stack_geometry,
    summarize_types, GroupMarker, GroupOverlay, StackGeometry, TacticalView, TypeSummary,
};
pub use scenario::{Scenario, DEFAULT_SCENARIO};
pub use terrain::{CellSize, TerrainGrid};
pub use units::{ForceGroup, ForceType, RangeProfile, SidePalette, UnitStack};
