//! Tactical metrics - per-frame view data for one force group
//!
//! Everything here is a pure function of a borrowed group and a cell size.
//! Callers that share a group with an attrition process should clone it or
//! hold a read lock for the duration of the call.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::Serialize;

use crate::core::error::Result;
use crate::core::types::{GroupId, StackId};
use crate::tactical::config::{config, TacticalConfig};
use crate::tactical::constants::OVERLAY_UNITS_PER_CELL;
use crate::tactical::terrain::{CellSize, TerrainGrid};
use crate::tactical::units::{ForceGroup, ForceType, SidePalette, UnitStack};

/// Strength and ammunition totals for one unit kind in a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSummary {
    pub name: String,
    pub active_units: u64,
    pub initial_units: u64,
    pub total_current_ammo: u64,
    pub total_initial_ammo: u64,
}

impl TypeSummary {
    fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            active_units: 0,
            initial_units: 0,
            total_current_ammo: 0,
            total_initial_ammo: 0,
        }
    }

    fn add(&mut self, stack: &UnitStack) {
        self.active_units += stack.active_unit_count() as u64;
        self.initial_units += stack.initial_unit_count() as u64;
        self.total_current_ammo += stack.current_ammunition();
        self.total_initial_ammo += stack.initial_ammunition();
    }
}

impl std::fmt::Display for TypeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}/{}] Ammo: [{}/{}]",
            self.name,
            self.active_units,
            self.initial_units,
            self.total_current_ammo,
            self.total_initial_ammo
        )
    }
}

/// Visibility and shooting circles for one stack, in pixels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackGeometry {
    pub stack_id: StackId,
    pub name: String,
    pub center: Vec2,
    pub visibility_radius: f32,
    pub shooting_radius: f32,
}

/// Group marker rectangle, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupMarker {
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
}

impl GroupMarker {
    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Group-wide maximum ranges at the fixed overlay scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupOverlay {
    pub center: Vec2,
    pub max_shot_range: u32,
    pub max_view_range: u32,
    pub shot_radius: f32,
    pub view_radius: f32,
}

impl GroupOverlay {
    pub fn shot_visible(&self) -> bool {
        self.max_shot_range > 0
    }

    pub fn view_visible(&self) -> bool {
        self.max_view_range > 0
    }
}

/// Everything a renderer needs to draw one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TacticalView {
    pub group_id: GroupId,
    pub name: String,
    pub force_type: ForceType,
    pub palette: SidePalette,
    pub marker: GroupMarker,
    pub stacks: Vec<StackGeometry>,
    pub summaries: Vec<TypeSummary>,
    pub overlay: GroupOverlay,
}

/// Aggregate stacks by template name, sorted by name
pub fn summarize_types(stacks: &[UnitStack]) -> Vec<TypeSummary> {
    let mut by_name: BTreeMap<&str, TypeSummary> = BTreeMap::new();
    for stack in stacks {
        by_name
            .entry(stack.name())
            .or_insert_with(|| TypeSummary::empty(stack.name()))
            .add(stack);
    }
    by_name.into_values().collect()
}

/// Per-stack circles. Both radii scale by cell width.
pub fn stack_geometry(stack: &UnitStack, center: Vec2, cell: CellSize) -> StackGeometry {
    StackGeometry {
        stack_id: stack.id(),
        name: stack.name().to_string(),
        center,
        visibility_radius: stack.visibility_range() * cell.width,
        shooting_radius: stack.shooting_range() * cell.width,
    }
}

/// Largest shot and view range in the group; 0 for an empty group
pub fn group_overlay(group: &ForceGroup) -> GroupOverlay {
    let stacks = group.stacks();
    let max_shot_range = stacks.iter().map(UnitStack::shot_range).max().unwrap_or(0);
    let max_view_range = stacks.iter().map(UnitStack::view_range).max().unwrap_or(0);
    let position = group.position();

    GroupOverlay {
        center: position.to_pixels(OVERLAY_UNITS_PER_CELL, OVERLAY_UNITS_PER_CELL),
        max_shot_range,
        max_view_range,
        shot_radius: max_shot_range as f32 * OVERLAY_UNITS_PER_CELL,
        view_radius: max_view_range as f32 * OVERLAY_UNITS_PER_CELL,
    }
}

/// Compute the view for one group using the global config
pub fn compute_view(group: &ForceGroup, cell: CellSize) -> Result<TacticalView> {
    compute_view_with(group, cell, config())
}

/// Compute the view for one group
pub fn compute_view_with(
    group: &ForceGroup,
    cell: CellSize,
    config: &TacticalConfig,
) -> Result<TacticalView> {
    cell.validate()?;

    let marker = GroupMarker {
        origin: group.position().to_pixels(cell.width, cell.height),
        width: (cell.width * config.marker_scale).trunc(),
        height: (cell.height * config.marker_scale).trunc(),
    };
    let center = marker.center();

    let stacks = group
        .stacks()
        .iter()
        .map(|stack| stack_geometry(stack, center, cell))
        .collect();
    let summaries = summarize_types(group.stacks());
    let overlay = group_overlay(group);

    tracing::debug!(
        group = group.name(),
        stacks = group.stacks().len(),
        kinds = summaries.len(),
        "Computed tactical view"
    );

    Ok(TacticalView {
        group_id: group.id(),
        name: group.name().to_string(),
        force_type: group.force_type(),
        palette: group.force_type().palette(),
        marker,
        stacks,
        summaries,
        overlay,
    })
}

/// Views for every group using the global config
pub fn compute_scene(
    groups: &[ForceGroup],
    grid: &TerrainGrid,
    canvas_width: f32,
    canvas_height: f32,
) -> Result<Vec<TacticalView>> {
    compute_scene_with(groups, grid, canvas_width, canvas_height, config())
}

/// Views for every group, with the cell size derived from the grid and canvas
pub fn compute_scene_with(
    groups: &[ForceGroup],
    grid: &TerrainGrid,
    canvas_width: f32,
    canvas_height: f32,
    config: &TacticalConfig,
) -> Result<Vec<TacticalView>> {
    let cell = grid.cell_size(canvas_width, canvas_height)?;
    groups
        .iter()
        .map(|g| compute_view_with(g, cell, config))
        .collect()
}
