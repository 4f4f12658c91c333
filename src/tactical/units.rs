//! Force hierarchy: UnitTemplate → UnitStack → ForceGroup
//!
//! A stack is a live instance of one template inside one group. Its
//! counters only ever go down: attrition comes from outside this crate and
//! nothing here resupplies or resurrects a stack.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TacticalError};
use crate::core::types::{GridPosition, GroupId, StackId};
use crate::tactical::catalog::UnitTemplate;
use crate::tactical::constants::{BLUE_FILL, BLUE_STROKE, RED_FILL, RED_STROKE};
use crate::tactical::terrain::TerrainGrid;

/// Range attributes injected into a stack
///
/// `visibility_range`/`shooting_range` feed the per-stack circles,
/// `view_range`/`shot_range` feed the group overlay. All in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeProfile {
    pub visibility_range: f32,
    pub shooting_range: f32,
    pub view_range: u32,
    pub shot_range: u32,
}

impl Default for RangeProfile {
    fn default() -> Self {
        Self {
            visibility_range: 2.0,
            shooting_range: 1.0,
            view_range: 2,
            shot_range: 1,
        }
    }
}

impl RangeProfile {
    pub fn new(visibility_range: f32, shooting_range: f32, view_range: u32, shot_range: u32) -> Self {
        Self {
            visibility_range,
            shooting_range,
            view_range,
            shot_range,
        }
    }

    /// Real-valued ranges are finite and non-negative
    pub fn is_valid(&self) -> bool {
        let ok = |r: f32| r.is_finite() && r >= 0.0;
        ok(self.visibility_range) && ok(self.shooting_range)
    }

    /// Clamp negative or NaN ranges to zero
    fn sanitized(self) -> Self {
        let clamp = |r: f32| if r.is_finite() && r > 0.0 { r } else { 0.0 };
        Self {
            visibility_range: clamp(self.visibility_range),
            shooting_range: clamp(self.shooting_range),
            ..self
        }
    }
}

/// Live members of one template within a group
#[derive(Debug, Clone, Serialize)]
pub struct UnitStack {
    id: StackId,
    template: Arc<UnitTemplate>,
    initial_unit_count: u32,
    active_unit_count: u32,
    initial_ammunition: u64,
    current_ammunition: u64,
    ranges: RangeProfile,
}

impl UnitStack {
    /// Full-strength stack of `count` members
    pub fn new(template: Arc<UnitTemplate>, count: u32, ranges: RangeProfile) -> Self {
        let ammunition = count as u64 * template.ammo_capacity as u64;
        Self {
            id: StackId::new(),
            template,
            initial_unit_count: count,
            active_unit_count: count,
            initial_ammunition: ammunition,
            current_ammunition: ammunition,
            ranges: ranges.sanitized(),
        }
    }

    pub fn id(&self) -> StackId {
        self.id
    }

    pub fn template(&self) -> &Arc<UnitTemplate> {
        &self.template
    }

    /// Template name, the aggregation key
    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn initial_unit_count(&self) -> u32 {
        self.initial_unit_count
    }

    pub fn active_unit_count(&self) -> u32 {
        self.active_unit_count
    }

    pub fn initial_ammunition(&self) -> u64 {
        self.initial_ammunition
    }

    pub fn current_ammunition(&self) -> u64 {
        self.current_ammunition
    }

    pub fn ranges(&self) -> &RangeProfile {
        &self.ranges
    }

    pub fn visibility_range(&self) -> f32 {
        self.ranges.visibility_range
    }

    pub fn shooting_range(&self) -> f32 {
        self.ranges.shooting_range
    }

    pub fn view_range(&self) -> u32 {
        self.ranges.view_range
    }

    pub fn shot_range(&self) -> u32 {
        self.ranges.shot_range
    }

    /// No active members left
    pub fn is_destroyed(&self) -> bool {
        self.active_unit_count == 0
    }

    /// Remove members and spend ammunition, saturating at zero
    pub fn apply_losses(&mut self, units_lost: u32, ammo_spent: u64) {
        self.active_unit_count = self.active_unit_count.saturating_sub(units_lost);
        self.current_ammunition = self.current_ammunition.saturating_sub(ammo_spent);
    }

    /// Set absolute strength. Counters may only decrease.
    pub fn set_strength(&mut self, active_units: u32, ammunition: u64) -> Result<()> {
        if active_units > self.active_unit_count {
            return Err(TacticalError::InvalidAttrition(format!(
                "{}: active units cannot rise from {} to {}",
                self.name(),
                self.active_unit_count,
                active_units
            )));
        }
        if ammunition > self.current_ammunition {
            return Err(TacticalError::InvalidAttrition(format!(
                "{}: ammunition cannot rise from {} to {}",
                self.name(),
                self.current_ammunition,
                ammunition
            )));
        }

        self.active_unit_count = active_units;
        self.current_ammunition = ammunition;
        Ok(())
    }
}

/// Side a group fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ForceType {
    Red,
    Blue,
}

/// Marker colors for a side (RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePalette {
    pub fill: [u8; 3],
    pub stroke: [u8; 3],
}

impl ForceType {
    pub fn opponent(&self) -> ForceType {
        match self {
            ForceType::Red => ForceType::Blue,
            ForceType::Blue => ForceType::Red,
        }
    }

    pub fn palette(&self) -> SidePalette {
        match self {
            ForceType::Red => SidePalette {
                fill: RED_FILL,
                stroke: RED_STROKE,
            },
            ForceType::Blue => SidePalette {
                fill: BLUE_FILL,
                stroke: BLUE_STROKE,
            },
        }
    }
}

impl std::fmt::Display for ForceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForceType::Red => write!(f, "RED"),
            ForceType::Blue => write!(f, "BLUE"),
        }
    }
}

/// Named, positioned collection of stacks on one side
///
/// Stacks are moved in, so no stack can sit in two groups.
#[derive(Debug, Clone, Serialize)]
pub struct ForceGroup {
    id: GroupId,
    name: String,
    force_type: ForceType,
    position: GridPosition,
    units: Vec<UnitStack>,
}

impl ForceGroup {
    /// Place a group on the grid. An empty `units` list is allowed.
    pub fn new(
        name: impl Into<String>,
        force_type: ForceType,
        position: GridPosition,
        units: Vec<UnitStack>,
        grid: &TerrainGrid,
    ) -> Result<Self> {
        grid.ensure_contains(position)?;
        Ok(Self {
            id: GroupId::new(),
            name: name.into(),
            force_type,
            position,
            units,
        })
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn force_type(&self) -> ForceType {
        self.force_type
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn stacks(&self) -> &[UnitStack] {
        &self.units
    }

    pub fn stack(&self, id: StackId) -> Option<&UnitStack> {
        self.units.iter().find(|s| s.id == id)
    }

    /// Mutable access for the attrition process
    pub fn stack_mut(&mut self, id: StackId) -> Option<&mut UnitStack> {
        self.units.iter_mut().find(|s| s.id == id)
    }

    pub fn stacks_mut(&mut self) -> impl Iterator<Item = &mut UnitStack> {
        self.units.iter_mut()
    }

    pub fn add_stack(&mut self, stack: UnitStack) {
        self.units.push(stack);
    }

    /// Move the group anchor, with the same bounds check as construction
    pub fn relocate(&mut self, position: GridPosition, grid: &TerrainGrid) -> Result<()> {
        grid.ensure_contains(position)?;
        self.position = position;
        Ok(())
    }

    pub fn total_active_units(&self) -> u64 {
        self.units.iter().map(|s| s.active_unit_count as u64).sum()
    }

    pub fn total_initial_units(&self) -> u64 {
        self.units.iter().map(|s| s.initial_unit_count as u64).sum()
    }

    /// Active over initial members, 0.0 for a group that never had any
    pub fn strength_ratio(&self) -> f32 {
        let initial = self.total_initial_units();
        if initial == 0 {
            return 0.0;
        }
        self.total_active_units() as f32 / initial as f32
    }

    /// Every stack destroyed (or none left at all)
    pub fn is_annihilated(&self) -> bool {
        self.units.iter().all(|s| s.is_destroyed())
    }
}
