//! Scenario files - a terrain grid and the groups placed on it
//!
//! Used by the report binary and tests to build a scene from TOML instead of
//! wiring groups by hand.

use std::path::Path;

use serde::Deserialize;

use crate::core::error::Result;
use crate::core::types::GridPosition;
use crate::tactical::catalog::UnitCatalog;
use crate::tactical::config::TacticalConfig;
use crate::tactical::terrain::TerrainGrid;
use crate::tactical::units::{ForceGroup, ForceType, UnitStack};

/// Scene used when no scenario file is given
pub const DEFAULT_SCENARIO: &str = r#"
[grid]
rows = 10
cols = 10

[[groups]]
name = "Alpha"
force = "RED"
x = 3
y = 4
stacks = [
    { kind = "Abrams", count = 10, active = 6, ammunition = 2600 },
    { kind = "Krab", count = 2 },
]

[[groups]]
name = "Bravo"
force = "BLUE"
x = 7
y = 5
stacks = [
    { kind = "Soldier", count = 20 },
    { kind = "BWP", count = 4 },
]
"#;

/// Parsed scenario file
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub grid: GridSpec,
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
}

/// Grid either as explicit codes or as uniform dimensions
#[derive(Debug, Clone, Deserialize)]
pub struct GridSpec {
    #[serde(default)]
    pub rows: usize,
    #[serde(default)]
    pub cols: usize,
    #[serde(default)]
    pub fill: i32,
    #[serde(default)]
    pub codes: Option<Vec<Vec<i32>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupSpec {
    pub name: String,
    pub force: ForceType,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub stacks: Vec<StackSpec>,
}

/// One stack; `active`/`ammunition` apply attrition after creation
#[derive(Debug, Clone, Deserialize)]
pub struct StackSpec {
    pub kind: String,
    pub count: u32,
    #[serde(default)]
    pub active: Option<u32>,
    #[serde(default)]
    pub ammunition: Option<u64>,
}

impl GridSpec {
    fn build(&self) -> Result<TerrainGrid> {
        match &self.codes {
            Some(codes) => TerrainGrid::new(codes.clone()),
            None => TerrainGrid::new(vec![vec![self.fill; self.cols]; self.rows]),
        }
    }
}

impl Scenario {
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let scenario = Self::parse_toml(&content)?;
        tracing::info!(
            "Loaded scenario {} ({} groups)",
            path.display(),
            scenario.groups.len()
        );
        Ok(scenario)
    }

    pub fn default_scenario() -> Result<Self> {
        Self::parse_toml(DEFAULT_SCENARIO)
    }

    /// Instantiate the grid and groups
    pub fn build(
        &self,
        catalog: &UnitCatalog,
        config: &TacticalConfig,
    ) -> Result<(TerrainGrid, Vec<ForceGroup>)> {
        let grid = self.grid.build()?;

        let mut groups = Vec::with_capacity(self.groups.len());
        for group_spec in &self.groups {
            let mut stacks = Vec::with_capacity(group_spec.stacks.len());
            for stack_spec in &group_spec.stacks {
                stacks.push(stack_spec.build(catalog, config)?);
            }
            groups.push(ForceGroup::new(
                group_spec.name.clone(),
                group_spec.force,
                GridPosition::new(group_spec.x, group_spec.y),
                stacks,
                &grid,
            )?);
        }

        Ok((grid, groups))
    }
}

impl StackSpec {
    fn build(&self, catalog: &UnitCatalog, config: &TacticalConfig) -> Result<UnitStack> {
        let template = catalog.lookup(&self.kind)?;
        let mut stack = UnitStack::new(template, self.count, config.ranges_for(&self.kind));

        if self.active.is_some() || self.ammunition.is_some() {
            let active = self.active.unwrap_or(stack.active_unit_count());
            let ammunition = self.ammunition.unwrap_or(stack.current_ammunition());
            stack.set_strength(active, ammunition)?;
        }
        Ok(stack)
    }
}
