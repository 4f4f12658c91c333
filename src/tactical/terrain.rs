//! Terrain grid - the coordinate space groups are placed on
//!
//! Only the dimensions matter here; terrain codes are carried for the
//! renderer and never interpreted.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TacticalError};
use crate::core::types::GridPosition;

/// Pixel size of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: f32,
    pub height: f32,
}

impl CellSize {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let cell = Self { width, height };
        cell.validate()?;
        Ok(cell)
    }

    /// Both dimensions finite and positive
    pub fn validate(&self) -> Result<()> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(TacticalError::InvalidScale {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Immutable rows × cols matrix of terrain codes
///
/// Rows run along x: `codes[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerrainGrid {
    codes: Vec<Vec<i32>>,
}

impl TerrainGrid {
    /// Build from a rectangular, non-empty matrix
    pub fn new(codes: Vec<Vec<i32>>) -> Result<Self> {
        let cols = match codes.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(TacticalError::InvalidGrid("grid has no cells".into())),
        };

        if let Some((i, row)) = codes.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(TacticalError::InvalidGrid(format!(
                "row {} has {} columns, expected {}",
                i,
                row.len(),
                cols
            )));
        }

        Ok(Self { codes })
    }

    /// Uniform grid, mostly for tests and demos. Zero dimensions become 1.
    pub fn filled(rows: usize, cols: usize, code: i32) -> Self {
        Self {
            codes: vec![vec![code; cols.max(1)]; rows.max(1)],
        }
    }

    /// Extent along x (number of rows)
    pub fn width(&self) -> usize {
        self.codes.len()
    }

    /// Extent along y (number of columns)
    pub fn height(&self) -> usize {
        self.codes[0].len()
    }

    pub fn codes(&self) -> &[Vec<i32>] {
        &self.codes
    }

    pub fn code_at(&self, position: GridPosition) -> Option<i32> {
        if !self.contains(position) {
            return None;
        }
        Some(self.codes[position.x as usize][position.y as usize])
    }

    /// Check if position is within grid bounds
    pub fn contains(&self, position: GridPosition) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width()
            && (position.y as usize) < self.height()
    }

    pub fn ensure_contains(&self, position: GridPosition) -> Result<()> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(TacticalError::InvalidPosition {
                x: position.x,
                y: position.y,
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Cell size when the grid is stretched over a canvas
    pub fn cell_size(&self, canvas_width: f32, canvas_height: f32) -> Result<CellSize> {
        CellSize::new(
            canvas_width / self.width() as f32,
            canvas_height / self.height() as f32,
        )
    }
}
