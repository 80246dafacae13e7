//! Layout module - maps logical cells to render positions
//!
//! Tile positions are presentational, so the mapping is data rather than
//! code: a renderer describes its grid (origin, cell size, gap) and the board
//! uses it as the target of every slide. The default layout puts cell (x, y)
//! at exactly (x, y), which keeps headless use and tests readable.

use serde::{Deserialize, Serialize};

use crate::types::{Coord, Vec2};

/// Grid geometry in render units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridLayout {
    /// Position of cell (0, 0)
    pub origin: Vec2,
    /// Size of one cell
    pub cell: Vec2,
    /// Space between neighbouring cells
    pub gap: Vec2,
}

impl GridLayout {
    pub const fn new(origin: Vec2, cell: Vec2, gap: Vec2) -> Self {
        Self { origin, cell, gap }
    }

    /// Distance between the origins of neighbouring cells
    pub fn pitch(&self) -> Vec2 {
        Vec2::new(self.cell.x + self.gap.x, self.cell.y + self.gap.y)
    }

    /// Render position of a cell's top-left corner
    pub fn position(&self, coord: Coord) -> Vec2 {
        let pitch = self.pitch();
        Vec2::new(
            self.origin.x + coord.x as f32 * pitch.x,
            self.origin.y + coord.y as f32 * pitch.y,
        )
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            cell: Vec2::new(1.0, 1.0),
            gap: Vec2::ZERO,
        }
    }
}
