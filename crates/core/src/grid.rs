//! Grid module - the 4x4 tile arrangement and the move transition
//!
//! The grid is a flat array of 16 optional tiles, row-major (y * 4 + x).
//! A move is resolved in three passes over each line along the move axis:
//!
//! 1. **Compact**: pack tiles toward the edge, keeping their order
//! 2. **Merge**: one edge-first sweep joining equal neighbours
//! 3. **Compact** again to close the gaps merges opened
//!
//! Resolution works on a copy, so the caller decides whether to commit.

use arrayvec::ArrayVec;

use crate::layout::GridLayout;
use crate::tile::Tile;
use crate::types::{Coord, Direction, BOARD_SIZE, CELL_COUNT};

/// How tiles that change cell should animate while a move is resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub layout: GridLayout,
    /// Seconds per slide segment
    pub duration: f32,
}

/// Outcome of resolving a move against a grid
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub grid: Grid,
    /// Sum of the magnitudes of every tile created by a merge
    pub bonus: u32,
    /// Number of merges performed
    pub merges: u32,
}

/// 16 cells of optional tiles
///
/// Equality compares occupancy and values only (see [`Tile`]'s `PartialEq`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    cells: [Option<Tile>; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from row-major values; 0 means empty
    ///
    /// Tiles are placed at their layout position with no pending animation.
    pub fn from_values(values: [[u8; BOARD_SIZE]; BOARD_SIZE], layout: &GridLayout) -> Self {
        let mut grid = Self::new();
        for coord in Coord::all() {
            let value = values[coord.y as usize][coord.x as usize];
            if value > 0 {
                let mut tile = Tile::new(value);
                tile.place(layout.position(coord));
                tile.update(0.0);
                grid.set(coord, Some(tile));
            }
        }
        grid
    }

    /// Row-major values; 0 means empty
    pub fn values(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for coord in Coord::all() {
            out[coord.y as usize][coord.x as usize] = self.value_at(coord);
        }
        out
    }

    pub fn get(&self, coord: Coord) -> Option<&Tile> {
        self.cells[coord.index()].as_ref()
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        self.cells[coord.index()].as_mut()
    }

    /// Value at `coord`, or 0 when empty
    pub fn value_at(&self, coord: Coord) -> u8 {
        self.get(coord).map_or(0, Tile::value)
    }

    pub fn set(&mut self, coord: Coord, tile: Option<Tile>) {
        self.cells[coord.index()] = tile;
    }

    pub fn take(&mut self, coord: Coord) -> Option<Tile> {
        self.cells[coord.index()].take()
    }

    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.cells[coord.index()].is_none()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> ArrayVec<Coord, CELL_COUNT> {
        Coord::all().filter(|&c| self.is_empty_at(c)).collect()
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Highest tile value on the grid (0 when empty)
    pub fn max_value(&self) -> u8 {
        self.tiles().map(|(_, t)| t.value()).max().unwrap_or(0)
    }

    /// All 16 cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<&Tile>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Coord::from_index(i), cell.as_ref()))
    }

    /// Occupied cells only
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, &Tile)> + '_ {
        self.cells().filter_map(|(c, t)| t.map(|t| (c, t)))
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> + '_ {
        self.cells.iter_mut().flatten()
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Resolve a move on a copy of this grid
    ///
    /// With `motion`, every tile that changes cell queues a slide toward its
    /// new layout position; without it the copy is a pure simulation.
    pub fn resolve(&self, direction: Direction, motion: Option<&Motion>) -> Resolution {
        let mut grid = self.clone();
        grid.compact(direction, motion);
        let (bonus, merges) = grid.merge(direction);
        grid.compact(direction, motion);
        Resolution {
            grid,
            bonus,
            merges,
        }
    }

    /// True when moving in `direction` would change occupancy or values
    pub fn can_move(&self, direction: Direction) -> bool {
        // Any gap in front of a tile, or any equal neighbour pair, changes the line.
        (0..BOARD_SIZE).any(|i| {
            let line = line_coords(direction, i);
            let mut seen_gap = false;
            let mut prev = 0u8;
            for coord in line {
                let value = self.value_at(coord);
                if value == 0 {
                    seen_gap = true;
                    prev = 0;
                    continue;
                }
                if seen_gap || value == prev {
                    return true;
                }
                prev = value;
            }
            false
        })
    }

    /// True when no direction changes the grid
    pub fn is_stuck(&self) -> bool {
        self.is_full() && !Direction::ALL.iter().any(|&d| self.can_move(d))
    }

    /// Pack every line toward the edge `direction` points at
    fn compact(&mut self, direction: Direction, motion: Option<&Motion>) {
        for i in 0..BOARD_SIZE {
            let line = line_coords(direction, i);
            let mut next_free = 0usize;
            for (j, &coord) in line.iter().enumerate() {
                let Some(mut tile) = self.take(coord) else {
                    continue;
                };
                let dest = line[next_free];
                if j != next_free {
                    if let Some(motion) = motion {
                        tile.slide(motion.layout.position(dest), motion.duration);
                    }
                }
                self.set(dest, Some(tile));
                next_free += 1;
            }
        }
    }

    /// Single edge-first sweep joining equal neighbours
    ///
    /// Returns the score bonus and the number of merges. After a merge the
    /// farther cell is empty, so a freshly merged tile cannot merge again.
    fn merge(&mut self, direction: Direction) -> (u32, u32) {
        let mut bonus = 0u32;
        let mut merges = 0u32;
        for i in 0..BOARD_SIZE {
            let line = line_coords(direction, i);
            for pair in line.windows(2) {
                let (near, far) = (pair[0], pair[1]);
                let equal = match (self.get(near), self.get(far)) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                };
                if !equal {
                    continue;
                }
                self.set(far, None);
                if let Some(tile) = self.get_mut(near) {
                    tile.increase_value();
                    bonus = bonus.saturating_add(tile.magnitude());
                    merges += 1;
                }
            }
        }
        (bonus, merges)
    }
}

/// Cells of line `i` for a move in `direction`, ordered from the edge tiles move toward
///
/// Left/Right lines are rows, Up/Down lines are columns.
pub fn line_coords(direction: Direction, i: usize) -> [Coord; BOARD_SIZE] {
    let positive = direction.is_positive();
    let inverse = direction.is_horizontal();
    let mut out = [Coord::default(); BOARD_SIZE];
    for (j, slot) in out.iter_mut().enumerate() {
        let along = if positive { j } else { BOARD_SIZE - 1 - j };
        let (x, y) = if inverse { (along, i) } else { (i, along) };
        *slot = Coord::new(x as u8, y as u8);
    }
    out
}
