use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::SpawnRng;
use crate::types::{Coord, GameState, Vec2, CELL_COUNT};

/// Read-only view of one tile for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileView {
    pub coord: Coord,
    pub value: u8,
    pub magnitude: u32,
    pub position: Vec2,
    pub scale: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub tiles: ArrayVec<TileView, CELL_COUNT>,
    pub score: u32,
    pub best: u32,
    pub state: GameState,
    pub pending_moves: usize,
    pub animating: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.score = 0;
        self.best = 0;
        self.state = GameState::Playing;
        self.pending_moves = 0;
        self.animating = false;
    }

    /// Refill this snapshot from a board without reallocating
    pub fn fill_from<R: SpawnRng>(&mut self, board: &Board<R>) {
        self.clear();
        for (coord, tile) in board.grid().tiles() {
            self.tiles.push(TileView {
                coord,
                value: tile.value(),
                magnitude: tile.magnitude(),
                position: tile.position(),
                scale: tile.scale(),
            });
        }
        self.score = board.score();
        self.best = board.best_score();
        self.state = board.state();
        self.pending_moves = board.pending_moves();
        self.animating = board.is_animating();
    }

    /// Tile drawn at `coord`, if any
    pub fn tile_at(&self, coord: Coord) -> Option<&TileView> {
        self.tiles.iter().find(|t| t.coord == coord)
    }

    pub fn playable(&self) -> bool {
        self.state != GameState::Lose
    }
}

impl<R: SpawnRng> Board<R> {
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        snap.fill_from(self);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::rng::SimpleRng;

    #[test]
    fn snapshot_mirrors_board() {
        let board = Board::from_values(
            [[1, 0, 0, 0], [0, 0, 0, 0], [0, 0, 3, 0], [0, 0, 0, 0]],
            GameConfig::default(),
            SimpleRng::new(1),
        );
        let snap = board.snapshot();
        assert_eq!(snap.tiles.len(), 2);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.state, GameState::Playing);
        assert!(!snap.animating);

        let t = snap.tile_at(Coord::new(2, 2)).unwrap();
        assert_eq!(t.value, 3);
        assert_eq!(t.magnitude, 8);
        assert_eq!(t.position, Vec2::new(2.0, 2.0));
        assert_eq!(t.scale, 1.0);
    }

    #[test]
    fn fill_from_replaces_previous_contents() {
        let mut snap = Board::with_seed(11).snapshot();
        let empty = Board::empty(GameConfig::default(), SimpleRng::new(1));
        snap.fill_from(&empty);
        assert!(snap.tiles.is_empty());
    }
}
