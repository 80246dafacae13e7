//! Board module - the game: tiles, move queue, score and spawning
//!
//! This module ties together the grid transition, the injectable RNG and the
//! per-tile animations. It is driven by a single [`Board::update`] call per frame:
//!
//! 1. At most one queued move is resolved
//! 2. An effective move commits, scores, and spawns one tile
//! 3. Every tile's animation advances (faster while moves are still queued)

use std::collections::VecDeque;

use log::{debug, info};

use crate::config::GameConfig;
use crate::grid::{Grid, Motion};
use crate::rng::{SimpleRng, SpawnRng};
use crate::tile::Tile;
use crate::types::{Coord, Direction, GameState, BOARD_SIZE};

/// Complete game state
#[derive(Debug, Clone)]
pub struct Board<R: SpawnRng = SimpleRng> {
    grid: Grid,
    move_queue: VecDeque<Direction>,
    score: u32,
    /// Highest score seen by this board; survives `clear()`
    best: u32,
    config: GameConfig,
    rng: R,
    /// Set by `continue_playing()` so a win is reported only once per game
    win_acknowledged: bool,
    last_state: GameState,
}

impl Board<SimpleRng> {
    /// Create a new game with the default configuration and the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameConfig::default(), SimpleRng::new(seed))
    }
}

impl<R: SpawnRng> Board<R> {
    /// Create a new game and spawn the two starting tiles
    pub fn new(config: GameConfig, rng: R) -> Self {
        let mut board = Self::empty(config, rng);
        board.clear();
        board
    }

    /// Create a board with no tiles at all
    ///
    /// Useful for setting up exact positions with [`Board::spawn_at`].
    pub fn empty(config: GameConfig, rng: R) -> Self {
        Self {
            grid: Grid::new(),
            move_queue: VecDeque::new(),
            score: 0,
            best: 0,
            config: config.sanitized(),
            rng,
            win_acknowledged: false,
            last_state: GameState::Playing,
        }
    }

    /// Create a board from row-major tile values (0 = empty)
    pub fn from_values(values: [[u8; BOARD_SIZE]; BOARD_SIZE], config: GameConfig, rng: R) -> Self {
        let mut board = Self::empty(config, rng);
        board.grid = Grid::from_values(values, &board.config.layout);
        board.last_state = board.state();
        board
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best
    }

    pub fn pending_moves(&self) -> usize {
        self.move_queue.len()
    }

    /// All 16 cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<&Tile>)> + '_ {
        self.grid.cells()
    }

    /// True while any tile still has animation segments queued
    pub fn is_animating(&self) -> bool {
        self.grid.tiles().any(|(_, t)| t.is_animating())
    }

    /// Derived game state
    ///
    /// A stuck board is lost even if it also holds the win tile.
    pub fn state(&self) -> GameState {
        if self.grid.is_stuck() {
            GameState::Lose
        } else if !self.win_acknowledged && self.grid.max_value() >= self.config.win_value {
            GameState::Win
        } else {
            GameState::Playing
        }
    }

    /// Acknowledge a win so play can continue without reporting it again
    pub fn continue_playing(&mut self) {
        if self.grid.max_value() >= self.config.win_value {
            self.win_acknowledged = true;
        }
    }

    /// Queue a move; it is resolved by a later [`Board::update`]
    pub fn queue_move(&mut self, direction: Direction) {
        self.move_queue.push_back(direction);
    }

    /// Start over (same as [`Board::clear`])
    pub fn request_new_game(&mut self) {
        self.clear();
    }

    /// Empty the board, reset score and queue, and spawn two tiles
    pub fn clear(&mut self) {
        self.grid.clear();
        self.move_queue.clear();
        self.score = 0;
        self.win_acknowledged = false;
        self.last_state = GameState::Playing;

        self.spawn();
        self.spawn();
        info!("new game");
    }

    /// Resolve one move right now, bypassing the queue
    ///
    /// Returns whether the move was effective. An ineffective move leaves the
    /// board, the score and every tile's animation untouched.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let motion = Motion {
            layout: self.config.layout,
            duration: self.config.move_speed,
        };
        let resolution = self.grid.resolve(direction, Some(&motion));

        if resolution.grid == self.grid {
            debug!("move {} ineffective", direction.as_str());
            return false;
        }

        self.grid = resolution.grid;
        self.score = self.score.saturating_add(resolution.bonus);
        self.best = self.best.max(self.score);
        debug!(
            "move {}: {} merge(s), +{} (score {})",
            direction.as_str(),
            resolution.merges,
            resolution.bonus,
            self.score
        );

        self.spawn();
        true
    }

    /// Spawn a tile on a random empty cell
    ///
    /// The value is 1 with probability `low_tile_probability`, otherwise 2.
    ///
    /// # Panics
    ///
    /// Panics when the board is full; callers only spawn after an effective
    /// move, which always leaves at least one empty cell.
    pub fn spawn(&mut self) -> Coord {
        let empty = self.grid.empty_cells();
        assert!(!empty.is_empty(), "spawn called on a full board");

        let coord = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = if self.rng.next_unit() < self.config.low_tile_probability {
            1
        } else {
            2
        };
        self.spawn_at(coord, value);
        coord
    }

    /// Spawn a tile with a chosen value on a chosen empty cell
    ///
    /// # Panics
    ///
    /// Panics when `coord` is occupied or `value` is 0.
    pub fn spawn_at(&mut self, coord: Coord, value: u8) {
        assert!(
            self.grid.is_empty_at(coord),
            "spawn target ({}, {}) is occupied",
            coord.x,
            coord.y
        );

        let mut tile = Tile::new(value);
        tile.place(self.config.layout.position(coord));
        tile.pop(self.config.pop_duration);
        // Lands on its cell before the first frame draws it.
        tile.update(0.0);
        self.grid.set(coord, Some(tile));
        debug!("spawn {} at ({}, {})", 1u32 << value, coord.x, coord.y);
    }

    /// Advance the game by `dt` seconds
    ///
    /// Resolves at most one queued move, then advances animations. Animation
    /// time is scaled by `1 + pending_moves` so a backlog of input plays out
    /// faster instead of lagging further behind.
    pub fn update(&mut self, dt: f32) {
        if let Some(direction) = self.move_queue.pop_front() {
            self.apply_move(direction);
            self.log_state_change();
        }

        let scaled = dt * (1.0 + self.move_queue.len() as f32);
        for tile in self.grid.tiles_mut() {
            tile.update(scaled);
        }
    }

    fn log_state_change(&mut self) {
        let state = self.state();
        if state == self.last_state {
            return;
        }
        match state {
            GameState::Win => info!("reached {} (score {})", 1u32 << self.config.win_value, self.score),
            GameState::Lose => info!("no moves left (score {})", self.score),
            GameState::Playing => {}
        }
        self.last_state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of raw values, then repeats the last one.
    struct Scripted {
        values: Vec<u32>,
        pos: usize,
    }

    impl SpawnRng for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.pos.min(self.values.len() - 1)];
            self.pos += 1;
            v
        }

        fn next_range(&mut self, max: u32) -> u32 {
            self.next_u32() % max
        }
    }

    #[test]
    fn new_board_has_two_tiles() {
        let board = Board::with_seed(42);
        assert_eq!(board.grid().tile_count(), 2);
        assert_eq!(board.score(), 0);
        assert_eq!(board.state(), GameState::Playing);
        for (_, tile) in board.grid().tiles() {
            assert!(tile.value() == 1 || tile.value() == 2);
        }
    }

    #[test]
    fn same_seed_same_game() {
        let mut a = Board::with_seed(7);
        let mut b = Board::with_seed(7);
        for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down].repeat(10) {
            a.apply_move(dir);
            b.apply_move(dir);
        }
        assert_eq!(a.grid().values(), b.grid().values());
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn spawn_uses_injected_rng() {
        // First draw picks the cell index, second draws the value (0 → low tile).
        let rng = Scripted {
            values: vec![5, 0],
            pos: 0,
        };
        let mut board = Board::empty(GameConfig::default(), rng);
        let coord = board.spawn();
        assert_eq!(coord, Coord::new(1, 1));
        assert_eq!(board.grid().value_at(coord), 1);
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn spawn_on_full_board_panics() {
        let mut board = Board::from_values(
            [[1, 2, 3, 4], [2, 3, 4, 1], [3, 4, 1, 2], [4, 1, 2, 3]],
            GameConfig::default(),
            SimpleRng::new(1),
        );
        board.spawn();
    }

    #[test]
    fn update_resolves_one_move_per_tick() {
        let mut board = Board::from_values(
            [[0, 0, 0, 1], [0; 4], [0; 4], [0; 4]],
            GameConfig::default(),
            SimpleRng::new(3),
        );
        board.queue_move(Direction::Left);
        board.queue_move(Direction::Down);
        board.queue_move(Direction::Right);

        board.update(0.0);
        assert_eq!(board.pending_moves(), 2);
        board.update(0.0);
        assert_eq!(board.pending_moves(), 1);
        board.update(0.0);
        assert_eq!(board.pending_moves(), 0);
    }

    #[test]
    fn queued_moves_speed_up_animation() {
        let mut board = Board::from_values(
            [[0, 0, 0, 1], [0; 4], [0; 4], [0; 4]],
            GameConfig::default(),
            SimpleRng::new(3),
        );
        board.queue_move(Direction::Left);
        board.queue_move(Direction::Left);
        board.queue_move(Direction::Left);

        // One move resolved, two still queued: animations run 3x.
        board.update(0.1);
        let tile = board.grid().get(Coord::new(0, 0)).unwrap();
        let expected = 3.0 - 3.0 * (0.3 / 0.5);
        assert!((tile.position().x - expected).abs() < 1e-4, "{:?}", tile.position());
    }

    #[test]
    fn clear_resets_score_and_queue_but_not_best() {
        let mut board = Board::from_values(
            [[1, 1, 0, 0], [0; 4], [0; 4], [0; 4]],
            GameConfig::default(),
            SimpleRng::new(9),
        );
        assert!(board.apply_move(Direction::Left));
        assert_eq!(board.score(), 4);
        board.queue_move(Direction::Up);

        board.clear();
        assert_eq!(board.score(), 0);
        assert_eq!(board.best_score(), 4);
        assert_eq!(board.pending_moves(), 0);
        assert_eq!(board.grid().tile_count(), 2);
    }

    #[test]
    fn win_is_reported_until_acknowledged() {
        let config = GameConfig {
            win_value: 3,
            ..GameConfig::default()
        };
        let mut board = Board::from_values(
            [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]],
            config,
            SimpleRng::new(5),
        );
        assert_eq!(board.state(), GameState::Playing);
        assert!(board.apply_move(Direction::Left));
        assert_eq!(board.state(), GameState::Win);

        board.continue_playing();
        assert_eq!(board.state(), GameState::Playing);

        board.clear();
        assert_eq!(board.state(), GameState::Playing);
    }

    #[test]
    fn continue_playing_before_win_is_ignored() {
        let config = GameConfig {
            win_value: 3,
            ..GameConfig::default()
        };
        let mut board = Board::from_values(
            [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]],
            config,
            SimpleRng::new(5),
        );
        board.continue_playing();
        board.apply_move(Direction::Left);
        assert_eq!(board.state(), GameState::Win);
    }
}
