//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond small conversions, making them
//! usable in any context (board logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The board is always a 4x4 square:
//!
//! - **Columns**: x in 0..=3 (left to right)
//! - **Rows**: y in 0..=3 (top to bottom)
//!
//! # Tile Values
//!
//! Tiles store an exponent, not the number shown on screen. A tile with value `v`
//! displays `2^v`. Spawned tiles start at value 1 (2) or 2 (4). The default win
//! condition is a tile of value [`WIN_VALUE`] (2048).
//!
//! # Timing Constants
//!
//! Animation timing is in seconds, frame timing in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MOVE_SPEED_SECS` | 0.5 | Travel time of a sliding tile |
//! | `POP_SECS` | 0.2 | Duration of the spawn "pop" |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Coord, Direction, GameAction, BOARD_SIZE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert!(dir.is_positive());
//! assert!(!dir.is_horizontal());
//!
//! // Parse game action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Left));
//!
//! // Coordinates
//! let c = Coord::new(3, 1);
//! assert_eq!(c.index(), 7);
//! assert_eq!(BOARD_SIZE, 4);
//! ```

use serde::{Deserialize, Serialize};

/// Board width and height in cells
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Travel time of one slide segment, in seconds
pub const MOVE_SPEED_SECS: f32 = 0.5;

/// Duration of the spawn pop animation, in seconds
pub const POP_SECS: f32 = 0.2;

/// Tile value that wins the game (2^11 = 2048)
pub const WIN_VALUE: u8 = 11;

/// Probability that a spawned tile has value 1 rather than 2
pub const LOW_TILE_PROBABILITY: f32 = 0.5;


/// A cell coordinate on the 4x4 board
///
/// `x` is the column (0 = left), `y` is the row (0 = top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Create a coordinate, panicking when it lies outside the board
    pub fn new(x: u8, y: u8) -> Self {
        assert!(
            (x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE,
            "coordinate ({}, {}) outside the {}x{} board",
            x,
            y,
            BOARD_SIZE,
            BOARD_SIZE
        );
        Self { x, y }
    }

    /// Flat row-major index (y * 4 + x)
    #[inline(always)]
    pub fn index(self) -> usize {
        (self.y as usize) * BOARD_SIZE + (self.x as usize)
    }

    /// Inverse of [`Coord::index`]
    pub fn from_index(idx: usize) -> Self {
        Self::new((idx % BOARD_SIZE) as u8, (idx / BOARD_SIZE) as u8)
    }

    /// Iterate all 16 coordinates in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).map(Coord::from_index)
    }
}

/// Continuous 2D position used for animated rendering
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation; `t` is not clamped
    pub fn lerp(self, other: Vec2, t: f32) -> Vec2 {
        Vec2 {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }
}

/// The four move directions
///
/// Compaction always walks from the edge the tiles move toward:
/// - **Up**: toward row 0
/// - **Left**: toward column 0
/// - **Down**: toward row 3
/// - **Right**: toward column 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All directions, in the order used for stuck-board detection
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// True when compaction walks index 0 → 3 (Up/Left)
    pub fn is_positive(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }

    /// True when rows are the lines being compacted (Left/Right)
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "left" | "l", ...
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "left" | "l" => Some(Direction::Left),
            "down" | "d" => Some(Direction::Down),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        }
    }
}

/// Derived game state
///
/// Never stored on the board; it is recomputed from the cells on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Playing,
    /// A tile reached the win value and the win has not been acknowledged yet
    Win,
    /// Board is full and no direction changes it
    Lose,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Playing => "playing",
            GameState::Win => "win",
            GameState::Lose => "lose",
        }
    }
}

/// Actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Queue a move in the given direction
    Move(Direction),
    /// Clear the board and start over
    NewGame,
    /// Show or hide the how-to-play overlay
    ToggleHelp,
    /// Close the topmost overlay (or quit when there is none)
    Dismiss,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::Move(Direction::Up)));
    /// assert_eq!(GameAction::from_str("newGame"), Some(GameAction::NewGame));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "newgame" => Some(GameAction::NewGame),
            "togglehelp" => Some(GameAction::ToggleHelp),
            "dismiss" => Some(GameAction::Dismiss),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::NewGame => "newGame",
            GameAction::ToggleHelp => "toggleHelp",
            GameAction::Dismiss => "dismiss",
        }
    }
}

/// Displayed number of a tile value (2^value)
///
/// # Examples
///
/// ```
/// use tui_2048_types::magnitude;
///
/// assert_eq!(magnitude(1), 2);
/// assert_eq!(magnitude(11), 2048);
/// ```
pub fn magnitude(value: u8) -> u32 {
    1u32 << value
}
