//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board rules, the move transition and the tile
//! animation model. It has **no dependencies** on terminals, windows or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed (or scripted [`SpawnRng`]) produces identical games
//! - **Testable**: Every rule is reachable without a renderer
//! - **Portable**: The layout is data, so any renderer can drive it
//!
//! # Module Structure
//!
//! - [`anim`]: Slide/pop segments, easing and the per-tile timeline
//! - [`tile`]: A numbered tile and its animation state
//! - [`grid`]: 4x4 arrangement with compaction and merging
//! - [`board`]: Move queue, scoring, spawning and win/lose derivation
//! - [`layout`]: Cell → render position mapping
//! - [`rng`]: Injectable randomness with a seedable default
//! - [`config`]: Tunable timings, spawn ratio and win value
//! - [`snapshot`]: Renderer-facing copy of a frame
//!
//! # Game Rules
//!
//! - A move packs tiles toward one edge, merges equal neighbours once, and
//!   packs again
//! - Each merge scores the new tile's number (2^value)
//! - A move that changes nothing is ignored; any other move spawns a 2 or a 4
//! - The game is won at 2048 and lost when the board is full and stuck
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Board;
//! use tui_2048_types::{Direction, GameState};
//!
//! // Create a game with a fixed seed
//! let mut board = Board::with_seed(12345);
//! assert_eq!(board.grid().tile_count(), 2);
//!
//! // Queue input and advance one 16ms frame
//! board.queue_move(Direction::Left);
//! board.update(0.016);
//!
//! assert_eq!(board.pending_moves(), 0);
//! assert_eq!(board.state(), GameState::Playing);
//! ```
//!
//! # Timing
//!
//! Call [`Board::update`](board::Board::update) once per frame with the elapsed
//! time in seconds. It resolves at most one queued move per call.

pub mod anim;
pub mod board;
pub mod config;
pub mod grid;
pub mod layout;
pub mod rng;
pub mod snapshot;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use grid::{line_coords, Grid, Motion, Resolution};
pub use layout::GridLayout;
pub use rng::{SimpleRng, SpawnRng};
pub use snapshot::{GameSnapshot, TileView};
pub use tile::Tile;
