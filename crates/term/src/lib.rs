//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for the 2048 board. It avoids
//! widget toolkits and instead renders into a simple framebuffer that is
//! flushed to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw tiles at their animated positions, not their logical cells
//! - Only send changed cells to the terminal each frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_colors, GameView, Overlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
