//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Moves are queued
//! on the board rather than applied, so no repeat handling lives here.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
