//! Tunable game parameters.

use serde::{Deserialize, Serialize};

use crate::layout::GridLayout;
use crate::types::{LOW_TILE_PROBABILITY, MOVE_SPEED_SECS, POP_SECS, WIN_VALUE};

/// Board tuning
///
/// Every field has a default, so a configuration file only needs to name the
/// values it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Seconds a tile takes to travel one slide segment
    pub move_speed: f32,
    /// Seconds the spawn pop lasts
    pub pop_duration: f32,
    /// Probability that a spawned tile is a 2 (value 1) rather than a 4
    pub low_tile_probability: f32,
    /// Tile value that wins the game
    pub win_value: u8,
    /// Where tiles are drawn
    pub layout: GridLayout,
}

impl GameConfig {
    /// Builder-style layout override
    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Clamp values into their meaningful ranges
    pub fn sanitized(mut self) -> Self {
        if !self.move_speed.is_finite() || self.move_speed < 0.0 {
            self.move_speed = MOVE_SPEED_SECS;
        }
        if !self.pop_duration.is_finite() || self.pop_duration < 0.0 {
            self.pop_duration = POP_SECS;
        }
        self.low_tile_probability = if self.low_tile_probability.is_finite() {
            self.low_tile_probability.clamp(0.0, 1.0)
        } else {
            LOW_TILE_PROBABILITY
        };
        // Value 17 is the largest tile a 4x4 board can ever hold.
        self.win_value = self.win_value.clamp(2, 17);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED_SECS,
            pop_duration: POP_SECS,
            low_tile_probability: LOW_TILE_PROBABILITY,
            win_value: WIN_VALUE,
            layout: GridLayout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.move_speed, 0.5);
        assert_eq!(cfg.pop_duration, 0.2);
        assert_eq!(cfg.low_tile_probability, 0.5);
        assert_eq!(cfg.win_value, 11);
    }

    #[test]
    fn empty_json_is_default() {
        let cfg: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res: Result<GameConfig, _> = serde_json::from_str(r#"{"board_size": 5}"#);
        assert!(res.is_err());
    }

    #[test]
    fn sanitized_clamps_out_of_range_values() {
        let cfg = GameConfig {
            move_speed: -1.0,
            pop_duration: f32::NAN,
            low_tile_probability: 3.0,
            win_value: 0,
            ..GameConfig::default()
        }
        .sanitized();
        assert_eq!(cfg.move_speed, MOVE_SPEED_SECS);
        assert_eq!(cfg.pop_duration, POP_SECS);
        assert_eq!(cfg.low_tile_probability, 1.0);
        assert_eq!(cfg.win_value, 2);
    }
}
