//! Loading [`GameConfig`] from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::GameConfig;

/// Parse a configuration document. Missing fields keep their defaults.
pub fn parse_config(text: &str) -> Result<GameConfig> {
    let config: GameConfig = serde_json::from_str(text).context("invalid game config")?;
    Ok(config.sanitized())
}

/// Read and parse the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("loading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(parse_config("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let config = parse_config(r#"{ "move_speed": 0.25, "win_value": 5 }"#).unwrap();
        assert_eq!(config.move_speed, 0.25);
        assert_eq!(config.win_value, 5);
        assert_eq!(config.pop_duration, GameConfig::default().pop_duration);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(parse_config(r#"{ "speed": 1.0 }"#).is_err());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse_config(r#"{ "low_tile_probability": 3.0, "win_value": 40 }"#).unwrap();
        assert_eq!(config.low_tile_probability, 1.0);
        assert_eq!(config.win_value, 17);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/tui-2048.json")).unwrap_err();
        assert!(format!("{err:#}").contains("tui-2048.json"));
    }
}
