//! Game configuration loaded from a TOML file.
//!
//! ```toml
//! max_weight = 25
//! start_room = "Computer room"
//! world = "worlds/campus.toml"
//! ```
//!
//! Every key is optional; the built-in campus world and a carry limit of 20
//! are used otherwise.

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use zuul_core::{WorldDefinition, WorldError};

/// Errors raised while loading the configuration or the world it points to.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    World(#[from] WorldError),
}

/// Tunable parameters for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Heaviest total load the player can carry.
    pub max_weight: u32,

    /// Overrides the start room named by the world definition.
    pub start_room: Option<String>,

    /// World definition file; the campus world when unset.
    pub world: Option<PathBuf>,
}

impl GameConfig {
    pub const DEFAULT_MAX_WEIGHT: u32 = 20;

    pub fn new() -> Self {
        Self {
            max_weight: Self::DEFAULT_MAX_WEIGHT,
            start_room: None,
            world: None,
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load the configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The world this configuration plays in, start room override applied.
    pub fn world_definition(&self) -> Result<WorldDefinition, ConfigError> {
        let definition = match &self.world {
            Some(path) => WorldDefinition::from_path(path)?,
            None => WorldDefinition::campus(),
        };
        Ok(match &self.start_room {
            Some(start) => definition.with_start(start.clone()),
            None => definition,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.max_weight, 20);
        assert!(config.start_room.is_none());
        assert!(config.world.is_none());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("start_room = \"Office\"").unwrap();
        assert_eq!(config.max_weight, GameConfig::DEFAULT_MAX_WEIGHT);
        assert_eq!(config.start_room.as_deref(), Some("Office"));
        assert!(GameConfig::from_toml_str("").unwrap() == GameConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = GameConfig::from_toml_str(
            r#"
max_weight = 35
start_room = "Cellar"
world = "worlds/campus.json"
"#,
        )
        .unwrap();
        assert_eq!(config.max_weight, 35);
        assert_eq!(config.world, Some(PathBuf::from("worlds/campus.json")));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            GameConfig::from_toml_str("max_weight = \"heavy\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_start_room_override() {
        let config = GameConfig {
            start_room: Some("Office".to_string()),
            ..GameConfig::default()
        };
        let definition = config.world_definition().unwrap();
        assert_eq!(definition.start, "Office");
        assert_eq!(definition.rooms, WorldDefinition::campus().rooms);
    }

    #[test]
    fn test_missing_config_file() {
        assert!(matches!(
            GameConfig::load("does/not/exist.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
