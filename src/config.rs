//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use noughts_core::{Board, MAX_COLUMNS, MAX_ROWS, Mark, Player, STANDARD_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Number of columns.
    #[serde(default = "default_size")]
    width: usize,

    /// Number of rows.
    #[serde(default = "default_size")]
    height: usize,

    /// Name of the player who moves first and plays X.
    #[serde(default = "default_player_one")]
    #[setters(into)]
    player_one: String,

    /// Name of the player who plays O.
    #[serde(default = "default_player_two")]
    #[setters(into)]
    player_two: String,

    /// End the game as a draw once the board is full.
    #[serde(default = "default_true")]
    detect_draws: bool,

    /// Clear the terminal before every frame.
    #[serde(default = "default_true")]
    clear_screen: bool,
}

fn default_size() -> usize {
    STANDARD_SIZE
}

fn default_player_one() -> String {
    "Player 1".to_string()
}

fn default_player_two() -> String {
    "Player 2".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            player_one: default_player_one(),
            player_two: default_player_two(),
            detect_draws: true,
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(width = config.width, height = config.height, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks every cell is addressable and the players are distinguishable.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_COLUMNS).contains(&self.width) {
            return Err(ConfigError::new(format!(
                "width must be between 1 and {}, got {}",
                MAX_COLUMNS, self.width
            )));
        }
        if !(1..=MAX_ROWS).contains(&self.height) {
            return Err(ConfigError::new(format!(
                "height must be between 1 and {}, got {}",
                MAX_ROWS, self.height
            )));
        }
        let one = self.player_one.trim();
        let two = self.player_two.trim();
        if one.is_empty() || two.is_empty() {
            return Err(ConfigError::new("player names must not be empty".to_string()));
        }
        if one == two {
            return Err(ConfigError::new(format!(
                "players need different names, both are {:?}",
                one
            )));
        }
        Ok(())
    }

    /// Builds the empty board described by this configuration.
    #[instrument(skip(self))]
    pub fn board(&self) -> Result<Board, ConfigError> {
        self.validate()?;
        Board::empty(self.width, self.height).map_err(|e| ConfigError::new(e.to_string()))
    }

    /// The two players, X first.
    pub fn players(&self) -> [Player; 2] {
        [
            Player::new(self.player_one.trim().to_string(), Mark::X),
            Player::new(self.player_two.trim().to_string(), Mark::O),
        ]
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_classic_game() {
        let config = GameConfig::default();
        assert_eq!(*config.width(), 3);
        assert_eq!(*config.height(), 3);
        assert!(config.validate().is_ok());
        let [one, two] = config.players();
        assert_eq!(one.name(), "Player 1");
        assert_eq!(*two.mark(), Mark::O);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml("width = 4\nplayer_two = \"Ada\"\n").unwrap();
        assert_eq!(*config.width(), 4);
        assert_eq!(*config.height(), 3);
        assert_eq!(config.player_two(), "Ada");
        assert!(*config.detect_draws());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GameConfig::from_toml("colour = \"red\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_validation_bounds() {
        assert!(GameConfig::default().with_width(0).validate().is_err());
        assert!(GameConfig::default().with_width(27).validate().is_err());
        assert!(GameConfig::default().with_width(26).validate().is_ok());
        assert!(GameConfig::default().with_height(100).validate().is_err());
        assert!(GameConfig::default().with_player_two("Player 1").validate().is_err());
        assert!(GameConfig::default().with_player_one("  ").validate().is_err());
    }

    #[test]
    fn test_board_matches_dimensions() {
        let board = GameConfig::default().with_width(5).with_height(2).board().unwrap();
        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 2);
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
