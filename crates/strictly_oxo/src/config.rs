//! Game setup loaded from TOML.

use super::controller::Controller;
use super::types::{MAX_EXTENT, MIN_EXTENT, MIN_WIN_THRESHOLD, Player};
use super::GameState;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board size, win threshold and players for a new game.
///
/// ```toml
/// rows = 4
/// columns = 4
/// win_threshold = 3
/// players = ["X", "O", "Z"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (1-9).
    #[serde(default = "default_extent")]
    rows: usize,

    /// Number of columns (1-9).
    #[serde(default = "default_extent")]
    columns: usize,

    /// Run length needed to win (at least 3).
    #[serde(default = "default_win_threshold")]
    win_threshold: usize,

    /// Player symbols in turn order.
    #[serde(default = "default_players")]
    players: Vec<char>,
}

fn default_extent() -> usize {
    3
}

fn default_win_threshold() -> usize {
    MIN_WIN_THRESHOLD
}

fn default_players() -> Vec<char> {
    vec!['X', 'O']
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: default_extent(),
            columns: default_extent(),
            win_threshold: default_win_threshold(),
            players: default_players(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(rows: usize, columns: usize, win_threshold: usize, players: Vec<char>) -> Self {
        Self {
            rows,
            columns,
            win_threshold,
            players,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            rows = config.rows,
            columns = config.columns,
            players = config.players.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the board size where an override is given.
    pub fn with_dimensions(mut self, rows: Option<usize>, columns: Option<usize>) -> Self {
        self.rows = rows.unwrap_or(self.rows);
        self.columns = columns.unwrap_or(self.columns);
        self
    }

    /// Replaces the win threshold.
    pub fn with_win_threshold(mut self, win_threshold: usize) -> Self {
        self.win_threshold = win_threshold;
        self
    }

    /// Replaces the player symbols.
    pub fn with_players(mut self, players: Vec<char>) -> Self {
        self.players = players;
        self
    }

    /// Checks the configuration describes a playable game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extent = MIN_EXTENT..=MAX_EXTENT;
        if !extent.contains(&self.rows) {
            return Err(ConfigError::new(format!(
                "rows must be between {} and {}, got {}",
                MIN_EXTENT, MAX_EXTENT, self.rows
            )));
        }
        if !extent.contains(&self.columns) {
            return Err(ConfigError::new(format!(
                "columns must be between {} and {}, got {}",
                MIN_EXTENT, MAX_EXTENT, self.columns
            )));
        }
        if self.win_threshold < MIN_WIN_THRESHOLD {
            return Err(ConfigError::new(format!(
                "win_threshold must be at least {}, got {}",
                MIN_WIN_THRESHOLD, self.win_threshold
            )));
        }
        if self.players.is_empty() {
            return Err(ConfigError::new("at least one player is required"));
        }
        Ok(())
    }

    /// Builds a controller for a fresh game.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails or a player symbol repeats.
    #[instrument(skip(self))]
    pub fn build(&self) -> Result<Controller, ConfigError> {
        self.validate()?;
        let mut state = GameState::new(self.rows, self.columns, self.win_threshold);
        for &symbol in &self.players {
            state
                .add_player(Player::new(symbol))
                .map_err(|e| ConfigError::new(e.to_string()))?;
        }
        Controller::new(state).map_err(|e| ConfigError::new(e.to_string()))
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
