//! Game configuration: opponent tuning, turn delays, logging.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use solo_tictactoe::DEFAULT_RANDOM_MOVE_PROBABILITY;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Tunable knobs for a game session.
///
/// Every key is optional in the TOML file; missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Chance that the opponent skips its winning-move search.
    #[serde(default = "default_random_move_probability")]
    random_move_probability: f64,

    /// Delay after the human move before the opponent's turn starts.
    #[serde(default = "default_turn_delay_ms")]
    turn_delay_ms: u64,

    /// Opponent "thinking" delay before its move lands.
    #[serde(default = "default_thinking_delay_ms")]
    thinking_delay_ms: u64,

    /// RNG seed. `None` draws from OS entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// File receiving tracing output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_random_move_probability() -> f64 {
    DEFAULT_RANDOM_MOVE_PROBABILITY
}

fn default_turn_delay_ms() -> u64 {
    100
}

fn default_thinking_delay_ms() -> u64 {
    1000
}

fn default_log_file() -> PathBuf {
    PathBuf::from("solo_terminal.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            random_move_probability: default_random_move_probability(),
            turn_delay_ms: default_turn_delay_ms(),
            thinking_delay_ms: default_thinking_delay_ms(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            random_move_probability = config.random_move_probability,
            seed = ?config.seed,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a probability outside `[0, 1]`.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.random_move_probability) {
            return Err(ConfigError::new(format!(
                "random_move_probability must be within [0, 1], got {}",
                self.random_move_probability
            )));
        }
        Ok(())
    }

    /// Settle delay as a [`Duration`].
    pub fn turn_delay(&self) -> Duration {
        Duration::from_millis(self.turn_delay_ms)
    }

    /// Thinking delay as a [`Duration`].
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
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
    /// Creates a new configuration error with caller location tracking.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(*config.random_move_probability(), 0.7);
        assert_eq!(config.turn_delay(), Duration::from_millis(100));
        assert_eq!(config.thinking_delay(), Duration::from_millis(1000));
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = GameConfig::from_toml("seed = 42\nthinking_delay_ms = 250\n").expect("Valid TOML");
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.thinking_delay_ms(), 250);
        assert_eq!(*config.turn_delay_ms(), 100);
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let err = GameConfig::from_toml("random_move_probability = 1.5").expect_err("Out of range");
        assert!(err.message.contains("random_move_probability"));
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::new().with_seed(Some(9)).with_turn_delay_ms(0);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(config.turn_delay(), Duration::ZERO);
    }
}
