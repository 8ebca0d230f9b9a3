//! Command-line interface for solo_terminal.

use crate::config::{ConfigError, GameConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Play tic-tac-toe against a scripted computer opponent
#[derive(Parser, Debug)]
#[command(name = "solo_terminal")]
#[command(about = "Tic-tac-toe against a scripted computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the opponent's dice (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file path (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file, if any, then applies command-line overrides.
    #[instrument(skip(self))]
    pub fn load_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::new(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(Some(seed));
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from(["solo_terminal", "--seed", "17", "--log-file", "game.log"]);
        let config = cli.load_config().expect("Valid config");
        assert_eq!(*config.seed(), Some(17));
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["solo_terminal", "--config", "/nonexistent/solo.toml"]);
        let err = cli.load_config().expect_err("Missing file");
        assert!(err.message.contains("Failed to read config file"));
    }
}
