//! Command-line interface for noughts.

use crate::config::GameConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Number of columns (1-26)
    #[arg(long)]
    pub width: Option<usize>,

    /// Number of rows (1-99)
    #[arg(long)]
    pub height: Option<usize>,

    /// Name of the player using X
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the player using O
    #[arg(long)]
    pub player_two: Option<String>,

    /// Keep prompting on a full board instead of declaring a draw
    #[arg(long)]
    pub no_draws: bool,

    /// Do not clear the terminal between moves
    #[arg(long)]
    pub no_clear: bool,

    /// File that receives log output
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    #[instrument(skip_all)]
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(width) = self.width {
            config = config.with_width(width);
        }
        if let Some(height) = self.height {
            config = config.with_height(height);
        }
        if let Some(name) = &self.player_one {
            config = config.with_player_one(name.clone());
        }
        if let Some(name) = &self.player_two {
            config = config.with_player_two(name.clone());
        }
        if self.no_draws {
            config = config.with_detect_draws(false);
        }
        if self.no_clear {
            config = config.with_clear_screen(false);
        }
        debug!(?config, "Effective configuration");
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["noughts"]);
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
        assert_eq!(cli.apply(GameConfig::default()), GameConfig::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let cli = Cli::parse_from([
            "noughts",
            "--width",
            "5",
            "--player-two",
            "Grace",
            "--no-draws",
            "--no-clear",
        ]);
        let file = GameConfig::from_toml("width = 4\nheight = 4\n").unwrap();
        let config = cli.apply(file);
        assert_eq!(*config.width(), 5);
        assert_eq!(*config.height(), 4);
        assert_eq!(config.player_two(), "Grace");
        assert!(!*config.detect_draws());
        assert!(!*config.clear_screen());
    }
}
