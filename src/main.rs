//! Noughts - terminal tic-tac-toe for two players.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Game, GameConfig, GameLoop, Screen};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_file)?;

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let config = cli.apply(config);

    run_game(&config)
}

/// Plays one game on stdin/stdout.
#[instrument(skip_all)]
fn run_game(config: &GameConfig) -> Result<()> {
    let board = config.board().context("Invalid game configuration")?;
    let mut game = Game::new(board, config.players()).with_draw_detection(*config.detect_draws());

    let stdin = std::io::stdin();
    let screen = Screen::new(std::io::stdout(), *config.clear_screen());
    let mut game_loop = GameLoop::new(stdin.lock(), screen);

    let status = game_loop.run(&mut game)?;
    info!(?status, moves = game.history().len(), "Session finished");
    Ok(())
}

/// Sends logs to a file so they never interleave with the board.
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    info!("Noughts tracing initialized");
    Ok(())
}
