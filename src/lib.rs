//! Noughts - two-player tic-tac-toe in the terminal.
//!
//! The rules live in [`noughts_core`]; this crate adds the game context,
//! configuration, text rendering and the blocking input loop.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Game**: explicit context holding board, players and turn
//! - **Render**: box-drawn board and screen control
//! - **Play**: prompt / re-prompt loop over any `BufRead` + `Write`
//!
//! # Example
//!
//! ```
//! use noughts::{Game, GameConfig, GameLoop, GameStatus, Screen};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default().with_clear_screen(false);
//! let mut game = Game::new(config.board()?, config.players());
//! let input = std::io::Cursor::new("A1\nA2\nB1\nB2\nC1\n");
//! let mut game_loop = GameLoop::new(input, Screen::new(Vec::new(), false));
//! assert!(matches!(game_loop.run(&mut game)?, GameStatus::Won(_)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod error;
mod game;
mod play;
mod render;

// Crate-level exports - Command line and configuration
pub use cli::Cli;
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game loop
pub use error::PlayError;
pub use game::{Game, GameStatus};
pub use play::{GameLoop, INVALID_MOVE};
pub use render::{Screen, TITLE, render_board};

// Crate-level exports - Core rules
pub use noughts_core::{
    Board, GridRefError, Line, LineKind, Mark, Move, MoveError, Player, Token, all_lines,
    has_winner, parse_grid_reference,
};
