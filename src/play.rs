//! The interactive loop: prompt, read, validate, apply, redraw.
//!
//! Reading the next line of input is the only blocking point. Invalid
//! references and illegal moves are answered with a re-prompt and never
//! touch the board.

use crate::error::PlayError;
use crate::game::{Game, GameStatus};
use crate::render::Screen;
use noughts_core::{Move, is_valid, parse_grid_reference};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Message shown after rejected input.
pub const INVALID_MOVE: &str = "Enter a valid move";

/// Drives one game over a line-based input and a text screen.
#[derive(Debug)]
pub struct GameLoop<R, W> {
    input: R,
    screen: Screen<W>,
}

impl<R: BufRead, W: Write> GameLoop<R, W> {
    /// Builds a loop reading moves from `input` and drawing to `screen`.
    pub fn new(input: R, screen: Screen<W>) -> Self {
        Self { input, screen }
    }

    /// Plays `game` until it is won or drawn and returns the final status.
    #[instrument(skip_all)]
    pub fn run(&mut self, game: &mut Game) -> Result<GameStatus, PlayError> {
        if game.status().is_over() {
            info!(status = ?game.status(), "Game already finished");
            return Ok(game.status().clone());
        }
        self.screen.frame(game.board())?;

        loop {
            let mv = self.request_move(game)?;
            let status = game.play(mv)?;
            self.screen.frame(game.board())?;

            match &status {
                GameStatus::InProgress => continue,
                GameStatus::Won(player) => {
                    self.screen.line(&format!("{} is the winner!", player.name()))?;
                    info!(winner = %player.name(), "Game over");
                }
                GameStatus::Draw => {
                    self.screen.line("It's a draw!")?;
                    info!("Game over, draw");
                }
            }
            return Ok(status);
        }
    }

    /// Prompts the current player until they enter a legal move.
    #[instrument(skip_all, fields(turn = game.turn()))]
    fn request_move(&mut self, game: &Game) -> Result<Move, PlayError> {
        let name = game.current_player().name().clone();
        self.screen
            .line(&format!("{}, what is your move (e.g. 'A1')?", name))?;

        let mut buf = String::new();
        loop {
            buf.clear();
            if self.input.read_line(&mut buf)? == 0 {
                warn!("Input closed mid-game");
                return Err(PlayError::InputClosed);
            }
            let entry = buf.trim();

            match parse_grid_reference(entry) {
                Ok(mv) if is_valid(game.board(), mv) => {
                    debug!(player = %name, %mv, "Accepted move");
                    return Ok(mv);
                }
                Ok(mv) => debug!(%mv, "Illegal move"),
                Err(e) => debug!(entry, error = %e, "Malformed grid reference"),
            }
            self.screen.line(INVALID_MOVE)?;
        }
    }

    /// Gives back the screen, e.g. to inspect captured output.
    pub fn into_screen(self) -> Screen<W> {
        self.screen
    }
}
