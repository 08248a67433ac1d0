//! Explicit game context: the board, both players and whose turn it is.
//!
//! The core rules are stateless; this is the one place that owns mutable
//! game state, and it is passed explicitly between game-loop steps.

use derive_getters::Getters;
use noughts_core::{Board, Move, MoveError, Player, is_draw, winner};
use tracing::{debug, info, instrument};

/// Where a game stands after a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// More moves are expected.
    InProgress,
    /// This player completed a line.
    Won(Player),
    /// The board filled up without a winner.
    Draw,
}

impl GameStatus {
    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One game in progress or finished.
#[derive(Debug, Clone, Getters)]
pub struct Game {
    /// The board being played on.
    board: Board,
    /// Player one (X) and player two (O).
    players: [Player; 2],
    /// One-based turn counter; odd turns belong to player one.
    turn: usize,
    /// Current status.
    status: GameStatus,
    /// Moves applied so far, in order.
    history: Vec<Move>,
    /// End the game as a draw once the board is full.
    detect_draws: bool,
}

impl Game {
    /// Starts a game on `board` with player one to move.
    #[instrument(skip(board), fields(width = board.width(), height = board.height()))]
    pub fn new(board: Board, players: [Player; 2]) -> Self {
        info!("Starting new game");
        Self {
            board,
            players,
            turn: 1,
            status: GameStatus::InProgress,
            history: Vec::new(),
            detect_draws: true,
        }
    }

    /// Enables or disables ending a full board as a draw.
    pub fn with_draw_detection(mut self, detect_draws: bool) -> Self {
        self.detect_draws = detect_draws;
        self
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        if self.turn % 2 == 1 {
            &self.players[0]
        } else {
            &self.players[1]
        }
    }

    /// Places the current player's mark at `mv` and updates the status.
    ///
    /// Rejected moves leave the game exactly as it was.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player().clone();
        self.board.place(mv, *player.mark())?;
        self.history.push(mv);
        debug!(player = %player.name(), %mv, "Move applied");

        if winner(&self.board).is_some() {
            info!(winner = %player.name(), turns = self.turn, "Game won");
            self.status = GameStatus::Won(player);
        } else if self.detect_draws && is_draw(&self.board) {
            info!(turns = self.turn, "Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.turn += 1;
        }

        Ok(self.status.clone())
    }
}
