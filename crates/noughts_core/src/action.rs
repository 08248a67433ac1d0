//! Moves and the errors raised when one is rejected.
//!
//! A move is only an intent: a target cell. It is checked against a board
//! by the validator before the board is touched.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A target cell, addressed by zero-based column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Move {
    /// Zero-based column (`A` is 0).
    pub column: usize,
    /// Zero-based row (`1` is 0).
    pub row: usize,
}

impl Move {
    /// Returns the column index.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Formats the move as a grid reference such as `"B3"`.
    ///
    /// Returns `None` when the column lies beyond `Z` or the row beyond 99.
    pub fn grid_reference(&self) -> Option<String> {
        let letter = crate::grid_ref::column_label(self.column)?;
        if self.row >= crate::grid_ref::MAX_ROWS {
            return None;
        }
        Some(format!("{}{}", letter, self.row + 1))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.grid_reference() {
            Some(reference) => write!(f, "{}", reference),
            None => write!(f, "({}, {})", self.column, self.row),
        }
    }
}

/// Why a move could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move addresses a cell outside the board.
    #[display("Move {} is off the board", _0)]
    OutOfBounds(Move),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Move),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
