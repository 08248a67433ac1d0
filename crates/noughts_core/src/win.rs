//! Win and draw detection.

use super::board::Board;
use super::lines::{Line, all_lines};
use super::types::{Mark, Token};
use tracing::{debug, instrument};

/// Shortest line that can win. A lone cell never counts as a line.
pub const MIN_WINNING_LINE: usize = 2;

/// The mark filling every cell of `line`, if there is one.
pub fn line_winner(board: &Board, line: &Line) -> Option<Mark> {
    if line.len() < MIN_WINNING_LINE {
        return None;
    }
    let mut cells = line.cells().iter().map(|mv| board.get(*mv));
    let first = match cells.next()?? {
        Token::Occupied(mark) => mark,
        Token::Empty => return None,
    };
    cells
        .all(|token| token == Some(Token::Occupied(first)))
        .then_some(first)
}

/// True iff `line` is long enough and uniformly holds one mark.
pub fn is_line_won(board: &Board, line: &Line) -> bool {
    line_winner(board, line).is_some()
}

/// Mark of the first winning line found, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    all_lines(board).iter().find_map(|line| {
        let mark = line_winner(board, line)?;
        debug!(kind = ?line.kind(), %mark, "Winning line");
        Some(mark)
    })
}

/// True iff at least one line is won.
pub fn has_winner(board: &Board) -> bool {
    winner(board).is_some()
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_winner(board)
}
