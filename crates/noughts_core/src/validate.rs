//! Move validation.
//!
//! A move is legal when it addresses a cell on the board and that cell
//! is empty. Nothing else can make a move illegal.

use super::action::{Move, MoveError};
use super::board::Board;
use tracing::{instrument, warn};

/// True iff `mv` addresses an existing cell.
pub fn is_in_bounds(board: &Board, mv: Move) -> bool {
    mv.row < board.height() && mv.column < board.width()
}

/// True iff the cell at `mv` exists and holds a mark.
pub fn is_occupied(board: &Board, mv: Move) -> bool {
    board.get(mv).is_some_and(|token| !token.is_empty())
}

/// True iff a mark may be placed at `mv`.
pub fn is_valid(board: &Board, mv: Move) -> bool {
    is_in_bounds(board, mv) && !is_occupied(board, mv)
}

/// Precondition: the move lies on the board.
pub struct InBounds;

impl InBounds {
    /// Checks the move against the board's dimensions.
    #[instrument(skip(board))]
    pub fn check(board: &Board, mv: Move) -> Result<(), MoveError> {
        if is_in_bounds(board, mv) {
            Ok(())
        } else {
            warn!(width = board.width(), height = board.height(), "Move off the board");
            Err(MoveError::OutOfBounds(mv))
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the target cell holds no mark.
    #[instrument(skip(board))]
    pub fn check(board: &Board, mv: Move) -> Result<(), MoveError> {
        if is_occupied(board, mv) {
            warn!("Cell already occupied");
            Err(MoveError::Occupied(mv))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: in bounds and empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates every precondition for placing a mark.
    #[instrument(skip(board))]
    pub fn check(board: &Board, mv: Move) -> Result<(), MoveError> {
        InBounds::check(board, mv)?;
        CellIsEmpty::check(board, mv)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mark, Token};

    #[test]
    fn test_out_of_bounds_is_invalid_regardless_of_occupancy() {
        let board = Board::empty(3, 2).unwrap();
        for mv in [Move::new(3, 0), Move::new(0, 2), Move::new(7, 9)] {
            assert!(!is_in_bounds(&board, mv));
            assert!(!is_occupied(&board, mv));
            assert!(!is_valid(&board, mv));
            assert_eq!(LegalMove::check(&board, mv), Err(MoveError::OutOfBounds(mv)));
        }
    }

    #[test]
    fn test_valid_until_set() {
        let mut board = Board::standard();
        let mv = Move::new(2, 1);
        assert!(is_valid(&board, mv));
        assert!(LegalMove::check(&board, mv).is_ok());

        board.set(mv, Token::Occupied(Mark::O)).unwrap();
        assert!(is_occupied(&board, mv));
        assert!(!is_valid(&board, mv));
        assert_eq!(LegalMove::check(&board, mv), Err(MoveError::Occupied(mv)));
    }

    #[test]
    fn test_check_agrees_with_is_valid() {
        let mut board = Board::empty(4, 3).unwrap();
        board.set(Move::new(1, 1), Token::Occupied(Mark::X)).unwrap();
        for column in 0..6 {
            for row in 0..5 {
                let mv = Move::new(column, row);
                assert_eq!(LegalMove::check(&board, mv).is_ok(), is_valid(&board, mv));
            }
        }
    }
}
