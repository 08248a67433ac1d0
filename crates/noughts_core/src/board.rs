//! Rectangular board storage.

use super::action::{Move, MoveError};
use super::types::{Mark, Token};
use super::validate::LegalMove;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length of the default board.
pub const STANDARD_SIZE: usize = 3;

/// Errors from constructing or writing to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Width or height was zero.
    #[display("Board must be at least 1x1, got {}x{}", width, height)]
    EmptyDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The coordinate does not address a cell.
    #[display("{} is outside the board", _0)]
    OutOfBounds(Move),

    /// Stored cells do not match the dimensions.
    #[display("Board of {}x{} cannot hold {} cells", width, height, found)]
    CellCount {
        /// Declared width.
        width: usize,
        /// Declared height.
        height: usize,
        /// Number of cells supplied.
        found: usize,
    },
}

impl std::error::Error for BoardError {}

/// A width × height grid of tokens.
///
/// Cells are stored row-major, row 0 first, so every row has exactly
/// `width` cells. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Token>,
}

/// Unchecked serialized form, validated into a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    width: usize,
    height: usize,
    cells: Vec<Token>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let RawBoard {
            width,
            height,
            cells,
        } = raw;
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyDimension { width, height });
        }
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(BoardError::CellCount {
                width,
                height,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl Board {
    /// Creates a board with every cell set to `fill`.
    #[instrument]
    pub fn new(width: usize, height: usize, fill: Token) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyDimension { width, height });
        }
        debug!(width, height, "Creating board");
        Ok(Self {
            width,
            height,
            cells: vec![fill; width * height],
        })
    }

    /// Creates a board with every cell empty.
    #[instrument]
    pub fn empty(width: usize, height: usize) -> Result<Self, BoardError> {
        Self::new(width, height, Token::Empty)
    }

    /// The classic empty 3x3 board.
    pub fn standard() -> Self {
        Self {
            width: STANDARD_SIZE,
            height: STANDARD_SIZE,
            cells: vec![Token::Empty; STANDARD_SIZE * STANDARD_SIZE],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, mv: Move) -> Option<usize> {
        (mv.column < self.width && mv.row < self.height).then(|| mv.row * self.width + mv.column)
    }

    /// Token at `mv`, or `None` if it is off the board.
    pub fn get(&self, mv: Move) -> Option<Token> {
        self.index(mv).map(|i| self.cells[i])
    }

    /// Overwrites the cell at `mv`.
    ///
    /// Does not check occupancy; use [`Board::place`] for player moves.
    pub fn set(&mut self, mv: Move, token: Token) -> Result<(), BoardError> {
        let i = self.index(mv).ok_or(BoardError::OutOfBounds(mv))?;
        self.cells[i] = token;
        Ok(())
    }

    /// Places `mark` at `mv` after checking the move is legal.
    ///
    /// The board is unchanged when an error is returned.
    #[instrument(skip(self), fields(width = self.width, height = self.height))]
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<(), MoveError> {
        LegalMove::check(self, mv)?;
        self.set(mv, Token::Occupied(mark))
            .map_err(|_| MoveError::OutOfBounds(mv))?;
        debug!(%mv, %mark, "Placed mark");
        Ok(())
    }

    /// Rows in storage order, row 0 first.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Token]> + ExactSizeIterator {
        self.cells.chunks(self.width)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Token] {
        &self.cells
    }

    /// True when no empty cell remains.
    #[instrument(skip(self))]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|t| !t.is_empty())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_every_cell() {
        for (w, h) in [(1, 1), (3, 3), (4, 2), (1, 7)] {
            let board = Board::empty(w, h).unwrap();
            assert_eq!(board.width(), w);
            assert_eq!(board.height(), h);
            assert_eq!(board.rows().len(), h);
            assert!(board.rows().all(|row| row.len() == w));
            assert!(board.cells().iter().all(|t| *t == Token::Empty));
        }

        let filled = Board::new(2, 2, Token::Occupied(Mark::O)).unwrap();
        assert!(filled.cells().iter().all(|t| *t == Token::Occupied(Mark::O)));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(Board::empty(0, 3), Err(BoardError::EmptyDimension { .. })));
        assert!(matches!(Board::empty(3, 0), Err(BoardError::EmptyDimension { .. })));
    }

    #[test]
    fn test_get_and_set() {
        let mut board = Board::empty(4, 2).unwrap();
        let mv = Move::new(3, 1);
        board.set(mv, Token::Occupied(Mark::X)).unwrap();
        assert_eq!(board.get(mv), Some(Token::Occupied(Mark::X)));
        assert_eq!(board.get(Move::new(0, 0)), Some(Token::Empty));
        assert_eq!(board.get(Move::new(4, 0)), None);
        assert_eq!(board.get(Move::new(0, 2)), None);
    }

    #[test]
    fn test_set_out_of_bounds_leaves_board() {
        let mut board = Board::standard();
        let before = board.clone();
        let mv = Move::new(3, 0);
        assert_eq!(board.set(mv, Token::Occupied(Mark::X)), Err(BoardError::OutOfBounds(mv)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_rejects_occupied_without_mutation() {
        let mut board = Board::standard();
        let mv = Move::new(1, 1);
        board.place(mv, Mark::X).unwrap();
        let before = board.clone();

        assert_eq!(board.place(mv, Mark::O), Err(MoveError::Occupied(mv)));
        assert_eq!(board, before);
        assert_eq!(board.get(mv), Some(Token::Occupied(Mark::X)));
    }

    #[test]
    fn test_place_rejects_out_of_bounds_without_mutation() {
        let mut board = Board::standard();
        let before = board.clone();
        let mv = Move::new(0, 3);
        assert_eq!(board.place(mv, Mark::X), Err(MoveError::OutOfBounds(mv)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let mut board = Board::empty(3, 2).unwrap();
        board.place(Move::new(2, 1), Mark::O).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_deserialize_rejects_wrong_cell_count() {
        let json = r#"{"width":3,"height":3,"cells":[]}"#;
        let err = serde_json::from_str::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("Board of 3x3 cannot hold 0 cells"));
    }

    #[test]
    fn test_deserialize_rejects_zero_dimension() {
        let json = r#"{"width":0,"height":0,"cells":[]}"#;
        let err = serde_json::from_str::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("at least 1x1"));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::empty(2, 1).unwrap();
        assert!(!board.is_full());
        board.place(Move::new(0, 0), Mark::X).unwrap();
        assert!(!board.is_full());
        board.place(Move::new(1, 0), Mark::O).unwrap();
        assert!(board.is_full());
    }
}
