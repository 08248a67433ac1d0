//! Pure noughts and crosses rules.
//!
//! Everything here is synchronous and free of I/O: boards are plain
//! values and every operation takes the board it works on explicitly.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Mark, has_winner, parse_grid_reference};
//!
//! let mut board = Board::standard();
//! for (reference, mark) in [("A1", Mark::X), ("B2", Mark::X), ("C3", Mark::X)] {
//!     let mv = parse_grid_reference(reference)?;
//!     board.place(mv, mark)?;
//! }
//! assert!(has_winner(&board));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod grid_ref;
mod lines;
mod types;
mod validate;
mod win;

pub use action::{Move, MoveError};
pub use board::{Board, BoardError, STANDARD_SIZE};
pub use grid_ref::{GridRefError, MAX_COLUMNS, MAX_ROWS, column_label, parse_grid_reference};
pub use lines::{Line, LineKind, all_lines};
pub use types::{Mark, Player, Token};
pub use validate::{CellIsEmpty, InBounds, LegalMove, is_in_bounds, is_occupied, is_valid};
pub use win::{MIN_WINNING_LINE, has_winner, is_draw, is_line_won, line_winner, winner};
