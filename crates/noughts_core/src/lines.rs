//! Candidate winning lines for a board's dimensions.
//!
//! A board of width W and height H has W columns, H rows and two
//! diagonals. The diagonals are defined by index conditions:
//!
//! - anti-diagonal: `column + row == W - 1`
//! - main diagonal: `row == column`
//!
//! On square boards these are the usual corner-to-corner diagonals. On
//! rectangular boards they are kept exactly as defined, so they may be
//! shorter than the board's longer side and need not end in a corner.

use super::action::Move;
use super::board::Board;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Which family a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// A full column, top to bottom in storage order.
    Column(usize),
    /// A full row, left to right.
    Row(usize),
    /// Cells where `column + row == width - 1`.
    AntiDiagonal,
    /// Cells where `row == column`.
    MainDiagonal,
}

/// An ordered run of cells that wins when uniformly marked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    cells: Vec<Move>,
}

impl Line {
    /// Which column, row or diagonal this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Cells in iteration order.
    pub fn cells(&self) -> &[Move] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the line has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Every candidate line for `board`: W columns, the anti-diagonal,
/// H rows, then the main diagonal.
#[instrument(skip(board), fields(width = board.width(), height = board.height()))]
pub fn all_lines(board: &Board) -> Vec<Line> {
    let width = board.width();
    let height = board.height();
    let mut lines = Vec::with_capacity(width + height + 2);

    let mut anti_diagonal = Vec::new();
    for column in 0..width {
        let mut cells = Vec::with_capacity(height);
        for row in 0..height {
            cells.push(Move::new(column, row));
            if column + row == width - 1 {
                anti_diagonal.push(Move::new(column, row));
            }
        }
        lines.push(Line {
            kind: LineKind::Column(column),
            cells,
        });
    }
    lines.push(Line {
        kind: LineKind::AntiDiagonal,
        cells: anti_diagonal,
    });

    let mut main_diagonal = Vec::new();
    for row in 0..height {
        let mut cells = Vec::with_capacity(width);
        for column in 0..width {
            cells.push(Move::new(column, row));
            if row == column {
                main_diagonal.push(Move::new(column, row));
            }
        }
        lines.push(Line {
            kind: LineKind::Row(row),
            cells,
        });
    }
    lines.push(Line {
        kind: LineKind::MainDiagonal,
        cells: main_diagonal,
    });

    trace!(count = lines.len(), "Generated lines");
    lines
}
