//! Grid references: the human notation for moves.
//!
//! A reference is one letter naming the column followed by a number from
//! 1 to 99 naming the row, e.g. `"A1"` or `"c12"`. The letter is
//! case-insensitive and the number may not start with a zero.

use super::action::Move;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Number of columns a letter can address (`A` to `Z`).
pub const MAX_COLUMNS: usize = 26;

/// Number of rows a reference can address (`1` to `99`).
pub const MAX_ROWS: usize = 99;

/// Reasons a string is not a grid reference.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GridRefError {
    /// Nothing was entered.
    #[display("Grid reference is empty")]
    Empty,

    /// The first character is not a letter.
    #[display("Grid reference must start with a column letter")]
    MissingColumn,

    /// The letter is not followed by a digit.
    #[display("Grid reference must have a row number after the column letter")]
    MissingRow,

    /// The row number starts with `0`.
    #[display("Row number may not start with zero")]
    LeadingZero,

    /// Something follows the one or two row digits.
    #[display("Unexpected characters after row number: {:?}", _0)]
    TrailingCharacters(String),
}

impl std::error::Error for GridRefError {}

/// Parses a grid reference such as `"B2"` into a zero-based move.
#[instrument]
pub fn parse_grid_reference(input: &str) -> Result<Move, GridRefError> {
    let mut chars = input.chars();

    let letter = chars.next().ok_or(GridRefError::Empty)?;
    if !letter.is_ascii_alphabetic() {
        return Err(GridRefError::MissingColumn);
    }
    let column = (letter.to_ascii_uppercase() as u8 - b'A') as usize;

    let rest = chars.as_str();
    let digits = rest
        .bytes()
        .take(2)
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return Err(GridRefError::MissingRow);
    }
    let (number, trailing) = rest.split_at(digits);
    if !trailing.is_empty() {
        return Err(GridRefError::TrailingCharacters(trailing.to_string()));
    }
    if number.starts_with('0') {
        return Err(GridRefError::LeadingZero);
    }

    // At most two ASCII digits, first one non-zero: always 1..=99.
    let row = number
        .bytes()
        .fold(0usize, |acc, b| acc * 10 + (b - b'0') as usize)
        - 1;

    let parsed = Move::new(column, row);
    debug!(%parsed, "Parsed grid reference");
    Ok(parsed)
}

/// Letter labelling a zero-based column, `None` past `Z`.
#[instrument]
pub fn column_label(index: usize) -> Option<char> {
    if index < MAX_COLUMNS {
        Some((b'A' + index as u8) as char)
    } else {
        None
    }
}

impl FromStr for Move {
    type Err = GridRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_grid_reference(s)
    }
}
