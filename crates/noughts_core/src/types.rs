//! Core domain types: marks, tokens and players.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Mark {
    /// Crosses (moves first by default).
    X,
    /// Noughts.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single printable glyph for this mark.
    pub fn glyph(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// The content of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Token {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Mark),
}

impl Token {
    /// Single printable glyph used when rendering a cell.
    pub fn glyph(self) -> char {
        match self {
            Token::Empty => ' ',
            Token::Occupied(mark) => mark.glyph(),
        }
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Token::Empty => None,
            Token::Occupied(mark) => Some(mark),
        }
    }

    /// True when the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Token::Empty
    }
}

impl From<Mark> for Token {
    fn from(mark: Mark) -> Self {
        Token::Occupied(mark)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A participant: display name plus assigned mark.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Name shown in prompts and the winner banner.
    name: String,
    /// Mark this player places.
    mark: Mark,
}

impl Player {
    /// The two default players: "Player 1" with X and "Player 2" with O.
    #[instrument]
    pub fn defaults() -> [Player; 2] {
        [
            Player::new("Player 1".to_string(), Mark::X),
            Player::new("Player 2".to_string(), Mark::O),
        ]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_swaps() {
        for mark in Mark::iter() {
            assert_ne!(mark, mark.opponent());
            assert_eq!(mark, mark.opponent().opponent());
        }
    }

    #[test]
    fn test_token_glyphs() {
        assert_eq!(Token::Empty.glyph(), ' ');
        assert_eq!(Token::Occupied(Mark::X).glyph(), 'X');
        assert_eq!(Token::from(Mark::O).to_string(), "O");
    }

    #[test]
    fn test_default_players() {
        let [one, two] = Player::defaults();
        assert_eq!(one.name(), "Player 1");
        assert_eq!(*one.mark(), Mark::X);
        assert_eq!(*two.mark(), Mark::O);
    }
}
