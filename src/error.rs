//! Errors raised by the interactive game loop.

use derive_more::{Display, Error, From};
use noughts_core::MoveError;

/// Failure while driving a game over a terminal.
#[derive(Debug, Display, Error, From)]
pub enum PlayError {
    /// Reading input or writing output failed.
    #[display("Terminal I/O failed: {}", _0)]
    Io(std::io::Error),

    /// The game refused a move.
    #[display("Move rejected: {}", _0)]
    Move(MoveError),

    /// Input ended before the game finished.
    #[display("Input closed before the game finished")]
    #[from(ignore)]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_converts() {
        let err: PlayError = std::io::Error::other("pipe").into();
        assert!(matches!(err, PlayError::Io(_)));
        assert_eq!(err.to_string(), "Terminal I/O failed: pipe");
    }

    #[test]
    fn test_move_error_converts() {
        let err: PlayError = MoveError::GameOver.into();
        assert!(matches!(err, PlayError::Move(MoveError::GameOver)));
        assert_eq!(err.to_string(), "Move rejected: Game is already over");
    }

    #[test]
    fn test_input_closed_message() {
        assert_eq!(
            PlayError::InputClosed.to_string(),
            "Input closed before the game finished"
        );
    }
}
