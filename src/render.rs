//! Text rendering of the board.

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use noughts_core::{Board, column_label};
use std::io::Write;
use tracing::instrument;

/// Banner printed above the board.
pub const TITLE: &str = "
▀█▀ █ █▀▀ ▄▄ ▀█▀ ▄▀█ █▀▀ ▄▄ ▀█▀ █▀█ █▀▀
░█░ █ █▄▄ ░░ ░█░ █▀█ █▄▄ ░░ ░█░ █▄█ ██▄
";

/// Draws the board as a box grid.
///
/// The highest row is printed first so row 1 sits at the bottom, with
/// row numbers on the left and column letters underneath.
#[instrument(skip(board), fields(width = board.width(), height = board.height()))]
pub fn render_board(board: &Board) -> String {
    let inner = board.width() - 1;
    let mut out = String::new();

    out.push_str("   ┌");
    out.push_str(&"───┬".repeat(inner));
    out.push_str("───┐\n");

    for (i, row) in board.rows().enumerate().rev() {
        out.push_str(&format!("{:>2} ", i + 1));
        for token in row {
            out.push_str(&format!("│ {} ", token.glyph()));
        }
        out.push_str("│\n");
        if i != 0 {
            out.push_str("   ├");
            out.push_str(&"───┼".repeat(inner));
            out.push_str("───┤\n");
        }
    }

    out.push_str("   └");
    out.push_str(&"───┴".repeat(inner));
    out.push_str("───┘\n  ");

    for column in 0..board.width() {
        out.push_str("   ");
        out.push(column_label(column).unwrap_or('?'));
    }
    out.push('\n');
    out
}

/// Output side of the terminal: frames and messages.
#[derive(Debug)]
pub struct Screen<W> {
    out: W,
    clear: bool,
}

impl<W: Write> Screen<W> {
    /// Wraps `out`; when `clear` is set every frame starts on a blank screen.
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    /// Redraws title and board.
    #[instrument(skip_all)]
    pub fn frame(&mut self, board: &Board) -> std::io::Result<()> {
        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(self.out, "{}\n{}\n", TITLE, render_board(board))?;
        self.out.flush()
    }

    /// Writes one line of text.
    pub fn line(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Gives back the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Mark, Move};

    #[test]
    fn test_render_standard_board() {
        let mut board = Board::standard();
        board.place(Move::new(0, 0), Mark::X).unwrap();
        board.place(Move::new(2, 2), Mark::O).unwrap();

        let expected = concat!(
            "   ┌───┬───┬───┐\n",
            " 3 │   │   │ O │\n",
            "   ├───┼───┼───┤\n",
            " 2 │   │   │   │\n",
            "   ├───┼───┼───┤\n",
            " 1 │ X │   │   │\n",
            "   └───┴───┴───┘\n",
            "     A   B   C\n",
        );
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_render_single_cell() {
        let board = Board::empty(1, 1).unwrap();
        assert_eq!(render_board(&board), "   ┌───┐\n 1 │   │\n   └───┘\n     A\n");
    }

    #[test]
    fn test_two_digit_rows_stay_aligned() {
        let board = Board::empty(2, 10).unwrap();
        let rendered = render_board(&board);
        assert!(rendered.contains("\n10 │   │   │\n"));
        assert!(rendered.contains("\n 9 │   │   │\n"));
    }

    #[test]
    fn test_frame_without_clear_has_no_escapes() {
        let mut screen = Screen::new(Vec::new(), false);
        screen.frame(&Board::standard()).unwrap();
        let text = String::from_utf8(screen.into_inner()).unwrap();
        assert!(text.starts_with(TITLE));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_frame_with_clear_emits_escapes() {
        let mut screen = Screen::new(Vec::new(), true);
        screen.frame(&Board::standard()).unwrap();
        let text = String::from_utf8(screen.into_inner()).unwrap();
        assert!(text.starts_with('\x1b'));
    }
}
