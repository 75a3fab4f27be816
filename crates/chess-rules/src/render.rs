//! Textual board rendering.
//!
//! Pure presentation: both renderers consume only the square contents
//! and involve no engine logic.

use crate::board::Board;
use chess_core::Coord;

const FOOTER: &str = "   A  B  C  D  E  F  G  H";

fn grid(board: &Board, cell: impl Fn(Coord) -> char) -> String {
    let mut out = String::new();

    for row in (0..8).rev() {
        out.push_str(&(row + 1).to_string());
        out.push_str(" |");
        for column in 0..8 {
            out.push(cell(Coord::new(row, column)));
            out.push_str(" |");
        }
        out.push('\n');
    }

    out.push_str(FOOTER);
    out
}

/// Renders the board as a unicode grid, rank 8 at the top and file
/// letters along the bottom.
pub fn unicode(board: &Board) -> String {
    grid(board, |at| {
        board.square(at).map(|s| s.glyph()).unwrap_or(' ')
    })
}

/// Renders the board with FEN letters instead of glyphs, for terminals
/// without the chess symbols.
pub fn ascii(board: &Board) -> String {
    grid(board, |at| {
        board.square(at).map(|s| s.fen_char()).unwrap_or(' ')
    })
}
