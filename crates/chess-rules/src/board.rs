//! The 8x8 board model.

use chess_core::{Color, Coord, Fen, FenError, Movement, Piece};

/// A single board cell: empty, or occupied by a piece of a color.
///
/// Squares are plain values compared on `(Color, Piece)`; there is no
/// shared piece object and no null sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Empty,
    Occupied(Color, Piece),
}

impl Square {
    /// Returns true if no piece occupies this square.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the color of the occupying piece, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Square::Empty => None,
            Square::Occupied(color, _) => Some(color),
        }
    }

    /// Returns the kind of the occupying piece, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(_, piece) => Some(piece),
        }
    }

    /// Returns the unicode glyph for this square (a space when empty).
    pub const fn glyph(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(color, piece) => piece.glyph(color),
        }
    }

    /// Returns the FEN letter for this square (a space when empty).
    pub const fn fen_char(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(color, piece) => piece.to_fen_char(color),
        }
    }
}

/// An 8x8 chess board.
///
/// Stored row-major as `squares[row][column]` with row 0 = rank 1
/// (White's back rank). `Board` is `Copy`: a copy duplicates all 64
/// squares by value, so a scratch copy used to simulate a move can never
/// alias the live board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(Fen::STARTPOS).expect("STARTPOS is valid").0
    }

    /// Builds a board from a FEN string, returning it with the side to
    /// move. The string is fully validated before any board is built.
    pub fn from_fen(fen: &str) -> Result<(Self, Color), FenError> {
        let parsed = Fen::parse(fen)?;
        let mut board = Board::empty();

        for (rank_idx, rank_str) in parsed.placement.split('/').enumerate() {
            let row = 7 - rank_idx as i8; // FEN starts from rank 8
            let mut column = 0i8;

            for c in rank_str.chars() {
                if let Some(gap) = c.to_digit(10) {
                    column += gap as i8;
                } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                    board.set(Coord::new(row, column), Square::Occupied(color, piece));
                    column += 1;
                }
            }
        }

        Ok((board, parsed.turn))
    }

    /// Converts the board to a FEN string with the given side to move.
    ///
    /// Ranks are emitted 8 down to 1 with run-length-encoded gaps; the
    /// castling/en-passant/clock fields the engine does not track are
    /// emitted as fixed placeholders.
    pub fn to_fen(&self, turn: Color) -> String {
        let mut placement = String::new();

        for row in (0..8).rev() {
            let mut gap = 0;
            for column in 0..8 {
                match self.squares[row as usize][column as usize] {
                    Square::Empty => gap += 1,
                    Square::Occupied(color, piece) => {
                        if gap > 0 {
                            placement.push_str(&gap.to_string());
                            gap = 0;
                        }
                        placement.push(piece.to_fen_char(color));
                    }
                }
            }
            if gap > 0 {
                placement.push_str(&gap.to_string());
            }
            if row > 0 {
                placement.push('/');
            }
        }

        Fen { placement, turn }.to_fen()
    }

    /// Returns the square at the given coordinate, or `None` if the
    /// coordinate is off the board.
    #[inline]
    pub fn square(&self, at: Coord) -> Option<Square> {
        if at.is_on_board() {
            Some(self.squares[at.row as usize][at.column as usize])
        } else {
            None
        }
    }

    /// Returns the piece and color at the given coordinate, if the
    /// coordinate is on the board and occupied.
    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<(Piece, Color)> {
        match self.square(at)? {
            Square::Empty => None,
            Square::Occupied(color, piece) => Some((piece, color)),
        }
    }

    /// Overwrites the square at the given on-board coordinate.
    #[inline]
    pub fn set(&mut self, at: Coord, square: Square) {
        debug_assert!(at.is_on_board());
        self.squares[at.row as usize][at.column as usize] = square;
    }

    /// Moves whatever occupies `movement.from` to `movement.to`, clearing
    /// the origin. No validation is performed; both coordinates must be
    /// on the board.
    pub fn apply(&mut self, movement: Movement) {
        debug_assert!(movement.from.is_on_board() && movement.to.is_on_board());
        let moved = self.squares[movement.from.row as usize][movement.from.column as usize];
        self.set(movement.to, moved);
        self.set(movement.from, Square::Empty);
    }

    /// Returns the coordinate of `color`'s king.
    ///
    /// # Panics
    ///
    /// Panics if the board holds no king of that color. A well-formed
    /// position always has exactly one king per side, so a missing king
    /// is a programming error, not a recoverable condition.
    pub fn king_square(&self, color: Color) -> Coord {
        Self::coords()
            .find(|&c| self.square(c) == Some(Square::Occupied(color, Piece::King)))
            .unwrap_or_else(|| panic!("no {} king on the board", color))
    }

    /// Iterates every coordinate of the board in row-major order
    /// (row 0 to 7, and within each row column 0 to 7).
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..8).flat_map(|row| (0..8).map(move |column| Coord::new(row, column)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}
