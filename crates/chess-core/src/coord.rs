//! Board coordinates and the algebraic square codec.

use std::fmt;
use thiserror::Error;

/// Errors from the algebraic coordinate codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordError {
    #[error("invalid square name '{0}': expected a file letter a-h and a rank digit 1-8")]
    InvalidFormat(String),

    #[error("coordinate ({row}, {column}) is off the board")]
    OffBoard { row: i8, column: i8 },
}

/// A board coordinate.
///
/// `row` 0 is rank 1 (White's back rank) and `column` 0 is file a. Both
/// components are signed so that offset arithmetic can step past the edge;
/// [`Coord::is_on_board`] gates any use as a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i8,
    pub column: i8,
}

impl Coord {
    /// Creates a coordinate. The components are not bounds-checked.
    #[inline]
    pub const fn new(row: i8, column: i8) -> Self {
        Coord { row, column }
    }

    /// Returns true if both components are within 0-7.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < 8 && self.column >= 0 && self.column < 8
    }

    /// Returns this coordinate shifted by the given row/column deltas.
    /// The result may be off the board.
    #[inline]
    pub const fn offset(self, rows: i8, columns: i8) -> Self {
        Coord {
            row: self.row + rows,
            column: self.column + columns,
        }
    }

    /// Parses a two-character algebraic square name (e.g. "e2", "A5").
    ///
    /// The file letter is case-insensitive. Anything that is not exactly
    /// one file letter followed by one rank digit is rejected.
    pub fn from_algebraic(text: &str) -> Result<Self, CoordError> {
        let invalid = || CoordError::InvalidFormat(text.to_string());

        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];

        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }

        Ok(Coord {
            row: (rank - b'1') as i8,
            column: (file - b'a') as i8,
        })
    }

    /// Renders this coordinate as an algebraic square name (e.g. "e2").
    ///
    /// Fails with [`CoordError::OffBoard`] if either component is
    /// outside 0-7.
    pub fn to_algebraic(self) -> Result<String, CoordError> {
        if !self.is_on_board() {
            return Err(CoordError::OffBoard {
                row: self.row,
                column: self.column,
            });
        }

        let file = (b'a' + self.column as u8) as char;
        let rank = (b'1' + self.row as u8) as char;
        Ok(format!("{}{}", file, rank))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Ok(name) => write!(f, "{}", name),
            Err(_) => write!(f, "({}, {})", self.row, self.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_algebraic_corners() {
        assert_eq!(Coord::from_algebraic("a1"), Ok(Coord::new(0, 0)));
        assert_eq!(Coord::from_algebraic("h8"), Ok(Coord::new(7, 7)));
        assert_eq!(Coord::from_algebraic("e2"), Ok(Coord::new(1, 4)));
    }

    #[test]
    fn from_algebraic_is_case_insensitive() {
        assert_eq!(
            Coord::from_algebraic("E2"),
            Coord::from_algebraic("e2")
        );
    }

    #[test]
    fn from_algebraic_rejects_garbage() {
        for bad in ["", "e", "e22", "i1", "a9", "a0", "22", "ee", "♙1"] {
            assert_eq!(
                Coord::from_algebraic(bad),
                Err(CoordError::InvalidFormat(bad.to_string())),
                "expected rejection of {:?}",
                bad
            );
        }
    }

    #[test]
    fn to_algebraic_rejects_off_board() {
        assert!(Coord::new(-1, 0).to_algebraic().is_err());
        assert!(Coord::new(0, 8).to_algebraic().is_err());
        assert_eq!(
            Coord::new(8, 3).to_algebraic(),
            Err(CoordError::OffBoard { row: 8, column: 3 })
        );
    }

    #[test]
    fn offset_can_leave_the_board() {
        let corner = Coord::new(7, 7);
        assert!(!corner.offset(1, 0).is_on_board());
        assert!(!corner.offset(0, 1).is_on_board());
        assert!(corner.offset(-1, -1).is_on_board());
    }

    #[test]
    fn display_uses_algebraic_when_possible() {
        assert_eq!(format!("{}", Coord::new(1, 4)), "e2");
        assert_eq!(format!("{}", Coord::new(-1, 4)), "(-1, 4)");
    }

    proptest! {
        #[test]
        fn algebraic_roundtrip(row in 0i8..8, column in 0i8..8) {
            let coord = Coord::new(row, column);
            let name = coord.to_algebraic().unwrap();
            prop_assert_eq!(Coord::from_algebraic(&name), Ok(coord));
        }
    }
}
