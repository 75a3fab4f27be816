//! Move representation.

use crate::{Coord, CoordError};
use std::fmt;

/// A candidate move: origin and destination squares, not yet validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Movement {
    /// The square the piece moves from.
    pub from: Coord,
    /// The square the piece moves to.
    pub to: Coord,
}

impl Movement {
    /// Creates a new movement.
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Movement { from, to }
    }

    /// Parses a movement from a pair of algebraic square names (e.g. "e2e4").
    pub fn from_text(text: &str) -> Result<Self, CoordError> {
        if text.len() != 4 || !text.is_ascii() {
            return Err(CoordError::InvalidFormat(text.to_string()));
        }
        let from = Coord::from_algebraic(&text[0..2])?;
        let to = Coord::from_algebraic(&text[2..4])?;
        Ok(Movement { from, to })
    }

    /// Renders this movement as a pair of algebraic square names.
    ///
    /// Fails if either coordinate is off the board.
    pub fn to_text(self) -> Result<String, CoordError> {
        Ok(format!(
            "{}{}",
            self.from.to_algebraic()?,
            self.to.to_algebraic()?
        ))
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
