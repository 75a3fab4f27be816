//! Core types for chess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Coord`] for board coordinates and the algebraic codec
//! - [`Movement`] for candidate moves
//! - [`Fen`] for FEN parsing and serialization

mod color;
mod coord;
mod fen;
mod movement;
mod piece;

pub use color::Color;
pub use coord::{Coord, CoordError};
pub use fen::{Fen, FenError};
pub use movement::Movement;
pub use piece::Piece;
