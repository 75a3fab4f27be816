//! Chess rules engine.
//!
//! This crate decides whether moves are legal; it never picks them. It
//! provides:
//! - [`Board`] - an 8x8 value-semantics board of [`Square`] cells
//! - Per-piece pseudo-legal move generators and the shared ray-caster
//! - The legality filter that discards moves exposing the mover's own
//!   king, and the check detector built on top of it
//! - [`validate`] - classifies a candidate move as one of the
//!   [`Validation`] outcomes
//! - [`Game`] - the match state machine, from the opening move to
//!   checkmate
//! - Textual board renderers
//!
//! Castling, en passant, promotion, and draw detection are outside this
//! rule set.
//!
//! # Example
//!
//! ```
//! use chess_core::Movement;
//! use chess_rules::{Game, Validation};
//!
//! let mut game = Game::new();
//! let opening = Movement::from_text("e2e4").unwrap();
//! assert_eq!(game.make_move(opening), Validation::LegalMove);
//!
//! // The same squares again: e2 is now empty.
//! assert_eq!(game.make_move(opening), Validation::BlankSquare);
//! ```

mod board;
mod game;
pub mod movegen;
pub mod render;
mod validate;

pub use board::{Board, Square};
pub use game::Game;
pub use movegen::{
    bishop_destinations, cast_ray, destinations, filter_own_check, generate_moves, is_in_check,
    king_destinations, knight_destinations, legal_destinations, pawn_destinations,
    queen_destinations, rook_destinations, MoveList,
};
pub use validate::{validate, Validation};
