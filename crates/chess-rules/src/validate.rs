//! Move validation.

use crate::board::{Board, Square};
use crate::movegen::{destinations, filter_own_check};
use chess_core::Movement;
use std::fmt;

/// Every way a move attempt can resolve.
///
/// These are in-domain outcomes, returned as plain values from
/// [`validate`] and [`Game::make_move`](crate::Game::make_move); they are
/// never raised as errors. Errors are reserved for malformed external
/// input at the codec boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// The move follows the piece's pattern and does not expose the
    /// mover's own king.
    LegalMove,
    /// The move does not follow the piece's movement pattern, or the
    /// piece does not belong to the side making it.
    IllegalMove,
    /// The move follows the piece's pattern but would leave or keep the
    /// mover's own king in check.
    KingOnCheck,
    /// The origin square holds no piece.
    BlankSquare,
    /// The origin square is outside the board.
    OutOfBoard,
    /// The move was executed and left the opponent without a legal
    /// reply, finishing the match.
    Checkmate,
    /// The match is already finished; no move can be executed.
    MatchFinished,
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Validation::LegalMove => "legal move",
            Validation::IllegalMove => "illegal move",
            Validation::KingOnCheck => "move leaves own king in check",
            Validation::BlankSquare => "no piece on the origin square",
            Validation::OutOfBoard => "origin square is off the board",
            Validation::Checkmate => "checkmate",
            Validation::MatchFinished => "match is already finished",
        };
        write!(f, "{}", text)
    }
}

/// Validates a candidate movement against the board, without executing
/// it.
///
/// Decision order, first match wins: off-board origin, empty origin,
/// legality-filtered destination match, pseudo-legal destination match
/// (the pattern fits but the mover's king would be in check), anything
/// else. An off-board destination never matches a generated destination,
/// so it needs no separate bounds check.
pub fn validate(board: &Board, movement: Movement) -> Validation {
    if !movement.from.is_on_board() {
        return Validation::OutOfBoard;
    }

    if board.square(movement.from) == Some(Square::Empty) {
        return Validation::BlankSquare;
    }

    let pseudo = destinations(board, movement.from, false);
    if !pseudo.contains(&movement.to) {
        return Validation::IllegalMove;
    }

    if filter_own_check(board, movement.from, vec![movement.to]).is_empty() {
        return Validation::KingOnCheck;
    }

    Validation::LegalMove
}
