//! Match state machine.

use crate::board::Board;
use crate::movegen::{generate_moves, is_in_check, legal_destinations, MoveList};
use crate::validate::{validate, Validation};
use chess_core::{Color, Coord, FenError, Movement};

/// A live chess match: the board, whose turn it is, and the winner once
/// the match is over.
///
/// The board and turn are only ever mutated through
/// [`Game::make_move`], and only when it returns
/// [`Validation::LegalMove`] or [`Validation::Checkmate`]; every other
/// outcome leaves the match untouched. Once a winner is set the match is
/// terminal and every further move attempt is rejected uniformly.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    winner: Option<Color>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a match from the standard starting position, White to
    /// move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Color::White)
    }

    /// Creates a match from an arbitrary position.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Game {
            board,
            turn,
            winner: None,
        }
    }

    /// Creates a match from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let (board, turn) = Board::from_fen(fen)?;
        Ok(Self::from_board(board, turn))
    }

    /// Returns a reference to the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the winner, if the match is over.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Returns true once the match has finished.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Returns true if `color`'s king is currently attacked.
    pub fn is_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    /// Every legal destination for the piece at `at`; empty for an
    /// empty square.
    pub fn legal_destinations(&self, at: Coord) -> Vec<Coord> {
        legal_destinations(&self.board, at)
    }

    /// Every legal movement for `color` on the live board.
    pub fn legal_moves(&self, color: Color) -> MoveList {
        generate_moves(&self.board, color)
    }

    /// Renders the live position as a FEN string.
    pub fn to_fen(&self) -> String {
        self.board.to_fen(self.turn)
    }

    /// Attempts to execute a move for the side to move.
    ///
    /// Rejections are reported through the returned [`Validation`], never
    /// as errors, and leave the board and turn untouched. A move that
    /// leaves the opponent without a single legal reply finishes the
    /// match and returns [`Validation::Checkmate`]; the mover is recorded
    /// as the winner whether or not the opponent is in check.
    pub fn make_move(&mut self, movement: Movement) -> Validation {
        if self.winner.is_some() {
            return Validation::MatchFinished;
        }

        // Turn ownership comes before general validation. An empty or
        // off-board origin falls through so the validator reports the
        // more precise outcome.
        if let Some((_, color)) = self.board.piece_at(movement.from) {
            if color != self.turn {
                return Validation::IllegalMove;
            }
        }

        let result = validate(&self.board, movement);
        if result != Validation::LegalMove {
            return result;
        }

        self.board.apply(movement);

        if generate_moves(&self.board, self.turn.opposite()).is_empty() {
            self.winner = Some(self.turn);
            return Validation::Checkmate;
        }

        self.turn = self.turn.opposite();
        Validation::LegalMove
    }
}
