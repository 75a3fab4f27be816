//! Move generation and legality filtering.
//!
//! Each piece kind has one pseudo-legal generator with the signature
//! `fn(board, origin, filter_checks) -> Vec<Coord>`. With
//! `filter_checks` set, the raw output is passed through
//! [`filter_own_check`] so no returned destination leaves the mover's own
//! king in check; the unfiltered form exists for the check detector,
//! which would otherwise recurse into itself.

use crate::board::{Board, Square};
use chess_core::{Color, Coord, Movement, Piece};

/// Rook ray directions, in generation order.
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Bishop ray directions, in generation order.
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight knight jumps, in generation order.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (-2, 1),
    (-2, -1),
    (1, -2),
    (1, 2),
    (-1, 2),
    (-1, -2),
];

/// The eight king steps, in generation order.
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

/// A list of movements with a fixed maximum capacity.
///
/// No reachable position produces anywhere near this many moves, so a
/// fixed-size array avoids heap allocation during enumeration.
#[derive(Clone)]
pub struct MoveList {
    moves: [Movement; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Upper bound on the number of moves in any position.
    pub const MAX_MOVES: usize = 256;

    const FILL: Movement = Movement::new(Coord::new(0, 0), Coord::new(0, 0));

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Self::FILL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a movement to the list.
    #[inline]
    pub fn push(&mut self, m: Movement) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of movements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the movements.
    #[inline]
    pub fn as_slice(&self) -> &[Movement] {
        &self.moves[..self.len]
    }

    /// Returns an iterator over the movements.
    pub fn iter(&self) -> std::slice::Iter<'_, Movement> {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Movement;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Movement;
    type IntoIter = std::slice::Iter<'a, Movement>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Walks from `origin` along `direction` until blocked.
///
/// The ray stops before the board edge and before a friendly piece; an
/// enemy piece is included and then ends the ray. The result is a lazy,
/// finite iterator; a fresh call re-walks from the origin.
pub fn cast_ray(
    board: &Board,
    origin: Coord,
    direction: (i8, i8),
) -> impl Iterator<Item = Coord> + '_ {
    let (dr, dc) = direction;
    let mover = board.square(origin).and_then(Square::color);

    std::iter::successors(Some(origin.offset(dr, dc)), move |c| {
        Some(c.offset(dr, dc))
    })
    .take_while(|c| c.is_on_board())
    .scan(false, move |blocked, c| {
        if *blocked {
            return None;
        }
        match board.square(c)? {
            Square::Empty => Some(c),
            occupied if occupied.color() == mover => None,
            _ => {
                *blocked = true;
                Some(c)
            }
        }
    })
}

fn ray_union(board: &Board, origin: Coord, directions: &[(i8, i8)]) -> Vec<Coord> {
    directions
        .iter()
        .flat_map(|&direction| cast_ray(board, origin, direction))
        .collect()
}

fn offset_destinations(board: &Board, origin: Coord, offsets: &[(i8, i8); 8]) -> Vec<Coord> {
    let mover = board.square(origin).and_then(Square::color);

    offsets
        .iter()
        .map(|&(dr, dc)| origin.offset(dr, dc))
        .filter(|&to| match board.square(to) {
            Some(Square::Empty) => true,
            Some(occupied) => occupied.color() != mover,
            None => false, // off-board destinations are silently excluded
        })
        .collect()
}

fn maybe_filter(
    board: &Board,
    origin: Coord,
    candidates: Vec<Coord>,
    filter_checks: bool,
) -> Vec<Coord> {
    if filter_checks {
        filter_own_check(board, origin, candidates)
    } else {
        candidates
    }
}

/// Pseudo-legal destinations for the pawn at `origin`: one square
/// forward onto an empty square, diagonal-forward captures of enemy
/// pieces, and a two-square advance from the pawn's starting rank when
/// both squares ahead are empty.
pub fn pawn_destinations(board: &Board, origin: Coord, filter_checks: bool) -> Vec<Coord> {
    let Some((_, color)) = board.piece_at(origin) else {
        return Vec::new();
    };
    let dir = color.pawn_direction();
    let mut out = Vec::new();

    let forward = origin.offset(dir, 0);
    if board.square(forward) == Some(Square::Empty) {
        out.push(forward);
    }

    for side in [1, -1] {
        let capture = origin.offset(dir, side);
        if board.square(capture).and_then(Square::color) == Some(color.opposite()) {
            out.push(capture);
        }
    }

    if origin.row == color.pawn_rank() {
        let double = origin.offset(2 * dir, 0);
        if board.square(forward) == Some(Square::Empty)
            && board.square(double) == Some(Square::Empty)
        {
            out.push(double);
        }
    }

    maybe_filter(board, origin, out, filter_checks)
}

/// Pseudo-legal destinations for the knight at `origin`: the eight
/// jump offsets, each kept if its own target square is on the board and
/// empty or enemy-held.
pub fn knight_destinations(board: &Board, origin: Coord, filter_checks: bool) -> Vec<Coord> {
    let out = offset_destinations(board, origin, &KNIGHT_OFFSETS);
    maybe_filter(board, origin, out, filter_checks)
}

/// Pseudo-legal destinations for the bishop at `origin`.
pub fn bishop_destinations(board: &Board, origin: Coord, filter_checks: bool) -> Vec<Coord> {
    let out = ray_union(board, origin, &DIAGONALS);
    maybe_filter(board, origin, out, filter_checks)
}

/// Pseudo-legal destinations for the rook at `origin`.
pub fn rook_destinations(board: &Board, origin: Coord, filter_checks: bool) -> Vec<Coord> {
    let out = ray_union(board, origin, &ORTHOGONALS);
    maybe_filter(board, origin, out, filter_checks)
}

/// Pseudo-legal destinations for the queen at `origin`: the bishop and
/// rook rays combined.
pub fn queen_destinations(board: &Board, origin: Coord, filter_checks: bool) -> Vec<Coord> {
    let mut out = ray_union(board, origin, &DIAGONALS);
    out.extend(ray_union(board, origin, &ORTHOGONALS));
    maybe_filter(board, origin, out, filter_checks)
}

/// Pseudo-legal destinations for the king at `origin`: the eight
/// adjacent squares under the same empty-or-enemy rule as the knight.
/// Castling does not exist in this rule set.
pub fn king_destinations(board: &Board, origin: Coord, filter_checks: bool) -> Vec<Coord> {
    let out = offset_destinations(board, origin, &KING_OFFSETS);
    maybe_filter(board, origin, out, filter_checks)
}

/// Destinations for whatever occupies `origin`, dispatched on the piece
/// kind; an empty or off-board origin yields no destinations.
pub fn destinations(board: &Board, origin: Coord, filter_checks: bool) -> Vec<Coord> {
    match board.piece_at(origin) {
        Some((Piece::Pawn, _)) => pawn_destinations(board, origin, filter_checks),
        Some((Piece::Knight, _)) => knight_destinations(board, origin, filter_checks),
        Some((Piece::Bishop, _)) => bishop_destinations(board, origin, filter_checks),
        Some((Piece::Rook, _)) => rook_destinations(board, origin, filter_checks),
        Some((Piece::Queen, _)) => queen_destinations(board, origin, filter_checks),
        Some((Piece::King, _)) => king_destinations(board, origin, filter_checks),
        None => Vec::new(),
    }
}

/// Legality-filtered destinations for the piece at `origin`; empty for
/// an empty square.
pub fn legal_destinations(board: &Board, origin: Coord) -> Vec<Coord> {
    destinations(board, origin, true)
}

/// Discards every candidate that would leave the mover's own king in
/// check.
///
/// Each candidate is simulated on a scratch copy of the board (piece
/// moved, origin cleared); the copy is private to the one simulation and
/// discarded after the check test. This is the single mechanism that
/// keeps a move from exposing its own king, applied uniformly to every
/// piece kind including the king itself.
pub fn filter_own_check(board: &Board, origin: Coord, candidates: Vec<Coord>) -> Vec<Coord> {
    let Some((_, mover)) = board.piece_at(origin) else {
        return Vec::new();
    };

    candidates
        .into_iter()
        .filter(|&to| {
            let mut scratch = *board;
            scratch.apply(Movement::new(origin, to));
            !is_in_check(&scratch, mover)
        })
        .collect()
}

/// Returns true if `color`'s king square is a pseudo-legal destination
/// of any opposing piece.
///
/// # Panics
///
/// Panics if `color` has no king on the board (see
/// [`Board::king_square`]).
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let king = board.king_square(color);
    pseudo_moves(board, color.opposite())
        .iter()
        .any(|m| m.to == king)
}

/// Every legal movement for `color`, enumerated row-major over the board
/// (row 0 to 7, column 0 to 7) with each piece's destinations in its
/// generator's order.
pub fn generate_moves(board: &Board, color: Color) -> MoveList {
    moves_for(board, color, true)
}

/// Unfiltered variant of [`generate_moves`], used by the check detector.
fn pseudo_moves(board: &Board, color: Color) -> MoveList {
    moves_for(board, color, false)
}

fn moves_for(board: &Board, color: Color, filter_checks: bool) -> MoveList {
    let mut moves = MoveList::new();

    for from in Board::coords() {
        if board.square(from).and_then(Square::color) != Some(color) {
            continue;
        }
        for to in destinations(board, from, filter_checks) {
            moves.push(Movement::new(from, to));
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(name: &str) -> Coord {
        Coord::from_algebraic(name).unwrap()
    }

    fn place(board: &mut Board, name: &str, color: Color, piece: Piece) {
        board.set(coord(name), Square::Occupied(color, piece));
    }

    #[test]
    fn movelist_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        let m1 = Movement::new(coord("e2"), coord("e4"));
        let m2 = Movement::new(coord("d2"), coord("d4"));
        list.push(m1);
        list.push(m2);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], m1);
        assert_eq!(list[1], m2);
        assert_eq!(list.iter().count(), 2);
    }

    #[test]
    fn ray_stops_at_board_edge() {
        let mut board = Board::empty();
        place(&mut board, "e4", Color::White, Piece::Rook);

        let up: Vec<Coord> = cast_ray(&board, coord("e4"), (1, 0)).collect();
        assert_eq!(up, vec![coord("e5"), coord("e6"), coord("e7"), coord("e8")]);
    }

    #[test]
    fn ray_stops_before_friend_and_on_enemy() {
        let mut board = Board::empty();
        place(&mut board, "e4", Color::White, Piece::Rook);
        place(&mut board, "e6", Color::White, Piece::Pawn);
        place(&mut board, "c4", Color::Black, Piece::Pawn);

        let up: Vec<Coord> = cast_ray(&board, coord("e4"), (1, 0)).collect();
        assert_eq!(up, vec![coord("e5")]);

        let left: Vec<Coord> = cast_ray(&board, coord("e4"), (0, -1)).collect();
        assert_eq!(left, vec![coord("d4"), coord("c4")]);
    }

    #[test]
    fn ray_is_restartable_per_call() {
        let mut board = Board::empty();
        place(&mut board, "a1", Color::White, Piece::Rook);

        let first: Vec<Coord> = cast_ray(&board, coord("a1"), (0, 1)).collect();
        let second: Vec<Coord> = cast_ray(&board, coord("a1"), (0, 1)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn pawn_single_and_double_from_start() {
        let board = Board::startpos();
        let moves = pawn_destinations(&board, coord("e2"), false);
        assert_eq!(moves, vec![coord("e3"), coord("e4")]);
    }

    #[test]
    fn pawn_blocked_by_any_piece() {
        let mut board = Board::startpos();
        place(&mut board, "e3", Color::Black, Piece::Knight);
        assert!(pawn_destinations(&board, coord("e2"), false).is_empty());
    }

    #[test]
    fn pawn_double_needs_both_squares_empty() {
        let mut board = Board::startpos();
        place(&mut board, "e4", Color::Black, Piece::Knight);
        assert_eq!(
            pawn_destinations(&board, coord("e2"), false),
            vec![coord("e3")]
        );
    }

    #[test]
    fn pawn_captures_only_enemies() {
        let mut board = Board::empty();
        place(&mut board, "d4", Color::White, Piece::Pawn);
        place(&mut board, "e5", Color::Black, Piece::Pawn);
        place(&mut board, "c5", Color::White, Piece::Pawn);

        let moves = pawn_destinations(&board, coord("d4"), false);
        assert_eq!(moves, vec![coord("d5"), coord("e5")]);
    }

    #[test]
    fn pawn_no_double_off_start_rank() {
        let mut board = Board::empty();
        place(&mut board, "e3", Color::White, Piece::Pawn);
        assert_eq!(
            pawn_destinations(&board, coord("e3"), false),
            vec![coord("e4")]
        );
    }

    #[test]
    fn black_pawn_moves_toward_row_zero() {
        let board = Board::startpos();
        let moves = pawn_destinations(&board, coord("e7"), false);
        assert_eq!(moves, vec![coord("e6"), coord("e5")]);
    }

    #[test]
    fn knight_in_the_middle_has_eight_jumps() {
        let mut board = Board::empty();
        place(&mut board, "d4", Color::White, Piece::Knight);
        assert_eq!(knight_destinations(&board, coord("d4"), false).len(), 8);
    }

    #[test]
    fn knight_in_the_corner_excludes_off_board() {
        let mut board = Board::empty();
        place(&mut board, "a1", Color::White, Piece::Knight);
        let moves = knight_destinations(&board, coord("a1"), false);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&coord("b3")));
        assert!(moves.contains(&coord("c2")));
    }

    #[test]
    fn knight_destination_gated_on_its_own_square() {
        // A friendly piece on one jump square must not affect the others.
        let mut board = Board::empty();
        place(&mut board, "d4", Color::White, Piece::Knight);
        place(&mut board, "e6", Color::White, Piece::Pawn);
        place(&mut board, "c6", Color::Black, Piece::Pawn);

        let moves = knight_destinations(&board, coord("d4"), false);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&coord("e6")));
        assert!(moves.contains(&coord("c6")));
    }

    #[test]
    fn bishop_rays_blocked_correctly() {
        let mut board = Board::empty();
        place(&mut board, "c1", Color::White, Piece::Bishop);
        place(&mut board, "e3", Color::Black, Piece::Pawn);

        let moves = bishop_destinations(&board, coord("c1"), false);
        assert!(moves.contains(&coord("d2")));
        assert!(moves.contains(&coord("e3"))); // capture ends the ray
        assert!(!moves.contains(&coord("f4")));
        assert!(moves.contains(&coord("b2")));
        assert!(moves.contains(&coord("a3")));
    }

    #[test]
    fn queen_is_bishop_plus_rook() {
        let mut board = Board::empty();
        place(&mut board, "d4", Color::White, Piece::Queen);

        let queen = queen_destinations(&board, coord("d4"), false);
        let bishop = bishop_destinations(&board, coord("d4"), false);
        let rook = rook_destinations(&board, coord("d4"), false);

        assert_eq!(queen.len(), bishop.len() + rook.len());
        for c in bishop.iter().chain(rook.iter()) {
            assert!(queen.contains(c));
        }
    }

    #[test]
    fn king_steps_one_square() {
        let mut board = Board::empty();
        place(&mut board, "e1", Color::White, Piece::King);
        place(&mut board, "e2", Color::White, Piece::Pawn);
        place(&mut board, "d2", Color::Black, Piece::Pawn);

        let moves = king_destinations(&board, coord("e1"), false);
        assert!(!moves.contains(&coord("e2"))); // own pawn
        assert!(moves.contains(&coord("d2"))); // enemy pawn
        assert!(moves.contains(&coord("d1")));
        assert!(moves.contains(&coord("f1")));
        assert!(moves.contains(&coord("f2")));
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn destinations_of_empty_square_are_empty() {
        let board = Board::startpos();
        assert!(destinations(&board, coord("e4"), false).is_empty());
        assert!(legal_destinations(&board, coord("e4")).is_empty());
    }

    #[test]
    fn filter_removes_moves_that_expose_the_king() {
        // White king e1, white rook e2, black queen e8: the rook is
        // pinned to the file and may only slide along it.
        let mut board = Board::empty();
        place(&mut board, "e1", Color::White, Piece::King);
        place(&mut board, "e2", Color::White, Piece::Rook);
        place(&mut board, "e8", Color::Black, Piece::Queen);
        place(&mut board, "a8", Color::Black, Piece::King);

        let pseudo = rook_destinations(&board, coord("e2"), false);
        assert!(pseudo.contains(&coord("a2")));

        let legal = rook_destinations(&board, coord("e2"), true);
        assert!(!legal.is_empty());
        for c in &legal {
            assert_eq!(c.column, 4, "pinned rook left the e-file: {}", c);
        }
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut board = Board::empty();
        place(&mut board, "e1", Color::White, Piece::King);
        place(&mut board, "d8", Color::Black, Piece::Rook);
        place(&mut board, "h8", Color::Black, Piece::King);

        let legal = king_destinations(&board, coord("e1"), true);
        assert!(!legal.contains(&coord("d1")));
        assert!(!legal.contains(&coord("d2")));
        assert!(legal.contains(&coord("e2")));
        assert!(legal.contains(&coord("f1")));
    }

    #[test]
    fn startpos_move_counts() {
        let board = Board::startpos();
        assert_eq!(generate_moves(&board, Color::White).len(), 20);
        assert_eq!(generate_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn startpos_is_not_check() {
        let board = Board::startpos();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn check_from_a_queen_on_the_file() {
        let mut board = Board::empty();
        place(&mut board, "e1", Color::White, Piece::King);
        place(&mut board, "e8", Color::Black, Piece::Queen);
        place(&mut board, "a8", Color::Black, Piece::King);

        assert!(is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn blocked_queen_gives_no_check() {
        let mut board = Board::empty();
        place(&mut board, "e1", Color::White, Piece::King);
        place(&mut board, "e4", Color::White, Piece::Pawn);
        place(&mut board, "e8", Color::Black, Piece::Queen);
        place(&mut board, "a8", Color::Black, Piece::King);

        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn generate_moves_is_row_major() {
        let board = Board::startpos();
        let moves = generate_moves(&board, Color::White);

        let mut last_from = Coord::new(0, 0);
        for m in &moves {
            let key = (m.from.row, m.from.column);
            assert!(key >= (last_from.row, last_from.column));
            last_from = m.from;
        }
    }
}
