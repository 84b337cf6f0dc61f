//! Legal move filtering
//!
//! Narrows pseudo-legal moves to the ones that do not leave the mover's own
//! king attacked. Every candidate is played out on a copy of the board and the
//! whole board is rescanned for attackers; there are no incremental attack maps.

use super::board::Board;
use super::check::is_attacked;
use super::piece_moves::get_possible_moves;
use crate::game::types::{Color, Move, Square};

/// Legal destinations for the piece on `from`, in generation order
///
/// A destination holding a king of either color is never legal, independent
/// of any check logic.
pub fn legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    get_possible_moves(board, from)
        .into_iter()
        .filter(|&to| {
            if board.get(to).is_some_and(|target| target.is_king()) {
                return false;
            }
            !leaves_king_attacked(board, Move::new(from, to), piece.color)
        })
        .collect()
}

/// Whether the piece on `mv.from` may legally move to `mv.to`
pub fn is_legal(board: &Board, mv: Move) -> bool {
    legal_moves(board, mv.from).contains(&mv.to)
}

/// Every legal move of `color`, pieces in row-major order
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .squares_of(color)
        .into_iter()
        .flat_map(|from| {
            legal_moves(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Simulate `mv` on a copy and test the mover's king
fn leaves_king_attacked(board: &Board, mv: Move, mover: Color) -> bool {
    let mut simulated = *board;
    simulated.apply(mv);

    match simulated.find_king(mover) {
        Some(king) => is_attacked(&simulated, king, mover.opposite()),
        // No king on the board means nothing can be exposed
        None => false,
    }
}
