//! Check and checkmate detection
//!
//! Both detectors rescan the whole board on every call. Check status is
//! recomputed in full after each move; nothing is updated incrementally.

use super::board::Board;
use super::legality::legal_moves;
use super::piece_moves::get_possible_moves;
use crate::game::types::{Color, Square};

/// Per-color "king is attacked" flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckStatus {
    pub white: bool,
    pub black: bool,
}

impl CheckStatus {
    pub fn get(&self, color: Color) -> bool {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn set(&mut self, color: Color, in_check: bool) {
        match color {
            Color::White => self.white = in_check,
            Color::Black => self.black = in_check,
        }
    }
}

/// Whether any `attacker` piece has a pseudo-legal move onto `target`
pub fn is_attacked(board: &Board, target: Square, attacker: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == attacker)
        .any(|(from, _)| get_possible_moves(board, from).contains(&target))
}

/// Check flags for both colors
///
/// A color without a king on the board is never in check.
pub fn check_status(board: &Board) -> CheckStatus {
    let mut status = CheckStatus::default();
    for (square, piece) in board.pieces().filter(|(_, piece)| piece.is_king()) {
        status.set(
            piece.color,
            is_attacked(board, square, piece.color.opposite()),
        );
    }
    status
}

/// Whether `color` has no legal move with any of its pieces
///
/// This alone does not distinguish checkmate from stalemate; callers pair it
/// with [`check_status`].
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    board
        .squares_of(color)
        .into_iter()
        .all(|square| legal_moves(board, square).is_empty())
}
