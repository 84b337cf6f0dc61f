//! Chess piece movement rules
//!
//! Pseudo-legal move generation: each piece's movement pattern plus board
//! occupancy, ignoring whether the move exposes the mover's own king.
//! Pure functions with no side effects - easy to test.
//!
//! Output order is fixed (direction-list order, then distance), which keeps
//! the computer opponent reproducible for a given random seed.

use super::board::Board;
use crate::game::types::{Color, Piece, PieceKind, Square};

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Get all pseudo-legal destinations for the piece on `from`
///
/// Returns an empty list for an empty square.
pub fn get_possible_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, &mut moves),
        PieceKind::Rook => slide(board, from, piece, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Bishop => slide(board, from, piece, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Queen => {
            slide(board, from, piece, &ROOK_DIRECTIONS, &mut moves);
            slide(board, from, piece, &BISHOP_DIRECTIONS, &mut moves);
        }
        PieceKind::Knight => step(board, from, piece, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::King => step(board, from, piece, &KING_OFFSETS, &mut moves),
    }
    moves
}

fn pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    let direction = color.pawn_direction();

    // Forward moves only onto empty squares; the double step needs both clear
    if let Some(one) = from.offset(direction, 0) {
        if board.is_empty(one) {
            moves.push(one);
            if from.row() == color.pawn_start_row() {
                if let Some(two) = from.offset(2 * direction, 0) {
                    if board.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // Diagonal captures only. No en passant.
    for d_col in [-1, 1] {
        if let Some(target) = from.offset(direction, d_col) {
            if board.color_at(target) == Some(color.opposite()) {
                moves.push(target);
            }
        }
    }
}

/// Ray-cast along each direction until blocked or off the board
fn slide(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.color_at(next) {
                None => moves.push(next),
                Some(color) => {
                    if color != piece.color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Fixed single-step offsets (knight, king)
fn step(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = from.offset(d_row, d_col) {
            if board.color_at(target) != Some(piece.color) {
                moves.push(target);
            }
        }
    }
}
