//! Text rendering of positions
//!
//! Uses the Unicode chess glyphs, rank 8 at the top.

use crate::game::rules::Board;
use crate::game::types::{Color, Piece, PieceKind, Square};

/// Unicode glyph for a piece
pub fn glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '♔',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Pawn) => '♟',
    }
}

/// Render the board with rank and file labels; empty squares are `.`
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..8u8 {
        out.push_str(&format!("{} ", 8 - row));
        for col in 0..8u8 {
            let symbol = Square::new(row, col)
                .and_then(|square| board.get(square))
                .map_or('.', glyph);
            out.push(symbol);
            if col < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out
}
