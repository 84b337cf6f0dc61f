//! Board representation for move generation and legality checks
//!
//! A flat array of 64 optional pieces. The board is `Copy`: legality checking
//! simulates a move on a copy, never on the live game board.

use crate::game::types::{Color, Move, Piece, PieceKind, Square};

/// Back rank layout from column 0 to 7
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional pieces, indexed row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Standard starting position
    ///
    /// Black occupies rows 0-1, White rows 6-7.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_ROW.iter().enumerate() {
            let col = col as u8;
            board.put(0, col, Piece::new(kind, Color::Black));
            board.put(1, col, Piece::new(PieceKind::Pawn, Color::Black));
            board.put(6, col, Piece::new(PieceKind::Pawn, Color::White));
            board.put(7, col, Piece::new(kind, Color::White));
        }
        board
    }

    fn put(&mut self, row: u8, col: u8, piece: Piece) {
        self.squares[row as usize * 8 + col as usize] = Some(piece);
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// Move the piece on `from` to `to`
    ///
    /// Returns whatever previously occupied `to`. `from` is left empty. No
    /// legality is checked here.
    pub fn apply(&mut self, mv: Move) -> Option<Piece> {
        let moving = self.squares[mv.from.index()].take();
        std::mem::replace(&mut self.squares[mv.to.index()], moving)
    }

    /// Occupied squares in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    /// Squares holding pieces of `color`, row-major
    pub fn squares_of(&self, color: Color) -> Vec<Square> {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(square, _)| square)
            .collect()
    }

    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }

    /// Square of `color`'s king, if it is on the board
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is_king() && piece.color == color)
            .map(|(square, _)| square)
    }
}
