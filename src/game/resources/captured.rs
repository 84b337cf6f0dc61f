//! Captured pieces tracking
//!
//! Tracks pieces captured by each player and calculates material advantage.
//! Used by presentation layers for the captured-piece trays.
//!
//! # Material Values
//!
//! Standard chess piece values in pawns (see [`PieceKind::value`]):
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0 (cannot be captured)
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: If White captured (Rook=5, Pawn=1) and Black captured (Knight=3),
//! White's advantage is (5+1) - 3 = +3 pawns.

use crate::game::types::{Color, Piece, PieceKind};

/// Append-only captured piece lists, one per capturing color
///
/// # Fields
///
/// - `white_captured`: Black pieces that White has captured
/// - `black_captured`: White pieces that Black has captured
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Pieces captured by white (black pieces taken)
    pub white_captured: Vec<Piece>,
    /// Pieces captured by black (white pieces taken)
    pub black_captured: Vec<Piece>,
}

impl CapturedPieces {
    /// Record a capture under the capturing color
    ///
    /// The captured piece's own color decides who gets credit: a black piece
    /// taken is credited to White and vice versa.
    ///
    /// ```rust
    /// use chess_rules::game::resources::CapturedPieces;
    /// use chess_rules::game::types::{Color, Piece, PieceKind};
    ///
    /// let mut captured = CapturedPieces::default();
    /// captured.add_capture(Piece::new(PieceKind::Queen, Color::Black));
    /// assert_eq!(captured.by(Color::White).len(), 1);
    /// ```
    pub fn add_capture(&mut self, captured: Piece) {
        match captured.color {
            // If white piece was captured, black gets credit
            Color::White => self.black_captured.push(captured),
            // If black piece was captured, white gets credit
            Color::Black => self.white_captured.push(captured),
        }
    }

    /// Pieces captured by `capturer`, in capture order
    pub fn by(&self, capturer: Color) -> &[Piece] {
        match capturer {
            Color::White => &self.white_captured,
            Color::Black => &self.black_captured,
        }
    }

    /// Material difference in pawn units
    ///
    /// Returns positive if White is ahead, negative if Black is ahead, 0 if equal.
    pub fn material_advantage(&self) -> i32 {
        let white_score: i32 = self.white_captured.iter().map(|p| p.kind.value()).sum();
        let black_score: i32 = self.black_captured.iter().map(|p| p.kind.value()).sum();
        white_score - black_score
    }

    pub fn total(&self) -> usize {
        self.white_captured.len() + self.black_captured.len()
    }
}

/// Whether any recorded capture is a king
///
/// Kings are never legal capture targets, so this stays false in every game
/// played through the session API.
pub fn contains_king(captured: &CapturedPieces) -> bool {
    captured
        .white_captured
        .iter()
        .chain(&captured.black_captured)
        .any(|p| p.kind == PieceKind::King)
}
