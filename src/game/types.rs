//! Type definitions for chess game logic
//!
//! Value types shared by every engine component: squares, colors, pieces and
//! moves. All of them are `Copy`, so simulation code passes them around freely.
//!
//! # Coordinates
//!
//! A [`Square`] is a `(row, col)` pair, both in `0..8`. Row 0 is Black's back
//! rank and row 7 is White's back rank, so algebraic `a8` is `(0, 0)` and `h1`
//! is `(7, 7)`. Off-board squares cannot be constructed: every constructor is
//! checked and returns `Option`.

use std::fmt;

/// Number of rows and columns on the board
pub const BOARD_SIZE: i8 = 8;

/// Board square position (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square from row and column indices
    ///
    /// Returns `None` when either coordinate is outside `0..8`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chess_rules::game::types::Square;
    ///
    /// let e1 = Square::new(7, 4).unwrap();
    /// assert_eq!(e1.to_algebraic(), "e1");
    /// assert!(Square::new(8, 0).is_none());
    /// ```
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Create a square from a flat row-major index (0..64)
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Square {
                row: (index / 8) as u8,
                col: (index % 8) as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let col = match file_char {
            'a'..='h' => file_char as u8 - b'a',
            _ => return None,
        };
        let rank = rank_char.to_digit(10)? as u8;
        if !(1..=8).contains(&rank) {
            return None;
        }
        Square::new(8 - rank, col)
    }

    /// Convert square to algebraic notation (e.g., "e4")
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col) as char, 8 - self.row)
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Flat row-major index (0..64)
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Step by a (row, col) delta, staying on the board
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row that this color's pawns start on
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Standard material value in pawns
    ///
    /// The king has no material value: it is never captured.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

/// A piece occupying a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }
}

/// An ordered (from, to) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
