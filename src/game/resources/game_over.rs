//! Game over state tracking and result management
//!
//! Tracks end-game conditions and provides methods for determining the game
//! outcome and displaying results.
//!
//! # Game Over Conditions
//!
//! ## Checkmate
//! - **WhiteWon**: Black is in check with no legal moves
//! - **BlackWon**: White is in check with no legal moves
//!
//! ## Draw Conditions
//! - **Stalemate**: The side to move has no legal moves but is NOT in check.
//!   Only declared under [`NoMoveRule::Strict`](crate::core::config::NoMoveRule).
//!
//! # State Transitions
//!
//! ```text
//! Playing → WhiteWon / BlackWon / Stalemate
//! ```
//!
//! All non-Playing states are terminal (game cannot continue).

use crate::game::types::Color;

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,

    /// White won by checkmate
    WhiteWon,

    /// Black won by checkmate
    BlackWon,

    /// Draw by stalemate
    Stalemate,
}

impl GameOverState {
    /// Checkmate win for `winner`
    pub fn won_by(winner: Color) -> Self {
        match winner {
            Color::White => GameOverState::WhiteWon,
            Color::Black => GameOverState::BlackWon,
        }
    }

    /// Returns `true` for any non-Playing state
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Human-readable result message
    pub fn message(&self) -> &'static str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::WhiteWon => "White wins by checkmate!",
            GameOverState::BlackWon => "Black wins by checkmate!",
            GameOverState::Stalemate => "Draw by stalemate",
        }
    }

    /// Get the winner of the game, if there is one
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOverState::WhiteWon => Some(Color::White),
            GameOverState::BlackWon => Some(Color::Black),
            GameOverState::Playing | GameOverState::Stalemate => None,
        }
    }
}
