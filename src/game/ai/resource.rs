//! AI resource definitions for game mode and difficulty settings
//!
//! # Game Modes
//!
//! - **PlayerVsPlayer**: Two human players (local hot-seat)
//! - **PlayerVsComputer**: One human player vs the computer (specify AI color)
//!
//! # Difficulty Levels
//!
//! | Difficulty | Capture choice                       |
//! |------------|--------------------------------------|
//! | Easy       | First capture found                  |
//! | Medium     | First capture found                  |
//! | Hard       | Most valuable capture, first on ties |
//!
//! Every level answers check with a random legal move and falls back to a
//! random piece when no capture exists.

use crate::game::types::Color;
use serde::{Deserialize, Serialize};

/// Who controls each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Both sides take moves from the caller
    PlayerVsPlayer,
    /// The computer plays `ai_color`
    PlayerVsComputer { ai_color: Color },
}

impl Default for GameMode {
    /// Computer plays Black
    fn default() -> Self {
        GameMode::PlayerVsComputer {
            ai_color: Color::Black,
        }
    }
}

impl GameMode {
    /// Color played by the computer, if any
    pub fn ai_color(self) -> Option<Color> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer { ai_color } => Some(ai_color),
        }
    }

    pub fn is_ai_turn(self, to_move: Color) -> bool {
        self.ai_color() == Some(to_move)
    }
}

/// Computer opponent strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiDifficulty {
    Easy,
    #[default]
    Medium,
    /// Prefers the capture that wins the most material
    Hard,
}

impl AiDifficulty {
    pub fn description(self) -> &'static str {
        match self {
            AiDifficulty::Easy => "Easy",
            AiDifficulty::Medium => "Medium",
            AiDifficulty::Hard => "Hard",
        }
    }

    pub(crate) fn prefers_valuable_captures(self) -> bool {
        self == AiDifficulty::Hard
    }
}
