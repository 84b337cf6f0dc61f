//! Chess game logic
//!
//! # Module Organization
//!
//! - `types` - Squares, colors, pieces and moves
//! - `rules` - Pure chess logic (board, move generation, legality, check)
//! - `resources` - Per-game records (selection cache, captured pieces, game over)
//! - `state` - The mutable game state and move application
//! - `ai` - Computer opponent (difficulty, move selection, deferred moves)
//! - `session` - External interface tying state, mode and computer together
//! - `error` - Move rejection reasons

pub mod ai;
pub mod error;
pub mod resources;
pub mod rules;
pub mod session;
pub mod state;
pub mod types;

pub use session::GameSession;
pub use state::{GamePhase, GameState, MoveOutcome, MoveReport};
