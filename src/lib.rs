//! Chess rules engine
//!
//! Move generation, legality filtering, check and checkmate detection, game
//! state transitions and a heuristic computer opponent.
//!
//! - [`game`] - Rules, game state and the computer opponent
//! - [`core`] - Engine configuration and its persistence
//! - [`display`] - Text rendering of positions

pub mod core;
pub mod display;
pub mod game;

pub use game::GameSession;
