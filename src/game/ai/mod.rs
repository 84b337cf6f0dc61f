//! Computer opponent
//!
//! - [`resource`]: game mode and difficulty settings
//! - [`selector`]: heuristic move choice for the side to move
//! - [`pending`]: epoch-tagged deferred move ticket
//!
//! The selector only proposes a move. It is applied through the same path as
//! human moves, so computer moves follow the same rules.

pub mod pending;
pub mod resource;
pub mod selector;

pub use pending::DeferredAiMove;
pub use resource::{AiDifficulty, GameMode};
pub use selector::select_move;
