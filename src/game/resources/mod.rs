//! Game state resources owned by a [`GameState`](crate::game::state::GameState)
//!
//! # Resource Categories
//!
//! ## Player Interaction
//! - [`Selection`] - Currently selected square and its legal destinations
//!
//! ## Game History
//! - [`CapturedPieces`] - Captured pieces per capturing color and material balance
//!
//! ## Game Status
//! - [`GameOverState`] - Win/draw conditions

pub mod captured;
pub mod game_over;
pub mod selection;

pub use captured::CapturedPieces;
pub use game_over::GameOverState;
pub use selection::{MoveTarget, Selection};
