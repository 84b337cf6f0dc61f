//! Chess rules module - Pure game logic without session coupling
//!
//! Implements move generation, legality filtering and check detection as pure
//! functions over a [`Board`] value.
//!
//! # Module Structure
//!
//! - `board` - Fixed 8x8 board of optional pieces with cheap copies
//! - `piece_moves` - Pseudo-legal movement rules for each piece type
//! - `legality` - Filters pseudo-legal moves down to king-safe ones
//! - `check` - Check status for both colors and the no-legal-move test
//!
//! # Dependency Order
//!
//! `board` <- `piece_moves` <- `check::is_attacked` <- `legality` <- `check::is_checkmate`

pub mod board;
pub mod check;
pub mod legality;
pub mod piece_moves;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use board::Board;
pub use check::{check_status, is_attacked, is_checkmate, CheckStatus};
pub use legality::{all_legal_moves, is_legal, legal_moves};
pub use piece_moves::get_possible_moves;
