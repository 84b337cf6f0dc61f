//! Rejection reasons for game operations
//!
//! The engine never fails on bad input. A request that cannot be honoured is
//! a no-op, and the reason is reported through [`MoveRejection`] so callers
//! and logs can tell the cases apart.

/// Why a move request changed nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    /// The game is not in the active phase (setup or already finished)
    #[error("Game is not active")]
    GameNotActive,

    /// No square is selected, or the move does not start from it
    #[error("No selection for the source square")]
    NoSelection,

    /// The destination is not in the cached legal set
    #[error("Move is not in the legal set for the selected square")]
    NotInLegalSet,

    /// The destination holds a king
    #[error("Kings cannot be captured")]
    KingCapture,

    /// The side to move is not computer-controlled
    #[error("Side to move is not controlled by the computer")]
    NotAiTurn,

    /// The side to move has no legal move at all
    #[error("Side to move has no legal moves")]
    NoLegalMoves,

    /// A deferred computer move outlived the game it was scheduled for
    #[error("Deferred move belongs to an earlier game (epoch {ticket}, current {current})")]
    StaleEpoch { ticket: u64, current: u64 },

    /// A deferred computer move was cancelled or replaced by a newer one
    #[error("Deferred move is no longer pending")]
    Cancelled,

    /// A deferred computer move was run before its presentation delay elapsed
    #[error("Deferred move is not due yet")]
    NotDue,
}
