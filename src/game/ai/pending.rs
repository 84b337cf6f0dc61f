//! Deferred computer move
//!
//! The computer's reply is scheduled with a presentation delay and tagged
//! with the game epoch it was scheduled in. A ticket from an earlier epoch
//! is discarded instead of being applied to a newer game.

use web_time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeferredAiMove {
    /// Game epoch at scheduling time
    pub epoch: u64,
    pub due_at: Instant,
}

impl DeferredAiMove {
    pub fn new(epoch: u64, now: Instant, delay: Duration) -> Self {
        DeferredAiMove {
            epoch,
            due_at: now + delay,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due_at
    }

    pub fn belongs_to(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }
}
