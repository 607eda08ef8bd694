//! Deferred, cancellable flags for the event loop
//!
//! The game loop is single-threaded, so a delayed notification is just a
//! deadline that the loop checks on every tick. Nothing runs in the background.

use std::time::{Duration, Instant};

/// A flag that stays raised until its deadline passes or it is cancelled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deferred {
    deadline: Option<Instant>,
}

impl Deferred {
    /// Raise the flag, replacing any pending deadline
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the flag clears, if it is raised
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Clear the flag if its deadline has passed
    ///
    /// Returns true when this call cleared it.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
