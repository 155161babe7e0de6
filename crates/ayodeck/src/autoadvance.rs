use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::controller::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    position: Position,
    deadline: Instant,
}

/// A single cancellable advance, bound to the position it was armed for.
#[derive(Debug, Clone, Default)]
pub struct AutoAdvance {
    pending: Option<Pending>,
}

impl AutoAdvance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule one advance for `position`, replacing any earlier schedule.
    pub fn arm(&mut self, position: Position, delay: Duration, now: Instant) {
        debug!(%position, delay_ms = delay.as_millis() as u64, "auto-advance armed");
        self.pending = Some(Pending {
            position,
            deadline: now + delay,
        });
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            trace!(position = %pending.position, "auto-advance cancelled");
        }
    }

    pub fn armed_for(&self) -> Option<Position> {
        self.pending.map(|p| p.position)
    }

    /// True once the deadline has passed while `current` is still the armed
    /// position. A schedule for any other position is dropped unfired.
    pub fn poll(&mut self, now: Instant, current: Position) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if pending.position != current {
            trace!(armed = %pending.position, %current, "stale auto-advance discarded");
            self.pending = None;
            return false;
        }
        if now < pending.deadline {
            return false;
        }
        self.pending = None;
        debug!(position = %current, "auto-advance fired");
        true
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|p| p.deadline.saturating_duration_since(now))
    }

    /// Keep the schedule in step with the view: arm for `position` when the
    /// slide there has a delay, cancel otherwise. An existing schedule for the
    /// same position is left untouched.
    pub fn retarget(&mut self, position: Position, delay: Option<Duration>, now: Instant) {
        match delay {
            Some(delay) if !delay.is_zero() => {
                if self.armed_for() != Some(position) {
                    self.arm(position, delay, now);
                }
            }
            _ => self.cancel(),
        }
    }
}
