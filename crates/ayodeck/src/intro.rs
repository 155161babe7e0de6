use std::time::{Duration, Instant};

/// Length of the opening branding animation.
pub const INTRO_DURATION: Duration = Duration::from_millis(3200);

/// One-shot latch that keeps navigation closed until the intro has played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntroGate {
    shown: bool,
}

impl IntroGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Returns true only for the call that opened the gate.
    pub fn complete(&mut self) -> bool {
        let first = !self.shown;
        self.shown = true;
        first
    }
}

/// The timed branding animation played before the first slide.
#[derive(Debug, Clone)]
pub struct IntroSequence {
    started: Instant,
    duration: Duration,
    fired: bool,
}

impl IntroSequence {
    pub fn new(started: Instant, duration: Duration) -> Self {
        Self {
            started,
            duration,
            fired: false,
        }
    }

    /// 0.0 at start, 1.0 once the animation has run its course.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Signals completion exactly once.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.fired || self.progress(now) < 1.0 {
            return false;
        }
        self.fired = true;
        true
    }
}
