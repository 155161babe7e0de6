use std::time::{Duration, Instant};

use crate::controller::Direction;
use crate::deck::RenderedSlide;

pub const TRANSITION_DURATION: Duration = Duration::from_millis(450);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    SlideHorizontal,
    Fade,
    None,
}

impl TransitionKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "fade" => Self::Fade,
            "none" => Self::None,
            _ => Self::SlideHorizontal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::SlideHorizontal => "slide",
            Self::Fade => "fade",
            Self::None => "none",
        }
    }

    pub fn cycled(self) -> Self {
        match self {
            Self::SlideHorizontal => Self::Fade,
            Self::Fade => Self::None,
            Self::None => Self::SlideHorizontal,
        }
    }
}

/// An in-flight slide change. Holds a snapshot of the outgoing slide so
/// navigation can keep going while the animation plays.
#[derive(Debug, Clone)]
pub struct ActiveTransition {
    pub outgoing: RenderedSlide,
    pub kind: TransitionKind,
    pub direction: Direction,
    pub start: Instant,
}

impl ActiveTransition {
    pub fn new(outgoing: RenderedSlide, kind: TransitionKind, direction: Direction, start: Instant) -> Self {
        Self {
            outgoing,
            kind,
            direction,
            start,
        }
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        let raw = now.saturating_duration_since(self.start).as_secs_f32()
            / TRANSITION_DURATION.as_secs_f32();
        ease_in_out(raw.clamp(0.0, 1.0))
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.kind == TransitionKind::None
            || now.saturating_duration_since(self.start) >= TRANSITION_DURATION
    }

    /// Horizontal sign the outgoing slide moves in.
    pub fn sign(&self) -> f32 {
        match self.direction {
            Direction::Backward => 1.0,
            Direction::Forward | Direction::None => -1.0,
        }
    }
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
