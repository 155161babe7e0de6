#[cfg(test)]
mod tests;

use tracing::{debug, info, trace};

use crate::deck::{RenderedSlide, SlideDescriptor, SlideKind, SlideRegistry};
use crate::intro::IntroGate;

/// Direction of the most recent move, consumed by the transition animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub slide: usize,
    pub step: usize,
}

impl Position {
    pub fn new(slide: usize, step: usize) -> Self {
        Self { slide, step }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.slide, self.step)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    slide_index: usize,
    step_index: usize,
    direction: Direction,
    intro: IntroGate,
}

impl PresentationState {
    pub fn slide_index(&self) -> usize {
        self.slide_index
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn intro_shown(&self) -> bool {
        self.intro.is_shown()
    }

    pub fn position(&self) -> Position {
        Position::new(self.slide_index, self.step_index)
    }
}

/// What an `advance`/`retreat` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Moved between steps of the same interactive slide.
    Step { from: Position, to: Position },
    /// Moved to another slide.
    Slide { from: Position, to: Position },
    /// Already at the first/last position; nothing changed.
    Boundary,
    /// The intro has not finished; nothing changed.
    Gated,
}

impl Navigation {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Step { .. } | Self::Slide { .. })
    }
}

/// Owns the slide deck and the single mutable [`PresentationState`].
#[derive(Debug, Clone)]
pub struct Controller {
    registry: SlideRegistry,
    state: PresentationState,
}

impl Controller {
    pub fn new(registry: SlideRegistry) -> Self {
        Self::starting_at(registry, 0)
    }

    /// Start on `slide` (0-indexed, clamped into the deck) at its first step.
    pub fn starting_at(registry: SlideRegistry, slide: usize) -> Self {
        let slide_index = slide.min(registry.count().saturating_sub(1));
        Self {
            registry,
            state: PresentationState {
                slide_index,
                step_index: 0,
                direction: Direction::None,
                intro: IntroGate::new(),
            },
        }
    }

    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn position(&self) -> Position {
        self.state.position()
    }

    pub fn current_slide(&self) -> &SlideDescriptor {
        &self.registry[self.state.slide_index]
    }

    pub fn render_current(&self, animate: bool) -> RenderedSlide {
        self.current_slide().render(animate, self.state.step_index)
    }

    /// Opens navigation. Returns true the first time only.
    pub fn complete_intro(&mut self) -> bool {
        let opened = self.state.intro.complete();
        if opened {
            info!(slide = self.current_slide().id(), "intro complete");
        }
        opened
    }

    pub fn advance(&mut self) -> Navigation {
        if !self.state.intro_shown() {
            trace!("advance ignored: intro still playing");
            return Navigation::Gated;
        }

        let from = self.position();
        let (kind, steps) = self.current_shape();

        if kind == SlideKind::Interactive && from.step + 1 < steps {
            self.state.step_index += 1;
            self.state.direction = Direction::Forward;
            let to = self.position();
            debug!(%from, %to, slide = self.current_slide().id(), "step forward");
            return Navigation::Step { from, to };
        }

        if from.slide + 1 < self.registry.count() {
            self.state.slide_index += 1;
            self.state.step_index = 0;
            self.state.direction = Direction::Forward;
            let to = self.position();
            debug!(%from, %to, slide = self.current_slide().id(), "slide forward");
            return Navigation::Slide { from, to };
        }

        trace!(%from, "advance at end of deck");
        Navigation::Boundary
    }

    pub fn retreat(&mut self) -> Navigation {
        if !self.state.intro_shown() {
            trace!("retreat ignored: intro still playing");
            return Navigation::Gated;
        }

        let from = self.position();
        let (kind, _) = self.current_shape();

        if kind == SlideKind::Interactive && from.step > 0 {
            self.state.step_index -= 1;
            self.state.direction = Direction::Backward;
            let to = self.position();
            debug!(%from, %to, slide = self.current_slide().id(), "step backward");
            return Navigation::Step { from, to };
        }

        if from.slide > 0 {
            self.state.slide_index -= 1;
            // Walking back into an interactive slide lands on its last step.
            self.state.step_index = match self.current_shape() {
                (SlideKind::Interactive, steps) => steps - 1,
                (SlideKind::Normal | SlideKind::Demo, _) => 0,
            };
            self.state.direction = Direction::Backward;
            let to = self.position();
            debug!(%from, %to, slide = self.current_slide().id(), "slide backward");
            return Navigation::Slide { from, to };
        }

        trace!(%from, "retreat at start of deck");
        Navigation::Boundary
    }

    fn current_shape(&self) -> (SlideKind, usize) {
        let slide = self.current_slide();
        (slide.kind(), slide.step_count())
    }

    /// Fraction of the deck reached, for the progress bar.
    pub fn progress(&self) -> f32 {
        (self.state.slide_index + 1) as f32 / self.registry.count() as f32
    }

    pub fn counter(&self) -> String {
        format!("{} / {}", self.state.slide_index + 1, self.registry.count())
    }
}
