//! Translate raw key and tap events into presentation commands.
//!
//! This module knows nothing about egui: the app converts egui input into
//! [`InputEvent`]s and records the chrome it painted in a [`HitMap`] so the
//! next frame's taps can be classified.

use tracing::trace;

use crate::controller::{Controller, Navigation};
use crate::modal::DiagramModal;

/// Taps left of this fraction of the viewport width go back.
pub const PREVIOUS_ZONE: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowRight,
    ArrowLeft,
    Escape,
    Other,
}

/// Where keyboard focus sits when a key arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Surface,
    TextEntry,
}

/// What a tap landed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Target {
    #[default]
    Surface,
    Button,
    Link,
    TextEntry,
    /// A region that handles its own taps.
    NoNavigation,
}

impl Target {
    fn is_chrome(self) -> bool {
        !matches!(self, Self::Surface)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { key: Key, focus: Focus },
    Tap { x: f32, viewport_width: f32, target: Target },
}

impl InputEvent {
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            focus: Focus::Surface,
        }
    }

    pub fn tap(x: f32, viewport_width: f32) -> Self {
        Self::Tap {
            x,
            viewport_width,
            target: Target::Surface,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    CloseModal,
}

/// Map one event to a command, or `None` if it should be ignored.
pub fn map(event: InputEvent, intro_shown: bool) -> Option<Command> {
    match event {
        InputEvent::Key {
            key: Key::Escape, ..
        } => Some(Command::CloseModal),
        InputEvent::Key { focus: Focus::TextEntry, .. } => None,
        InputEvent::Key { .. } | InputEvent::Tap { .. } if !intro_shown => None,
        InputEvent::Key { key, .. } => match key {
            Key::Space | Key::ArrowRight => Some(Command::Advance),
            Key::ArrowLeft => Some(Command::Retreat),
            Key::Escape | Key::Other => None,
        },
        InputEvent::Tap { target, .. } if target.is_chrome() => None,
        InputEvent::Tap {
            x, viewport_width, ..
        } => {
            if viewport_width > 0.0 && x < viewport_width * PREVIOUS_ZONE {
                Some(Command::Retreat)
            } else {
                Some(Command::Advance)
            }
        }
    }
}

/// Result of feeding one event to the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Navigated(Navigation),
    ModalClosed,
}

/// Route `event` to the modal or the controller.
///
/// An open modal swallows navigation: `Escape` or a tap on the backdrop
/// closes it, everything else is dropped.
pub fn dispatch(controller: &mut Controller, modal: &mut DiagramModal, event: InputEvent) -> Outcome {
    if modal.is_open() {
        let closes = matches!(
            event,
            InputEvent::Key {
                key: Key::Escape,
                ..
            } | InputEvent::Tap {
                target: Target::Surface,
                ..
            }
        );
        if closes && modal.close() {
            return Outcome::ModalClosed;
        }
        trace!(?event, "input absorbed by modal");
        return Outcome::Ignored;
    }

    match map(event, controller.state().intro_shown()) {
        Some(Command::Advance) => Outcome::Navigated(controller.advance()),
        Some(Command::Retreat) => Outcome::Navigated(controller.retreat()),
        Some(Command::CloseModal) => {
            if modal.close() {
                Outcome::ModalClosed
            } else {
                Outcome::Ignored
            }
        }
        None => {
            trace!(?event, "input ignored");
            Outcome::Ignored
        }
    }
}

/// Screen rectangle tagged with what a tap on it means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min: (f32, f32),
    pub max: (f32, f32),
    pub target: Target,
}

impl Region {
    pub fn new(min: (f32, f32), max: (f32, f32), target: Target) -> Self {
        Self { min, max, target }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min.0 && x <= self.max.0 && y >= self.min.1 && y <= self.max.1
    }
}

/// Chrome painted during the last frame. Later regions sit on top.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<Region>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, region: Region) {
        self.regions.push(region);
    }

    pub fn target_at(&self, x: f32, y: f32) -> Target {
        self.regions
            .iter()
            .rev()
            .find(|r| r.contains(x, y))
            .map_or(Target::Surface, |r| r.target)
    }
}
