pub mod ayo;

use std::collections::HashSet;
use std::ops::Index;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("slide index {index} out of range (deck has {count} slides)")]
    OutOfRange { index: usize, count: usize },

    #[error("a deck needs at least one slide")]
    Empty,

    #[error("duplicate slide id: {0}")]
    DuplicateId(String),

    #[error("slide {0} has a step count of zero")]
    ZeroSteps(String),

    #[error("slide {id} declares {declared} steps but its content has {actual}")]
    StepMismatch {
        id: String,
        declared: usize,
        actual: usize,
    },

    #[error("slide {0} is interactive and cannot auto-advance")]
    AutoAdvanceOnInteractive(String),
}

/// How a slide takes part in navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Normal,
    /// Multi-step slide; advance/retreat walk its steps before leaving it.
    Interactive,
    /// Hosts the embedded mock application. Navigates like `Normal`.
    Demo,
}

impl SlideKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Interactive => "interactive",
            Self::Demo => "demo",
        }
    }

    /// Whether the progress bar, counter and hints are drawn over this slide.
    pub fn shows_chrome(self) -> bool {
        !matches!(self, Self::Demo)
    }
}

impl std::fmt::Display for SlideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One stage of an interactive walkthrough.
#[derive(Debug, Clone)]
pub struct Step {
    pub title: String,
    pub description: String,
    /// Labels of the diagram nodes lit up during this stage.
    pub highlights: Vec<String>,
}

impl Step {
    pub fn new(title: &str, description: &str, highlights: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
        }
    }
}

/// Content producer carried by a slide. The controller never looks inside.
#[derive(Debug, Clone)]
pub enum SlideContent {
    Title {
        title: String,
        subtitle: String,
        tagline: String,
    },
    Bullets {
        section: String,
        heading: String,
        items: Vec<String>,
    },
    Diagram {
        section: String,
        heading: String,
        caption: String,
        nodes: Vec<String>,
    },
    Walkthrough {
        section: String,
        heading: String,
        nodes: Vec<String>,
        steps: Vec<Step>,
    },
    Demo {
        heading: String,
        pages: Vec<String>,
    },
}

impl SlideContent {
    /// Number of stages the content can show.
    pub fn stage_count(&self) -> usize {
        match self {
            Self::Walkthrough { steps, .. } => steps.len(),
            _ => 1,
        }
    }

    pub fn heading(&self) -> &str {
        match self {
            Self::Title { title, .. } => title,
            Self::Bullets { heading, .. }
            | Self::Diagram { heading, .. }
            | Self::Walkthrough { heading, .. }
            | Self::Demo { heading, .. } => heading,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderedLayout {
    Title,
    Bullets,
    Diagram,
    Walkthrough,
    Demo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagramNode {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepIndicator {
    pub current: usize,
    pub total: usize,
}

/// Toolkit-independent description of what a slide shows for one step.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSlide {
    pub layout: RenderedLayout,
    pub section: Option<String>,
    pub heading: String,
    pub subheading: Option<String>,
    pub lines: Vec<String>,
    pub nodes: Vec<DiagramNode>,
    pub step: Option<StepIndicator>,
    pub animate: bool,
}

#[derive(Debug, Clone)]
pub struct SlideDescriptor {
    id: String,
    kind: SlideKind,
    step_count: usize,
    auto_advance: Option<Duration>,
    content: SlideContent,
}

impl SlideDescriptor {
    /// Raw constructor; `SlideRegistry::new` checks the result.
    pub fn new(id: &str, kind: SlideKind, step_count: usize, content: SlideContent) -> Self {
        Self {
            id: id.to_string(),
            kind,
            step_count,
            auto_advance: None,
            content,
        }
    }

    pub fn normal(id: &str, content: SlideContent) -> Self {
        Self::new(id, SlideKind::Normal, 1, content)
    }

    pub fn interactive(id: &str, content: SlideContent) -> Self {
        let steps = content.stage_count();
        Self::new(id, SlideKind::Interactive, steps, content)
    }

    pub fn demo(id: &str, content: SlideContent) -> Self {
        Self::new(id, SlideKind::Demo, 1, content)
    }

    pub fn with_auto_advance(mut self, delay: Duration) -> Self {
        self.auto_advance = Some(delay);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> SlideKind {
        self.kind
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn auto_advance(&self) -> Option<Duration> {
        self.auto_advance
    }

    pub fn content(&self) -> &SlideContent {
        &self.content
    }

    /// Produce the visual content for `step`. Steps past the end show the last one.
    pub fn render(&self, animate: bool, step: usize) -> RenderedSlide {
        match &self.content {
            SlideContent::Title {
                title,
                subtitle,
                tagline,
            } => RenderedSlide {
                layout: RenderedLayout::Title,
                section: None,
                heading: title.clone(),
                subheading: Some(subtitle.clone()),
                lines: vec![tagline.clone()],
                nodes: Vec::new(),
                step: None,
                animate,
            },
            SlideContent::Bullets {
                section,
                heading,
                items,
            } => RenderedSlide {
                layout: RenderedLayout::Bullets,
                section: Some(section.clone()),
                heading: heading.clone(),
                subheading: None,
                lines: items.clone(),
                nodes: Vec::new(),
                step: None,
                animate,
            },
            SlideContent::Diagram {
                section,
                heading,
                caption,
                nodes,
            } => RenderedSlide {
                layout: RenderedLayout::Diagram,
                section: Some(section.clone()),
                heading: heading.clone(),
                subheading: None,
                lines: vec![caption.clone()],
                nodes: nodes
                    .iter()
                    .map(|label| DiagramNode {
                        label: label.clone(),
                        active: true,
                    })
                    .collect(),
                step: None,
                animate,
            },
            SlideContent::Walkthrough {
                section,
                heading,
                nodes,
                steps,
            } => {
                let current = step.min(steps.len().saturating_sub(1));
                let stage = steps.get(current);
                RenderedSlide {
                    layout: RenderedLayout::Walkthrough,
                    section: Some(section.clone()),
                    heading: heading.clone(),
                    subheading: stage.map(|s| s.title.clone()),
                    lines: stage.map(|s| vec![s.description.clone()]).unwrap_or_default(),
                    nodes: nodes
                        .iter()
                        .map(|label| DiagramNode {
                            label: label.clone(),
                            active: stage.is_some_and(|s| s.highlights.contains(label)),
                        })
                        .collect(),
                    step: Some(StepIndicator {
                        current,
                        total: steps.len(),
                    }),
                    animate,
                }
            }
            SlideContent::Demo { heading, pages } => RenderedSlide {
                layout: RenderedLayout::Demo,
                section: None,
                heading: heading.clone(),
                subheading: None,
                lines: pages.clone(),
                nodes: Vec::new(),
                step: None,
                animate,
            },
        }
    }

    fn validate(&self) -> Result<(), DeckError> {
        if self.step_count == 0 {
            return Err(DeckError::ZeroSteps(self.id.clone()));
        }
        let expected = match self.kind {
            SlideKind::Interactive => self.content.stage_count(),
            SlideKind::Normal | SlideKind::Demo => 1,
        };
        if self.step_count != expected {
            return Err(DeckError::StepMismatch {
                id: self.id.clone(),
                declared: self.step_count,
                actual: expected,
            });
        }
        if self.kind == SlideKind::Interactive && self.auto_advance.is_some() {
            return Err(DeckError::AutoAdvanceOnInteractive(self.id.clone()));
        }
        Ok(())
    }
}

/// Ordered, read-only list of slides, fixed at construction.
#[derive(Debug, Clone)]
pub struct SlideRegistry {
    slides: Vec<SlideDescriptor>,
}

impl SlideRegistry {
    pub fn new(slides: Vec<SlideDescriptor>) -> Result<Self, DeckError> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        let mut seen = HashSet::new();
        for slide in &slides {
            if !seen.insert(slide.id.as_str()) {
                return Err(DeckError::DuplicateId(slide.id.clone()));
            }
            slide.validate()?;
        }
        Ok(Self { slides })
    }

    pub fn get(&self, index: usize) -> Result<&SlideDescriptor, DeckError> {
        self.slides.get(index).ok_or(DeckError::OutOfRange {
            index,
            count: self.slides.len(),
        })
    }

    pub fn count(&self) -> usize {
        self.slides.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideDescriptor> {
        self.slides.iter()
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    /// Resolve a user-supplied slide reference: a 1-indexed number (clamped
    /// into the deck) or a slide id.
    pub fn resolve(&self, reference: &str) -> Option<usize> {
        match reference.parse::<usize>() {
            Ok(number) => Some(number.saturating_sub(1).min(self.slides.len() - 1)),
            Err(_) => self.position_of(reference),
        }
    }
}

/// Panics on an out-of-range index; use [`SlideRegistry::get`] for checked access.
impl Index<usize> for SlideRegistry {
    type Output = SlideDescriptor;

    fn index(&self, index: usize) -> &SlideDescriptor {
        &self.slides[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullets(heading: &str) -> SlideContent {
        SlideContent::Bullets {
            section: "00".to_string(),
            heading: heading.to_string(),
            items: vec!["one".to_string()],
        }
    }

    fn walkthrough(steps: usize) -> SlideContent {
        SlideContent::Walkthrough {
            section: "00".to_string(),
            heading: "Flow".to_string(),
            nodes: vec!["A".to_string(), "B".to_string()],
            steps: (0..steps)
                .map(|i| Step::new(&format!("Stage {i}"), "", if i % 2 == 0 { &["A"] } else { &["B"] }))
                .collect(),
        }
    }

    #[test]
    fn test_get_and_count() {
        let registry = SlideRegistry::new(vec![
            SlideDescriptor::normal("a", bullets("A")),
            SlideDescriptor::interactive("b", walkthrough(3)),
        ])
        .unwrap();
        assert_eq!(registry.count(), 2);
        assert_eq!(registry.get(1).unwrap().id(), "b");
        assert_eq!(registry.get(1).unwrap().step_count(), 3);
        assert_eq!(registry[0].kind(), SlideKind::Normal);
    }

    #[test]
    fn test_get_out_of_range() {
        let registry = SlideRegistry::new(vec![SlideDescriptor::normal("a", bullets("A"))]).unwrap();
        assert_eq!(
            registry.get(1).unwrap_err(),
            DeckError::OutOfRange { index: 1, count: 1 }
        );
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert_eq!(SlideRegistry::new(Vec::new()).unwrap_err(), DeckError::Empty);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = SlideRegistry::new(vec![
            SlideDescriptor::normal("a", bullets("A")),
            SlideDescriptor::normal("a", bullets("B")),
        ])
        .unwrap_err();
        assert_eq!(err, DeckError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = SlideRegistry::new(vec![SlideDescriptor::interactive("w", walkthrough(0))])
            .unwrap_err();
        assert_eq!(err, DeckError::ZeroSteps("w".to_string()));
    }

    #[test]
    fn test_step_mismatch_rejected() {
        let slide = SlideDescriptor::new("w", SlideKind::Interactive, 4, walkthrough(3));
        let err = SlideRegistry::new(vec![slide]).unwrap_err();
        assert_eq!(
            err,
            DeckError::StepMismatch {
                id: "w".to_string(),
                declared: 4,
                actual: 3
            }
        );

        let slide = SlideDescriptor::new("n", SlideKind::Normal, 2, bullets("N"));
        assert!(matches!(
            SlideRegistry::new(vec![slide]),
            Err(DeckError::StepMismatch { .. })
        ));
    }

    #[test]
    fn test_auto_advance_on_interactive_rejected() {
        let slide = SlideDescriptor::interactive("w", walkthrough(2))
            .with_auto_advance(Duration::from_secs(5));
        assert_eq!(
            SlideRegistry::new(vec![slide]).unwrap_err(),
            DeckError::AutoAdvanceOnInteractive("w".to_string())
        );
    }

    #[test]
    fn test_position_of() {
        let registry = SlideRegistry::new(vec![
            SlideDescriptor::normal("a", bullets("A")),
            SlideDescriptor::normal("b", bullets("B")),
        ])
        .unwrap();
        assert_eq!(registry.position_of("b"), Some(1));
        assert_eq!(registry.position_of("zzz"), None);
    }

    #[test]
    fn test_resolve() {
        let registry = SlideRegistry::new(vec![
            SlideDescriptor::normal("a", bullets("A")),
            SlideDescriptor::normal("b", bullets("B")),
            SlideDescriptor::normal("c", bullets("C")),
        ])
        .unwrap();
        assert_eq!(registry.resolve("1"), Some(0));
        assert_eq!(registry.resolve("3"), Some(2));
        assert_eq!(registry.resolve("99"), Some(2));
        assert_eq!(registry.resolve("0"), Some(0));
        assert_eq!(registry.resolve("b"), Some(1));
        assert_eq!(registry.resolve("nope"), None);
    }

    #[test]
    fn test_walkthrough_render_highlights_current_step() {
        let slide = SlideDescriptor::interactive("w", walkthrough(3));
        let rendered = slide.render(true, 1);
        assert_eq!(rendered.layout, RenderedLayout::Walkthrough);
        assert_eq!(rendered.subheading.as_deref(), Some("Stage 1"));
        assert_eq!(rendered.step, Some(StepIndicator { current: 1, total: 3 }));
        let active: Vec<&str> = rendered
            .nodes
            .iter()
            .filter(|n| n.active)
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(active, vec!["B"]);
    }

    #[test]
    fn test_render_clamps_step() {
        let slide = SlideDescriptor::interactive("w", walkthrough(3));
        assert_eq!(slide.render(false, 99).step.unwrap().current, 2);
    }

    #[test]
    fn test_render_is_pure() {
        let slide = SlideDescriptor::normal("a", bullets("A"));
        assert_eq!(slide.render(true, 0), slide.render(true, 0));
        assert!(!slide.render(false, 0).animate);
    }

    #[test]
    fn test_demo_hides_chrome() {
        assert!(!SlideKind::Demo.shows_chrome());
        assert!(SlideKind::Normal.shows_chrome());
        assert!(SlideKind::Interactive.shows_chrome());
    }
}
