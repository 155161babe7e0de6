mod boundaries;
mod intro_gate;
mod scenario;

use super::{Controller, Position};
use crate::deck::{SlideContent, SlideDescriptor, SlideRegistry, Step};

/// Helper to create a single-step slide.
fn normal(id: &str) -> SlideDescriptor {
    SlideDescriptor::normal(
        id,
        SlideContent::Bullets {
            section: String::new(),
            heading: id.to_string(),
            items: Vec::new(),
        },
    )
}

/// Helper to create an interactive slide with `steps` stages.
fn interactive(id: &str, steps: usize) -> SlideDescriptor {
    SlideDescriptor::interactive(
        id,
        SlideContent::Walkthrough {
            section: String::new(),
            heading: id.to_string(),
            nodes: Vec::new(),
            steps: (0..steps)
                .map(|i| Step::new(&format!("{id} {i}"), "", &[]))
                .collect(),
        },
    )
}

/// Helper to create the demo slide.
fn demo(id: &str) -> SlideDescriptor {
    SlideDescriptor::demo(
        id,
        SlideContent::Demo {
            heading: id.to_string(),
            pages: Vec::new(),
        },
    )
}

/// Controller over `slides` with the intro already finished.
fn ready(slides: Vec<SlideDescriptor>) -> Controller {
    let mut controller = Controller::new(SlideRegistry::new(slides).unwrap());
    controller.complete_intro();
    controller
}

/// [normal A, interactive B(3), normal C]
fn abc() -> Controller {
    ready(vec![normal("a"), interactive("b", 3), normal("c")])
}

/// Five slides, slide 2 interactive with three steps.
fn five() -> Controller {
    ready(vec![
        normal("s0"),
        normal("s1"),
        interactive("s2", 3),
        normal("s3"),
        normal("s4"),
    ])
}

/// Mixed deck with adjacent interactive slides and a demo slide.
fn mixed() -> Controller {
    ready(vec![
        interactive("i0", 2),
        normal("n1"),
        interactive("i2", 4),
        interactive("i3", 1),
        interactive("i4", 3),
        demo("d5"),
        normal("n6"),
    ])
}

fn pos(slide: usize, step: usize) -> Position {
    Position::new(slide, step)
}

/// Assert the position is inside the deck and inside the current slide's steps.
fn assert_in_bounds(controller: &Controller) {
    let state = controller.state();
    let slide = controller
        .registry()
        .get(state.slide_index())
        .expect("controller points outside the registry");
    assert!(
        state.step_index() < slide.step_count(),
        "step {} out of range for {} ({} steps)",
        state.step_index(),
        slide.id(),
        slide.step_count()
    );
}
