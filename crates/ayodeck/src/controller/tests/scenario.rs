use super::*;
use crate::controller::{Direction, Navigation};

#[test]
fn walk_forward_and_back_through_interactive_slide() {
    let mut c = abc();
    assert_eq!(c.position(), pos(0, 0));

    c.advance();
    assert_eq!(c.position(), pos(1, 0));
    c.advance();
    assert_eq!(c.position(), pos(1, 1));
    c.advance();
    assert_eq!(c.position(), pos(1, 2));
    c.advance();
    assert_eq!(c.position(), pos(2, 0));
    c.advance();
    assert_eq!(c.position(), pos(2, 0));

    c.retreat();
    assert_eq!(c.position(), pos(1, 2));
    c.retreat();
    assert_eq!(c.position(), pos(1, 1));
    c.retreat();
    assert_eq!(c.position(), pos(1, 0));
    c.retreat();
    assert_eq!(c.position(), pos(0, 0));
    c.retreat();
    assert_eq!(c.position(), pos(0, 0));
}

#[test]
fn outcomes_describe_each_move() {
    let mut c = abc();
    assert_eq!(
        c.advance(),
        Navigation::Slide {
            from: pos(0, 0),
            to: pos(1, 0)
        }
    );
    assert_eq!(
        c.advance(),
        Navigation::Step {
            from: pos(1, 0),
            to: pos(1, 1)
        }
    );
    assert!(c.advance().moved());
    assert!(matches!(c.advance(), Navigation::Slide { .. }));
    assert_eq!(c.advance(), Navigation::Boundary);
    assert!(!Navigation::Boundary.moved());
}

#[test]
fn direction_follows_last_move() {
    let mut c = abc();
    assert_eq!(c.state().direction(), Direction::None);
    c.advance();
    assert_eq!(c.state().direction(), Direction::Forward);
    c.advance();
    assert_eq!(c.state().direction(), Direction::Forward);
    c.retreat();
    assert_eq!(c.state().direction(), Direction::Backward);
    c.retreat();
    assert_eq!(c.state().direction(), Direction::Backward);
}

#[test]
fn round_trip_inside_interactive_slide() {
    let mut c = five();
    c.advance();
    c.advance();
    c.advance();
    assert_eq!(c.position(), pos(2, 1));
    c.advance();
    assert_eq!(c.position(), pos(2, 2));
    c.retreat();
    assert_eq!(c.position(), pos(2, 1));
}

#[test]
fn demo_slide_navigates_like_normal() {
    let mut c = mixed();
    while c.position().slide != 5 {
        c.advance();
    }
    assert_eq!(c.position(), pos(5, 0));
    assert!(!c.current_slide().kind().shows_chrome());
    c.advance();
    assert_eq!(c.position(), pos(6, 0));
    c.retreat();
    assert_eq!(c.position(), pos(5, 0));
    c.retreat();
    assert_eq!(c.position(), pos(4, 2));
}

#[test]
fn single_step_interactive_slide_is_passed_in_one_move() {
    let mut c = mixed();
    while c.position().slide != 3 {
        c.advance();
    }
    assert_eq!(c.position(), pos(3, 0));
    c.advance();
    assert_eq!(c.position(), pos(4, 0));
    c.retreat();
    c.retreat();
    assert_eq!(c.position(), pos(2, 3));
}

#[test]
fn starting_at_clamps_into_deck() {
    let registry = abc().registry().clone();
    let c = Controller::starting_at(registry.clone(), 1);
    assert_eq!(c.position(), pos(1, 0));
    let c = Controller::starting_at(registry, 42);
    assert_eq!(c.position(), pos(2, 0));
}

#[test]
fn progress_and_counter() {
    let mut c = abc();
    assert_eq!(c.counter(), "1 / 3");
    assert!((c.progress() - 1.0 / 3.0).abs() < 1e-6);
    c.advance();
    c.advance();
    assert_eq!(c.counter(), "2 / 3");
    c.advance();
    c.advance();
    assert_eq!(c.counter(), "3 / 3");
    assert_eq!(c.progress(), 1.0);
}

#[test]
fn render_current_follows_step() {
    let mut c = abc();
    c.advance();
    c.advance();
    let rendered = c.render_current(true);
    assert_eq!(rendered.subheading.as_deref(), Some("b 1"));
    assert_eq!(rendered.step.unwrap().current, 1);
}
