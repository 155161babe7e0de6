use super::*;
use crate::controller::Navigation;

#[test]
fn advance_at_end_is_idempotent() {
    let mut c = abc();
    for _ in 0..4 {
        c.advance();
    }
    let end = c.state().clone();
    assert_eq!(end.position(), pos(2, 0));
    for _ in 0..5 {
        assert_eq!(c.advance(), Navigation::Boundary);
        assert_eq!(c.state(), &end);
    }
}

#[test]
fn retreat_at_start_is_idempotent() {
    let mut c = abc();
    let start = c.state().clone();
    for _ in 0..5 {
        assert_eq!(c.retreat(), Navigation::Boundary);
        assert_eq!(c.state(), &start);
    }
}

#[test]
fn last_slide_interactive_ends_on_last_step() {
    let mut c = ready(vec![normal("a"), interactive("b", 2)]);
    c.advance();
    c.advance();
    assert_eq!(c.position(), pos(1, 1));
    let end = c.state().clone();
    assert_eq!(c.advance(), Navigation::Boundary);
    assert_eq!(c.state(), &end);
}

#[test]
fn first_slide_interactive_walks_back_to_first_step() {
    let mut c = ready(vec![interactive("a", 3), normal("b")]);
    c.advance();
    c.advance();
    c.advance();
    assert_eq!(c.position(), pos(1, 0));
    c.retreat();
    assert_eq!(c.position(), pos(0, 2));
    c.retreat();
    c.retreat();
    assert_eq!(c.position(), pos(0, 0));
    assert_eq!(c.retreat(), Navigation::Boundary);
}

#[test]
fn single_slide_deck_never_moves() {
    let mut c = ready(vec![normal("only")]);
    assert_eq!(c.advance(), Navigation::Boundary);
    assert_eq!(c.retreat(), Navigation::Boundary);
    assert_eq!(c.position(), pos(0, 0));
}
