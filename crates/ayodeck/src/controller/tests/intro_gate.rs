use super::*;
use crate::controller::Navigation;

#[test]
fn navigation_is_gated_until_intro_completes() {
    let registry = SlideRegistry::new(vec![normal("a"), interactive("b", 2)]).unwrap();
    let mut c = Controller::new(registry);
    assert!(!c.state().intro_shown());

    assert_eq!(c.advance(), Navigation::Gated);
    assert_eq!(c.retreat(), Navigation::Gated);
    assert_eq!(c.position(), pos(0, 0));

    assert!(c.complete_intro());
    assert!(c.state().intro_shown());
    assert!(c.advance().moved());
    assert_eq!(c.position(), pos(1, 0));
}

#[test]
fn intro_completion_is_permanent() {
    let mut c = abc();
    assert!(!c.complete_intro());
    assert!(c.state().intro_shown());
    for _ in 0..10 {
        c.advance();
        c.retreat();
        assert!(c.state().intro_shown());
    }
}

#[test]
fn gated_calls_leave_direction_untouched() {
    let registry = SlideRegistry::new(vec![normal("a"), normal("b")]).unwrap();
    let mut c = Controller::new(registry);
    let before = c.state().clone();
    c.advance();
    c.retreat();
    assert_eq!(c.state(), &before);
}
