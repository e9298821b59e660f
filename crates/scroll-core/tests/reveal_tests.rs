// Host-side tests for the reveal state machine.

use scroll_core::{Command, RevealEffect, RevealState, ScrollMetric};

fn effect() -> RevealEffect {
    RevealEffect::new("js-reveal", "js-revealed")
}

fn entered() -> ScrollMetric {
    ScrollMetric {
        is_visible: true,
        is_fully_entered: true,
        is_fully_exited: false,
        percent_entered: 0.4,
    }
}

fn mid_transit() -> ScrollMetric {
    ScrollMetric {
        is_visible: true,
        is_fully_entered: false,
        is_fully_exited: false,
        percent_entered: 0.05,
    }
}

fn add(name: &str) -> Command {
    Command::AddClass(name.to_string())
}

fn remove(name: &str) -> Command {
    Command::RemoveClass(name.to_string())
}

#[test]
fn enter_exit_enter_sequence() {
    let fx = effect();
    let mut state = RevealState::default();

    let out = fx.process(&mut state, &entered());
    assert_eq!(out.as_slice(), &[add("js-reveal"), add("js-revealed")]);
    assert!(state.is_currently_revealed);
    assert!(state.has_been_revealed_once);

    let out = fx.process(&mut state, &ScrollMetric::HIDDEN);
    assert_eq!(out.as_slice(), &[remove("js-reveal")]);
    assert!(!state.is_currently_revealed);
    assert!(state.has_been_revealed_once);

    let out = fx.process(&mut state, &entered());
    assert_eq!(out.as_slice(), &[add("js-reveal")]);
}

#[test]
fn repeated_enter_emits_nothing() {
    let fx = effect();
    let mut state = RevealState::default();
    fx.process(&mut state, &entered());
    assert!(fx.process(&mut state, &entered()).is_empty());
}

#[test]
fn exit_while_not_revealed_emits_nothing() {
    let fx = effect();
    let mut state = RevealState::default();
    assert!(fx.process(&mut state, &ScrollMetric::HIDDEN).is_empty());
    assert_eq!(state, RevealState::default());
}

#[test]
fn mid_transit_holds_state() {
    let fx = effect();
    let mut state = RevealState::default();
    assert!(fx.process(&mut state, &mid_transit()).is_empty());
    assert!(!state.is_currently_revealed);

    fx.process(&mut state, &entered());
    let before = state;
    assert!(fx.process(&mut state, &mid_transit()).is_empty());
    assert_eq!(state, before);
}

#[test]
fn reset_clears_latch_and_classes() {
    let fx = effect();
    let mut state = RevealState::default();
    fx.process(&mut state, &entered());

    let out = fx.reset(&mut state);
    assert_eq!(out.as_slice(), &[remove("js-reveal"), remove("js-revealed")]);
    assert_eq!(state, RevealState::default());

    // latch cleared: first-reveal class comes back
    let out = fx.process(&mut state, &entered());
    assert_eq!(out.as_slice(), &[add("js-reveal"), add("js-revealed")]);
}

#[test]
fn normalize_adds_both_classes_without_touching_flags() {
    let fx = effect();
    let state = RevealState::default();
    assert_eq!(
        fx.normalize().as_slice(),
        &[add("js-reveal"), add("js-revealed")]
    );
    assert_eq!(state, RevealState::default());
}
