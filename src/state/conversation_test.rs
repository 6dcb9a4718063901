use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn conversation_state_default_closed_and_not_greeted() {
    let state = ConversationState::default();
    assert_eq!(state.visibility, Visibility::Closed);
    assert!(!state.is_open());
    assert!(!state.has_greeted);
    assert_eq!(state.active_turn(), None);
}

// =============================================================
// Visibility transitions
// =============================================================

#[test]
fn first_open_reports_first_open_and_sets_greeted() {
    let mut state = ConversationState::default();
    assert_eq!(state.open(), Transition::FirstOpen);
    assert!(state.is_open());
    assert!(state.has_greeted);
}

#[test]
fn reopen_after_close_is_plain_toggle() {
    let mut state = ConversationState::default();
    state.open();
    assert_eq!(state.close(), Transition::Closed);
    assert_eq!(state.open(), Transition::Reopened);
    assert!(state.is_open());
}

#[test]
fn open_when_open_is_noop() {
    let mut state = ConversationState::default();
    state.open();
    assert_eq!(state.open(), Transition::AlreadyOpen);
}

#[test]
fn close_when_closed_is_noop() {
    let mut state = ConversationState::default();
    assert_eq!(state.close(), Transition::AlreadyClosed);
    assert!(!state.has_greeted);
}

#[test]
fn toggle_alternates_between_states() {
    let mut state = ConversationState::default();
    assert_eq!(state.toggle(), Transition::FirstOpen);
    assert_eq!(state.toggle(), Transition::Closed);
    assert_eq!(state.toggle(), Transition::Reopened);
    assert_eq!(state.toggle(), Transition::Closed);
}

// =============================================================
// Turns
// =============================================================

#[test]
fn begin_turn_makes_it_active() {
    let mut state = ConversationState::default();
    let turn = state.begin_turn();
    assert!(state.is_active_turn(turn));
    assert_eq!(state.active_turn(), Some(turn));
}

#[test]
fn finish_active_turn_clears_it() {
    let mut state = ConversationState::default();
    let turn = state.begin_turn();
    assert!(state.finish_turn(turn));
    assert_eq!(state.active_turn(), None);
    assert!(!state.finish_turn(turn));
}

#[test]
fn newer_turn_supersedes_older_one() {
    let mut state = ConversationState::default();
    let first = state.begin_turn();
    let second = state.begin_turn();
    assert_ne!(first, second);
    assert!(!state.finish_turn(first));
    assert!(state.is_active_turn(second));
    assert!(state.finish_turn(second));
}

#[test]
fn turns_survive_closing_the_widget() {
    let mut state = ConversationState::default();
    state.open();
    let turn = state.begin_turn();
    state.close();
    assert!(state.finish_turn(turn));
}
