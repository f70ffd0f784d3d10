//! Tests for global key handling

use std::time::Instant;

use super::*;
use crate::dialog::ScriptedDialogs;
use crate::test_utils::test_helpers::{key, key_with_mods, test_app};

#[test]
fn test_digits_outside_range_are_not_global() {
    let mut app = test_app(Page::Dashboard);
    let mut dialogs = ScriptedDialogs::accepting();

    assert!(!handle_global_keys(&mut app, key(KeyCode::Char('6')), &mut dialogs, Instant::now()));
    assert!(!handle_global_keys(&mut app, key(KeyCode::Char('0')), &mut dialogs, Instant::now()));
    assert_eq!(app.active_page(), Page::Dashboard);
}

#[test]
fn test_page_keys_are_left_to_pages() {
    let mut app = test_app(Page::MeusQuizzes);
    let mut dialogs = ScriptedDialogs::accepting();

    for code in [KeyCode::Char('n'), KeyCode::Char('d'), KeyCode::Enter, KeyCode::Down] {
        assert!(!handle_global_keys(&mut app, key(code), &mut dialogs, Instant::now()));
    }
}

#[test]
fn test_other_control_chords_are_not_consumed() {
    let mut app = test_app(Page::Dashboard);
    let mut dialogs = ScriptedDialogs::accepting();

    let consumed = handle_global_keys(
        &mut app,
        key_with_mods(KeyCode::Char('r'), KeyModifiers::CONTROL),
        &mut dialogs,
        Instant::now(),
    );

    assert!(!consumed);
    assert_eq!(app.active_page(), Page::Dashboard);
}

#[test]
fn test_reactivating_current_page_reruns_setup() {
    let t0 = Instant::now();
    let mut app = test_app(Page::Dashboard);
    let mut dialogs = ScriptedDialogs::accepting();

    assert!(handle_global_keys(&mut app, key(KeyCode::Char('1')), &mut dialogs, t0));
    assert!(handle_global_keys(&mut app, key(KeyCode::Char('1')), &mut dialogs, t0));

    assert_eq!(app.active_page(), Page::Dashboard);
    // the first visit's tasks are dropped, only the second round is pending
    assert_eq!(app.scheduler.len(), 5);
}
