use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use super::super::app_state::App;
use crate::dialog::Dialogs;
use crate::pages::Page;

/// Keys that act the same on every page: header buttons, page switching
/// and quitting. Returns true when the key was consumed.
pub fn handle_global_keys(
    app: &mut App,
    key: KeyEvent,
    dialogs: &mut dyn Dialogs,
    now: Instant,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.quit();
            return true;
        }
        return false;
    }

    match key.code {
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(page) = Page::from_index(index) {
                app.navigate(page, dialogs, now);
            }
            true
        }
        KeyCode::Tab => {
            app.navigate(app.active_page().next(), dialogs, now);
            true
        }
        KeyCode::BackTab => {
            app.navigate(app.active_page().previous(), dialogs, now);
            true
        }
        KeyCode::Char('c') => {
            app.create_quiz(dialogs);
            true
        }
        KeyCode::Char('r') => {
            app.open_reports(dialogs, now);
            true
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_exit(dialogs);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
