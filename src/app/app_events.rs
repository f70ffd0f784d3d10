use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;
use crate::dialog::Dialogs;

mod global;

/// Upper bound on how long the loop waits for input before it runs
/// deferred work and redraws animating toasts again
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(33);

/// Wait up to `timeout` for the next terminal event
pub fn poll_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        return Ok(Some(event::read()?));
    }
    Ok(None)
}

impl App {
    /// How long the loop may wait for input: until the next deferred task
    /// is due, never longer than one animation frame
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.scheduler.next_due().map_or(EVENT_POLL_TIMEOUT, |due| {
            due.saturating_duration_since(now).min(EVENT_POLL_TIMEOUT)
        })
    }

    pub fn handle_event(&mut self, event: Event, dialogs: &mut dyn Dialogs, now: Instant) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event, dialogs, now);
            }
            Event::Resize(_, _) => self.mark_dirty(),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, dialogs: &mut dyn Dialogs, now: Instant) {
        self.mark_dirty();

        if global::handle_global_keys(self, key, dialogs, now) {
            return;
        }

        // Page keys are plain letters and arrows; chords never reach a page
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            #[cfg(debug_assertions)]
            log::debug!("Ignoring chord {:?} {:?}", key.modifiers, key.code);
            return;
        }

        let page = self.active_page();
        let consumed = self.with_page(page, dialogs, now, |handler, ctx| handler.handle_key(key, ctx));

        if !consumed {
            #[cfg(debug_assertions)]
            log::debug!("Unhandled key on {}: {:?}", page.name(), key.code);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
