//! Shared test utilities for saber
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::time::{Duration, Instant};

    use crate::app::App;
    use crate::config::Config;
    use crate::dialog::ScriptedDialogs;
    use crate::notification::{NotificationKind, NotificationState};
    use crate::pages::{Deferred, Page, PageContext};
    use crate::scheduler::Scheduler;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Helper to create App with default config on the given page
    pub fn test_app(page: Page) -> App {
        App::new(&Config::default(), page)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    /// Owns everything a `PageContext` borrows so page handlers can be
    /// driven without an `App`.
    pub struct Harness {
        pub notifications: NotificationState,
        pub dialogs: ScriptedDialogs,
        pub scheduler: Scheduler<Deferred>,
        pub now: Instant,
    }

    impl Harness {
        pub fn new(dialogs: ScriptedDialogs) -> Self {
            Self {
                notifications: NotificationState::new(),
                dialogs,
                scheduler: Scheduler::new(),
                now: Instant::now(),
            }
        }

        pub fn ctx(&mut self) -> PageContext<'_> {
            PageContext {
                notifications: &mut self.notifications,
                dialogs: &mut self.dialogs,
                scheduler: &mut self.scheduler,
                now: self.now,
            }
        }

        pub fn advance(&mut self, delay: Duration) {
            self.now += delay;
        }

        /// Messages and kinds of the active notifications, oldest first
        pub fn toasts(&self) -> Vec<(String, NotificationKind)> {
            self.notifications
                .active()
                .iter()
                .map(|n| (n.message.clone(), n.kind))
                .collect()
        }

        /// Drain tasks due at the current time
        pub fn due(&mut self) -> Vec<Deferred> {
            self.scheduler.drain_due(self.now)
        }
    }
}
