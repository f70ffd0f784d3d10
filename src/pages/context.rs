use std::time::{Duration, Instant};

use crate::dialog::Dialogs;
use crate::notification::{NotificationKind, NotificationState};
use crate::scheduler::Scheduler;

/// Work a handler defers to a later loop turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    Notify {
        message: String,
        kind: NotificationKind,
    },
    Inform(String),
    RevealMetric(usize),
}

/// Capabilities a page handler may use while reacting to input
pub struct PageContext<'a> {
    pub notifications: &'a mut NotificationState,
    pub dialogs: &'a mut dyn Dialogs,
    pub scheduler: &'a mut Scheduler<Deferred>,
    pub now: Instant,
}

impl PageContext<'_> {
    pub fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.notifications.notify_at(message, kind, self.now);
    }

    pub fn confirm(&mut self, prompt: &str) -> bool {
        self.dialogs.confirm(prompt)
    }

    pub fn inform(&mut self, message: &str) {
        self.dialogs.inform(message);
    }

    /// Run `task` on the first loop turn at least `delay` from now
    pub fn after(&mut self, delay: Duration, task: Deferred) {
        self.scheduler.schedule(self.now, delay, task);
    }
}
