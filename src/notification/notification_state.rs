//! Notification state management
//!
//! Every toast is an independent entity with its own timer chain. Phases are
//! derived from the time elapsed since insertion, so nothing can pause,
//! cancel or reorder an in-flight notification.

use std::time::{Duration, Instant};

use crate::config::NotificationConfig;
use crate::theme::notification::{self as toast_theme, ToastColors};

/// Notification kind - selects the visual treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Indigo - default treatment
    #[default]
    Info,
    /// Green - completed actions
    Success,
    /// Red - failures
    Error,
}

impl NotificationKind {
    /// Parse a kind name, falling back to `Info` for anything unrecognised.
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    /// Get the colors for this notification kind
    pub fn colors(self) -> ToastColors {
        match self {
            NotificationKind::Info => toast_theme::INFO,
            NotificationKind::Success => toast_theme::SUCCESS,
            NotificationKind::Error => toast_theme::ERROR,
        }
    }
}

impl From<&str> for NotificationKind {
    fn from(name: &str) -> Self {
        Self::parse_lossy(name)
    }
}

/// Visual state of a single notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Inserted but not yet painted
    Entering,
    /// Sliding in or resting at its anchor
    Visible,
    /// Sliding out
    Leaving,
    /// Finished; dropped on the next tick
    Removed,
}

/// Lifecycle timings shared by every notification a manager creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    /// Delay between insertion and the flip to visible
    pub entry_delay: Duration,
    /// Time from insertion until the exit transition starts
    pub display: Duration,
    /// Length of the slide transitions
    pub exit: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            entry_delay: Duration::from_millis(100),
            display: Duration::from_millis(3000),
            exit: Duration::from_millis(300),
        }
    }
}

impl NotificationTimings {
    /// Build timings from config. Zero values are raised to 1ms so every
    /// phase has a non-empty window.
    pub fn from_config(config: &NotificationConfig) -> Self {
        let ms = |value: u64| Duration::from_millis(value.max(1));
        Self {
            entry_delay: ms(config.entry_delay_ms),
            display: ms(config.display_ms),
            exit: ms(config.exit_ms),
        }
    }

    /// Offset from insertion at which the exit transition begins.
    ///
    /// The entry slide always completes before leaving starts.
    pub fn leave_after(&self) -> Duration {
        self.display.max(self.entry_delay + self.exit)
    }

    /// Offset from insertion at which the notification is gone.
    pub fn lifetime(&self) -> Duration {
        self.leave_after() + self.exit
    }
}

/// A single notification with message, kind and timing
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub colors: ToastColors,
    pub created_at: Instant,
    pub timings: NotificationTimings,
}

impl Notification {
    pub fn new(
        id: u64,
        message: &str,
        kind: NotificationKind,
        timings: NotificationTimings,
        now: Instant,
    ) -> Self {
        Self {
            id,
            message: message.to_string(),
            kind,
            colors: kind.colors(),
            created_at: now,
            timings,
        }
    }

    /// Phase of this notification at `now`
    pub fn phase_at(&self, now: Instant) -> Phase {
        let elapsed = now.saturating_duration_since(self.created_at);
        if elapsed < self.timings.entry_delay {
            Phase::Entering
        } else if elapsed < self.timings.leave_after() {
            Phase::Visible
        } else if elapsed < self.timings.lifetime() {
            Phase::Leaving
        } else {
            Phase::Removed
        }
    }

    /// How far the toast is pushed off its anchor, from 0.0 (resting) to
    /// 1.0 (fully off-screen to the right).
    pub fn hidden_fraction(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.created_at);
        match self.phase_at(now) {
            Phase::Entering | Phase::Removed => 1.0,
            Phase::Visible => {
                1.0 - ratio(elapsed - self.timings.entry_delay, self.timings.exit)
            }
            Phase::Leaving => ratio(elapsed - self.timings.leave_after(), self.timings.exit),
        }
    }

    pub fn is_removed(&self, now: Instant) -> bool {
        self.phase_at(now) == Phase::Removed
    }
}

fn ratio(part: Duration, whole: Duration) -> f32 {
    if whole.is_zero() {
        return 1.0;
    }
    (part.as_secs_f32() / whole.as_secs_f32()).min(1.0)
}

/// Notification manager for the application
#[derive(Debug)]
pub struct NotificationState {
    active: Vec<Notification>,
    timings: NotificationTimings,
    stacking: bool,
    next_id: u64,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            timings: NotificationTimings::default(),
            stacking: true,
            next_id: 1,
        }
    }

    pub fn with_config(config: &NotificationConfig) -> Self {
        Self {
            timings: NotificationTimings::from_config(config),
            stacking: config.stacking,
            ..Self::new()
        }
    }

    /// Show a notification of the given kind, starting its lifecycle now
    pub fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.notify_at(message, kind, Instant::now());
    }

    /// Insert a notification whose lifecycle starts at `now`.
    ///
    /// Fire-and-forget: an empty message is dropped without error.
    pub fn notify_at(&mut self, message: &str, kind: NotificationKind, now: Instant) {
        if message.trim().is_empty() {
            #[cfg(debug_assertions)]
            log::warn!("Ignoring notification with empty message");
            return;
        }

        let id = self.next_id;
        self.next_id += 1;

        #[cfg(debug_assertions)]
        log::debug!("Notification #{} inserted [{}]: {}", id, kind.as_str(), message);

        self.active
            .push(Notification::new(id, message, kind, self.timings, now));
    }

    /// Show an info notification (indigo)
    pub fn show(&mut self, message: &str) {
        self.notify(message, NotificationKind::Info);
    }

    /// Show a success notification (green)
    pub fn show_success(&mut self, message: &str) {
        self.notify(message, NotificationKind::Success);
    }

    /// Show an error notification (red)
    pub fn show_error(&mut self, message: &str) {
        self.notify(message, NotificationKind::Error);
    }

    /// Drop notifications whose exit transition has finished.
    /// Returns how many were removed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let before = self.active.len();
        self.active.retain(|notif| {
            let done = notif.is_removed(now);
            #[cfg(debug_assertions)]
            if done {
                log::debug!("Notification #{} removed", notif.id);
            }
            !done
        });
        before - self.active.len()
    }

    /// True while any notification still needs frames
    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }

    /// Notifications in insertion order
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn timings(&self) -> NotificationTimings {
        self.timings
    }

    pub fn stacking(&self) -> bool {
        self.stacking
    }

    /// Pair each on-screen notification with its vertical slot at `now`.
    ///
    /// Toasts still entering are not drawn and take no slot, so the stack
    /// has no gaps. Without stacking all toasts share slot 0 and overlap at
    /// the anchor.
    pub fn slots_at(&self, now: Instant) -> impl Iterator<Item = (usize, &Notification)> {
        let stacking = self.stacking;
        self.active
            .iter()
            .filter(move |notif| !matches!(notif.phase_at(now), Phase::Entering | Phase::Removed))
            .enumerate()
            .map(move |(index, notif)| (if stacking { index } else { 0 }, notif))
    }

    /// Messages of the active notifications (test-only)
    #[cfg(test)]
    pub fn messages(&self) -> Vec<&str> {
        self.active.iter().map(|n| n.message.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
