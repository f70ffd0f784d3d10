//! Notification module for saber
//!
//! Transient toast messages anchored to the top-right corner of the frame.
//! Any page or handler can raise one; each toast runs its own
//! entering → visible → leaving → removed lifecycle and never blocks input.

mod notification_render;
mod notification_state;

pub use notification_render::{render_notifications, toast_area};
pub use notification_state::{
    Notification, NotificationKind, NotificationState, NotificationTimings, Phase,
};
