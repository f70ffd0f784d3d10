//! Confirmation and message dialogs
//!
//! Handlers never talk to the terminal directly to ask a question. They get a
//! `Dialogs` capability, so the same handler runs against a blocking modal in
//! the real UI and against scripted answers in tests.

mod dialog_render;
mod scripted;
mod terminal;

pub use dialog_render::render_dialog;
pub use scripted::ScriptedDialogs;
pub use terminal::{TerminalDialogs, answer_for};

/// Which dialog is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Yes/no question
    Confirm,
    /// Message acknowledged with any key
    Inform,
}

/// Blocking confirm/inform capability handed to event handlers
pub trait Dialogs {
    /// Ask a yes/no question. Returns `true` only on an explicit yes.
    fn confirm(&mut self, prompt: &str) -> bool;

    /// Show a message and wait until it is acknowledged.
    fn inform(&mut self, message: &str);
}
