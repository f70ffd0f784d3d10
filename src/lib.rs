//! saber library - Saber+ Gestor terminal dashboard
//!
//! This library exposes the core functionality of saber for testing purposes.

pub mod app;
pub mod config;
pub mod dialog;
pub mod error;
pub mod navigation;
pub mod notification;
pub mod pages;
pub mod scheduler;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use notification::{NotificationKind, NotificationState};
pub use pages::Page;
