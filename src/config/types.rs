// Configuration type definitions

use serde::Deserialize;

use crate::pages::Page;

/// Toast notification configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_entry_delay_ms")]
    pub entry_delay_ms: u64,
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
    #[serde(default = "default_exit_ms")]
    pub exit_ms: u64,
    /// Offset concurrent toasts vertically instead of overlapping them
    #[serde(default = "default_stacking")]
    pub stacking: bool,
}

fn default_entry_delay_ms() -> u64 {
    100
}

fn default_display_ms() -> u64 {
    3000
}

fn default_exit_ms() -> u64 {
    300
}

fn default_stacking() -> bool {
    true
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            entry_delay_ms: default_entry_delay_ms(),
            display_ms: default_display_ms(),
            exit_ms: default_exit_ms(),
            stacking: default_stacking(),
        }
    }
}

/// Startup configuration section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StartupConfig {
    #[serde(default)]
    pub page: Page,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub startup: StartupConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
