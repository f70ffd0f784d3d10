//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: Saber+ - indigo accents on a slate background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(241, 245, 249);
    pub const TEXT_DIM: Color = Color::Rgb(100, 116, 139);
    pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184);

    pub const BG_DARK: Color = Color::Rgb(15, 23, 42);
    pub const BG_SURFACE: Color = Color::Rgb(30, 41, 59);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(51, 65, 85);

    pub const SUCCESS: Color = Color::Rgb(16, 185, 129); // #10b981
    pub const ERROR: Color = Color::Rgb(239, 68, 68); // #ef4444
    pub const INDIGO: Color = Color::Rgb(99, 102, 241); // #6366f1
    pub const AMBER: Color = Color::Rgb(245, 158, 11);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

/// Toast notification styles, one entry per notification kind
pub mod notification {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ToastColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: ToastColors = ToastColors {
        fg: palette::WHITE,
        bg: palette::INDIGO,
        border: Color::Rgb(129, 140, 248),
    };

    pub const SUCCESS: ToastColors = ToastColors {
        fg: palette::WHITE,
        bg: palette::SUCCESS,
        border: Color::Rgb(52, 211, 153),
    };

    pub const ERROR: ToastColors = ToastColors {
        fg: palette::WHITE,
        bg: palette::ERROR,
        border: Color::Rgb(248, 113, 113),
    };
}

/// Header bar with the product title and the header buttons
pub mod header {
    use super::*;

    pub const TITLE: Style = Style::new()
        .fg(palette::INDIGO)
        .add_modifier(Modifier::BOLD);
    pub const BUTTON_PRIMARY: Style = Style::new().fg(palette::WHITE).bg(palette::INDIGO);
    pub const BUTTON_SECONDARY: Style = Style::new()
        .fg(palette::TEXT)
        .bg(palette::BG_HIGHLIGHT);
    pub const BACKGROUND: Color = palette::BG_DARK;
}

/// Navigation bar
pub mod nav {
    use super::*;

    pub const ACTIVE: Style = Style::new()
        .fg(palette::WHITE)
        .bg(palette::INDIGO)
        .add_modifier(Modifier::BOLD);
    pub const INACTIVE: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const DIVIDER: Color = palette::TEXT_DIM;
}

/// Page bodies: cards, lists and their selection state
pub mod page {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const BORDER_SELECTED: Color = palette::INDIGO;
    pub const TITLE: Style = Style::new().fg(palette::TEXT).add_modifier(Modifier::BOLD);
    pub const TEXT: Style = Style::new().fg(palette::TEXT);
    pub const MUTED: Style = Style::new().fg(palette::TEXT_MUTED);
    pub const SELECTED_ROW: Style = Style::new()
        .fg(palette::WHITE)
        .bg(palette::BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    pub const METRIC_VALUE: Style = Style::new()
        .fg(palette::INDIGO)
        .add_modifier(Modifier::BOLD);
    pub const METRIC_HIDDEN: Style = Style::new().fg(palette::BG_SURFACE);
    pub const STATUS_DONE: Color = palette::SUCCESS;
    pub const STATUS_PENDING: Color = palette::AMBER;
    pub const BACKGROUND: Color = palette::BG_DARK;
}

/// Modal confirm/inform dialogs
pub mod dialog {
    use super::*;

    pub const BORDER: Color = palette::INDIGO;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const TEXT: Style = Style::new().fg(palette::TEXT);
    pub const KEY: Style = Style::new()
        .fg(palette::INDIGO)
        .add_modifier(Modifier::BOLD);
    pub const HINT: Style = Style::new().fg(palette::TEXT_MUTED);
}

/// Footer help line
pub mod help_line {
    use super::*;

    pub const KEY: Style = Style::new()
        .fg(palette::INDIGO)
        .add_modifier(Modifier::BOLD);
    pub const DESCRIPTION: Style = Style::new().fg(palette::TEXT_DIM);
}
