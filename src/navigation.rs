//! Navigation bar state and rendering
//!
//! Exactly one page is active at a time. Activating a page always succeeds,
//! including re-activating the current one.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Tabs},
};

use crate::pages::Page;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    active: Page,
}

impl NavState {
    pub fn new(active: Page) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Page {
        self.active
    }

    /// Mark `page` active and every other item inactive
    pub fn activate(&mut self, page: Page) {
        #[cfg(debug_assertions)]
        log::debug!("Navegando para: {}", page.label());
        self.active = page;
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active == page
    }
}

pub fn render_nav(frame: &mut Frame, area: Rect, nav: &NavState) {
    let titles = Page::ALL
        .iter()
        .enumerate()
        .map(|(index, page)| Line::from(format!(" {} {} ", index + 1, page.label())));

    let tabs = Tabs::new(titles)
        .select(nav.active().index())
        .style(theme::nav::INACTIVE)
        .highlight_style(theme::nav::ACTIVE)
        .divider("│")
        .padding("", "")
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme::nav::DIVIDER)),
        );

    frame.render_widget(tabs, area);
}
