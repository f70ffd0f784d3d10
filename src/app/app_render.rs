use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::app_state::App;
use crate::navigation::render_nav;
use crate::notification::render_notifications;
use crate::theme;

pub const APP_TITLE: &str = "Saber+ Gestor";

const HEADER_BUTTONS: [(&str, bool); 3] =
    [("[c] Criar Quiz", true), ("[r] Relatórios", false), ("[q] Sair", false)];

const GLOBAL_HINTS: [(&str, &str); 2] = [("1-5/Tab", "Páginas"), ("q", "Sair")];

impl App {
    /// Draw header, navigation, the active page and the footer, then the
    /// notification layer on top of everything.
    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        let [header_area, nav_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        render_header(frame, header_area);
        render_nav(frame, nav_area, &self.nav);

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::page::BACKGROUND)),
            body_area,
        );
        self.pages.get(self.active_page()).render(frame, body_area, now);

        let hints = self.pages.get(self.active_page()).key_hints();
        render_footer(frame, footer_area, hints);

        render_notifications(frame, &mut self.notification, now);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::header::BACKGROUND)),
        area,
    );

    let title = Paragraph::new(Line::from(Span::styled(
        format!(" {APP_TITLE}"),
        theme::header::TITLE,
    )));
    frame.render_widget(title, area);

    let mut buttons = Vec::with_capacity(HEADER_BUTTONS.len() * 2);
    for (label, primary) in HEADER_BUTTONS {
        let style = if primary {
            theme::header::BUTTON_PRIMARY
        } else {
            theme::header::BUTTON_SECONDARY
        };
        buttons.push(Span::styled(format!(" {label} "), style));
        buttons.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(buttons)).alignment(Alignment::Right),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, page_hints: &[(&str, &str)]) {
    let mut spans = vec![Span::raw(" ")];
    for (key, description) in page_hints.iter().chain(GLOBAL_HINTS.iter()) {
        spans.push(Span::styled(*key, theme::help_line::KEY));
        spans.push(Span::styled(format!(" {description}  "), theme::help_line::DESCRIPTION));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
