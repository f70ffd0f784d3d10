//! Fórum: summary card with an access button

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{ListItem, Paragraph, Wrap},
};

use super::PageHandler;
use super::catalog::ForumSummary;
use super::context::{Deferred, PageContext};
use super::list_render::{page_block, render_list};
use crate::notification::NotificationKind;
use crate::theme;

/// Pause between the redirect toast and the placeholder message
pub const FORUM_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

pub const FORUM_PLACEHOLDER: &str =
    "Aqui seria aberto o fórum completo com todas as perguntas e respostas.";

#[derive(Debug)]
pub struct ForumPage {
    summary: ForumSummary,
}

impl ForumPage {
    pub fn new(summary: ForumSummary) -> Self {
        Self { summary }
    }

    /// The "Acessar Fórum" button
    pub fn access(&mut self, ctx: &mut PageContext) {
        ctx.notify("Redirecionando para o fórum...", NotificationKind::Info);
        ctx.after(
            FORUM_REDIRECT_DELAY,
            Deferred::Inform(FORUM_PLACEHOLDER.to_string()),
        );
    }
}

impl PageHandler for ForumPage {
    fn init(&mut self, _ctx: &mut PageContext) {}

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut PageContext) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char('a') => {
                self.access(ctx);
                true
            }
            _ => false,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _now: Instant) {
        let [summary_area, topics_area] =
            Layout::vertical([Constraint::Length(7), Constraint::Min(3)]).areas(area);

        let text = Text::from(vec![
            Line::from(Span::styled(self.summary.description.clone(), theme::page::TEXT)),
            Line::default(),
            Line::from(vec![
                Span::styled(self.summary.open_questions.to_string(), theme::page::METRIC_VALUE),
                Span::styled(" perguntas abertas   ", theme::page::MUTED),
                Span::styled(
                    self.summary.answered_this_week.to_string(),
                    theme::page::METRIC_VALUE,
                ),
                Span::styled(" respondidas esta semana", theme::page::MUTED),
            ]),
            Line::default(),
            Line::from(Span::styled("[Enter] Acessar Fórum", theme::header::BUTTON_PRIMARY)),
        ]);
        let paragraph = Paragraph::new(text)
            .block(page_block("Fórum", true))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, summary_area);

        let topics = self
            .summary
            .recent_topics
            .iter()
            .map(|topic| ListItem::new(Line::from(Span::styled(topic.clone(), theme::page::TEXT))))
            .collect();
        render_list(frame, topics_area, "Tópicos recentes", topics, None, false);
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        &[("Enter", "Acessar Fórum")]
    }
}
