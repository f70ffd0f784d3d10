//! Relatórios: report generation with a simulated delay

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    text::{Line, Span},
    widgets::ListItem,
};

use super::PageHandler;
use super::catalog::ReportItem;
use super::context::{Deferred, PageContext};
use super::list_render::{move_selection, render_empty, render_list};
use crate::notification::NotificationKind;
use crate::theme;

/// Simulated time to produce a report
pub const REPORT_GENERATION_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug)]
pub struct ReportsPage {
    reports: Vec<ReportItem>,
    selected: usize,
}

impl ReportsPage {
    pub fn new(reports: Vec<ReportItem>) -> Self {
        Self {
            reports,
            selected: 0,
        }
    }

    pub fn reports(&self) -> &[ReportItem] {
        &self.reports
    }

    /// The "Gerar" button: announce generation now, report success later.
    pub fn generate(&mut self, index: usize, ctx: &mut PageContext) {
        let Some(report) = self.reports.get(index) else {
            return;
        };

        ctx.notify(&format!("Gerando {}...", report.name), NotificationKind::Info);
        ctx.after(
            REPORT_GENERATION_DELAY,
            Deferred::Notify {
                message: format!("{} gerado com sucesso!", report.name),
                kind: NotificationKind::Success,
            },
        );
    }
}

impl PageHandler for ReportsPage {
    fn init(&mut self, _ctx: &mut PageContext) {}

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut PageContext) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = move_selection(self.selected, self.reports.len(), -1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = move_selection(self.selected, self.reports.len(), 1);
            }
            KeyCode::Enter | KeyCode::Char('g') => self.generate(self.selected, ctx),
            _ => return false,
        }
        true
    }

    fn render(&self, frame: &mut Frame, area: Rect, _now: Instant) {
        if self.reports.is_empty() {
            render_empty(frame, area, "Relatórios", "Nenhum relatório disponível.");
            return;
        }

        let items = self
            .reports
            .iter()
            .map(|report| {
                ListItem::new(vec![
                    Line::from(Span::styled(report.name.clone(), theme::page::TITLE)),
                    Line::from(Span::styled(report.description.clone(), theme::page::MUTED)),
                ])
            })
            .collect();

        render_list(frame, area, "Relatórios", items, Some(self.selected), true);
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        &[("↑↓", "Selecionar"), ("Enter", "Gerar")]
    }
}
