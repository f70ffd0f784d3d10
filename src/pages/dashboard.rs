//! Dashboard: metric cards, recent activities and class performance

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, ListItem, Paragraph},
};

use super::PageHandler;
use super::catalog::{ActivityItem, MetricCard, PageCatalog, PerformanceItem};
use super::context::{Deferred, PageContext};
use super::list_render::{move_selection, render_list};
use crate::notification::NotificationKind;
use crate::theme;

/// Gap between consecutive metric cards starting their reveal
pub const METRIC_STAGGER: Duration = Duration::from_millis(100);
/// Time a card stays hidden before fading in
pub const METRIC_FADE_DELAY: Duration = Duration::from_millis(100);
pub const WELCOME_DELAY: Duration = Duration::from_millis(1000);
pub const WELCOME_MESSAGE: &str = "Dashboard carregado com sucesso!";

const METRIC_ROW_HEIGHT: u16 = 6;

/// Entry in the activity/performance selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardItem {
    Activity(usize),
    Performance(usize),
}

#[derive(Debug)]
pub struct DashboardPage {
    metrics: Vec<MetricCard>,
    revealed: Vec<bool>,
    hovered_metric: Option<usize>,
    activities: Vec<ActivityItem>,
    performance: Vec<PerformanceItem>,
    selected: usize,
}

impl DashboardPage {
    pub fn new(catalog: &PageCatalog) -> Self {
        Self {
            revealed: vec![true; catalog.metrics.len()],
            metrics: catalog.metrics.clone(),
            hovered_metric: None,
            activities: catalog.activities.clone(),
            performance: catalog.performance.clone(),
            selected: 0,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn reveal_metric(&mut self, index: usize) {
        if let Some(revealed) = self.revealed.get_mut(index) {
            *revealed = true;
        }
    }

    pub fn hovered_metric(&self) -> Option<usize> {
        self.hovered_metric
    }

    /// Move the raised card left or right
    pub fn hover_metric(&mut self, delta: isize) {
        if self.metrics.is_empty() {
            return;
        }
        let next = match self.hovered_metric {
            Some(current) => move_selection(current, self.metrics.len(), delta),
            None if delta < 0 => self.metrics.len() - 1,
            None => 0,
        };
        self.hovered_metric = Some(next);
    }

    fn item_count(&self) -> usize {
        self.activities.len() + self.performance.len()
    }

    pub fn selected_item(&self) -> Option<DashboardItem> {
        if self.selected < self.activities.len() {
            Some(DashboardItem::Activity(self.selected))
        } else if self.selected < self.item_count() {
            Some(DashboardItem::Performance(self.selected - self.activities.len()))
        } else {
            None
        }
    }

    /// Show the details of an activity or class performance entry
    pub fn open_item(&mut self, item: DashboardItem, ctx: &mut PageContext) {
        let message = match item {
            DashboardItem::Activity(index) => self.activities.get(index).map(|activity| {
                format!(
                    "Atividade: {}\nStatus: {}\n\nDetalhes da atividade seriam mostrados aqui.",
                    activity.title, activity.status
                )
            }),
            DashboardItem::Performance(index) => self.performance.get(index).map(|entry| {
                format!(
                    "Turma: {}\nPerformance: {}\n\nDetalhes da turma seriam mostrados aqui.",
                    entry.class_name, entry.score
                )
            }),
        };

        if let Some(message) = message {
            ctx.inform(&message);
        }
    }

    fn render_metrics(&self, frame: &mut Frame, area: Rect) {
        if self.metrics.is_empty() {
            return;
        }
        let count = u32::try_from(self.metrics.len()).unwrap_or(u32::MAX);
        let columns = Layout::horizontal(
            (0..self.metrics.len()).map(|_| Constraint::Ratio(1, count)),
        )
        .split(area);

        for (index, (metric, column)) in self.metrics.iter().zip(columns.iter()).enumerate() {
            let hovered = self.hovered_metric == Some(index);
            // Resting cards sit one row down; the hovered card is raised
            let card = Rect {
                x: column.x,
                y: if hovered { column.y } else { column.y + 1 },
                width: column.width,
                height: column.height.saturating_sub(1),
            };

            if !self.is_revealed(index) {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme::page::METRIC_HIDDEN);
                frame.render_widget(block, card);
                continue;
            }

            let border = if hovered {
                theme::page::BORDER_SELECTED
            } else {
                theme::page::BORDER
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(theme::page::BACKGROUND));
            let text = vec![
                Line::from(Span::styled(metric.label.clone(), theme::page::MUTED)),
                Line::default(),
                Line::from(Span::styled(metric.value.clone(), theme::page::METRIC_VALUE)),
            ];
            frame.render_widget(Paragraph::new(text).block(block), card);
        }
    }
}

fn status_style(status: &str) -> Style {
    if status == "Concluído" {
        Style::default().fg(theme::page::STATUS_DONE)
    } else {
        Style::default().fg(theme::page::STATUS_PENDING)
    }
}

impl PageHandler for DashboardPage {
    /// Hide the metric cards and reveal them one after another, then greet.
    fn init(&mut self, ctx: &mut PageContext) {
        self.revealed = vec![false; self.metrics.len()];
        for index in 0..self.metrics.len() {
            let stagger = METRIC_STAGGER * u32::try_from(index).unwrap_or(u32::MAX);
            ctx.after(stagger + METRIC_FADE_DELAY, Deferred::RevealMetric(index));
        }

        ctx.after(
            WELCOME_DELAY,
            Deferred::Notify {
                message: WELCOME_MESSAGE.to_string(),
                kind: NotificationKind::Success,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut PageContext) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.hover_metric(-1),
            KeyCode::Right | KeyCode::Char('l') => self.hover_metric(1),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = move_selection(self.selected, self.item_count(), -1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = move_selection(self.selected, self.item_count(), 1);
            }
            KeyCode::Enter => {
                if let Some(item) = self.selected_item() {
                    self.open_item(item, ctx);
                }
            }
            _ => return false,
        }
        true
    }

    fn render(&self, frame: &mut Frame, area: Rect, _now: Instant) {
        let [metrics_area, lists_area] =
            Layout::vertical([Constraint::Length(METRIC_ROW_HEIGHT), Constraint::Min(3)])
                .areas(area);
        self.render_metrics(frame, metrics_area);

        let [activities_area, performance_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(lists_area);

        let activities = self
            .activities
            .iter()
            .map(|activity| {
                ListItem::new(Line::from(vec![
                    Span::styled(activity.title.clone(), theme::page::TEXT),
                    Span::raw("  "),
                    Span::styled(activity.status.clone(), status_style(&activity.status)),
                ]))
            })
            .collect();
        let performance = self
            .performance
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.class_name.clone(), theme::page::TEXT),
                    Span::raw("  "),
                    Span::styled(entry.score.clone(), theme::page::METRIC_VALUE),
                ]))
            })
            .collect();

        let (activity_selected, performance_selected) = match self.selected_item() {
            Some(DashboardItem::Activity(index)) => (Some(index), None),
            Some(DashboardItem::Performance(index)) => (None, Some(index)),
            None => (None, None),
        };
        render_list(
            frame,
            activities_area,
            "Atividades recentes",
            activities,
            activity_selected,
            activity_selected.is_some(),
        );
        render_list(
            frame,
            performance_area,
            "Desempenho das turmas",
            performance,
            performance_selected,
            performance_selected.is_some(),
        );
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        &[("←→", "Destacar card"), ("↑↓", "Selecionar"), ("Enter", "Detalhes")]
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod dashboard_tests;
