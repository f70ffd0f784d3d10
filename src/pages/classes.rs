//! Turmas: class cards with a manage button

use std::time::Instant;

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    text::{Line, Span},
    widgets::ListItem,
};

use super::PageHandler;
use super::catalog::ClassCard;
use super::context::PageContext;
use super::list_render::{move_selection, render_empty, render_list};
use crate::notification::NotificationKind;
use crate::theme;

#[derive(Debug)]
pub struct ClassesPage {
    classes: Vec<ClassCard>,
    selected: usize,
}

impl ClassesPage {
    pub fn new(classes: Vec<ClassCard>) -> Self {
        Self {
            classes,
            selected: 0,
        }
    }

    pub fn classes(&self) -> &[ClassCard] {
        &self.classes
    }

    /// The "Gerenciar" button on the class card at `index`
    pub fn manage(&mut self, index: usize, ctx: &mut PageContext) {
        if let Some(class) = self.classes.get(index) {
            ctx.notify(
                &format!("Abrindo gerenciamento da turma {}", class.name),
                NotificationKind::Info,
            );
        }
    }
}

impl PageHandler for ClassesPage {
    fn init(&mut self, _ctx: &mut PageContext) {}

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut PageContext) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = move_selection(self.selected, self.classes.len(), -1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = move_selection(self.selected, self.classes.len(), 1);
            }
            KeyCode::Enter | KeyCode::Char('g') => self.manage(self.selected, ctx),
            _ => return false,
        }
        true
    }

    fn render(&self, frame: &mut Frame, area: Rect, _now: Instant) {
        if self.classes.is_empty() {
            render_empty(frame, area, "Turmas", "Nenhuma turma cadastrada.");
            return;
        }

        let items = self
            .classes
            .iter()
            .map(|class| {
                ListItem::new(vec![
                    Line::from(Span::styled(class.name.clone(), theme::page::TITLE)),
                    Line::from(Span::styled(
                        format!("{} alunos · média {}", class.students, class.average),
                        theme::page::MUTED,
                    )),
                ])
            })
            .collect();

        render_list(frame, area, "Turmas", items, Some(self.selected), true);
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        &[("↑↓", "Selecionar"), ("Enter", "Gerenciar")]
    }
}
