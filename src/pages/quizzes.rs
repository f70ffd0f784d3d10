//! Meus Quizzes: quiz cards with view, edit and delete actions

use std::time::Instant;

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    text::{Line, Span},
    widgets::ListItem,
};

use super::PageHandler;
use super::catalog::QuizCard;
use super::context::PageContext;
use super::list_render::{move_selection, render_empty, render_list};
use crate::notification::NotificationKind;
use crate::theme;

/// Action buttons on a quiz card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    View,
    Edit,
    Delete,
}

impl QuizAction {
    pub fn verb(self) -> &'static str {
        match self {
            QuizAction::View => "visualizar",
            QuizAction::Edit => "editar",
            QuizAction::Delete => "excluir",
        }
    }
}

#[derive(Debug)]
pub struct QuizzesPage {
    quizzes: Vec<QuizCard>,
    selected: usize,
}

impl QuizzesPage {
    pub fn new(quizzes: Vec<QuizCard>) -> Self {
        Self {
            quizzes,
            selected: 0,
        }
    }

    pub fn quizzes(&self) -> &[QuizCard] {
        &self.quizzes
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Run a card action on the quiz at `index`.
    ///
    /// Deleting asks for confirmation first; a declined confirmation leaves
    /// the card in place and shows nothing.
    pub fn act(&mut self, index: usize, action: QuizAction, ctx: &mut PageContext) {
        let Some(quiz) = self.quizzes.get(index) else {
            return;
        };
        let title = quiz.title.clone();

        match action {
            QuizAction::Delete => {
                let prompt = format!("Tem certeza que deseja excluir o quiz \"{}\"?", title);
                if ctx.confirm(&prompt) {
                    ctx.notify(
                        &format!("Quiz \"{}\" excluído com sucesso!", title),
                        NotificationKind::Success,
                    );
                    self.quizzes.remove(index);
                    self.selected = move_selection(self.selected, self.quizzes.len(), 0);
                }
            }
            QuizAction::View | QuizAction::Edit => {
                ctx.notify(
                    &format!("Abrindo {} para \"{}\"", action.verb(), title),
                    NotificationKind::Info,
                );
            }
        }
    }

    /// The "Novo Quiz" button
    pub fn new_quiz(&mut self, ctx: &mut PageContext) {
        ctx.notify("Abrindo criador de quiz...", NotificationKind::Info);
    }
}

impl PageHandler for QuizzesPage {
    fn init(&mut self, _ctx: &mut PageContext) {
        self.selected = move_selection(self.selected, self.quizzes.len(), 0);
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut PageContext) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = move_selection(self.selected, self.quizzes.len(), -1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = move_selection(self.selected, self.quizzes.len(), 1);
            }
            KeyCode::Char('v') | KeyCode::Enter => self.act(self.selected, QuizAction::View, ctx),
            KeyCode::Char('e') => self.act(self.selected, QuizAction::Edit, ctx),
            KeyCode::Char('d') | KeyCode::Delete => {
                self.act(self.selected, QuizAction::Delete, ctx)
            }
            KeyCode::Char('n') => self.new_quiz(ctx),
            _ => return false,
        }
        true
    }

    fn render(&self, frame: &mut Frame, area: Rect, _now: Instant) {
        if self.quizzes.is_empty() {
            render_empty(frame, area, "Meus Quizzes", "Nenhum quiz cadastrado. Pressione n para criar.");
            return;
        }

        let items = self
            .quizzes
            .iter()
            .map(|quiz| {
                ListItem::new(vec![
                    Line::from(Span::styled(quiz.title.clone(), theme::page::TITLE)),
                    Line::from(Span::styled(
                        format!(
                            "{} · {} questões · {}",
                            quiz.subject, quiz.questions, quiz.class_name
                        ),
                        theme::page::MUTED,
                    )),
                ])
            })
            .collect();

        render_list(frame, area, "Meus Quizzes", items, Some(self.selected), true);
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("↑↓", "Selecionar"),
            ("v", "Visualizar"),
            ("e", "Editar"),
            ("d", "Excluir"),
            ("n", "Novo Quiz"),
        ]
    }
}

#[cfg(test)]
#[path = "quizzes_tests.rs"]
mod quizzes_tests;
