//! Per-page entry points
//!
//! Each page owns its items (handed over from the catalog at setup) and
//! reacts to input through a `PageContext`. The app decides which page is
//! active and calls its `init` once per navigation.

mod catalog;
mod classes;
mod context;
mod dashboard;
mod forum;
mod list_render;
mod page;
mod quizzes;
mod reports;

use std::time::Instant;

use ratatui::{Frame, crossterm::event::KeyEvent, layout::Rect};

pub use catalog::{
    ActivityItem, ClassCard, ForumSummary, MetricCard, PageCatalog, PerformanceItem, QuizCard,
    ReportItem,
};
pub use classes::ClassesPage;
pub use context::{Deferred, PageContext};
pub use dashboard::{DashboardItem, DashboardPage, WELCOME_MESSAGE};
pub use forum::{FORUM_PLACEHOLDER, ForumPage};
pub use page::Page;
pub use quizzes::{QuizAction, QuizzesPage};
pub use reports::{REPORT_GENERATION_DELAY, ReportsPage};

/// Behavior shared by every page
pub trait PageHandler {
    /// Page setup, run each time the page becomes active
    fn init(&mut self, ctx: &mut PageContext);

    /// React to a key the app did not handle globally.
    /// Returns true when the key was consumed.
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut PageContext) -> bool;

    fn render(&self, frame: &mut Frame, area: Rect, now: Instant);

    /// Key/description pairs for the footer help line
    fn key_hints(&self) -> &'static [(&'static str, &'static str)];
}

/// One handler per page
#[derive(Debug)]
pub struct Pages {
    pub dashboard: DashboardPage,
    pub quizzes: QuizzesPage,
    pub classes: ClassesPage,
    pub reports: ReportsPage,
    pub forum: ForumPage,
}

impl Pages {
    pub fn from_catalog(catalog: PageCatalog) -> Self {
        Self {
            dashboard: DashboardPage::new(&catalog),
            quizzes: QuizzesPage::new(catalog.quizzes),
            classes: ClassesPage::new(catalog.classes),
            reports: ReportsPage::new(catalog.reports),
            forum: ForumPage::new(catalog.forum),
        }
    }

    pub fn get(&self, page: Page) -> &dyn PageHandler {
        match page {
            Page::Dashboard => &self.dashboard,
            Page::MeusQuizzes => &self.quizzes,
            Page::Turmas => &self.classes,
            Page::Relatorios => &self.reports,
            Page::Forum => &self.forum,
        }
    }

    pub fn get_mut(&mut self, page: Page) -> &mut dyn PageHandler {
        match page {
            Page::Dashboard => &mut self.dashboard,
            Page::MeusQuizzes => &mut self.quizzes,
            Page::Turmas => &mut self.classes,
            Page::Relatorios => &mut self.reports,
            Page::Forum => &mut self.forum,
        }
    }
}
