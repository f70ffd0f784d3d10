use std::time::Instant;

use crate::config::Config;
use crate::dialog::Dialogs;
use crate::navigation::NavState;
use crate::notification::NotificationState;
use crate::pages::{Deferred, Page, PageCatalog, PageContext, PageHandler, Pages};
use crate::scheduler::Scheduler;

pub const CREATE_QUIZ_PLACEHOLDER: &str = "Funcionalidade \"Criar Quiz\" seria implementada aqui!";
pub const EXIT_PROMPT: &str = "Tem certeza que deseja sair?";
pub const EXIT_MESSAGE: &str = "Saindo do sistema...";

/// Application state
pub struct App {
    pub nav: NavState,
    pub pages: Pages,
    pub notification: NotificationState,
    pub scheduler: Scheduler<Deferred>,
    should_quit: bool,
    dirty: bool,
}

impl App {
    /// Build the app on `start_page`. Page setup runs on `start`.
    pub fn new(config: &Config, start_page: Page) -> Self {
        Self::with_catalog(config, start_page, PageCatalog::demo())
    }

    pub fn with_catalog(config: &Config, start_page: Page, catalog: PageCatalog) -> Self {
        Self {
            nav: NavState::new(start_page),
            pages: Pages::from_catalog(catalog),
            notification: NotificationState::with_config(&config.notifications),
            scheduler: Scheduler::new(),
            should_quit: false,
            dirty: true,
        }
    }

    /// Run the setup of the initial page
    pub fn start(&mut self, dialogs: &mut dyn Dialogs, now: Instant) {
        self.navigate(self.nav.active(), dialogs, now);

        #[cfg(debug_assertions)]
        log::info!("Sistema Saber+ Gestor inicializado com sucesso!");
    }

    pub fn active_page(&self) -> Page {
        self.nav.active()
    }

    /// Activate `page` in the navigation bar and run its setup.
    ///
    /// Deferred work belongs to the page that scheduled it and is dropped
    /// on every navigation, including re-activating the current page.
    /// Toasts already on screen keep running.
    pub fn navigate(&mut self, page: Page, dialogs: &mut dyn Dialogs, now: Instant) {
        let _dropped = self.scheduler.clear();
        #[cfg(debug_assertions)]
        if _dropped > 0 {
            log::debug!("Dropped {} pending task(s) on navigation", _dropped);
        }

        self.nav.activate(page);
        self.with_page(page, dialogs, now, |handler, ctx| handler.init(ctx));
        self.dirty = true;
    }

    /// Run `f` against a page handler with a context borrowing the app's
    /// notifications and scheduler
    pub(super) fn with_page<R>(
        &mut self,
        page: Page,
        dialogs: &mut dyn Dialogs,
        now: Instant,
        f: impl FnOnce(&mut dyn PageHandler, &mut PageContext) -> R,
    ) -> R {
        let mut ctx = PageContext {
            notifications: &mut self.notification,
            dialogs,
            scheduler: &mut self.scheduler,
            now,
        };
        f(self.pages.get_mut(page), &mut ctx)
    }

    /// Header "Criar Quiz" button
    pub fn create_quiz(&mut self, dialogs: &mut dyn Dialogs) {
        dialogs.inform(CREATE_QUIZ_PLACEHOLDER);
    }

    /// Header "Relatórios" button
    pub fn open_reports(&mut self, dialogs: &mut dyn Dialogs, now: Instant) {
        self.navigate(Page::Relatorios, dialogs, now);
    }

    /// Header "Sair" button: quits only after confirmation
    pub fn request_exit(&mut self, dialogs: &mut dyn Dialogs) {
        if dialogs.confirm(EXIT_PROMPT) {
            dialogs.inform(EXIT_MESSAGE);
            self.should_quit = true;
        }
    }

    /// Run deferred tasks that are due, then drop finished notifications.
    pub fn tick(&mut self, now: Instant, dialogs: &mut dyn Dialogs) {
        for task in self.scheduler.drain_due(now) {
            self.run_deferred(task, dialogs, now);
            self.dirty = true;
        }

        if self.notification.tick(now) > 0 {
            self.dirty = true;
        }
    }

    fn run_deferred(&mut self, task: Deferred, dialogs: &mut dyn Dialogs, now: Instant) {
        match task {
            Deferred::Notify { message, kind } => self.notification.notify_at(&message, kind, now),
            Deferred::Inform(message) => dialogs.inform(&message),
            Deferred::RevealMetric(index) => self.pages.dashboard.reveal_metric(index),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// A frame is needed after input, after deferred work, and on every turn
    /// while a toast is animating
    pub fn should_render(&self) -> bool {
        self.dirty || self.notification.is_animating()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
