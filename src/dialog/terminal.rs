use ratatui::DefaultTerminal;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use super::{DialogKind, Dialogs, render_dialog};
use crate::error::SaberError;

/// Modal dialogs drawn over the last rendered frame.
///
/// `confirm` and `inform` block the event loop until the user answers, the
/// same way a browser `confirm()` or `alert()` would. Deferred tasks and
/// toast timers simply catch up on the next loop turn.
pub struct TerminalDialogs<'a> {
    terminal: &'a mut DefaultTerminal,
    backdrop: &'a Buffer,
}

impl<'a> TerminalDialogs<'a> {
    pub fn new(terminal: &'a mut DefaultTerminal, backdrop: &'a Buffer) -> Self {
        Self { terminal, backdrop }
    }

    fn show(&mut self, kind: DialogKind, text: &str) -> Result<bool, SaberError> {
        let backdrop = self.backdrop;
        loop {
            self.terminal.draw(|frame| {
                if frame.area() == backdrop.area {
                    frame.buffer_mut().merge(backdrop);
                }
                render_dialog(frame, kind, text);
            })?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(answer) = answer_for(kind, key)
            {
                return Ok(answer);
            }
        }
    }
}

impl Dialogs for TerminalDialogs<'_> {
    fn confirm(&mut self, prompt: &str) -> bool {
        match self.show(DialogKind::Confirm, prompt) {
            Ok(answer) => answer,
            Err(_e) => {
                #[cfg(debug_assertions)]
                log::error!("Confirm dialog failed, treating as 'no': {}", _e);
                false
            }
        }
    }

    fn inform(&mut self, message: &str) {
        if let Err(_e) = self.show(DialogKind::Inform, message) {
            #[cfg(debug_assertions)]
            log::error!("Inform dialog failed: {}", _e);
        }
    }
}

/// Map a key press to a dialog answer. `None` keeps the dialog open.
///
/// Confirm accepts `s`/`y`/Enter as yes and `n`/Esc as no. Inform is
/// dismissed by any key.
pub fn answer_for(kind: DialogKind, key: KeyEvent) -> Option<bool> {
    match kind {
        DialogKind::Confirm => match key.code {
            KeyCode::Char('s' | 'S' | 'y' | 'Y') | KeyCode::Enter => Some(true),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(false),
            _ => None,
        },
        DialogKind::Inform => Some(true),
    }
}
