//! Shared list widgets for page bodies

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::theme;

pub(crate) fn page_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        theme::page::BORDER_SELECTED
    } else {
        theme::page::BORDER
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(format!(" {} ", title), theme::page::TITLE))
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme::page::BACKGROUND))
}

/// Render a bordered list, highlighting `selected` when the list is focused
pub(crate) fn render_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem<'_>>,
    selected: Option<usize>,
    focused: bool,
) {
    let list = List::new(items)
        .block(page_block(title, focused))
        .highlight_style(theme::page::SELECTED_ROW)
        .highlight_symbol("▸ ");

    let mut state = ListState::default().with_selected(if focused { selected } else { None });
    frame.render_stateful_widget(list, area, &mut state);
}

pub(crate) fn render_empty(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(Span::styled(message.to_string(), theme::page::MUTED))
        .block(page_block(title, false));
    frame.render_widget(paragraph, area);
}

/// Move a selection by `delta`, clamped to `0..len`
pub(crate) fn move_selection(selected: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    selected.saturating_add_signed(delta).min(len - 1)
}
