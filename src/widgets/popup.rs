use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Center a `width` x `height` box inside `frame_area`, clamped to fit.
pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    Rect {
        x: frame_area.x + (frame_area.width - popup_width) / 2,
        y: frame_area.y + (frame_area.height - popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

/// Size a popup around wrapped text: the widest line plus `chrome` columns,
/// and the line count plus `chrome_rows` rows, bounded by `max_width`.
pub fn fit_text(text: &str, chrome: u16, chrome_rows: u16, max_width: u16) -> (u16, u16) {
    let inner_max = max_width.saturating_sub(chrome).max(1) as usize;
    let mut widest = 0usize;
    let mut rows = 0usize;
    for line in text.lines() {
        let len = line.chars().count();
        widest = widest.max(len.min(inner_max));
        rows += len.max(1).div_ceil(inner_max);
    }
    let width = u16::try_from(widest).unwrap_or(u16::MAX).saturating_add(chrome);
    let height = u16::try_from(rows.max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(chrome_rows);
    (width, height)
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
