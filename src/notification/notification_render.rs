//! Notification rendering
//!
//! Draws active toasts over the rest of the UI. The frame plays the role of
//! the UI root: when it is too small to host a toast, rendering is skipped.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::notification_state::{Notification, NotificationState, Phase};
use crate::widgets::popup;

/// Distance between the frame edge and the toast anchor
const MARGIN: u16 = 2;
/// One line of content plus borders
const TOAST_HEIGHT: u16 = 3;
/// Borders (2) + one space of padding on each side (2)
const TOAST_CHROME: u16 = 4;
const MIN_TOAST_WIDTH: u16 = 5;
const MAX_TOAST_WIDTH: u16 = 60;

/// Render all active notifications in the top-right corner of the frame.
///
/// Call this after the main UI so toasts appear on top of other content.
/// Finished notifications are dropped before drawing.
pub fn render_notifications(frame: &mut Frame, notifications: &mut NotificationState, now: Instant) {
    notifications.tick(now);
    if notifications.is_empty() {
        return;
    }

    let root = frame.area();
    if root.width < MIN_TOAST_WIDTH + MARGIN * 2 || root.height < TOAST_HEIGHT + MARGIN {
        #[cfg(debug_assertions)]
        log::debug!(
            "Frame {}x{} too small for notifications, skipping {} toast(s)",
            root.width,
            root.height,
            notifications.len()
        );
        return;
    }

    for (slot, notif) in notifications.slots_at(now) {
        if let Some(area) = toast_area(root, notif, slot, now) {
            render_toast(frame, notif, area);
        }
    }
}

/// Where a notification is drawn at `now`, or `None` when it is not on screen.
///
/// Toasts rest `MARGIN` cells from the top-right corner; stacked toasts move
/// down one toast height per slot. During the entry and exit transitions the
/// toast is shifted right by its hidden fraction and clipped at the frame edge.
pub fn toast_area(root: Rect, notif: &Notification, slot: usize, now: Instant) -> Option<Rect> {
    if matches!(notif.phase_at(now), Phase::Entering | Phase::Removed) {
        return None;
    }

    let text_width = u16::try_from(Line::from(notif.message.as_str()).width()).unwrap_or(u16::MAX);
    let width = text_width
        .saturating_add(TOAST_CHROME)
        .min(MAX_TOAST_WIDTH)
        .min(root.width.saturating_sub(MARGIN * 2));
    if width < MIN_TOAST_WIDTH {
        return None;
    }

    let slot_offset = u16::try_from(slot)
        .unwrap_or(u16::MAX)
        .saturating_mul(TOAST_HEIGHT);
    let y = root.y.saturating_add(MARGIN).saturating_add(slot_offset);
    if y.saturating_add(TOAST_HEIGHT) > root.bottom() {
        return None;
    }

    let anchor_x = root.right() - width - MARGIN;
    let travel = f32::from(width + MARGIN);
    let shift = (travel * notif.hidden_fraction(now)).round() as u16;
    let x = anchor_x.saturating_add(shift);
    let visible_width = root.right().saturating_sub(x).min(width);
    if visible_width == 0 {
        return None;
    }

    Some(Rect {
        x,
        y,
        width: visible_width,
        height: TOAST_HEIGHT,
    })
}

fn render_toast(frame: &mut Frame, notif: &Notification, area: Rect) {
    let colors = notif.colors;

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
