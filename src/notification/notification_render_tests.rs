//! Tests for notification_render

use std::time::Duration;

use super::*;
use crate::notification::NotificationKind;
use crate::theme;
use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn render_at(
    notifications: &mut NotificationState,
    width: u16,
    height: u16,
    now: Instant,
) -> Terminal<TestBackend> {
    let mut terminal = create_test_terminal(width, height);
    terminal
        .draw(|f| render_notifications(f, notifications, now))
        .unwrap();
    terminal
}

fn render_to_string(
    notifications: &mut NotificationState,
    width: u16,
    height: u16,
    now: Instant,
) -> String {
    render_at(notifications, width, height, now)
        .backend()
        .to_string()
}

#[test]
fn snapshot_visible_toast_in_top_right_corner() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    notifications.notify_at("Copiado!", NotificationKind::Info, t0);

    let output = render_to_string(&mut notifications, 30, 6, t0 + ms(1000));
    assert_snapshot!(output, @r#"
    "                              "
    "                              "
    "                ╭──────────╮  "
    "                │ Copiado! │  "
    "                ╰──────────╯  "
    "                              "
    "#);
}

#[test]
fn test_info_toast_uses_info_colors() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    notifications.notify_at("Copiado!", NotificationKind::Info, t0);

    let terminal = render_at(&mut notifications, 80, 24, t0 + ms(1000));
    let buffer = terminal.backend().buffer();

    // "Copiado!" is 8 wide, toast is 12 wide, anchored 2 cells from the edge
    assert_eq!(buffer[(66, 2)].symbol(), "╭");
    assert_eq!(buffer[(68, 3)].symbol(), "C");
    assert_eq!(buffer[(68, 3)].bg, theme::notification::INFO.bg);
    assert_eq!(buffer[(68, 3)].fg, theme::notification::INFO.fg);
}

#[test]
fn test_success_toast_uses_success_colors() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    notifications.notify_at("Dashboard carregado com sucesso!", NotificationKind::Success, t0);

    let terminal = render_at(&mut notifications, 80, 24, t0 + ms(1000));
    let buffer = terminal.backend().buffer();

    // 32 characters + 4 of chrome = 36 wide, left border at x = 42
    assert_eq!(buffer[(44, 3)].symbol(), "D");
    assert_eq!(buffer[(44, 3)].bg, theme::notification::SUCCESS.bg);
}

#[test]
fn test_error_toast_uses_error_colors() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    notifications.notify_at("Falha", NotificationKind::Error, t0);

    let terminal = render_at(&mut notifications, 80, 24, t0 + ms(1000));
    let buffer = terminal.backend().buffer();

    assert_eq!(buffer[(71, 3)].symbol(), "F");
    assert_eq!(buffer[(71, 3)].bg, theme::notification::ERROR.bg);
}

#[test]
fn snapshot_entering_toast_is_not_drawn() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    notifications.notify_at("Olá", NotificationKind::Info, t0);

    let output = render_to_string(&mut notifications, 20, 5, t0);
    assert_snapshot!(output, @r#"
    "                    "
    "                    "
    "                    "
    "                    "
    "                    "
    "#);
    assert_eq!(notifications.len(), 1);
}

#[test]
fn test_leaving_toast_slides_right() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    notifications.notify_at("Copiado!", NotificationKind::Info, t0);

    let notif = &notifications.active()[0];
    let root = Rect::new(0, 0, 80, 24);
    let resting = toast_area(root, notif, 0, t0 + ms(1000)).unwrap();
    let leaving = toast_area(root, notif, 0, t0 + ms(3150)).unwrap();

    assert_eq!(resting, Rect::new(66, 2, 12, 3));
    assert!(leaving.x > resting.x);
    assert!(leaving.right() <= root.right());
    assert!(leaving.width < resting.width);
}

#[test]
fn test_entry_slide_moves_toward_anchor() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    notifications.notify_at("Copiado!", NotificationKind::Info, t0);

    let notif = &notifications.active()[0];
    let root = Rect::new(0, 0, 80, 24);
    let early = toast_area(root, notif, 0, t0 + ms(150)).unwrap_or(Rect::new(80, 2, 0, 3));
    let later = toast_area(root, notif, 0, t0 + ms(300)).unwrap();
    let settled = toast_area(root, notif, 0, t0 + ms(400)).unwrap();

    assert!(early.x >= later.x);
    assert!(later.x > settled.x);
    assert_eq!(settled.x, 66);
}

#[test]
fn snapshot_finished_toast_is_removed_on_render() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    notifications.notify_at("Tchau", NotificationKind::Info, t0);

    let output = render_to_string(&mut notifications, 20, 5, t0 + ms(3400));
    assert_snapshot!(output, @r#"
    "                    "
    "                    "
    "                    "
    "                    "
    "                    "
    "#);
    assert!(notifications.is_empty());
}

#[test]
fn snapshot_stacked_toasts_do_not_overlap() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    notifications.notify_at("Primeira", NotificationKind::Info, t0);
    notifications.notify_at("Segunda", NotificationKind::Success, t0);

    let output = render_to_string(&mut notifications, 30, 9, t0 + ms(1000));
    assert_snapshot!(output, @r#"
    "                              "
    "                              "
    "                ╭──────────╮  "
    "                │ Primeira │  "
    "                ╰──────────╯  "
    "                 ╭─────────╮  "
    "                 │ Segunda │  "
    "                 ╰─────────╯  "
    "                              "
    "#);
}

#[test]
fn snapshot_entering_toast_leaves_no_gap_in_stack() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    notifications.notify_at("Aviso 0", NotificationKind::Info, t0);
    notifications.notify_at("Oculta", NotificationKind::Info, t0 + ms(950));
    notifications.notify_at("Aviso 1", NotificationKind::Info, t0 + ms(500));

    // "Oculta" is still entering at 1000ms and is skipped, "Aviso 1" takes slot 1
    let output = render_to_string(&mut notifications, 40, 10, t0 + ms(1000));
    assert_snapshot!(output, @r#"
    "                                        "
    "                                        "
    "                           ╭─────────╮  "
    "                           │ Aviso 0 │  "
    "                           ╰─────────╯  "
    "                           ╭─────────╮  "
    "                           │ Aviso 1 │  "
    "                           ╰─────────╯  "
    "                                        "
    "                                        "
    "#);
}

#[test]
fn snapshot_unstacked_toasts_overlap_at_anchor() {
    let config = crate::config::NotificationConfig {
        stacking: false,
        ..Default::default()
    };
    let t0 = Instant::now();
    let mut notifications = NotificationState::with_config(&config);
    notifications.notify_at("Primeira", NotificationKind::Info, t0);
    notifications.notify_at("Segunda", NotificationKind::Info, t0);

    // The later toast is drawn last and covers all but the first column
    let output = render_to_string(&mut notifications, 30, 9, t0 + ms(1000));
    assert_snapshot!(output, @r#"
    "                              "
    "                              "
    "                ╭╭─────────╮  "
    "                ││ Segunda │  "
    "                ╰╰─────────╯  "
    "                              "
    "                              "
    "                              "
    "                              "
    "#);
}

#[test]
fn snapshot_stacked_toasts_beyond_frame_are_skipped() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    for i in 0..5 {
        notifications.notify_at(&format!("Aviso {i}"), NotificationKind::Info, t0);
    }

    // Height 10 fits slots 0 and 1 only (rows 2..5 and 5..8)
    let output = render_to_string(&mut notifications, 40, 10, t0 + ms(1000));
    assert_snapshot!(output, @r#"
    "                                        "
    "                                        "
    "                           ╭─────────╮  "
    "                           │ Aviso 0 │  "
    "                           ╰─────────╯  "
    "                           ╭─────────╮  "
    "                           │ Aviso 1 │  "
    "                           ╰─────────╯  "
    "                                        "
    "                                        "
    "#);
    assert_eq!(notifications.len(), 5);
}

#[test]
fn snapshot_tiny_frame_skips_rendering() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    notifications.notify_at("Sem espaço", NotificationKind::Info, t0);

    let output = render_to_string(&mut notifications, 6, 3, t0 + ms(1000));
    assert_snapshot!(output, @r#"
    "      "
    "      "
    "      "
    "#);
    assert_eq!(notifications.len(), 1);
}

#[test]
fn test_long_message_is_capped() {
    let t0 = Instant::now();
    let mut notifications = NotificationState::new();
    let message = "x".repeat(200);
    notifications.notify_at(&message, NotificationKind::Info, t0);

    let notif = &notifications.active()[0];
    let area = toast_area(Rect::new(0, 0, 120, 24), notif, 0, t0 + ms(1000)).unwrap();
    assert_eq!(area.width, 60);
    assert_eq!(area.right(), 118);
}
