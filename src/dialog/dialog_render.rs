//! Dialog rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::DialogKind;
use crate::theme;
use crate::widgets::popup;

const MAX_DIALOG_WIDTH: u16 = 64;
/// Borders (2) + one column of padding on each side (2)
const DIALOG_CHROME_COLUMNS: u16 = 4;
/// Borders (2) + spacer (1) + key hint (1)
const DIALOG_CHROME_ROWS: u16 = 4;

fn title(kind: DialogKind) -> &'static str {
    match kind {
        DialogKind::Confirm => " Confirmar ",
        DialogKind::Inform => " Aviso ",
    }
}

fn hint(kind: DialogKind) -> Line<'static> {
    match kind {
        DialogKind::Confirm => Line::from(vec![
            Span::styled("[s]", theme::dialog::KEY),
            Span::styled(" Sim   ", theme::dialog::HINT),
            Span::styled("[n]", theme::dialog::KEY),
            Span::styled(" Não", theme::dialog::HINT),
        ]),
        DialogKind::Inform => Line::from(vec![
            Span::styled("[Enter]", theme::dialog::KEY),
            Span::styled(" OK", theme::dialog::HINT),
        ]),
    }
}

/// Render a centered dialog over whatever is already in the frame
pub fn render_dialog(frame: &mut Frame, kind: DialogKind, text: &str) {
    let frame_area = frame.area();
    let max_width = MAX_DIALOG_WIDTH.min(frame_area.width);
    let hint_line = hint(kind);

    let (text_width, height) =
        popup::fit_text(text, DIALOG_CHROME_COLUMNS, DIALOG_CHROME_ROWS, max_width);
    let hint_width = u16::try_from(hint_line.width())
        .unwrap_or(u16::MAX)
        .saturating_add(DIALOG_CHROME_COLUMNS);
    let title_width = u16::try_from(title(kind).len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let width = text_width.max(hint_width).max(title_width).min(max_width);

    let area = popup::centered_popup(frame_area, width, height);
    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title(kind))
        .border_style(Style::default().fg(theme::dialog::BORDER))
        .style(Style::default().bg(theme::dialog::BACKGROUND));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body, _, footer] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .horizontal_margin(1)
    .areas(inner);

    let paragraph = Paragraph::new(Text::from(text.to_string()))
        .style(theme::dialog::TEXT)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, body);
    frame.render_widget(Paragraph::new(hint_line), footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(kind: DialogKind, text: &str, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render_dialog(f, kind, text))
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn test_confirm_dialog_shows_prompt_and_keys() {
        let output = render_to_string(DialogKind::Confirm, "Tem certeza que deseja sair?", 80, 24);

        assert!(output.contains("Confirmar"));
        assert!(output.contains("Tem certeza que deseja sair?"));
        assert!(output.contains("[s] Sim"));
        assert!(output.contains("[n] Não"));
    }

    #[test]
    fn test_inform_dialog_shows_all_lines() {
        let message = "Atividade: Quiz de Frações\nStatus: Concluído\n\nDetalhes da atividade seriam mostrados aqui.";
        let output = render_to_string(DialogKind::Inform, message, 80, 24);

        assert!(output.contains("Aviso"));
        assert!(output.contains("Atividade: Quiz de Frações"));
        assert!(output.contains("Status: Concluído"));
        assert!(output.contains("Detalhes da atividade seriam mostrados aqui."));
        assert!(output.contains("[Enter] OK"));
    }

    #[test]
    fn snapshot_inform_dialog_is_centered() {
        // Box is 14x5 ("[Enter] OK" + chrome), centered in 40x11
        let output = render_to_string(DialogKind::Inform, "Oi", 40, 11);
        assert_snapshot!(output, @r#"
        "                                        "
        "                                        "
        "                                        "
        "             ╭ Aviso ─────╮             "
        "             │ Oi         │             "
        "             │            │             "
        "             │ [Enter] OK │             "
        "             ╰────────────╯             "
        "                                        "
        "                                        "
        "                                        "
        "#);
    }

    #[test]
    fn test_small_frame_does_not_panic() {
        render_to_string(DialogKind::Confirm, "Tem certeza que deseja sair?", 10, 3);
    }
}
