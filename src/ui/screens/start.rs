use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, PANEL_BORDER, STATUS_ERROR};

const PANEL_WIDTH: u16 = 60;

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let button_style = Style::default()
        .fg(HEADER_TEXT)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Timed multiple-choice quiz",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Questions from {}", app.source_label()),
            text_style.add_modifier(Modifier::DIM),
        )),
        Line::from(""),
    ];

    let button = match app.session().load_error() {
        Some(error) => {
            lines.push(Line::from(vec![
                Span::styled("Error: ", Style::default().fg(STATUS_ERROR)),
                Span::styled(error.to_string(), text_style),
            ]));
            lines.push(Line::from(""));
            " Try Again "
        }
        None => " Start Quiz ",
    };
    lines.push(Line::from(Span::styled(button, button_style)));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to begin",
        text_style.add_modifier(Modifier::DIM),
    )));

    let height = lines.len() as u16 + 4;
    let panel = centered_rect(PANEL_WIDTH, height, area);
    let block = Block::default()
        .title(" Quiz ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, panel);
}
