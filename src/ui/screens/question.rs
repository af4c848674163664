use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::quiz::Question;
use crate::ui::app::App;
use crate::ui::format::{option_label, progress_percent};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PANEL_BORDER,
    STATUS_OK,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };
    let state = app.session();
    let index = state.current_index();
    let total = state.answers().len();
    let selected = state.progress().and_then(|progress| progress.current_answer());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let percent = progress_percent(index, total);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .gauge_style(Style::default().fg(ACCENT).bg(ACTIVE_HIGHLIGHT))
        .ratio(percent / 100.0)
        .label(format!("Question {} of {} · {:.0}%", index + 1, total, percent));
    frame.render_widget(gauge, chunks[0]);

    let card = Paragraph::new(card_lines(question, selected, app.option_cursor()))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} mark(s) ", question.mark))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PANEL_BORDER)),
        );
    frame.render_widget(card, chunks[1]);

    frame.render_widget(
        Paragraph::new(navigation_line(index, total, selected.is_some())),
        chunks[2],
    );
}

fn card_lines<'a>(question: &'a Question, selected: Option<&str>, cursor: usize) -> Vec<Line<'a>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            question.question.as_str(),
            text_style.add_modifier(Modifier::BOLD),
        )),
    ];

    if let Some(image) = &question.image {
        lines.push(Line::from(Span::styled(
            format!("Image: {}", image),
            Style::default().fg(HEADER_SEPARATOR),
        )));
    }
    lines.push(Line::from(""));

    for (idx, option) in question.options.iter().enumerate() {
        let is_selected = selected == Some(option.as_str());
        let marker = if is_selected { "●" } else { "○" };
        let option_style = if is_selected {
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        let pointer = if idx == cursor { "› " } else { "  " };

        let mut line = Line::from(vec![
            Span::styled(pointer, Style::default().fg(ACCENT)),
            Span::styled(format!("{} ", marker), option_style),
            Span::styled(format!("{}. ", option_label(idx)), Style::default().fg(ACCENT)),
            Span::styled(option.as_str(), option_style),
        ]);
        if idx == cursor {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines
}

fn navigation_line(index: usize, total: usize, answered: bool) -> Line<'static> {
    let enabled = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM);

    let forward = if index + 1 >= total {
        "Finish →"
    } else {
        "Next →"
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled("← Previous", if index > 0 { enabled } else { disabled }),
        Span::raw("    "),
        Span::styled(forward, if answered { enabled } else { disabled }),
    ])
}
