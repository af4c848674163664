use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::quiz::{Grade, QuizReport};
use crate::ui::app::App;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PANEL_BORDER,
    STATUS_ERROR, STATUS_OK, STATUS_WARN,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let state = app.session();
    let Some(quiz) = state.quiz_set() else {
        return;
    };
    let report = QuizReport::new(quiz, state.answers(), state.score());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(summary(&report), chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .gauge_style(Style::default().fg(grade_color(report.grade())).bg(ACTIVE_HIGHLIGHT))
        .percent(report.percentage().min(100) as u16)
        .label(format!("{}%", report.percentage()));
    frame.render_widget(gauge, chunks[1]);

    let review = Paragraph::new(review_lines(&report))
        .wrap(Wrap { trim: false })
        .scroll((app.review_scroll(), 0))
        .block(
            Block::default()
                .title(" Review ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PANEL_BORDER)),
        );
    frame.render_widget(review, chunks[2]);
}

fn summary(report: &QuizReport<'_>) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let lines = vec![
        Line::from(vec![
            Span::styled("Score: ", text_style),
            Span::styled(
                format!("{} / {}", report.score(), report.total_marks()),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            report.grade().message(),
            Style::default()
                .fg(grade_color(report.grade()))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} correct · {} answered · press r to retake",
                report.correct_count(),
                report.answered_count()
            ),
            text_style.add_modifier(Modifier::DIM),
        )),
    ];

    Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Result ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PANEL_BORDER)),
    )
}

fn review_lines<'a>(report: &QuizReport<'a>) -> Vec<Line<'a>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(HEADER_SEPARATOR);
    let mut lines = Vec::new();

    for outcome in report.outcomes() {
        let (verdict, color) = if outcome.is_correct {
            ("✓ Correct", STATUS_OK)
        } else {
            ("✗ Wrong", STATUS_ERROR)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", outcome.index + 1), dim_style),
            Span::styled(
                outcome.question.question.as_str(),
                text_style.add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(verdict, Style::default().fg(color)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("   Your answer: ", dim_style),
            Span::styled(outcome.given_or_placeholder().to_string(), text_style),
        ]));
        lines.push(Line::from(vec![
            Span::styled("   Correct answer: ", dim_style),
            Span::styled(outcome.question.answer.as_str(), Style::default().fg(STATUS_OK)),
        ]));
        lines.push(Line::from(""));
    }
    lines
}

fn grade_color(grade: Grade) -> ratatui::style::Color {
    match grade {
        Grade::Excellent | Grade::VeryGood => STATUS_OK,
        Grade::Good | Grade::Acceptable => STATUS_WARN,
        Grade::NeedsReview => STATUS_ERROR,
    }
}
