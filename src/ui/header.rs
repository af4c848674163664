use crate::session::{Phase, SessionState};
use crate::ui::format::format_clock;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, LOW_TIME_SECS, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    session: &'a SessionState,
    source_label: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(session: &'a SessionState, source_label: &'a str) -> Self {
        Self {
            session,
            source_label,
        }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let title = self
            .session
            .quiz_set()
            .map_or(self.source_label, |quiz| quiz.title.as_str());

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "quizterm",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(title, text_style),
            Span::styled("  │  ", separator_style),
        ];

        match self.session.phase() {
            Phase::InProgress => {
                let remaining = self.session.time_remaining_secs();
                let clock_color = if remaining < LOW_TIME_SECS {
                    STATUS_WARN
                } else {
                    STATUS_OK
                };
                spans.push(Span::styled(
                    format!("⏱ {}", format_clock(remaining)),
                    Style::default().fg(clock_color).add_modifier(Modifier::BOLD),
                ));
            }
            Phase::Finished => {
                spans.push(Span::styled("Finished", Style::default().fg(STATUS_OK)));
            }
            Phase::Loading => spans.push(Span::styled("Loading", text_style)),
            Phase::Idle if self.session.load_error().is_some() => {
                spans.push(Span::styled("Load failed", Style::default().fg(STATUS_ERROR)));
            }
            Phase::Idle => spans.push(Span::styled("Ready", text_style)),
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
