use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect;
use crate::ui::theme::{HEADER_TEXT, PANEL_BORDER, STATUS_OK};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const PANEL_WIDTH: u16 = 40;
const PANEL_HEIGHT: u16 = 5;

pub fn spinner_frame(animation_tick: u8) -> &'static str {
    SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()]
}

pub fn render(frame: &mut Frame<'_>, area: Rect, animation_tick: u8) {
    let panel = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);
    let block = Block::default()
        .title(" Loading ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {} ", spinner_frame(animation_tick)),
                Style::default().fg(STATUS_OK),
            ),
            Span::styled("Loading questions...", Style::default().fg(HEADER_TEXT)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), panel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_wraps_around() {
        assert_eq!(spinner_frame(0), "⠋");
        assert_eq!(spinner_frame(10), "⠋");
        assert_eq!(spinner_frame(255), SPINNER_FRAMES[255 % SPINNER_FRAMES.len()]);
    }
}
