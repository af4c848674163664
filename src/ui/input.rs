use crate::session::Phase;
use crate::ui::app::App;
use crate::ui::format::option_index_for_label;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    match app.session().phase() {
        Phase::Idle => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('s')) {
                app.start_quiz();
            }
        }
        Phase::Loading => {
            if key.code == KeyCode::Char('r') {
                app.cancel_load();
            }
        }
        Phase::InProgress => handle_question_key(app, key),
        Phase::Finished => match key.code {
            KeyCode::Char('r') => app.restart(),
            KeyCode::Up => app.scroll_review(-1),
            KeyCode::Down => app.scroll_review(1),
            KeyCode::PageUp => app.scroll_review(-10),
            KeyCode::PageDown => app.scroll_review(10),
            _ => {}
        },
    }
}

fn handle_question_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Down => app.move_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.choose_at_cursor();
        }
        KeyCode::Right | KeyCode::Char('n') => {
            app.next_question();
        }
        KeyCode::Left | KeyCode::Char('p') => {
            app.previous_question();
        }
        KeyCode::Char('f') => app.finish_quiz(),
        KeyCode::Char('r') => app.restart(),
        KeyCode::Char(ch @ '1'..='9') => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            app.choose_option(index);
        }
        KeyCode::Char(ch) => {
            if let Some(index) = option_index_for_label(ch) {
                app.choose_option(index);
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
