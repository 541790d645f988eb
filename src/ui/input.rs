use crate::game::Phase;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    match app.game().phase() {
        Phase::Idle => match key.code {
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => app.start(),
            _ => {}
        },
        Phase::Playing => match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => app.push_digit(ch),
            KeyCode::Char('p') | KeyCode::Char('P') => app.pause(),
            KeyCode::Backspace => app.pop_digit(),
            KeyCode::Delete => app.clear_input(),
            KeyCode::Enter => app.submit(),
            _ => {}
        },
        Phase::Paused => match key.code {
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char('r') | KeyCode::Char('R') => {
                app.resume()
            }
            _ => {}
        },
        Phase::Won | Phase::TimedOut => match key.code {
            KeyCode::Enter | KeyCode::Char('t') | KeyCode::Char('T') => app.try_again(),
            KeyCode::Char('n') | KeyCode::Char('N') => app.new_round(),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
