use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::Mode;

use super::{Event, InputEdit};

/// Translate a terminal key press into an event for the given mode.
/// Keys with no meaning in that mode map to `None`.
pub fn event_for_key(mode: Mode, key: KeyEvent) -> Option<Event> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Event::ForceQuit),
            KeyCode::Char('a') if is_prompt(mode) => Some(Event::Input(InputEdit::Home)),
            KeyCode::Char('e') if is_prompt(mode) => Some(Event::Input(InputEdit::End)),
            KeyCode::Char('u') if is_prompt(mode) => Some(Event::Input(InputEdit::ClearToStart)),
            _ => None,
        };
    }

    match mode {
        Mode::Normal => normal_key(key.code),
        Mode::DoneList => done_list_key(key.code),
        Mode::AddTask | Mode::EditTask => prompt_key(key),
        Mode::Help => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Event::Cancel),
            _ => None,
        },
    }
}

/// Bracketed paste only matters while a prompt is open
pub fn event_for_paste(mode: Mode, text: &str) -> Option<Event> {
    if is_prompt(mode) && !text.is_empty() {
        Some(Event::Input(InputEdit::Paste(text.to_string())))
    } else {
        None
    }
}

fn is_prompt(mode: Mode) -> bool {
    matches!(mode, Mode::AddTask | Mode::EditTask)
}

fn normal_key(code: KeyCode) -> Option<Event> {
    match code {
        KeyCode::Char('a') => Some(Event::Add),
        KeyCode::Char('e') => Some(Event::Edit),
        KeyCode::Char('h') => Some(Event::Help),
        _ => done_list_key(code),
    }
}

fn done_list_key(code: KeyCode) -> Option<Event> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(Event::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Event::MoveUp),
        KeyCode::Char('d') => Some(Event::Delete),
        KeyCode::Char('x') | KeyCode::Enter => Some(Event::ToggleDone),
        KeyCode::Char('t') => Some(Event::SwitchList),
        KeyCode::Char('q') => Some(Event::Quit),
        _ => None,
    }
}

fn prompt_key(key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Enter => Some(Event::Submit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Event::Cancel),
        KeyCode::Backspace => Some(Event::Input(InputEdit::Backspace)),
        KeyCode::Delete => Some(Event::Input(InputEdit::Delete)),
        KeyCode::Left => Some(Event::Input(InputEdit::Left)),
        KeyCode::Right => Some(Event::Input(InputEdit::Right)),
        KeyCode::Home => Some(Event::Input(InputEdit::Home)),
        KeyCode::End => Some(Event::Input(InputEdit::End)),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Event::Input(InputEdit::Insert(c)))
        }
        _ => None,
    }
}
