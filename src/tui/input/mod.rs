mod edit;
mod help;
pub mod keymap;
mod navigate;

use chrono::{DateTime, Local};

use super::app::{App, Mode};
use super::line_input::LineInput;

use edit::{handle_add, handle_edit};
use help::handle_help;
use navigate::{handle_done_list, handle_normal};

/// Abstract input event, independent of the terminal's key encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    MoveDown,
    MoveUp,
    Add,
    Delete,
    Edit,
    Help,
    ToggleDone,
    SwitchList,
    /// Save and exit from a list view
    Quit,
    /// Leave the add/edit prompt or the help screen
    Cancel,
    Submit,
    /// Interrupt: save and exit from any mode
    ForceQuit,
    /// Line editing inside the add/edit prompt
    Input(InputEdit),
}

/// Editing operations on a `LineInput`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Paste(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    ClearToStart,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Persist the store and exit
    Quit,
}

/// Route an event to the handler for the current mode
pub fn handle_event(app: &mut App, event: Event, now: DateTime<Local>) -> Option<Effect> {
    if event == Event::ForceQuit {
        return Some(Effect::Quit);
    }
    match app.mode {
        Mode::Normal => handle_normal(app, event),
        Mode::DoneList => handle_done_list(app, event),
        Mode::AddTask => handle_add(app, event, now),
        Mode::EditTask => handle_edit(app, event),
        Mode::Help => handle_help(app, event),
    }
}

fn apply_edit(input: &mut LineInput, edit: InputEdit) {
    match edit {
        InputEdit::Insert(c) => input.insert_char(c),
        InputEdit::Paste(text) => input.insert_str(&text),
        InputEdit::Backspace => input.backspace(),
        InputEdit::Delete => input.delete(),
        InputEdit::Left => input.move_left(),
        InputEdit::Right => input.move_right(),
        InputEdit::Home => input.move_home(),
        InputEdit::End => input.move_end(),
        InputEdit::ClearToStart => input.clear_to_start(),
    }
}
