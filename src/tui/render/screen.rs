//! Pure projection of the controller state into screen lines.
//!
//! `project` never looks at the terminal: the same `App` always yields the
//! same `Screen`. Drawing with colors happens in the parent module.

use crate::model::Task;
use crate::tui::app::{App, Mode};
use crate::tui::line_input::LineInput;

pub const PENDING_TITLE: &str = "YOUR TASKS";
pub const DONE_TITLE: &str = "YOUR DONE TASKS";
pub const NO_TASKS: &str = "You have no tasks. Press 'a' to add your task!";
pub const NO_DONE_TASKS: &str = "You have no done tasks.";

/// Key reference shown in help mode, grouped by mode
const HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "Normal Mode",
        &[
            ("j, down", "move cursor one line down"),
            ("k, up", "move cursor one line up"),
            ("a", "add a new task"),
            ("d", "delete the selected task"),
            ("e", "edit the task name"),
            ("h", "show this help"),
            ("x, enter", "mark as done"),
            ("t", "switch to the done list"),
            ("q, ctrl+c", "save tasks and quit"),
        ],
    ),
    (
        "Done List Mode",
        &[
            ("j, down", "move cursor one line down"),
            ("k, up", "move cursor one line up"),
            ("d", "delete the selected task"),
            ("x, enter", "mark as not done"),
            ("t", "switch to the task list"),
            ("q, ctrl+c", "save tasks and quit"),
        ],
    ),
    (
        "Add / Edit Mode",
        &[
            ("enter", "submit"),
            ("q, esc", "back to the task list"),
            ("ctrl+c", "save tasks and quit"),
        ],
    ),
    ("Help Mode", &[("q, esc", "back to the task list")]),
];

/// One line of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenLine {
    Title(String),
    Blank,
    Message(String),
    Task {
        selected: bool,
        id: u64,
        name: String,
        created: String,
    },
    Prompt(String),
    /// Prompt buffer, or its placeholder when empty
    Input {
        text: String,
        placeholder: bool,
    },
    Section(&'static str),
    Binding {
        keys: &'static str,
        desc: &'static str,
    },
}

impl ScreenLine {
    pub fn to_text(&self) -> String {
        match self {
            ScreenLine::Title(s) | ScreenLine::Message(s) | ScreenLine::Prompt(s) => s.clone(),
            ScreenLine::Blank => String::new(),
            ScreenLine::Task {
                selected,
                id,
                name,
                created,
            } => {
                let marker = if *selected { ">" } else { " " };
                format!("{marker} #{id}: {name} ({created})")
            }
            ScreenLine::Input { text, .. } => format!("> {text}"),
            ScreenLine::Section(s) => format!("--{s}--"),
            ScreenLine::Binding { keys, desc } => format!("{keys} - {desc}"),
        }
    }
}

/// Textual description of a full screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub lines: Vec<ScreenLine>,
    /// Key hint footer, when enabled in the config
    pub hint: Option<&'static str>,
}

impl Screen {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.to_text());
            out.push('\n');
        }
        if let Some(hint) = self.hint {
            out.push('\n');
            out.push_str(hint);
            out.push('\n');
        }
        out
    }

    /// Row of the prompt buffer, if the screen has one
    pub fn input_row(&self) -> Option<usize> {
        self.lines
            .iter()
            .position(|l| matches!(l, ScreenLine::Input { .. }))
    }
}

/// Build the screen for the current state
pub fn project(app: &App) -> Screen {
    let lines = match app.mode {
        Mode::Normal => list_lines(app.store.pending(), app.cursor, PENDING_TITLE, NO_TASKS),
        Mode::DoneList => list_lines(app.store.done(), app.cursor, DONE_TITLE, NO_DONE_TASKS),
        Mode::AddTask => prompt_lines("ADD TASK", &app.add_input),
        Mode::EditTask => prompt_lines("EDIT TASK", &app.edit_input),
        Mode::Help => help_lines(),
    };
    let hint = app.ui.show_key_hints.then(|| hint_for(app.mode));
    Screen { lines, hint }
}

fn list_lines(tasks: &[Task], cursor: usize, title: &str, empty: &str) -> Vec<ScreenLine> {
    if tasks.is_empty() {
        return vec![ScreenLine::Message(empty.to_string())];
    }
    let mut lines = vec![ScreenLine::Title(title.to_string()), ScreenLine::Blank];
    lines.extend(tasks.iter().enumerate().map(|(i, task)| ScreenLine::Task {
        selected: cursor == i + 1,
        id: task.id,
        name: task.name.clone(),
        created: task.created_label(),
    }));
    lines
}

fn prompt_lines(title: &str, input: &LineInput) -> Vec<ScreenLine> {
    let (text, placeholder) = if input.is_empty() {
        (input.placeholder().to_string(), true)
    } else {
        (input.value().to_string(), false)
    };
    vec![
        ScreenLine::Title(title.to_string()),
        ScreenLine::Blank,
        ScreenLine::Prompt("Input the new task name".to_string()),
        ScreenLine::Blank,
        ScreenLine::Input { text, placeholder },
    ]
}

fn help_lines() -> Vec<ScreenLine> {
    let mut lines = vec![ScreenLine::Title("USAGE".to_string())];
    for (section, bindings) in HELP {
        lines.push(ScreenLine::Blank);
        lines.push(ScreenLine::Section(section));
        lines.push(ScreenLine::Blank);
        lines.extend(
            bindings
                .iter()
                .map(|&(keys, desc)| ScreenLine::Binding { keys, desc }),
        );
    }
    lines
}

fn hint_for(mode: Mode) -> &'static str {
    match mode {
        Mode::Normal => "j/k move  a add  e edit  d delete  x done  t done list  h help  q quit",
        Mode::DoneList => "j/k move  x undo  d delete  t task list  q quit",
        Mode::AddTask | Mode::EditTask => "enter submit  esc cancel",
        Mode::Help => "q back",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::{Event, InputEdit};
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pending_list_marks_cursor_row() {
        let mut app = app_with(&["Buy milk", "Call mom"], &["Old"]);
        app.cursor = 2;
        assert_eq!(
            project(&app).to_text(),
            "\
YOUR TASKS

  #1: Buy milk (2026-10-19 09:30)
> #2: Call mom (2026-10-19 09:31)
"
        );
    }

    #[test]
    fn done_list_has_its_own_title() {
        let mut app = app_with(&["a"], &["Filed taxes"]);
        app.update_at(Event::SwitchList, fixed_now());
        assert_eq!(
            project(&app).to_text(),
            "\
YOUR DONE TASKS

> #2: Filed taxes (2026-10-19 09:31)
"
        );
    }

    #[test]
    fn empty_lists_show_messages() {
        let mut app = app_with(&[], &[]);
        assert_eq!(project(&app).to_text(), format!("{NO_TASKS}\n"));
        app.update_at(Event::SwitchList, fixed_now());
        assert_eq!(project(&app).to_text(), format!("{NO_DONE_TASKS}\n"));
    }

    #[test]
    fn add_prompt_shows_placeholder_then_buffer() {
        let mut app = app_with(&[], &[]);
        app.update_at(Event::Add, fixed_now());
        assert_eq!(
            project(&app).to_text(),
            "\
ADD TASK

Input the new task name

> New task name...
"
        );
        app.update_at(Event::Input(InputEdit::Insert('m')), fixed_now());
        let screen = project(&app);
        assert_eq!(
            screen.lines.last(),
            Some(&ScreenLine::Input {
                text: "m".into(),
                placeholder: false
            })
        );
        assert_eq!(screen.input_row(), Some(4));
    }

    #[test]
    fn cleared_edit_prompt_shows_old_name() {
        let mut app = app_with(&["Walk dog"], &[]);
        app.update_at(Event::Edit, fixed_now());
        assert!(project(&app).to_text().starts_with("EDIT TASK\n"));
        app.update_at(Event::Input(InputEdit::ClearToStart), fixed_now());
        assert_eq!(
            project(&app).lines.last(),
            Some(&ScreenLine::Input {
                text: "Walk dog".into(),
                placeholder: true
            })
        );
    }

    #[test]
    fn help_lists_every_mode() {
        let mut app = app_with(&[], &[]);
        app.update_at(Event::Help, fixed_now());
        let text = project(&app).to_text();
        assert!(text.starts_with("USAGE\n\n--Normal Mode--\n\nj, down - move cursor one line down\n"));
        for section in ["--Done List Mode--", "--Add / Edit Mode--", "--Help Mode--"] {
            assert!(text.contains(section), "missing {section}");
        }
        assert!(text.contains("x, enter - mark as not done"));
    }

    #[test]
    fn key_hints_follow_mode() {
        let mut app = app_with(&["a"], &[]);
        assert_eq!(project(&app).hint, None);
        app.ui.show_key_hints = true;
        assert!(project(&app).to_text().ends_with(
            "\n\nj/k move  a add  e edit  d delete  x done  t done list  h help  q quit\n"
        ));
        app.update_at(Event::Add, fixed_now());
        assert_eq!(project(&app).hint, Some("enter submit  esc cancel"));
    }

    #[test]
    fn list_hints_mention_movement() {
        let mut app = app_with(&["a"], &["b"]);
        app.ui.show_key_hints = true;
        for event in [Event::SwitchList, Event::SwitchList] {
            let hint = project(&app).hint.unwrap_or_default();
            assert!(hint.starts_with("j/k move  "), "{:?}: {hint}", app.mode);
            app.update_at(event, fixed_now());
        }
    }

    #[test]
    fn projection_is_deterministic() {
        let app = app_with(&["a", "b"], &["c"]);
        assert_eq!(project(&app), project(&app));
    }
}
