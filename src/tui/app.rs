use std::io;

use chrono::{DateTime, Local};
use crossterm::event::{
    self as ct_event, DisableBracketedPaste, EnableBracketedPaste, Event as TermEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::{AppPaths, read_config};
use crate::io::logging::init_logger;
use crate::io::store_io::{load_store, save_store};
use crate::model::{ListKind, Task, TaskStore, UiConfig};

use super::input::{self, Effect, Event, keymap};
use super::line_input::LineInput;
use super::render;
use super::theme::Theme;

/// Placeholder shown in the empty add prompt
pub const ADD_PLACEHOLDER: &str = "New task name...";

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Pending task list
    Normal,
    /// Done task list
    DoneList,
    /// Typing the name of a new task
    AddTask,
    /// Renaming the selected pending task
    EditTask,
    /// Key reference
    Help,
}

impl Mode {
    /// The list the cursor points into while in this mode
    pub fn list(self) -> ListKind {
        match self {
            Mode::DoneList => ListKind::Done,
            _ => ListKind::Pending,
        }
    }
}

/// Controller state: the task store plus everything the UI needs to route input
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    /// 1-based index into the current list; 0 only when that list is empty
    pub cursor: usize,
    pub add_input: LineInput,
    pub edit_input: LineInput,
    pub ui: UiConfig,
    pub theme: Theme,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        App::with_config(store, UiConfig::default())
    }

    pub fn with_config(store: TaskStore, ui: UiConfig) -> Self {
        let theme = Theme::from_config(&ui);
        let mut app = App {
            store,
            mode: Mode::Normal,
            cursor: 0,
            add_input: LineInput::new(ADD_PLACEHOLDER),
            edit_input: LineInput::default(),
            ui,
            theme,
        };
        app.reset_cursor();
        app
    }

    /// Which list the cursor refers to
    pub fn current_list(&self) -> ListKind {
        self.mode.list()
    }

    pub fn current_tasks(&self) -> &[Task] {
        self.store.list(self.current_list())
    }

    /// The task under the cursor, if any
    pub fn selected_task(&self) -> Option<&Task> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.current_tasks().get(i))
    }

    /// Put the cursor on the first row of the current list, or 0 if it is empty
    pub fn reset_cursor(&mut self) {
        self.cursor = if self.current_tasks().is_empty() { 0 } else { 1 };
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::debug!("mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Apply one input event using the wall clock for new tasks
    pub fn update(&mut self, event: Event) -> Option<Effect> {
        self.update_at(event, Local::now())
    }

    /// Apply one input event; `now` stamps any task created by it
    pub fn update_at(&mut self, event: Event, now: DateTime<Local>) -> Option<Effect> {
        input::handle_event(self, event, now)
    }
}

/// Run the TUI application
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let paths = AppPaths::resolve()?;
    let config = read_config(&paths.config)?;
    init_logger(&config.log, &paths.log)?;
    log::info!("task file {}", paths.data.display());

    // Load before touching the terminal so failures print normally
    let store = load_store(&paths.data)?;
    let mut app = App::with_config(store, config.ui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    let restored = restore_terminal(&mut terminal);

    // Only a quit from the loop persists; terminal failures abort without saving
    result?;
    save_store(&paths.data, &app.store)?;
    restored?;
    Ok(())
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        let event = match ct_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                keymap::event_for_key(app.mode, key)
            }
            TermEvent::Paste(text) => keymap::event_for_paste(app.mode, &text),
            _ => None,
        };

        if let Some(event) = event
            && let Some(Effect::Quit) = app.update(event)
        {
            log::info!("quit requested");
            return Ok(());
        }
    }
}
