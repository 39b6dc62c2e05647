use chrono::{DateTime, Duration, Local, TimeZone};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::model::{ListKind, Task, TaskStore};
use crate::ops::task_ops;
use crate::tui::app::App;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 12;

/// Clock used by tests: 2026-10-19 09:30 local time
pub fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
}

/// Store whose tasks get ids 1.. in argument order (pending first),
/// created one minute apart starting at `fixed_now()`.
pub fn store_with(pending: &[&str], done: &[&str]) -> TaskStore {
    let mut store = TaskStore::new();
    for (i, name) in pending.iter().chain(done).enumerate() {
        task_ops::add_task(&mut store, name, fixed_now() + Duration::minutes(i as i64)).unwrap();
    }
    for _ in done {
        task_ops::toggle_done(&mut store, ListKind::Pending, pending.len()).unwrap();
    }
    store
}

pub fn app_with(pending: &[&str], done: &[&str]) -> App {
    App::new(store_with(pending, done))
}

pub fn names(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.name.as_str()).collect()
}

/// Draw the app into an in-memory buffer and return plain text (no styles).
pub fn render_to_string(app: &App, w: u16, h: u16) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| super::render(frame, app))
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}
