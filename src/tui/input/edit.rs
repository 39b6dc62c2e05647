use chrono::{DateTime, Local};

use crate::model::ListKind;
use crate::ops::task_ops;
use crate::tui::app::{App, Mode};

use super::{Effect, Event, apply_edit};

/// Add prompt: typing edits the buffer, Enter creates the task
pub(super) fn handle_add(app: &mut App, event: Event, now: DateTime<Local>) -> Option<Effect> {
    match event {
        Event::Input(edit) => apply_edit(&mut app.add_input, edit),
        Event::Cancel => {
            app.add_input.clear();
            app.set_mode(Mode::Normal);
        }
        Event::Submit => {
            // Empty submit keeps the prompt open
            if app.add_input.is_empty() {
                return None;
            }
            match task_ops::add_task(&mut app.store, app.add_input.value(), now) {
                Ok(task) => {
                    log::info!("added task #{}", task.id);
                    app.cursor += 1;
                }
                Err(e) => log::warn!("add ignored: {e}"),
            }
            app.add_input.clear();
            app.set_mode(Mode::Normal);
        }
        _ => {}
    }
    None
}

/// Edit prompt: Enter renames the task under the cursor
pub(super) fn handle_edit(app: &mut App, event: Event) -> Option<Effect> {
    match event {
        Event::Input(edit) => apply_edit(&mut app.edit_input, edit),
        Event::Cancel => {
            app.edit_input.clear();
            app.set_mode(Mode::Normal);
        }
        Event::Submit => {
            if app.edit_input.is_empty() {
                return None;
            }
            if let Some(index) = app.cursor.checked_sub(1)
                && let Err(e) =
                    task_ops::rename_task(&mut app.store, ListKind::Pending, index, app.edit_input.value())
            {
                log::warn!("rename ignored: {e}");
            }
            app.edit_input.clear();
            app.set_mode(Mode::Normal);
        }
        _ => {}
    }
    None
}
