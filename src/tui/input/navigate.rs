use crate::ops::task_ops;
use crate::tui::app::{App, Mode};

use super::{Effect, Event};

pub(super) fn handle_normal(app: &mut App, event: Event) -> Option<Effect> {
    match event {
        Event::MoveDown => move_down(app),
        Event::MoveUp => move_up(app),
        Event::Add => {
            app.add_input.clear();
            app.set_mode(Mode::AddTask);
        }
        Event::Delete => delete_selected(app),
        Event::Edit => enter_edit(app),
        Event::Help => app.set_mode(Mode::Help),
        Event::ToggleDone => toggle_selected(app),
        Event::SwitchList => {
            app.set_mode(Mode::DoneList);
            app.reset_cursor();
        }
        Event::Quit => return Some(Effect::Quit),
        _ => {}
    }
    None
}

pub(super) fn handle_done_list(app: &mut App, event: Event) -> Option<Effect> {
    match event {
        Event::MoveDown => move_down(app),
        Event::MoveUp => move_up(app),
        Event::Delete => delete_selected(app),
        Event::ToggleDone => toggle_selected(app),
        Event::SwitchList => {
            app.set_mode(Mode::Normal);
            app.reset_cursor();
        }
        Event::Quit => return Some(Effect::Quit),
        _ => {}
    }
    None
}

fn move_down(app: &mut App) {
    let len = app.current_tasks().len();
    app.cursor = (app.cursor + 1).min(len);
}

fn move_up(app: &mut App) {
    if !app.current_tasks().is_empty() {
        app.cursor = app.cursor.saturating_sub(1).max(1);
    }
}

/// Remove the task under the cursor from the list being shown
fn delete_selected(app: &mut App) {
    let Some(index) = app.cursor.checked_sub(1) else {
        return;
    };
    let list = app.current_list();
    match task_ops::delete_task(&mut app.store, list, index) {
        Ok(_) => app.reset_cursor(),
        Err(e) => log::warn!("delete ignored: {e}"),
    }
}

/// Move the task under the cursor to the other list
fn toggle_selected(app: &mut App) {
    let Some(index) = app.cursor.checked_sub(1) else {
        return;
    };
    let list = app.current_list();
    match task_ops::toggle_done(&mut app.store, list, index) {
        Ok(_) => app.reset_cursor(),
        Err(e) => log::warn!("toggle ignored: {e}"),
    }
}

fn enter_edit(app: &mut App) {
    let Some(name) = app.selected_task().map(|t| t.name.clone()) else {
        return;
    };
    app.edit_input.set(name.clone());
    app.edit_input.set_placeholder(name);
    app.set_mode(Mode::EditTask);
}
