use chrono::{DateTime, Local};

use crate::model::store::TaskStore;
use crate::model::task::{ListKind, Task};

/// Error type for task operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task index {index} out of range for list of {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("task name must not be empty")]
    EmptyName,
}

fn check_index(store: &TaskStore, kind: ListKind, index: usize) -> Result<(), TaskError> {
    let len = store.list(kind).len();
    if index >= len {
        return Err(TaskError::OutOfRange { index, len });
    }
    Ok(())
}

/// Append a new pending task, assigning the next id from the store's counter.
pub fn add_task<'a>(
    store: &'a mut TaskStore,
    name: &str,
    now: DateTime<Local>,
) -> Result<&'a Task, TaskError> {
    if name.is_empty() {
        return Err(TaskError::EmptyName);
    }
    let id = store.next_id();
    store.pending.push(Task::new(id, name, now));
    log::debug!("added task #{id}");
    Ok(&store.pending[store.pending.len() - 1])
}

/// Remove the task at `index` (0-based) from the given list.
pub fn delete_task(store: &mut TaskStore, kind: ListKind, index: usize) -> Result<Task, TaskError> {
    check_index(store, kind, index)?;
    let task = store.list_mut(kind).remove(index);
    log::debug!("deleted task #{} from {:?}", task.id, kind);
    Ok(task)
}

/// Move the task at `index` of `kind` to the end of the other list,
/// flipping its done flag. Returns the moved task's id.
pub fn toggle_done(store: &mut TaskStore, kind: ListKind, index: usize) -> Result<u64, TaskError> {
    check_index(store, kind, index)?;
    let mut task = store.list_mut(kind).remove(index);
    task.is_done = kind == ListKind::Pending;
    let id = task.id;
    store.list_mut(kind.other()).push(task);
    log::debug!("moved task #{id} from {:?} to {:?}", kind, kind.other());
    Ok(id)
}

/// Replace the name of the task at `index` in the given list.
pub fn rename_task(
    store: &mut TaskStore,
    kind: ListKind,
    index: usize,
    name: &str,
) -> Result<(), TaskError> {
    if name.is_empty() {
        return Err(TaskError::EmptyName);
    }
    check_index(store, kind, index)?;
    let task = &mut store.list_mut(kind)[index];
    task.name = name.to_string();
    log::debug!("renamed task #{}", task.id);
    Ok(())
}
