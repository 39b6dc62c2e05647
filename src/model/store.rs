use super::task::{ListKind, Task};

/// The in-memory task collection: pending and done sequences plus the id counter.
///
/// A task lives in exactly one of the two sequences, and its `is_done` flag
/// always matches the sequence it is in. `latest_id` only grows, so ids of
/// deleted tasks are never handed out again within a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    pub(crate) pending: Vec<Task>,
    pub(crate) done: Vec<Task>,
    pub(crate) latest_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Build a store from a flat task list, splitting on `is_done`.
    /// Relative order inside each sequence follows the input order.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut store = TaskStore::new();
        for task in tasks {
            store.latest_id = store.latest_id.max(task.id);
            if task.is_done {
                store.done.push(task);
            } else {
                store.pending.push(task);
            }
        }
        store
    }

    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    pub fn done(&self) -> &[Task] {
        &self.done
    }

    pub fn list(&self, kind: ListKind) -> &[Task] {
        match kind {
            ListKind::Pending => &self.pending,
            ListKind::Done => &self.done,
        }
    }

    pub(crate) fn list_mut(&mut self, kind: ListKind) -> &mut Vec<Task> {
        match kind {
            ListKind::Pending => &mut self.pending,
            ListKind::Done => &mut self.done,
        }
    }

    /// Highest id assigned or loaded so far (0 for a fresh store)
    pub fn latest_id(&self) -> u64 {
        self.latest_id
    }

    /// Advance the counter and return the new id
    pub(crate) fn next_id(&mut self) -> u64 {
        self.latest_id += 1;
        self.latest_id
    }

    /// All tasks in persistence order: pending first, then done
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.pending.iter().chain(self.done.iter())
    }

    pub fn len(&self) -> usize {
        self.pending.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.done.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn task(id: u64, name: &str, is_done: bool) -> Task {
        let mut t = Task::new(id, name, Local.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap());
        t.is_done = is_done;
        t
    }

    #[test]
    fn from_tasks_splits_on_done_flag() {
        let store = TaskStore::from_tasks(vec![
            task(3, "c", true),
            task(1, "a", false),
            task(2, "b", true),
        ]);
        assert_eq!(store.latest_id(), 3);
        assert_eq!(store.pending().iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(store.done().iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn latest_id_counts_done_tasks() {
        let store = TaskStore::from_tasks(vec![task(2, "a", false), task(9, "b", true)]);
        assert_eq!(store.latest_id(), 9);
    }

    #[test]
    fn empty_store() {
        let store = TaskStore::from_tasks(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.latest_id(), 0);
    }

    #[test]
    fn tasks_yields_pending_before_done() {
        let store = TaskStore::from_tasks(vec![
            task(1, "a", true),
            task(2, "b", false),
            task(3, "c", false),
        ]);
        let ids: Vec<u64> = store.tasks().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn next_id_increments_counter() {
        let mut store = TaskStore::from_tasks(vec![task(4, "a", false)]);
        assert_eq!(store.next_id(), 5);
        assert_eq!(store.next_id(), 6);
        assert_eq!(store.latest_id(), 6);
    }
}
