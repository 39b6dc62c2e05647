use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A single task as stored in the data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, assigned from the store's counter and never reused
    pub id: u64,
    /// Task name (one line of free text)
    pub name: String,
    /// Whether the task lives in the done list
    pub is_done: bool,
    /// When the task was added
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Create a new pending task
    pub fn new(id: u64, name: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Task {
            id,
            name: name.into(),
            is_done: false,
            created_at,
        }
    }

    /// Creation time in the `YYYY-MM-DD HH:MM` form used by the list views
    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Which of the two task sequences an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Pending,
    Done,
}

impl ListKind {
    /// The other list
    pub fn other(self) -> ListKind {
        match self {
            ListKind::Pending => ListKind::Done,
            ListKind::Done => ListKind::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn created_label_uses_minutes_precision() {
        let at = Local.with_ymd_and_hms(2026, 10, 19, 9, 5, 42).unwrap();
        let task = Task::new(7, "Water plants", at);
        assert_eq!(task.created_label(), "2026-10-19 09:05");
        assert!(!task.is_done);
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let at = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let task = Task::new(1, "Buy milk", at);
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Buy milk");
        assert_eq!(value["is_done"], false);
        assert!(value["created_at"].as_str().unwrap().starts_with("2026-01-02T03:04:05"));
    }

    #[test]
    fn accepts_nanosecond_timestamps() {
        let json = r#"{"id":4,"name":"x","is_done":true,"created_at":"2021-03-04T05:06:07.123456789+09:00"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 4);
        assert!(task.is_done);
        assert_eq!(task.created_at.timestamp(), 1614801967);
    }

    #[test]
    fn list_kind_other() {
        assert_eq!(ListKind::Pending.other(), ListKind::Done);
        assert_eq!(ListKind::Done.other(), ListKind::Pending);
    }
}
