//! Task domain model
//!
//! A task is one line of user-entered text with a completion flag. The ID and
//! text are fixed at creation; only the completion state changes afterwards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::id::TaskId;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    /// Unique identifier
    id: TaskId,

    /// Trimmed, never-empty text
    text: String,

    /// Whether the task has been checked off
    completed: bool,

    /// When the task was created
    created_at: DateTime<Utc>,

    /// When the task was completed (if completed)
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new incomplete task, or `None` if the text is blank
    ///
    /// Leading and trailing whitespace is trimmed before storing.
    pub fn new(id: TaskId, raw_text: &str) -> Option<Self> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Flips the completion flag, stamping or clearing `completed_at`
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
        self.completed_at = if self.completed { Some(Utc::now()) } else { None };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_incomplete() {
        let task = Task::new(TaskId::new(1), "Buy milk").unwrap();

        assert_eq!(task.id(), TaskId::new(1));
        assert_eq!(task.text(), "Buy milk");
        assert!(!task.is_completed());
        assert!(task.completed_at().is_none());
    }

    #[test]
    fn new_task_trims_text() {
        let task = Task::new(TaskId::new(1), "  \tWalk the dog \n").unwrap();
        assert_eq!(task.text(), "Walk the dog");
    }

    #[test]
    fn new_task_keeps_inner_whitespace() {
        let task = Task::new(TaskId::new(1), " a  b ").unwrap();
        assert_eq!(task.text(), "a  b");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert!(Task::new(TaskId::new(1), "").is_none());
        assert!(Task::new(TaskId::new(1), "   ").is_none());
        assert!(Task::new(TaskId::new(1), "\t\n\r ").is_none());
    }

    #[test]
    fn toggle_sets_and_clears_completion() {
        let mut task = Task::new(TaskId::new(1), "Read").unwrap();

        task.toggle();
        assert!(task.is_completed());
        assert!(task.completed_at().is_some());

        task.toggle();
        assert!(!task.is_completed());
        assert!(task.completed_at().is_none());
    }

    #[test]
    fn task_serialization() {
        let task = Task::new(TaskId::new(4), "Write report").unwrap();
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["id"], "t-4");
        assert_eq!(json["text"], "Write report");
        assert_eq!(json["completed"], false);
        assert!(json.get("completed_at").is_none());
    }
}
