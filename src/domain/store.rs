//! In-memory task store
//!
//! [`TaskStore`] owns the ordered task collection and the current [`Filter`].
//! Mutations never fail: blank text and unknown IDs are absorbed as no-ops and
//! reported through the `Option` return value. The filtered view and the
//! completion counters are recomputed from the collection on every call, so
//! they cannot drift from it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::filter::Filter;
use super::id::{IdGenerator, TaskId};
use super::task::Task;

/// Where newly added tasks go in the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertPosition {
    /// Newest first
    #[default]
    Prepend,
    /// Oldest first
    Append,
}

impl InsertPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertPosition::Prepend => "prepend",
            InsertPosition::Append => "append",
        }
    }
}

/// Completion counters over the full, unfiltered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub completed: usize,
    pub total: usize,
}

impl Stats {
    /// Number of tasks still open
    pub fn active(&self) -> usize {
        self.total - self.completed
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} completed", self.completed, self.total)
    }
}

/// Ordered task collection plus the selected filter
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
    insert_position: InsertPosition,
    ids: IdGenerator,
}

impl TaskStore {
    /// Creates an empty store that inserts new tasks at `insert_position`
    pub fn new(insert_position: InsertPosition) -> Self {
        Self {
            tasks: Vec::new(),
            filter: Filter::default(),
            insert_position,
            ids: IdGenerator::new(),
        }
    }

    /// Starts the store on a filter other than `All`
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn insert_position(&self) -> InsertPosition {
        self.insert_position
    }

    /// Adds a task with the trimmed text
    ///
    /// Returns `None` without touching the collection when the text is empty
    /// or whitespace-only. No ID is consumed in that case.
    pub fn add_task(&mut self, raw_text: &str) -> Option<&Task> {
        if raw_text.trim().is_empty() {
            return None;
        }

        let task = Task::new(self.ids.next_id(), raw_text)?;
        let index = match self.insert_position {
            InsertPosition::Prepend => 0,
            InsertPosition::Append => self.tasks.len(),
        };
        self.tasks.insert(index, task);
        self.tasks.get(index)
    }

    /// Flips the completion flag of the task with `id` in place
    ///
    /// Returns the updated task, or `None` if no such task exists.
    pub fn toggle_complete(&mut self, id: TaskId) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id() == id)?;
        task.toggle();
        Some(&*task)
    }

    /// Removes the task with `id`, keeping the order of the rest
    ///
    /// Returns the removed task, or `None` if no such task exists.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        Some(self.tasks.remove(index))
    }

    /// Removes every completed task, keeping the order of the rest
    ///
    /// Returns the number of tasks removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.is_completed());
        before - self.tasks.len()
    }

    /// Replaces the current filter; the collection is untouched
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Tasks matching the current filter, in collection order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks_matching(self.filter)
    }

    /// Tasks matching `filter`, in collection order
    pub fn tasks_matching(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Completion counters for the whole collection, ignoring the filter
    pub fn stats(&self) -> Stats {
        Stats {
            completed: self.tasks.iter().filter(|t| t.is_completed()).count(),
            total: self.tasks.len(),
        }
    }

    /// The full collection in order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(InsertPosition::default())
    }
}
