//! Visibility filter for the task list

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::task::Task;

#[derive(Debug, Error, PartialEq)]
#[error("Invalid filter '{0}': expected one of all, active, completed")]
pub struct FilterError(pub String);

/// Which tasks the derived view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filter values, in tab order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Returns true if the task belongs in this view
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.is_completed(),
            Filter::Completed => task.is_completed(),
        }
    }

    /// Next filter in tab order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Previous filter in tab order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Filter::All => Filter::Completed,
            Filter::Active => Filter::All,
            Filter::Completed => Filter::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    /// Label used in tab headers
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "1" => Ok(Filter::All),
            "active" | "a" | "2" => Ok(Filter::Active),
            "completed" | "done" | "c" | "3" => Ok(Filter::Completed),
            _ => Err(FilterError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    fn done_task() -> Task {
        let mut task = Task::new(TaskId::new(1), "done").unwrap();
        task.toggle();
        task
    }

    fn open_task() -> Task {
        Task::new(TaskId::new(2), "open").unwrap()
    }

    #[test]
    fn default_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn matches_by_completion() {
        assert!(Filter::All.matches(&done_task()));
        assert!(Filter::All.matches(&open_task()));

        assert!(Filter::Active.matches(&open_task()));
        assert!(!Filter::Active.matches(&done_task()));

        assert!(Filter::Completed.matches(&done_task()));
        assert!(!Filter::Completed.matches(&open_task()));
    }

    #[test]
    fn cycles_forward_and_back() {
        assert_eq!(Filter::All.next(), Filter::Active);
        assert_eq!(Filter::Active.next(), Filter::Completed);
        assert_eq!(Filter::Completed.next(), Filter::All);

        for filter in Filter::ALL {
            assert_eq!(filter.next().prev(), filter);
        }
    }

    #[test]
    fn from_str_accepts_names_and_shortcuts() {
        assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("ACTIVE".parse::<Filter>().unwrap(), Filter::Active);
        assert_eq!(" completed ".parse::<Filter>().unwrap(), Filter::Completed);
        assert_eq!("a".parse::<Filter>().unwrap(), Filter::Active);
        assert_eq!("c".parse::<Filter>().unwrap(), Filter::Completed);
        assert_eq!("1".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!("3".parse::<Filter>().unwrap(), Filter::Completed);
    }

    #[test]
    fn from_str_invalid() {
        assert!("".parse::<Filter>().is_err());
        assert!("pending".parse::<Filter>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        for filter in Filter::ALL {
            assert_eq!(filter.to_string(), filter.as_str());
            assert_eq!(filter.as_str().parse::<Filter>().unwrap(), filter);
        }
    }
}
