//! Task identifiers
//!
//! ID Format: `t-{sequence}` (e.g., `t-1`, `t-42`)
//!
//! Sequences come from a per-store counter that only moves forward, so two
//! tasks created in the same instant still get distinct IDs, and the ID of a
//! deleted task is never handed out again.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid task ID format: expected 't-{{number}}', got '{0}'")]
    InvalidTaskId(String),

    #[error("Invalid sequence number: {0}")]
    InvalidSequence(String),
}

/// Task ID in the format `t-{sequence}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task ID from a raw sequence number
    pub fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    /// Returns the sequence portion of the ID
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t-{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    /// Accepts `t-7`, `T-7` or a bare `7`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = match s.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("t-") => &s[2..],
            _ => s,
        };

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdError::InvalidTaskId(s.to_string()));
        }

        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| IdError::InvalidSequence(digits.to_string()))
    }
}

impl TryFrom<String> for TaskId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.to_string()
    }
}

/// Hands out task IDs in strictly increasing order
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns a fresh ID; never repeats for the lifetime of the generator
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
