//! Domain models for the task list
//!
//! Contains the core state engine without any I/O concerns.

mod filter;
mod id;
mod store;
mod task;

pub use filter::{Filter, FilterError};
pub use id::{IdError, IdGenerator, TaskId};
pub use store::{InsertPosition, Stats, TaskStore};
pub use task::Task;
