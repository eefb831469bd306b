//! tasklist - a single-user task list manager
//!
//! The core is [`TaskStore`]: an ordered, in-memory collection of tasks that
//! can be added, toggled and deleted, plus a visibility [`Filter`]. The
//! filtered list and the completion [`Stats`] are derived on demand, so a
//! presentation layer simply re-reads them after every mutation.

pub mod cli;
pub mod config;
pub mod domain;

pub use config::Config;
pub use domain::{Filter, InsertPosition, Stats, Task, TaskId, TaskStore};
