//! # Command-Line Interface
//!
//! Presentation layers over the in-memory [`TaskStore`](crate::domain::TaskStore).
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `tui` (default) | Interactive task list |
//! | `run [FILE]` | Apply a script of task commands, print the result |
//! | `config path`, `config show` | Inspect configuration |
//!
//! ## Output Formats
//!
//! `run` and `config` support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr, including the
//! mutations a script ignored:
//! ```bash
//! tasklist --verbose run tasks.txt
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod script;
mod tui;

pub use app::{run, Cli, Commands, ConfigCommands};
pub use output::{task_line, Output, OutputFormat};
pub use script::{Command as ScriptCommand, ScriptError};
