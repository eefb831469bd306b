//! Output formatting for CLI commands

use serde::Serialize;

use crate::domain::{Filter, Stats, Task};

pub use crate::config::OutputFormat;

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                // Callers normally render text themselves; pretty JSON is the fallback
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Prints the visible task list under a filter
    pub fn tasks(&self, filter: Filter, tasks: &[&Task]) {
        if self.is_json() {
            self.data(&serde_json::json!({
                "filter": filter,
                "tasks": tasks,
            }));
            return;
        }

        if tasks.is_empty() {
            println!("{}", empty_message(filter));
            return;
        }

        for task in tasks {
            println!("{}", task_line(task));
        }
    }

    /// Prints completion counters
    pub fn stats(&self, stats: Stats) {
        if self.is_json() {
            self.data(&stats);
        } else {
            println!("{}", stats);
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}

/// One task as a text row: `[x] t-3  Buy milk`
pub fn task_line(task: &Task) -> String {
    let mark = if task.is_completed() { "x" } else { " " };
    format!("[{}] {:<5} {}", mark, task.id().to_string(), task.text())
}

fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No tasks",
        Filter::Active => "No active tasks",
        Filter::Completed => "No completed tasks",
    }
}
