//! Batch session: drives one in-memory store from a line-oriented script
//!
//! ```text
//! # comments and blank lines are skipped
//! add Buy milk
//! add Walk the dog
//! toggle t-1
//! filter active
//! list
//! stats
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use thiserror::Error;

use super::output::Output;
use crate::domain::{Filter, FilterError, IdError, TaskId, TaskStore};

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("Unknown command '{0}' (expected add, toggle, delete, filter, clear-completed, list, stats)")]
    UnknownCommand(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("'{0}' takes no argument")]
    UnexpectedArgument(&'static str),

    #[error(transparent)]
    Id(#[from] IdError),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// One script instruction
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(String),
    Toggle(TaskId),
    Delete(TaskId),
    Filter(Filter),
    ClearCompleted,
    List,
    Stats,
}

impl FromStr for Command {
    type Err = ScriptError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest),
            None => (line, ""),
        };
        let arg = rest.trim();

        match name.to_lowercase().as_str() {
            // The raw remainder goes to the store so it does the trimming
            "add" => Ok(Command::Add(rest.to_string())),
            "toggle" => Ok(Command::Toggle(require(arg, "toggle")?.parse()?)),
            "delete" | "rm" => Ok(Command::Delete(require(arg, "delete")?.parse()?)),
            "filter" => Ok(Command::Filter(require(arg, "filter")?.parse()?)),
            "clear-completed" => no_arg(arg, "clear-completed", Command::ClearCompleted),
            "list" | "ls" => no_arg(arg, "list", Command::List),
            "stats" => no_arg(arg, "stats", Command::Stats),
            other => Err(ScriptError::UnknownCommand(other.to_string())),
        }
    }
}

fn require<'a>(arg: &'a str, command: &'static str) -> Result<&'a str, ScriptError> {
    if arg.is_empty() {
        Err(ScriptError::MissingArgument(command))
    } else {
        Ok(arg)
    }
}

fn no_arg(arg: &str, command: &'static str, parsed: Command) -> Result<Command, ScriptError> {
    if arg.is_empty() {
        Ok(parsed)
    } else {
        Err(ScriptError::UnexpectedArgument(command))
    }
}

/// Parses a script line; `None` for blank lines and `#` comments
pub fn parse_line(line: &str) -> Result<Option<Command>, ScriptError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    line.parse().map(Some)
}

/// Applies one command to the store, reporting through `output`
pub fn execute(store: &mut TaskStore, command: Command, output: &Output) {
    match command {
        Command::Add(text) => match store.add_task(&text) {
            Some(task) => output.verbose_ctx("add", &format!("Added {}: {}", task.id(), task.text())),
            None => output.verbose_ctx("add", "Ignored blank task"),
        },
        Command::Toggle(id) => match store.toggle_complete(id) {
            Some(task) => output.verbose_ctx(
                "toggle",
                &format!("{} is now {}", id, if task.is_completed() { "completed" } else { "active" }),
            ),
            None => output.verbose_ctx("toggle", &format!("No task {}", id)),
        },
        Command::Delete(id) => match store.delete_task(id) {
            Some(task) => output.verbose_ctx("delete", &format!("Deleted {}: {}", id, task.text())),
            None => output.verbose_ctx("delete", &format!("No task {}", id)),
        },
        Command::Filter(filter) => {
            store.set_filter(filter);
            output.verbose_ctx("filter", &format!("Showing {} tasks", filter));
        }
        Command::ClearCompleted => {
            let removed = store.clear_completed();
            output.verbose_ctx("clear", &format!("Removed {} completed task(s)", removed));
        }
        Command::List => output.tasks(store.filter(), &store.visible_tasks()),
        Command::Stats => output.stats(store.stats()),
    }
}

/// Runs every line of `reader` against `store`
///
/// Stops at the first malformed line, naming its line number.
pub fn run_reader<R: BufRead>(reader: R, store: &mut TaskStore, output: &Output) -> Result<()> {
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

        let command = parse_line(&line).with_context(|| format!("Line {}", line_num + 1))?;
        if let Some(command) = command {
            execute(store, command, output);
        }
    }

    Ok(())
}

/// Runs a script file (or stdin for `None` / `-`) and prints the final view
pub fn run(output: &Output, mut store: TaskStore, file: Option<&Path>, quiet: bool) -> Result<TaskStore> {
    match file {
        Some(path) if path != Path::new("-") => {
            output.verbose_ctx("run", &format!("Reading script: {}", path.display()));
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            run_reader(BufReader::new(file), &mut store, output)?;
        }
        _ => {
            output.verbose_ctx("run", "Reading script from stdin");
            run_reader(io::stdin().lock(), &mut store, output)?;
        }
    }

    if !quiet {
        if output.is_json() {
            output.data(&serde_json::json!({
                "filter": store.filter(),
                "tasks": store.visible_tasks(),
                "stats": store.stats(),
            }));
        } else {
            output.tasks(store.filter(), &store.visible_tasks());
            output.stats(store.stats());
        }
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::domain::InsertPosition;

    fn quiet_output() -> Output {
        Output::new(OutputFormat::Text, false)
    }

    fn texts(store: &TaskStore) -> Vec<String> {
        store.visible_tasks().iter().map(|t| t.text().to_string()).collect()
    }

    #[test]
    fn parse_add_keeps_text() {
        assert_eq!(
            "add Buy   milk".parse::<Command>().unwrap(),
            Command::Add("Buy   milk".to_string())
        );
    }

    #[test]
    fn parse_add_without_text_is_blank_add() {
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add(String::new()));
    }

    #[test]
    fn parse_id_commands() {
        assert_eq!("toggle t-2".parse::<Command>().unwrap(), Command::Toggle(TaskId::new(2)));
        assert_eq!("delete 5".parse::<Command>().unwrap(), Command::Delete(TaskId::new(5)));
        assert_eq!("rm T-1".parse::<Command>().unwrap(), Command::Delete(TaskId::new(1)));
    }

    #[test]
    fn parse_filter_and_queries() {
        assert_eq!("filter active".parse::<Command>().unwrap(), Command::Filter(Filter::Active));
        assert_eq!("LIST".parse::<Command>().unwrap(), Command::List);
        assert_eq!("stats".parse::<Command>().unwrap(), Command::Stats);
        assert_eq!("clear-completed".parse::<Command>().unwrap(), Command::ClearCompleted);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "frobnicate".parse::<Command>(),
            Err(ScriptError::UnknownCommand("frobnicate".to_string()))
        );
        assert_eq!("toggle".parse::<Command>(), Err(ScriptError::MissingArgument("toggle")));
        assert_eq!("list all".parse::<Command>(), Err(ScriptError::UnexpectedArgument("list")));
        assert!(matches!("toggle abc".parse::<Command>(), Err(ScriptError::Id(_))));
        assert!(matches!("filter later".parse::<Command>(), Err(ScriptError::Filter(_))));
    }

    #[test]
    fn parse_line_skips_blank_and_comments() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("  # note").unwrap(), None);
        assert_eq!(parse_line("stats").unwrap(), Some(Command::Stats));
    }

    #[test]
    fn run_reader_applies_commands() {
        let script = "add A\nadd B\n\n# done with A\ntoggle t-1\nfilter completed\n";
        let mut store = TaskStore::new(InsertPosition::Prepend);

        run_reader(script.as_bytes(), &mut store, &quiet_output()).unwrap();

        assert_eq!(store.filter(), Filter::Completed);
        assert_eq!(texts(&store), vec!["A"]);
        assert_eq!(store.stats().total, 2);
    }

    #[test]
    fn run_reader_absorbs_noops() {
        let script = "add    \ndelete t-9\ntoggle t-9\nadd A\ndelete t-1\ndelete t-1\n";
        let mut store = TaskStore::default();

        run_reader(script.as_bytes(), &mut store, &quiet_output()).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn run_reader_reports_line_number() {
        let script = "add A\nbogus\n";
        let mut store = TaskStore::default();

        let err = run_reader(script.as_bytes(), &mut store, &quiet_output()).unwrap_err();
        assert!(format!("{:#}", err).contains("Line 2"));
        assert_eq!(store.len(), 1);
    }
}
