//! Interactive terminal session
//!
//! Renders the store's visible tasks and completion summary with ratatui and
//! feeds key presses back into it. The session owns its store; nothing is
//! kept once the UI exits.

mod app;
mod event;
mod terminal;
mod utils;
mod views;

use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};

use super::Output;
use crate::config::TuiConfig;
use crate::domain::{Stats, TaskStore};
use app::App;
use event::EventHandler;

/// Launch the TUI and return the summary of the session when it exits
pub fn run(output: &Output, store: TaskStore, config: &TuiConfig) -> Result<Stats> {
    output.verbose_ctx("tui", "Initializing TUI application");

    let mut app = App::new(store, config);
    let mut terminal = terminal::init_terminal()?;
    let event_handler = EventHandler::new(config.tick_rate_ms);

    // Restore the terminal even if the app panics
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        app.run(&mut terminal, event_handler)
    }));

    let restore_result = terminal::restore_terminal();

    match result {
        Ok(inner_result) => {
            restore_result?;
            inner_result?;
            Ok(app.stats())
        }
        Err(panic_payload) => {
            let _ = restore_result;
            if let Some(s) = panic_payload.downcast_ref::<&str>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else {
                Err(anyhow!("TUI panicked with unknown error"))
            }
        }
    }
}
