//! tasklist - a single-user task list for the terminal

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = tasklist::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
