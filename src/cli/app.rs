//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{script, tui};
use crate::config::Config;
use crate::domain::{Filter, TaskStore};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(author, version, about = "A single-user task list for the terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the config's default_format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to the config file
    #[arg(long, global = true, env = "TASKLIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Defaults to `tui` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive task list
    Tui {
        /// Filter to start on (all, active, completed)
        #[arg(long)]
        filter: Option<Filter>,
    },

    /// Run a script of task commands against a fresh list
    ///
    /// One command per line: add <text>, toggle <id>, delete <id>,
    /// filter <all|active|completed>, clear-completed, list, stats.
    Run {
        /// Script file; reads stdin when omitted or `-`
        file: Option<PathBuf>,

        /// Filter to start on (all, active, completed)
        #[arg(long)]
        filter: Option<Filter>,

        /// Don't print the final list and summary
        #[arg(long, short)]
        quiet: bool,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration
    Show,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.default_format);
    let output = Output::new(format, cli.verbose);

    output.verbose("tasklist starting");
    output.verbose_ctx(
        "config",
        &format!(
            "insert_position={}, default_filter={}",
            config.insert_position.as_str(),
            config.default_filter
        ),
    );

    match cli.command.unwrap_or(Commands::Tui { filter: None }) {
        Commands::Tui { filter } => {
            let store = new_store(&config, filter);
            let stats = tui::run(&output, store, &config.tui)?;
            output.verbose_ctx("tui", &format!("Session ended: {}", stats));
        }

        Commands::Run { file, filter, quiet } => {
            let store = new_store(&config, filter);
            script::run(&output, store, file.as_deref(), quiet)?;
        }

        Commands::Config(cmd) => match cmd {
            ConfigCommands::Path => {
                let path = Config::resolve_path(cli.config.as_deref())
                    .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
                if output.is_json() {
                    output.data(&serde_json::json!({
                        "path": path.display().to_string(),
                        "exists": path.exists(),
                    }));
                } else {
                    println!("{}", path.display());
                }
            }
            ConfigCommands::Show => {
                if output.is_json() {
                    output.data(&config);
                } else {
                    print!("{}", config.to_toml()?);
                }
            }
        },
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Builds an empty store from config, with an optional filter override
fn new_store(config: &Config, filter: Option<Filter>) -> TaskStore {
    TaskStore::new(config.insert_position).with_filter(filter.unwrap_or(config.default_filter))
}
