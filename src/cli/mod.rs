//! Command-line interface for tsk
//!
//! This module defines the CLI structure using clap derive macros. Each
//! session mode lives in its own submodule. Both modes build one store and
//! one service up front and hand them to the session loop; nothing lives in
//! ambient globals.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputOptions;
use crate::service::Service;
use crate::store::Store;
use crate::task::TaskId;

mod menu;
mod repl;

/// tsk - console task tracker
///
/// Tracks short text tasks in memory for the lifetime of one session,
/// through an interactive menu or a line-command interface.
#[derive(Parser, Debug)]
#[command(name = "tsk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (defaults to ./tsk.toml when present)
    #[arg(long, global = true, env = "TSK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output command results as JSON lines (repl sessions only)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress menus, banners and prompts; results still print
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive numbered-menu session (the default)
    Menu,

    /// Line-command session: add, list, toggle, update, delete
    Repl,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;
        let options = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };

        let mut service = Service::new(Store::new());

        match self.command.unwrap_or(Commands::Menu) {
            Commands::Menu => {
                if options.json {
                    return Err(Error::InvalidArgument(
                        "--json is only supported in repl sessions".to_string(),
                    ));
                }
                menu::run(&mut service, &config, options)
            }
            Commands::Repl => repl::run(&mut service, &config, options),
        }
    }
}

/// Parses a decimal task id from raw user input. The service never sees
/// non-numeric ids; sessions reject them at the prompt.
pub(crate) fn parse_task_id(raw: &str) -> Option<TaskId> {
    raw.trim().parse::<TaskId>().ok()
}

/// Front-end message for unparseable ids, shared by both sessions.
pub(crate) const INVALID_ID_MESSAGE: &str = "Invalid task ID. Please provide a numeric ID.";
