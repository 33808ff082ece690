//! tsk - Console Task Tracker Library
//!
//! Single-user, in-process task tracking: create, list, update,
//! toggle-complete, and delete short text records. Nothing persists past
//! the process; a session owns its whole world.
//!
//! # Module Organization
//!
//! Core, leaf-first:
//!
//! - `task`: validated task entity (trimmed text, length limits, id >= 1)
//! - `store`: id-keyed in-memory store with monotonic id assignment
//! - `service`: business rules mapping store results to uniform outcomes
//!
//! Presentation and plumbing:
//!
//! - `cli`: clap command definitions plus the menu and repl sessions
//! - `config`: display settings from an optional `tsk.toml`
//! - `output`: table, block and JSON rendering shared by the sessions
//! - `error`: process-level error type, exit codes and result alias

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod service;
pub mod store;
pub mod task;

pub use error::{Error, Result};
pub use service::{Outcome, Service};
pub use store::Store;
pub use task::{Task, TaskId, ValidationError};
