//! tsk - console task tracker CLI
//!
//! In-memory task sessions: an interactive menu or a line-command repl
//! over one store that lives exactly as long as the process.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tsk::cli::Cli;
use tsk::output::emit_error;

fn main() {
    // Tracing is opt-in via RUST_LOG.
    // Keep startup robust in CI/robot envs: ignore invalid/huge filters.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    if let Err(err) = cli.run() {
        emit_error(&err, json);
        std::process::exit(err.exit_code());
    }
}
