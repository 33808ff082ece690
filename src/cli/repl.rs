//! Line-command session.
//!
//! Grammar:
//!
//! ```text
//! add <title>
//! add <title> | <description>
//! list
//! toggle <id>
//! update <id> <new_title>
//! update <id> | <new_description>
//! update <id> <new_title> | <new_description>
//! delete <id>
//! help
//! quit | exit
//! ```
//!
//! A `|` splits title from description; both sides are trimmed. In
//! `update`, a blank title segment means "leave the title unchanged" while
//! the segment after the pipe is always treated as provided, so
//! `update 3 |` clears the description. Service messages print verbatim;
//! with `--json` every command result becomes one envelope line instead.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::cli::{parse_task_id, INVALID_ID_MESSAGE};
use crate::config::Config;
use crate::error::Result;
use crate::output::{self, OutputOptions};
use crate::service::{Outcome, Service};

pub fn run(service: &mut Service, config: &Config, options: OutputOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_session(service, config, options, stdin.lock(), &mut stdout)
}

fn run_session<R: BufRead, W: Write>(
    service: &mut Service,
    config: &Config,
    options: OutputOptions,
    input: R,
    out: &mut W,
) -> Result<()> {
    if !options.quiet && !options.json {
        writeln!(
            out,
            "tsk {} - type 'help' for commands",
            env!("CARGO_PKG_VERSION")
        )?;
    }

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, args) = split_command(line);
        match command {
            "quit" | "exit" => {
                if !options.quiet && !options.json {
                    writeln!(out, "Goodbye!")?;
                }
                break;
            }
            "help" => print_help(out)?,
            "add" => handle_add(service, options, args, out)?,
            "list" => handle_list(service, config, options, out)?,
            "toggle" => handle_toggle(service, options, args, out)?,
            "update" => handle_update(service, options, args, out)?,
            "delete" => handle_delete(service, options, args, out)?,
            other => writeln!(
                out,
                "Unknown command '{other}'. Type 'help' for available commands."
            )?,
        }
    }

    Ok(())
}

fn handle_add<W: Write>(
    service: &mut Service,
    options: OutputOptions,
    args: &str,
    out: &mut W,
) -> Result<()> {
    let (title, description) = split_title_description(args);
    let outcome = service.add_task(title, description.unwrap_or(""));
    emit(out, options, "add", &outcome)
}

fn handle_list<W: Write>(
    service: &Service,
    config: &Config,
    options: OutputOptions,
    out: &mut W,
) -> Result<()> {
    let tasks = service.get_all_tasks();

    if options.json {
        writeln!(out, "{}", output::render_json("list", true, "", Some(&tasks))?)?;
        return Ok(());
    }

    if tasks.is_empty() {
        writeln!(out, "No tasks found. Use 'add <title>' to create a task.")?;
        return Ok(());
    }

    writeln!(out, "{}", output::render_task_table(&tasks, &config.display))?;
    Ok(())
}

fn handle_toggle<W: Write>(
    service: &mut Service,
    options: OutputOptions,
    args: &str,
    out: &mut W,
) -> Result<()> {
    let Some(id) = parse_task_id(args) else {
        return emit(out, options, "toggle", &Outcome::<()>::failure(INVALID_ID_MESSAGE));
    };
    emit(out, options, "toggle", &service.toggle_complete(id))
}

fn handle_update<W: Write>(
    service: &mut Service,
    options: OutputOptions,
    args: &str,
    out: &mut W,
) -> Result<()> {
    let Some((id_part, fields)) = args.trim().split_once(char::is_whitespace) else {
        return emit(
            out,
            options,
            "update",
            &Outcome::<()>::failure("No updates provided. Specify title and/or description."),
        );
    };
    let Some(id) = parse_task_id(id_part) else {
        return emit(out, options, "update", &Outcome::<()>::failure(INVALID_ID_MESSAGE));
    };

    let (title, description) = split_update_fields(fields);
    emit(
        out,
        options,
        "update",
        &service.update_task(id, title, description),
    )
}

fn handle_delete<W: Write>(
    service: &mut Service,
    options: OutputOptions,
    args: &str,
    out: &mut W,
) -> Result<()> {
    let Some(id) = parse_task_id(args) else {
        return emit(out, options, "delete", &Outcome::<()>::failure(INVALID_ID_MESSAGE));
    };
    emit(out, options, "delete", &service.delete_task(id))
}

fn emit<T: Serialize, W: Write>(
    out: &mut W,
    options: OutputOptions,
    command: &str,
    outcome: &Outcome<T>,
) -> Result<()> {
    if options.json {
        let line = output::render_json(command, outcome.ok, &outcome.message, outcome.value.as_ref())?;
        writeln!(out, "{line}")?;
    } else {
        writeln!(out, "{}", outcome.message)?;
    }
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  add <title>[ | <description>]   Create a task")?;
    writeln!(out, "  list                            Show all tasks")?;
    writeln!(out, "  toggle <id>                     Flip completion state")?;
    writeln!(out, "  update <id> [<title>][ | <description>]")?;
    writeln!(out, "                                  Change title and/or description")?;
    writeln!(out, "  delete <id>                     Remove a task")?;
    writeln!(out, "  help                            Show this help")?;
    writeln!(out, "  quit                            End the session")?;
    Ok(())
}

/// Splits a raw line into the command word and the remaining argument text.
fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((command, args)) => (command, args.trim()),
        None => (line, ""),
    }
}

/// `add` argument grammar: everything before the first `|` is the title,
/// everything after it the description.
fn split_title_description(args: &str) -> (&str, Option<&str>) {
    match args.split_once('|') {
        Some((title, description)) => (title.trim(), Some(description.trim())),
        None => (args.trim(), None),
    }
}

/// `update` field grammar. Without a pipe the whole text is a new title.
/// With a pipe, a blank title segment means "unchanged" while the
/// description side counts as provided even when blank.
fn split_update_fields(args: &str) -> (Option<&str>, Option<&str>) {
    match args.split_once('|') {
        Some((title, description)) => {
            let title = title.trim();
            let title = if title.is_empty() { None } else { Some(title) };
            (title, Some(description.trim()))
        }
        None => {
            let title = args.trim();
            if title.is_empty() {
                (None, None)
            } else {
                (Some(title), None)
            }
        }
    }
}
