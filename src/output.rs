//! Shared output formatting for tsk sessions.
//!
//! Both front-ends render through here so a task looks the same everywhere:
//! the repl's table view, the menu's per-task block, and the JSON envelope
//! emitted per repl command when `--json` is set.

use serde::Serialize;

use crate::config::DisplayConfig;
use crate::error::{Error, JsonError, Result};
use crate::task::Task;

pub const SCHEMA_VERSION: &str = "tsk.v1";

/// Output flags shared by the session loops.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub quiet: bool,
}

/// One-line JSON envelope for a single session command result.
pub fn render_json<T: Serialize>(
    command: &str,
    ok: bool,
    message: &str,
    data: Option<&T>,
) -> Result<String> {
    #[derive(Serialize)]
    struct Envelope<'a, T: Serialize> {
        schema_version: &'static str,
        command: &'a str,
        status: &'static str,
        #[serde(skip_serializing_if = "str::is_empty")]
        message: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<&'a T>,
    }

    let payload = Envelope {
        schema_version: SCHEMA_VERSION,
        command,
        status: if ok { "success" } else { "error" },
        message,
        data,
    };

    Ok(serde_json::to_string(&payload)?)
}

/// Table used by the repl `list` command. Display-only truncation; stored
/// values are never shortened.
pub fn render_task_table(tasks: &[Task], display: &DisplayConfig) -> String {
    let title_width = display.title_width;
    let description_width = display.description_width;

    let mut lines = Vec::with_capacity(tasks.len() + 2);
    lines.push(format!(
        "ID | Status | {:<width$} | Description",
        "Title",
        width = title_width
    ));
    lines.push(format!(
        "---+--------+-{}-+-{}",
        "-".repeat(title_width),
        "-".repeat(description_width)
    ));

    for task in tasks {
        let status = format!("[{}]", display.marker(task.is_complete));
        lines.push(format!(
            "{:<2} | {:<6} | {:<width$} | {}",
            task.id(),
            status,
            truncate(task.title(), title_width),
            truncate(task.description(), description_width),
            width = title_width
        ));
    }

    lines.join("\n")
}

/// Multi-line block used by the menu's view-all screen.
pub fn render_task_block(task: &Task, display: &DisplayConfig) -> String {
    let mut lines = vec![
        format!("ID: {}", task.id()),
        format!("Title: {}", task.title()),
    ];
    if !task.description().is_empty() {
        lines.push(format!("Description: {}", task.description()));
    }
    let state = if task.is_complete {
        "Complete"
    } else {
        "Pending"
    };
    lines.push(format!(
        "Status: [{}] {state}",
        display.marker(task.is_complete)
    ));
    lines.join("\n")
}

/// Truncates to `width` characters, ending in `...` when anything was cut.
/// Character-based so multibyte text is never split mid-scalar.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let head: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{head}...")
}

/// Final error report for the process; stderr for humans, a JSON object on
/// stdout when the session asked for JSON.
pub fn emit_error(err: &Error, json: bool) {
    if json {
        if let Ok(payload) = serde_json::to_string(&JsonError::from(err)) {
            println!("{payload}");
            return;
        }
    }
    eprintln!("error: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn display() -> DisplayConfig {
        DisplayConfig::default()
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate("short", 40), "short");
        assert_eq!(truncate("", 40), "");
    }

    #[test]
    fn truncate_cuts_to_width_with_ellipsis() {
        let cut = truncate(&"a".repeat(50), 40);
        assert_eq!(cut.chars().count(), 40);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn truncate_is_character_based() {
        let cut = truncate(&"ä".repeat(50), 10);
        assert_eq!(cut, format!("{}...", "ä".repeat(7)));
    }

    #[test]
    fn table_shows_markers_and_columns() {
        let mut done = Task::new(1, "Done thing", "", false).unwrap();
        done.is_complete = true;
        let pending = Task::new(2, "Pending thing", "details", false).unwrap();

        let table = render_task_table(&[done, pending], &display());
        assert!(table.starts_with("ID | Status | Title"));
        assert!(table.contains("[✓]"));
        assert!(table.contains("[ ]"));
        assert!(table.contains("Pending thing"));
        assert!(table.contains("details"));
    }

    #[test]
    fn block_omits_empty_description() {
        let task = Task::new(3, "No details", "", false).unwrap();
        let block = render_task_block(&task, &display());
        assert!(block.contains("ID: 3"));
        assert!(!block.contains("Description:"));
        assert!(block.contains("Status: [ ] Pending"));
    }

    #[test]
    fn json_envelope_has_schema_and_status() {
        let line = render_json("add", true, "Task 1 added successfully", Some(&1u64)).unwrap();
        assert!(line.contains("\"schema_version\":\"tsk.v1\""));
        assert!(line.contains("\"command\":\"add\""));
        assert!(line.contains("\"status\":\"success\""));
        assert!(line.contains("\"data\":1"));
    }

    #[test]
    fn json_envelope_skips_empty_message() {
        let line = render_json::<Vec<Task>>("list", true, "", Some(&Vec::new())).unwrap();
        assert!(!line.contains("\"message\""));
        assert!(line.contains("\"data\":[]"));
    }
}
