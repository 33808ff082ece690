//! Interactive numbered-menu session.
//!
//! Seven numbered choices: view, add, update, delete, mark complete, mark
//! pending, exit. Each handler prompts for its inputs line by line; blank
//! and non-numeric ids are caught at the prompt so the service only ever
//! sees parsed arguments. EOF anywhere ends the session like the exit
//! choice does.

use std::io::{self, BufRead, Write};

use crate::cli::{parse_task_id, INVALID_ID_MESSAGE};
use crate::config::{Config, DisplayConfig};
use crate::error::Result;
use crate::output::{self, OutputOptions};
use crate::service::Service;
use crate::task::{Task, TaskId};

pub fn run(service: &mut Service, config: &Config, options: OutputOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    Session {
        service,
        display: &config.display,
        lines: stdin.lock().lines(),
        out: &mut stdout,
        quiet: options.quiet,
    }
    .run()
}

struct Session<'a, R: BufRead, W: Write> {
    service: &'a mut Service,
    display: &'a DisplayConfig,
    lines: io::Lines<R>,
    out: &'a mut W,
    quiet: bool,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn run(mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.prompt("Enter choice [1-7]: ")? else {
                writeln!(self.out, "\nGoodbye!")?;
                break;
            };
            let choice = choice.trim().to_string();
            if choice.is_empty() {
                writeln!(self.out, "Please enter a valid choice (1-7)")?;
                continue;
            }

            match choice.as_str() {
                "1" => self.view_all_tasks()?,
                "2" => self.add_new_task()?,
                "3" => self.update_task()?,
                "4" => self.delete_task()?,
                "5" => self.mark_task(true)?,
                "6" => self.mark_task(false)?,
                "7" => {
                    writeln!(self.out, "\nGoodbye!")?;
                    break;
                }
                other => writeln!(
                    self.out,
                    "Invalid choice '{other}'. Please enter a number between 1 and 7."
                )?,
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out)?;
        writeln!(self.out, "==========================")?;
        writeln!(self.out, "===  TASK CONSOLE APP  ===")?;
        writeln!(self.out, "==========================")?;
        writeln!(self.out, "1. View All Tasks")?;
        writeln!(self.out, "2. Add New Task")?;
        writeln!(self.out, "3. Update Task")?;
        writeln!(self.out, "4. Delete Task")?;
        writeln!(self.out, "5. Mark Task Complete")?;
        writeln!(self.out, "6. Mark Task Pending")?;
        writeln!(self.out, "7. Exit")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn view_all_tasks(&mut self) -> Result<()> {
        self.section("View All Tasks")?;
        let tasks = self.service.get_all_tasks();
        if tasks.is_empty() {
            writeln!(self.out, "No tasks found.")?;
            return Ok(());
        }
        for task in &tasks {
            writeln!(self.out)?;
            writeln!(self.out, "{}", output::render_task_block(task, self.display))?;
        }
        Ok(())
    }

    fn add_new_task(&mut self) -> Result<()> {
        self.section("Add New Task")?;
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(());
        };
        if title.trim().is_empty() {
            writeln!(self.out, "Task title cannot be empty")?;
            return Ok(());
        }
        let Some(description) = self.prompt("Description (optional): ")? else {
            return Ok(());
        };

        let outcome = self.service.add_task(&title, &description);
        match outcome.value {
            Some(id) if outcome.ok => {
                writeln!(self.out, "\nTask created successfully!")?;
                writeln!(self.out, "ID: {id}")?;
            }
            _ => writeln!(self.out, "{}", outcome.message)?,
        }
        Ok(())
    }

    fn update_task(&mut self) -> Result<()> {
        self.section("Update Task")?;
        let Some(id) = self.prompt_task_id("Enter Task ID: ")? else {
            return Ok(());
        };
        if self.find_task(id).is_none() {
            writeln!(self.out, "Task with ID {id} not found")?;
            return Ok(());
        }

        if !self.quiet {
            writeln!(self.out, "Leave blank to keep current value")?;
        }
        let Some(title) = self.prompt("New Title: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("New Description: ")? else {
            return Ok(());
        };

        // The menu cannot distinguish "empty" from "omitted"; blank input
        // means leave the field unchanged.
        let title = title.trim().to_string();
        let description = description.trim().to_string();
        let title = (!title.is_empty()).then_some(title.as_str());
        let description = (!description.is_empty()).then_some(description.as_str());

        let outcome = self.service.update_task(id, title, description);
        writeln!(self.out, "{}", outcome.message)?;
        Ok(())
    }

    fn delete_task(&mut self) -> Result<()> {
        self.section("Delete Task")?;
        let Some(id) = self.prompt_task_id("Enter Task ID to delete: ")? else {
            return Ok(());
        };
        let outcome = self.service.delete_task(id);
        writeln!(self.out, "{}", outcome.message)?;
        Ok(())
    }

    fn mark_task(&mut self, complete: bool) -> Result<()> {
        let verb = if complete { "Complete" } else { "Pending" };
        self.section(&format!("Mark Task {verb}"))?;
        let Some(id) = self.prompt_task_id("Enter Task ID: ")? else {
            return Ok(());
        };

        let Some(task) = self.find_task(id) else {
            writeln!(self.out, "Task with ID {id} not found")?;
            return Ok(());
        };
        if task.is_complete == complete {
            let state = if complete { "complete" } else { "pending" };
            writeln!(self.out, "Task {id} is already marked as {state}")?;
            return Ok(());
        }

        let outcome = self.service.toggle_complete(id);
        writeln!(self.out, "{}", outcome.message)?;
        Ok(())
    }

    /// Prompts for an id and reports blank or non-numeric input itself,
    /// returning `None` for both those cases and for EOF.
    fn prompt_task_id(&mut self, text: &str) -> Result<Option<TaskId>> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            writeln!(self.out, "Task ID cannot be empty")?;
            return Ok(None);
        }
        match parse_task_id(&raw) {
            Some(id) => Ok(Some(id)),
            None => {
                writeln!(self.out, "{INVALID_ID_MESSAGE}")?;
                Ok(None)
            }
        }
    }

    fn find_task(&self, id: TaskId) -> Option<Task> {
        self.service.get_all_tasks().into_iter().find(|t| t.id() == id)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        if !self.quiet {
            write!(self.out, "{text}")?;
            self.out.flush()?;
        }
        match self.lines.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }

    fn section(&mut self, title: &str) -> Result<()> {
        if !self.quiet {
            writeln!(self.out, "\n--- {title} ---")?;
        }
        Ok(())
    }
}
