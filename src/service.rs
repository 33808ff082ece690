//! Business-rule layer between the front-ends and the store.
//!
//! Every operation returns an [`Outcome`]: success flag, user-presentable
//! message, optional payload. Front-ends branch on `ok` and print `message`
//! verbatim; this module is the sole owner of message phrasing, so the menu
//! and the repl always agree on wording. Validation failures and unknown
//! ids are ordinary outcomes here, never process errors.

use serde::Serialize;
use tracing::debug;

use crate::store::Store;
use crate::task::{Task, TaskId};

/// Structured result of one service operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T = ()> {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
}

impl<T> Outcome<T> {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            value: None,
        }
    }

    pub fn success_with(message: impl Into<String>, value: T) -> Self {
        Self {
            ok: true,
            message: message.into(),
            value: Some(value),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            value: None,
        }
    }
}

/// Validation and orchestration layer over the one [`Store`].
pub struct Service {
    store: Store,
}

impl Service {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Validates and stores a new task. The payload of a successful outcome
    /// is the assigned id.
    pub fn add_task(&mut self, title: &str, description: &str) -> Outcome<TaskId> {
        // Placeholder id; the store assigns the real one on insert.
        let task = match Task::new(1, title, description, false) {
            Ok(task) => task,
            Err(err) => return Outcome::failure(err.to_string()),
        };

        let id = self.store.add(task);
        debug!(id, "task added");
        Outcome::success_with(format!("Task {id} added successfully"), id)
    }

    /// All tasks in insertion order; pass-through to the store.
    pub fn get_all_tasks(&self) -> Vec<Task> {
        self.store.get_all()
    }

    /// Flips the completion flag and reports the new state.
    pub fn toggle_complete(&mut self, id: TaskId) -> Outcome {
        let Some(task) = self.store.get_by_id(id) else {
            return Outcome::failure(not_found(id));
        };

        let mut task = task.clone();
        task.is_complete = !task.is_complete;
        let state = if task.is_complete {
            "complete"
        } else {
            "incomplete"
        };
        self.store.update(task);

        debug!(id, state, "task toggled");
        Outcome::success(format!("Task {id} marked as {state}"))
    }

    /// Updates the provided fields; `None` means leave unchanged. Every
    /// provided field is validated on a scratch copy before anything is
    /// persisted, so a bad title can never leave a new description behind.
    pub fn update_task(
        &mut self,
        id: TaskId,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Outcome {
        if title.is_none() && description.is_none() {
            return Outcome::failure("No updates provided. Specify title and/or description.");
        }

        let Some(task) = self.store.get_by_id(id) else {
            return Outcome::failure(not_found(id));
        };

        let mut task = task.clone();
        if let Some(title) = title {
            if let Err(err) = task.set_title(title) {
                return Outcome::failure(err.to_string());
            }
        }
        if let Some(description) = description {
            if let Err(err) = task.set_description(description) {
                return Outcome::failure(err.to_string());
            }
        }
        self.store.update(task);

        debug!(id, "task updated");
        Outcome::success(format!("Task {id} updated successfully"))
    }

    /// Removes the task if it exists.
    pub fn delete_task(&mut self, id: TaskId) -> Outcome {
        if self.store.get_by_id(id).is_none() {
            return Outcome::failure(not_found(id));
        }

        self.store.delete(id);
        debug!(id, "task deleted");
        Outcome::success(format!("Task {id} deleted successfully"))
    }
}

fn not_found(id: TaskId) -> String {
    format!("Task with ID {id} not found")
}
