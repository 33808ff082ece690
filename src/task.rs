//! Task entity.
//!
//! A task is one unit of work: a required title, an optional description,
//! a completion flag, and a numeric id assigned by the store. Text fields
//! are stored trimmed and are only reachable through validating setters,
//! so a constructed task is never in an invalid state.

use serde::Serialize;
use thiserror::Error;

/// Maximum title length in characters, post-trim.
pub const MAX_TITLE_CHARS: usize = 500;

/// Maximum description length in characters, post-trim.
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

/// Store-assigned task identifier. Always >= 1, never reused in a process.
pub type TaskId = u64;

/// Entity validation failures.
///
/// The `Display` text of each kind is the user-facing message; the service
/// layer forwards it unchanged, so both front-ends print identical wording.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task title cannot be empty")]
    InvalidTitle,

    #[error("Task title cannot exceed {MAX_TITLE_CHARS} characters")]
    TitleTooLong,

    #[error("Task description cannot exceed {MAX_DESCRIPTION_CHARS} characters")]
    DescriptionTooLong,

    #[error("Task ID must be >= 1")]
    InvalidId,
}

/// A single trackable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    pub is_complete: bool,
}

impl Task {
    /// Builds a task, trimming both text fields and validating in order:
    /// title non-empty, title length, description length, id >= 1.
    ///
    /// The id passed by creation paths is a placeholder; the store replaces
    /// it on insert.
    pub fn new(
        id: TaskId,
        title: &str,
        description: &str,
        is_complete: bool,
    ) -> Result<Self, ValidationError> {
        let title = normalize_title(title)?;
        let description = normalize_description(description)?;
        if id < 1 {
            return Err(ValidationError::InvalidId);
        }

        Ok(Self {
            id,
            title,
            description,
            is_complete,
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replaces the title after trim + validation. Leaves the task untouched
    /// on failure.
    pub fn set_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = normalize_title(title)?;
        Ok(())
    }

    /// Replaces the description after trim + validation. Empty is allowed.
    pub fn set_description(&mut self, description: &str) -> Result<(), ValidationError> {
        self.description = normalize_description(description)?;
        Ok(())
    }

    /// Store-only hook for id assignment on insert.
    pub(crate) fn assign_id(&mut self, id: TaskId) {
        self.id = id;
    }
}

fn normalize_title(raw: &str) -> Result<String, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::InvalidTitle);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(title.to_string())
}

fn normalize_description(raw: &str) -> Result<String, ValidationError> {
    let description = raw.trim();
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(description.to_string())
}
