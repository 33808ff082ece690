//! In-memory task store.
//!
//! The store is the sole owner of all task records, keyed by id, with a
//! monotonic next-id counter starting at 1. Ids increase by one per insert
//! and are never reused within a process, so ascending-key iteration over
//! the map is exactly insertion order and no secondary index is needed.
//!
//! Everything here is single-threaded; wrap the store in a mutex before
//! sharing it across threads.

use std::collections::BTreeMap;

use crate::task::{Task, TaskId};

/// Id-keyed container of task records with auto-incrementing ids.
#[derive(Debug)]
pub struct Store {
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
}

impl Store {
    /// Creates an empty store; the first assigned id is 1.
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Inserts a task, ignoring any id already set on it, and returns the
    /// assigned id. Never fails; callers validate before inserting.
    pub fn add(&mut self, mut task: Task) -> TaskId {
        let id = self.next_id;
        task.assign_id(id);
        self.tasks.insert(id, task);
        self.next_id += 1;
        id
    }

    /// O(1) lookup; `None` when the id was never issued or was deleted.
    pub fn get_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Every stored task in insertion order, as clones. Editing in place
    /// means mutating a returned clone and handing it back to [`update`].
    ///
    /// [`update`]: Store::update
    pub fn get_all(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    /// Removes the record if present; reports whether anything was removed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        self.tasks.remove(&id).is_some()
    }

    /// Replaces the record at `task.id()` if that id exists. Returns false
    /// (and inserts nothing) for unknown ids.
    pub fn update(&mut self, task: Task) -> bool {
        match self.tasks.get_mut(&task.id()) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
