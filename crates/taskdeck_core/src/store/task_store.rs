//! Authoritative task store over a key-value blob backend.
//!
//! # Responsibility
//! - Provide the add/update/toggle/delete/load surface for task records.
//! - Persist the full collection after every successful mutation.
//!
//! # Invariants
//! - Write paths validate input before the collection is touched.
//! - A failed persistence write surfaces an error but leaves the in-memory
//!   collection in its post-mutation state; nothing is retried.
//! - The collection keeps insertion order; display order is always derived
//!   by the view projector, never stored.

use crate::model::task::{validate_due_date, Priority, Task, TaskId, TaskValidationError};
use crate::store::blob::{BlobError, BlobStore};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed blob key for the serialized task collection.
pub const TASKS_KEY: &str = "tasks";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error taxonomy surfaced to the presentation shell.
#[derive(Debug)]
pub enum StoreError {
    /// Bad or missing input field; user-correctable.
    Validation(TaskValidationError),
    /// Operation referenced a task id that is not in the collection.
    NotFound(TaskId),
    /// Persisted blob was unreadable or failed record invariants.
    CorruptState(String),
    /// Blob backend failure (I/O, quota).
    Blob(BlobError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::CorruptState(details) => write!(f, "corrupt persisted task state: {details}"),
            Self::Blob(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::CorruptState(_) => None,
            Self::Blob(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<BlobError> for StoreError {
    fn from(value: BlobError) -> Self {
        Self::Blob(value)
    }
}

/// Authoritative owner of the task collection.
///
/// The backing `Vec` is exposed read-only through [`TaskStore::load_all`];
/// all mutation goes through the defined operations.
pub struct TaskStore<S: BlobStore> {
    tasks: Vec<Task>,
    blob: S,
}

impl<S: BlobStore> TaskStore<S> {
    /// Opens a store over the given blob backend and restores its contents.
    ///
    /// A corrupt blob is logged and recovered as an empty collection so
    /// startup never fails on bad data; the corrupt value stays in place
    /// until the first successful persist. Backend read errors still fail.
    pub fn open(blob: S) -> StoreResult<Self> {
        let mut store = Self::new(blob);
        match store.restore() {
            Ok(()) => Ok(store),
            Err(StoreError::CorruptState(details)) => {
                warn!("event=store_restore module=store status=recovered error={details}");
                store.tasks.clear();
                Ok(store)
            }
            Err(err) => Err(err),
        }
    }

    /// Creates an empty store over the backend without restoring.
    ///
    /// Callers own the initial [`TaskStore::restore`] call and its recovery
    /// policy; [`TaskStore::open`] is the common path.
    pub fn new(blob: S) -> Self {
        Self {
            tasks: Vec::new(),
            blob,
        }
    }

    /// Creates a task, appends it, persists, and returns the created record.
    ///
    /// # Errors
    /// - `Validation` for empty text or an absent/misshapen due date.
    /// - `Blob` when the persistence write fails.
    pub fn add_task(
        &mut self,
        text: &str,
        priority: Priority,
        due_date: &str,
    ) -> StoreResult<Task> {
        let task = Task::new(text, priority, due_date)?;
        self.tasks.push(task.clone());
        self.persist()?;
        info!(
            "event=task_add module=store status=ok id={} priority={}",
            task.id, task.priority
        );
        Ok(task)
    }

    /// Edits text/priority/due date of an existing task in place.
    ///
    /// `id`, `completed` and `created_at` are never touched by an edit.
    ///
    /// # Errors
    /// - `Validation` for bad fields; the stored record stays unchanged.
    /// - `NotFound` when the id is absent.
    pub fn update_task(
        &mut self,
        id: TaskId,
        text: &str,
        priority: Priority,
        due_date: &str,
    ) -> StoreResult<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskValidationError::EmptyText.into());
        }
        let due_date = due_date.trim();
        validate_due_date(due_date)?;

        let task = self.find_mut(id)?;
        task.text = text.to_string();
        task.priority = priority;
        task.due_date = due_date.to_string();
        let updated = task.clone();

        self.persist()?;
        info!("event=task_update module=store status=ok id={id}");
        Ok(updated)
    }

    /// Flips the completion flag of an existing task.
    pub fn toggle_completion(&mut self, id: TaskId) -> StoreResult<Task> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        let toggled = task.clone();

        self.persist()?;
        info!(
            "event=task_toggle module=store status=ok id={id} completed={}",
            toggled.completed
        );
        Ok(toggled)
    }

    /// Removes a task from the collection.
    ///
    /// Deleting an absent id is an error, not a no-op: a stale reference in
    /// the presentation layer should be surfaced rather than swallowed.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.tasks.remove(index);

        self.persist()?;
        info!("event=task_delete module=store status=ok id={id}");
        Ok(())
    }

    /// Returns the in-memory collection in insertion order.
    pub fn load_all(&self) -> &[Task] {
        &self.tasks
    }

    /// Serializes the full collection under [`TASKS_KEY`].
    pub fn persist(&mut self) -> StoreResult<()> {
        let encoded = serde_json::to_string(&self.tasks).map_err(|err| {
            StoreError::CorruptState(format!("task collection failed to encode: {err}"))
        })?;
        if let Err(err) = self.blob.set(TASKS_KEY, &encoded) {
            error!("event=store_persist module=store status=error error={err}");
            return Err(err.into());
        }
        info!(
            "event=store_persist module=store status=ok count={}",
            self.tasks.len()
        );
        Ok(())
    }

    /// Replaces the in-memory collection from the persisted blob.
    ///
    /// # Errors
    /// - `CorruptState` when the blob is not a valid task array or any
    ///   restored record fails validation. An absent key restores to an
    ///   empty collection.
    pub fn restore(&mut self) -> StoreResult<()> {
        let Some(raw) = self.blob.get(TASKS_KEY)? else {
            self.tasks.clear();
            info!("event=store_restore module=store status=ok count=0");
            return Ok(());
        };

        let tasks: Vec<Task> = serde_json::from_str(&raw)
            .map_err(|err| StoreError::CorruptState(format!("malformed task blob: {err}")))?;
        for task in &tasks {
            task.validate().map_err(|err| {
                StoreError::CorruptState(format!("invalid persisted task {}: {err}", task.id))
            })?;
        }

        info!(
            "event=store_restore module=store status=ok count={}",
            tasks.len()
        );
        self.tasks = tasks;
        Ok(())
    }

    fn find_mut(&mut self, id: TaskId) -> StoreResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}
