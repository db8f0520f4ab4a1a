//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by the store and all views.
//! - Validate user-supplied fields before they reach persistence.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is stored trimmed and is never empty.
//! - `due_date` is an ISO `YYYY-MM-DD` string, so lexicographic order on
//!   due dates is chronological order.
//! - `created_at` is set once at creation and never mutated.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every task owned by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

static DUE_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").expect("valid due date regex")
});

/// Priority tier. Four ordered buckets, `A` highest through `D` lowest.
///
/// The derive order defines both sort order and group order everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    A,
    B,
    C,
    D,
}

impl Priority {
    /// All tiers in display order. Group views must render every tier,
    /// including empty ones.
    pub const ALL: [Priority; 4] = [Priority::A, Priority::B, Priority::C, Priority::D];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "C" | "c" => Ok(Self::C),
            "D" | "d" => Ok(Self::D),
            other => Err(TaskValidationError::InvalidPriority(other.to_string())),
        }
    }
}

/// Field-level validation error for task input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task text is empty after trimming.
    EmptyText,
    /// Due date is missing entirely.
    MissingDueDate,
    /// Due date is present but not a calendar date in `YYYY-MM-DD` shape.
    InvalidDueDate(String),
    /// Priority input is not one of the four tiers.
    InvalidPriority(String),
    /// Task ID is the nil UUID.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty"),
            Self::MissingDueDate => write!(f, "task due date is required"),
            Self::InvalidDueDate(value) => {
                write!(f, "invalid due date `{value}`; expected YYYY-MM-DD")
            }
            Self::InvalidPriority(value) => {
                write!(f, "invalid priority `{value}`; expected one of A, B, C, D")
            }
            Self::NilId => write!(f, "task id must not be nil"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical record for a single to-do item.
///
/// Display order is never stored on the record; every view recomputes it
/// from a snapshot of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for edit/toggle/delete addressing.
    pub id: TaskId,
    /// Trimmed, non-empty description.
    pub text: String,
    /// One of the four ordered tiers.
    pub priority: Priority,
    /// ISO calendar date string, `YYYY-MM-DD`.
    pub due_date: String,
    /// Starts `false`; only ever changed by an explicit toggle.
    pub completed: bool,
    /// Unix epoch milliseconds at creation.
    pub created_at: i64,
}

impl Task {
    /// Creates a new task with a generated stable ID and current timestamp.
    ///
    /// # Errors
    /// - `EmptyText` when the text is blank after trimming.
    /// - `MissingDueDate` / `InvalidDueDate` when the date is absent or
    ///   not a `YYYY-MM-DD` calendar date.
    pub fn new(
        text: impl Into<String>,
        priority: Priority,
        due_date: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), text, priority, due_date)
    }

    /// Creates a new task with a caller-provided stable ID.
    ///
    /// Used by restore/import paths where identity already exists.
    ///
    /// # Errors
    /// Same as [`Task::new`], plus `NilId` for the nil UUID.
    pub fn with_id(
        id: TaskId,
        text: impl Into<String>,
        priority: Priority,
        due_date: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            text: text.into().trim().to_string(),
            priority,
            due_date: due_date.into().trim().to_string(),
            completed: false,
            created_at: now_epoch_ms(),
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks the record-level invariants.
    ///
    /// Write paths must call this before persistence; read paths use it to
    /// reject invalid persisted state instead of masking it.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        validate_due_date(&self.due_date)
    }
}

/// Checks that a due date is present and has `YYYY-MM-DD` shape.
pub fn validate_due_date(value: &str) -> Result<(), TaskValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TaskValidationError::MissingDueDate);
    }
    if !DUE_DATE_RE.is_match(value) {
        return Err(TaskValidationError::InvalidDueDate(value.to_string()));
    }
    Ok(())
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
