//! Core domain logic for taskdeck.
//! This crate is the single source of truth for task invariants.

pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{validate_due_date, Priority, Task, TaskId, TaskValidationError};
pub use store::blob::{BlobError, BlobResult, BlobStore, FileBlobStore, MemoryBlobStore};
pub use store::task_store::{StoreError, StoreResult, TaskStore, TASKS_KEY};
pub use view::projector::{due_date_groups, priority_groups, sorted_view, stats, TaskStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
