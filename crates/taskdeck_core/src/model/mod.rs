//! Domain model for taskdeck.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep a single task shape shared by the store and all projections.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Records are validated before any write reaches persistence.

pub mod task;
