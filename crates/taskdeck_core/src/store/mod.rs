//! Task persistence boundary.
//!
//! # Responsibility
//! - Own the authoritative task collection and mediate every mutation.
//! - Serialize the full collection to a key-value blob store.
//!
//! # Invariants
//! - External code never mutates the backing collection directly.
//! - Every successful mutation is followed by a persistence write.

pub mod blob;
pub mod task_store;
