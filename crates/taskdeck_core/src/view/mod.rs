//! Read-only view derivation.
//!
//! # Responsibility
//! - Project the authoritative collection into display-ready shapes for
//!   the presentation shell.
//!
//! # Invariants
//! - Pure functions only; no projection touches persistence or the store.

pub mod projector;
