//! Domain model for board items.
//!
//! # Responsibility
//! - Define the canonical project record and its status enum.
//! - Keep identity/lifecycle rules in one place for store and callers.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Status is the only field that changes after creation.

pub mod project;
