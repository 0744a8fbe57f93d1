//! Declarative field validation.
//!
//! # Responsibility
//! - Check one labeled value against an optional constraint set.
//! - Stay pure: no state, no side effects, no panics.
//!
//! # Invariants
//! - Absent constraints are vacuously satisfied.
//! - Constraints that do not match the value's type are inert.

pub mod field;
