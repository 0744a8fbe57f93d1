//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw form-shaped input into validated store mutations.
//! - Keep UI layers decoupled from validation policy details.

pub mod intake;
