//! Core domain logic for the taskboard project board.
//! This crate is the single source of truth for board state and invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{parse_project_status, Project, ProjectId, ProjectStatus};
pub use service::intake::{
    gather_project_input, submit_project, RawProjectInput, ValidatedProject,
};
pub use store::project_store::{Listener, ProjectStore};
pub use validate::field::{check, validate, Constraints, ConstraintViolation, FieldValue};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
