//! Project domain model.
//!
//! # Responsibility
//! - Define the record every board column renders from.
//! - Provide the status vocabulary shared by store and UI callers.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `status` starts as `Active` and is the only mutable field.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every project on the board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Board column a project currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work in progress, shown in the active column.
    Active,
    /// Completed, shown in the finished column.
    Finished,
}

impl ProjectStatus {
    /// Lowercase token used in snapshots, logs and CLI arguments.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a status from its lowercase token.
pub fn parse_project_status(value: &str) -> Option<ProjectStatus> {
    match value {
        "active" => Some(ProjectStatus::Active),
        "finished" => Some(ProjectStatus::Finished),
        _ => None,
    }
}

/// One work item on the board.
///
/// Snapshots handed to listeners are sequences of this record; it is the
/// only wire format the core exposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID, generated at creation and never reused.
    pub id: ProjectId,
    /// Short label shown as the list entry.
    pub title: String,
    /// Free-form body text.
    pub description: String,
    /// Number of people assigned. Range-checked at intake, not here.
    pub people: u32,
    /// Current board column.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a project with a fresh ID in the `Active` column.
    ///
    /// Crate-internal: projects enter the system only through
    /// `ProjectStore::create`, never with a caller-chosen id or status.
    pub(crate) fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Returns whether this project sits in the active column.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
