//! Project intake use-case.
//!
//! # Responsibility
//! - Validate raw form fields against the board's constraint policy.
//! - Compose validation with store creation for the submit path.
//!
//! # Invariants
//! - Any single failing field rejects the whole submission; the caller
//!   gets one aggregate signal, never per-field detail.
//! - Rejection leaves the raw input untouched for correction.
//! - Accepted values are stored exactly as entered, untrimmed.

use crate::model::project::ProjectId;
use crate::store::project_store::ProjectStore;
use crate::validate::field::{check, Constraints, FieldValue};
use log::debug;

/// Minimum character count for the title field.
pub const TITLE_MIN_LENGTH: usize = 5;
/// Minimum character count for the description field.
pub const DESCRIPTION_MIN_LENGTH: usize = 5;
/// Exclusive floor for the people field: counts must be strictly above it.
pub const PEOPLE_EXCLUSIVE_MIN: f64 = 0.0;
/// Exclusive ceiling for the people field: counts must be strictly below it.
pub const PEOPLE_EXCLUSIVE_MAX: f64 = 5.0;

/// Raw field values exactly as a form would yield them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProjectInput {
    pub title: String,
    pub description: String,
    /// Still a string here; numeric parsing is part of validation.
    pub people: String,
}

/// Input that passed the full constraint policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProject {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Validates raw input against the board's constraint policy.
///
/// # Contract
/// - Title and description: required, at least five characters.
/// - People: required, integer, strictly between 0 and 5.
/// - Returns `None` when any field fails; which constraint failed is
///   logged at debug level but never surfaced to the caller.
pub fn gather_project_input(raw: &RawProjectInput) -> Option<ValidatedProject> {
    // A non-numeric count becomes NaN so the bound checks fail closed.
    let people_number = raw
        .people
        .trim()
        .parse::<u32>()
        .map_or(f64::NAN, f64::from);

    let fields = [
        (
            "title",
            FieldValue::Text(raw.title.clone()),
            Constraints {
                required: true,
                min_length: Some(TITLE_MIN_LENGTH),
                ..Constraints::default()
            },
        ),
        (
            "description",
            FieldValue::Text(raw.description.clone()),
            Constraints {
                required: true,
                min_length: Some(DESCRIPTION_MIN_LENGTH),
                ..Constraints::default()
            },
        ),
        (
            "people",
            FieldValue::Number(people_number),
            Constraints {
                required: true,
                min: Some(PEOPLE_EXCLUSIVE_MIN),
                max: Some(PEOPLE_EXCLUSIVE_MAX),
                ..Constraints::default()
            },
        ),
    ];

    for (label, value, constraints) in &fields {
        if let Err(violation) = check(value, constraints) {
            debug!("event=input_rejected module=intake field={label} violation={violation}");
            return None;
        }
    }

    Some(ValidatedProject {
        title: raw.title.clone(),
        description: raw.description.clone(),
        // Bounds guarantee an exact small integer here.
        people: people_number as u32,
    })
}

/// Validates raw input and creates the project on success.
///
/// Returns the new project's id, or `None` when validation rejected the
/// input (in which case the store is untouched and nothing is notified).
pub fn submit_project(store: &mut ProjectStore, raw: &RawProjectInput) -> Option<ProjectId> {
    let input = gather_project_input(raw)?;
    Some(store.create(input.title, input.description, input.people))
}
