//! Field-level constraint checking.
//!
//! # Responsibility
//! - Decide pass/fail for a single value against a constraint set.
//! - Report which constraint failed for logging and tests, even though
//!   callers surface only an aggregate boolean to the user.
//!
//! # Invariants
//! - Length bounds apply to text only; numeric bounds to numbers only.
//! - Numeric bounds are exclusive: the value must be strictly between
//!   `min` and `max`. `min=0, max=5` accepts 1..=4 and rejects 0 and 5.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A value under validation, as gathered from a form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Textual representation used by the `required` check.
    ///
    /// Numbers go through their display form, so every number counts as
    /// non-empty.
    fn as_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Constraint set for one field. Every check is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    /// Trimmed textual representation must be non-empty.
    pub required: bool,
    /// Minimum character count, text values only.
    pub min_length: Option<usize>,
    /// Maximum character count, text values only.
    pub max_length: Option<usize>,
    /// Exclusive numeric floor, numeric values only.
    pub min: Option<f64>,
    /// Exclusive numeric ceiling, numeric values only.
    pub max: Option<f64>,
}

/// First constraint a value failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintViolation {
    /// `required` was set and the trimmed value is empty.
    MissingRequired,
    /// Text is shorter than `min_length`.
    TooShort { length: usize, min_length: usize },
    /// Text is longer than `max_length`.
    TooLong { length: usize, max_length: usize },
    /// Number is not strictly greater than `min`.
    NotAbove { value: f64, min: f64 },
    /// Number is not strictly less than `max`.
    NotBelow { value: f64, max: f64 },
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired => write!(f, "required value is empty"),
            Self::TooShort { length, min_length } => {
                write!(f, "length {length} is below minimum {min_length}")
            }
            Self::TooLong { length, max_length } => {
                write!(f, "length {length} exceeds maximum {max_length}")
            }
            Self::NotAbove { value, min } => {
                write!(f, "value {value} is not strictly above {min}")
            }
            Self::NotBelow { value, max } => {
                write!(f, "value {value} is not strictly below {max}")
            }
        }
    }
}

impl Error for ConstraintViolation {}

/// Checks a value against a constraint set, reporting the first failure.
///
/// # Contract
/// - Every present constraint must pass independently; absent constraints
///   are skipped.
/// - A constraint whose type does not match the value is silently inert.
/// - Never panics; comparisons against NaN fail closed.
pub fn check(value: &FieldValue, constraints: &Constraints) -> Result<(), ConstraintViolation> {
    if constraints.required && value.as_text().trim().is_empty() {
        return Err(ConstraintViolation::MissingRequired);
    }

    if let FieldValue::Text(text) = value {
        let length = text.chars().count();
        if let Some(min_length) = constraints.min_length {
            if length < min_length {
                return Err(ConstraintViolation::TooShort { length, min_length });
            }
        }
        if let Some(max_length) = constraints.max_length {
            if length > max_length {
                return Err(ConstraintViolation::TooLong { length, max_length });
            }
        }
    }

    if let FieldValue::Number(number) = *value {
        if let Some(min) = constraints.min {
            if !(number > min) {
                return Err(ConstraintViolation::NotAbove { value: number, min });
            }
        }
        if let Some(max) = constraints.max {
            if !(number < max) {
                return Err(ConstraintViolation::NotBelow { value: number, max });
            }
        }
    }

    Ok(())
}

/// Boolean form of [`check`], the surface callers aggregate over.
pub fn validate(value: &FieldValue, constraints: &Constraints) -> bool {
    check(value, constraints).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{check, validate, Constraints, ConstraintViolation, FieldValue};

    #[test]
    fn empty_constraint_set_always_passes() {
        let constraints = Constraints::default();
        assert!(validate(&FieldValue::Text(String::new()), &constraints));
        assert!(validate(&FieldValue::Number(f64::NAN), &constraints));
    }

    #[test]
    fn required_applies_to_numbers_via_display_form() {
        let constraints = Constraints {
            required: true,
            ..Constraints::default()
        };
        assert!(validate(&FieldValue::Number(0.0), &constraints));
    }

    #[test]
    fn nan_fails_closed_against_numeric_bounds() {
        let constraints = Constraints {
            min: Some(0.0),
            max: Some(5.0),
            ..Constraints::default()
        };
        let result = check(&FieldValue::Number(f64::NAN), &constraints);
        assert!(matches!(
            result,
            Err(ConstraintViolation::NotAbove { min, .. }) if min == 0.0
        ));
    }

    #[test]
    fn violation_display_names_the_failed_bound() {
        let violation = ConstraintViolation::TooShort {
            length: 2,
            min_length: 5,
        };
        assert_eq!(violation.to_string(), "length 2 is below minimum 5");
    }
}
