//! Validation failures and helpers.

use crate::{CatalogError, FieldError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use validator::{Validate, ValidationErrors};

/// Default code attached to failures raised by hand-written validators.
pub const INVALID_CODE: &str = "invalid";

/// Ordered collection of field failures produced while validating a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationFailures(Vec<FieldError>);

impl ValidationFailures {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Records a failure for `field` with the default code.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(FieldError {
            field: field.into(),
            message: message.into(),
            code: INVALID_CODE.to_string(),
        });
    }

    /// Records a fully described failure.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Appends every failure of `other`.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns true when no failure was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when at least one failure targets `field`.
    #[must_use]
    pub fn has_error_for(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Returns the recorded failures in insertion order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Converts the collection into a result: `Ok` when empty.
    pub fn into_result(self) -> Result<(), CatalogError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Validation(self))
        }
    }
}

impl Display for ValidationFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl From<ValidationErrors> for ValidationFailures {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        // HashMap iteration order is unstable; keep responses deterministic.
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let field_errors = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string),
                    code: error.code.to_string(),
                })
            })
            .collect();

        Self(field_errors)
    }
}

/// Extension trait for derive-based validation.
pub trait ValidateExt: Validate {
    /// Runs the derived field rules and collects their failures.
    fn validate_fields(&self) -> ValidationFailures {
        self.validate()
            .map_or_else(ValidationFailures::from, |()| ValidationFailures::new())
    }

    /// Validates the struct and returns a `CatalogError` on failure.
    fn validate_request(&self) -> Result<(), CatalogError> {
        self.validate_fields().into_result()
    }
}

impl<T: Validate> ValidateExt for T {}

/// Common validation functions.
pub mod rules {
    use std::borrow::Cow;
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError {
                message: Some(Cow::Borrowed("Value must not be blank.")),
                ..ValidationError::new("not_blank")
            });
        }
        Ok(())
    }
}
