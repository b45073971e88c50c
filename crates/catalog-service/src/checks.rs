//! Validation helpers shared by command and query validators.

use async_trait::async_trait;
use catalog_core::{
    CatalogError, CatalogResult, Request, ValidateExt, ValidationFailures, Validator,
};
use catalog_domain::MAX_NAME_LENGTH;
use chrono::{DateTime, Utc};
use std::fmt::Display;
use std::marker::PhantomData;
use validator::Validate;

/// Records a failure on `field` when `id` is missing and returns it otherwise.
pub(crate) fn check_id<T: Copy>(
    failures: &mut ValidationFailures,
    field: &str,
    label: &str,
    id: Option<T>,
) -> Option<T> {
    if id.is_none() {
        failures.add(field, format!("{label} is empty or invalid."));
    }
    id
}

/// Unwraps an id inside a handler. Validation has already rejected `None`,
/// so this only fires when a handler is invoked outside the pipeline.
pub(crate) fn required<T>(id: Option<T>, field: &str, label: &str) -> CatalogResult<T> {
    id.ok_or_else(|| CatalogError::validation(field, format!("{label} is empty or invalid.")))
}

/// Records a failure on `field` when a name nested in a collection is blank
/// or too long. Top-level names use the derived field rules instead.
pub(crate) fn check_name(failures: &mut ValidationFailures, field: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        failures.add(field, "Value must not be blank.");
    } else if value.chars().count() > MAX_NAME_LENGTH {
        failures.add(
            field,
            format!("Value must be at most {MAX_NAME_LENGTH} characters."),
        );
    }
}

/// Records a failure on `available_from` when the window is inverted.
pub(crate) fn check_window(
    failures: &mut ValidationFailures,
    available_from: Option<DateTime<Utc>>,
    available_to: Option<DateTime<Utc>>,
) {
    if let (Some(from), Some(to)) = (available_from, available_to) {
        if from > to {
            failures.add(
                "available_from",
                "Available from must not be later than available to.",
            );
        }
    }
}

pub(crate) fn not_found_message(resource: &str, id: impl Display) -> String {
    format!("{resource}#{id} could not be found.")
}

/// Requests whose identifiers must all be present.
pub trait RequiredIds {
    fn check_ids(&self, failures: &mut ValidationFailures);
}

/// Validator that only checks identifiers.
pub struct RequiredIdsValidator<R>(PhantomData<fn(R)>);

impl<R> RequiredIdsValidator<R> {
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Default for RequiredIdsValidator<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Request + RequiredIds> Validator<R> for RequiredIdsValidator<R> {
    async fn validate(&self, request: &R) -> CatalogResult<ValidationFailures> {
        let mut failures = ValidationFailures::new();
        request.check_ids(&mut failures);
        Ok(failures)
    }
}

/// Validator running the derived field rules of a request.
pub struct FieldRulesValidator<R>(PhantomData<fn(R)>);

impl<R> FieldRulesValidator<R> {
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R> Default for FieldRulesValidator<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Request + Validate> Validator<R> for FieldRulesValidator<R> {
    async fn validate(&self, request: &R) -> CatalogResult<ValidationFailures> {
        Ok(request.validate_fields())
    }
}
