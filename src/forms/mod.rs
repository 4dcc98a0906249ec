//! Typed request payloads and their conversion into domain values.

use thiserror::Error;
use validator::ValidationErrors;

pub mod cart;
pub mod favorites;
pub mod orders;
pub mod products;

/// Result type returned by the form helpers.
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur while turning a request payload into a domain value.
#[derive(Debug, Error)]
pub enum FormError {
    /// Validation failures from the `validator` crate.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    /// A required field is empty after trimming.
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Trim `value`, rejecting it when nothing is left.
pub(crate) fn required(value: String, field: &'static str) -> FormResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field, treating blank input as absent.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
