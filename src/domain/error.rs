//! Domain-level errors.
//!
//! These errors represent business rule violations raised at value object
//! or entity construction time. They are independent of infrastructure
//! concerns (HTTP, database).

use thiserror::Error;

/// Domain validation errors.
///
/// Every variant is an "invalid input" class failure signaled synchronously
/// to the caller. "Not found" is deliberately absent: a missing record is
/// expressed as `Option::None` or `false`, never as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required string field is empty or whitespace-only
    #[error("{0} cannot be blank")]
    BlankField(&'static str),

    /// A string field exceeds its maximum length
    #[error("{field} cannot exceed {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    /// Email does not match the required pattern after normalization
    #[error("invalid email format: {0}")]
    InvalidEmail(String),

    /// Phone number does not match the required pattern after cleaning
    #[error("invalid phone format: {0}")]
    InvalidPhone(String),

    /// Identifier is zero or negative
    #[error("persona id must be a positive integer")]
    InvalidId,

    /// Phone with an international prefix cannot become a plain integer
    #[error("phone with country code cannot be converted to an integer: {0}")]
    IllegalConversion(String),
}

impl DomainError {
    /// Create a blank-field error
    pub fn blank(field: &'static str) -> Self {
        DomainError::BlankField(field)
    }

    /// Create a field-too-long error
    pub fn too_long(field: &'static str, max: usize) -> Self {
        DomainError::FieldTooLong { field, max }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
