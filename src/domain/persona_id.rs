//! Persona identifier value object.

use crate::domain::error::{DomainError, DomainResult};

/// Validated persona identifier.
///
/// Wraps a positive integer assigned by the persistence layer. Compared by
/// value; construction fails for zero or negative input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonaId(i32);

impl PersonaId {
    /// Create an identifier, rejecting non-positive values.
    pub fn new(value: i32) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::InvalidId);
        }
        Ok(Self(value))
    }

    /// Get the raw identifier value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for PersonaId {
    type Error = DomainError;

    fn try_from(value: i32) -> DomainResult<Self> {
        Self::new(value)
    }
}
