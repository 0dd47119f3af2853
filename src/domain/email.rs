//! Email value object.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::{DomainError, DomainResult};
use crate::config::MAX_EMAIL_LEN;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex"));

/// Validated, normalized email address.
///
/// Input is trimmed and lower-cased before validation; only the normalized
/// form is ever stored or compared. Maximum length is 45 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    value: String,
}

impl Email {
    /// Create an email, normalizing (trim + lowercase) and validating the input.
    pub fn new(value: &str) -> DomainResult<Self> {
        if value.trim().is_empty() {
            return Err(DomainError::blank("email"));
        }

        let clean = value.trim().to_lowercase();

        if !EMAIL_PATTERN.is_match(&clean) {
            return Err(DomainError::InvalidEmail(value.to_string()));
        }

        if clean.chars().count() > MAX_EMAIL_LEN {
            return Err(DomainError::too_long("email", MAX_EMAIL_LEN));
        }

        Ok(Self { value: clean })
    }

    /// Get the normalized email string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The part after the `@`.
    pub fn domain(&self) -> &str {
        // The pattern guarantees exactly the local@domain shape
        let at = self.value.find('@').unwrap_or(0);
        &self.value[at + 1..]
    }

    /// The part before the `@`.
    pub fn local_part(&self) -> &str {
        let at = self.value.find('@').unwrap_or(self.value.len());
        &self.value[..at]
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("juan.perez@email.com").unwrap();
        assert_eq!(email.value(), "juan.perez@email.com");
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let email = Email::new("  Test.USER@EXAMPLE.COM  ").unwrap();
        assert_eq!(email.value(), "test.user@example.com");
        // Normalization is idempotent: same value as constructing the clean form
        assert_eq!(email, Email::new("test.user@example.com").unwrap());
    }

    #[test]
    fn test_blank_email_is_rejected() {
        assert_eq!(Email::new("   ").unwrap_err(), DomainError::blank("email"));
        assert_eq!(Email::new("").unwrap_err(), DomainError::blank("email"));
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        for bad in ["not-an-email", "missing@tld", "@domain.com", "user@.com", "user@domain.c"] {
            assert!(
                matches!(Email::new(bad), Err(DomainError::InvalidEmail(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_too_long_email_is_rejected() {
        let local = "a".repeat(40);
        let long = format!("{local}@example.com");
        assert_eq!(
            Email::new(&long).unwrap_err(),
            DomainError::too_long("email", MAX_EMAIL_LEN)
        );
    }

    #[test]
    fn test_domain_and_local_part() {
        let email = Email::new("juan.perez@email.com").unwrap();
        assert_eq!(email.domain(), "email.com");
        assert_eq!(email.local_part(), "juan.perez");
    }
}
