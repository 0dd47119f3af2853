//! Phone number value object.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::{DomainError, DomainResult};

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("valid phone regex"));

/// Validated, cleaned phone number.
///
/// Spaces, hyphens and parentheses are stripped before validation; the
/// remainder must be 7 to 15 digits, optionally prefixed with `+`. Only the
/// cleaned form is stored or compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Telefono {
    value: String,
}

impl Telefono {
    /// Create a phone number, stripping formatting characters and validating.
    pub fn new(value: &str) -> DomainResult<Self> {
        if value.trim().is_empty() {
            return Err(DomainError::blank("telefono"));
        }

        let clean: String = value
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '(' && *c != ')')
            .collect();

        if !PHONE_PATTERN.is_match(&clean) {
            return Err(DomainError::InvalidPhone(value.to_string()));
        }

        Ok(Self { value: clean })
    }

    /// Get the cleaned phone string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Convert to a plain integer.
    ///
    /// Defined only for numbers without an international `+` prefix.
    pub fn as_integer(&self) -> DomainResult<i64> {
        if self.value.starts_with('+') {
            return Err(DomainError::IllegalConversion(self.value.clone()));
        }
        self.value
            .parse()
            .map_err(|_| DomainError::IllegalConversion(self.value.clone()))
    }

    /// Display form: exactly-10-digit numbers render as `(XXX) XXX-XXXX`,
    /// anything else renders as the cleaned value.
    pub fn formatted(&self) -> String {
        if self.value.len() == 10 {
            format!(
                "({}) {}-{}",
                &self.value[..3],
                &self.value[3..6],
                &self.value[6..]
            )
        } else {
            self.value.clone()
        }
    }
}

impl std::fmt::Display for Telefono {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<i64> for Telefono {
    type Error = DomainError;

    fn try_from(value: i64) -> DomainResult<Self> {
        Self::new(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_keeps_cleaned_digits() {
        let tel = Telefono::new("1234567890").unwrap();
        assert_eq!(tel.value(), "1234567890");
    }

    #[test]
    fn test_formatting_characters_are_stripped() {
        let tel = Telefono::new("(123) 456-7890").unwrap();
        assert_eq!(tel.value(), "1234567890");
        assert_eq!(tel, Telefono::new("123-456-7890").unwrap());
    }

    #[test]
    fn test_international_prefix_is_kept() {
        let tel = Telefono::new("+57 300 123 4567").unwrap();
        assert_eq!(tel.value(), "+573001234567");
    }

    #[test]
    fn test_blank_phone_is_rejected() {
        assert_eq!(Telefono::new("  ").unwrap_err(), DomainError::blank("telefono"));
    }

    #[test]
    fn test_invalid_phones_are_rejected() {
        // Too short, too long, letters, misplaced plus
        for bad in ["123456", "1234567890123456", "12345abc90", "12+34567890"] {
            assert!(
                matches!(Telefono::new(bad), Err(DomainError::InvalidPhone(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_as_integer_for_national_number() {
        let tel = Telefono::new("1234567890").unwrap();
        assert_eq!(tel.as_integer().unwrap(), 1234567890);
    }

    #[test]
    fn test_as_integer_fails_with_country_code() {
        let tel = Telefono::new("+1234567890").unwrap();
        assert!(matches!(
            tel.as_integer(),
            Err(DomainError::IllegalConversion(_))
        ));
    }

    #[test]
    fn test_formatted_ten_digit_number() {
        let tel = Telefono::new("1234567890").unwrap();
        assert_eq!(tel.formatted(), "(123) 456-7890");
    }

    #[test]
    fn test_formatted_other_lengths_pass_through() {
        assert_eq!(Telefono::new("1234567").unwrap().formatted(), "1234567");
        assert_eq!(
            Telefono::new("+573001234567").unwrap().formatted(),
            "+573001234567"
        );
    }

    #[test]
    fn test_from_integer() {
        let tel = Telefono::try_from(1234567890_i64).unwrap();
        assert_eq!(tel.value(), "1234567890");
        assert!(Telefono::try_from(123_i64).is_err());
    }
}
