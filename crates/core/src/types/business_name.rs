//! Business name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`BusinessName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BusinessNameError {
    /// The input is empty or whitespace only.
    #[error("business name cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("business name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// An artisan's business name.
///
/// The business name is both the display name on a profile and the login
/// identifier. Two comparisons exist and they intentionally differ:
///
/// - [`BusinessName::eq_ignore_case`] decides registration conflicts
///   ("Acme Co" and "ACME CO" collide).
/// - `==` is exact and is what login matches on ("acme co" does not log in
///   as "Acme Co").
///
/// ## Constraints
///
/// - Not empty after trimming whitespace
/// - At most 120 characters
///
/// The text is stored exactly as entered; no trimming or case folding is
/// applied to the stored value.
///
/// ## Examples
///
/// ```
/// use artisan_connect_core::BusinessName;
///
/// let name = BusinessName::parse("Jane's Plumbing").unwrap();
/// let shouting = BusinessName::parse("JANE'S PLUMBING").unwrap();
///
/// assert!(name.eq_ignore_case(&shouting));
/// assert_ne!(name, shouting);
/// assert!(BusinessName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct BusinessName(String);

impl BusinessName {
    /// Maximum length of a business name, in characters.
    pub const MAX_LENGTH: usize = 120;

    /// Parse a `BusinessName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, BusinessNameError> {
        if s.trim().is_empty() {
            return Err(BusinessNameError::Empty);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(BusinessNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the business name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `BusinessName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-insensitive comparison used for uniqueness checks.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }

    /// Lowercased form used for case-insensitive matching.
    #[must_use]
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for BusinessName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for BusinessName {
    type Err = BusinessNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for BusinessName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_names() {
        assert!(BusinessName::parse("Acme Co").is_ok());
        assert!(BusinessName::parse("Jane's Plumbing").is_ok());
        assert!(BusinessName::parse("Ọlá Tailoring").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(BusinessName::parse(""), Err(BusinessNameError::Empty));
        assert_eq!(BusinessName::parse(" \t "), Err(BusinessNameError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(BusinessName::MAX_LENGTH + 1);
        assert!(matches!(
            BusinessName::parse(&long),
            Err(BusinessNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_stored_verbatim() {
        let name = BusinessName::parse("  Acme Co ").unwrap();
        assert_eq!(name.as_str(), "  Acme Co ");
    }

    #[test]
    fn test_case_insensitive_vs_exact() {
        let a = BusinessName::parse("Jane's Plumbing").unwrap();
        let b = BusinessName::parse("jane's plumbing").unwrap();
        assert!(a.eq_ignore_case(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let name = BusinessName::parse("Acme Co").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Acme Co\"");
    }
}
