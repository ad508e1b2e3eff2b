use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum allowed length for a [`FieldName`], in bytes.
pub const FIELD_NAME_MAX_LEN: usize = 128;

/// Errors from constructing a [`FieldName`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldNameError {
    /// The input was empty or contained only whitespace.
    #[error("field name cannot be empty or whitespace")]
    Empty,
    /// The name contains characters outside the allowed set.
    #[error("field name contains invalid characters (allowed: A-Z a-z 0-9 _ - [ ] . :)")]
    InvalidCharacters,
    /// The name exceeds [`FIELD_NAME_MAX_LEN`] bytes.
    #[error("field name exceeds maximum length of {FIELD_NAME_MAX_LEN} characters")]
    TooLong,
}

/// A validated HTML form-control name.
///
/// Unlike an internal identifier, a control name is sent to the browser and
/// back verbatim, so no case folding or substitution is applied. The input
/// is only trimmed and then checked:
///
/// - Non-empty after trimming.
/// - ASCII letters, digits, `_`, `-`, `[`, `]`, `.` and `:` only.
/// - Starts with a letter, digit or underscore.
/// - At most 128 bytes.
///
/// The bracket pair covers array notation (`prices[]`), which multi-value
/// fields use for their submit names.
///
/// # Examples
///
/// ```
/// use formwork_field::FieldName;
///
/// let name: FieldName = "unit_price".parse().unwrap();
/// assert_eq!(name.as_str(), "unit_price");
///
/// let name: FieldName = " sizes[] ".parse().unwrap();
/// assert_eq!(name.as_str(), "sizes[]");
///
/// assert!("".parse::<FieldName>().is_err());
/// assert!("unit price".parse::<FieldName>().is_err());
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldName(String);

impl FieldName {
    /// Validates `raw` as a control name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, FieldNameError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FieldNameError::Empty);
        }
        if trimmed.len() > FIELD_NAME_MAX_LEN {
            return Err(FieldNameError::TooLong);
        }
        let mut chars = trimmed.chars();
        let first = chars.next().ok_or(FieldNameError::Empty)?;
        if !(first.is_ascii_alphanumeric() || first == '_') {
            return Err(FieldNameError::InvalidCharacters);
        }
        if !chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '[' | ']' | '.' | ':')) {
            return Err(FieldNameError::InvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FieldName {
    type Err = FieldNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for FieldName {
    type Error = FieldNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for FieldName {
    type Error = FieldNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FieldName> for String {
    fn from(name: FieldName) -> Self {
        name.0
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for FieldName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for FieldName {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        let name = FieldName::new("unit_price").unwrap();
        assert_eq!(name.as_str(), "unit_price");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name: FieldName = "  amount  ".parse().unwrap();
        assert_eq!(name.as_str(), "amount");
    }

    #[test]
    fn keeps_case_and_array_notation() {
        let name = FieldName::new("orderItems[]").unwrap();
        assert_eq!(name.as_str(), "orderItems[]");
    }

    #[test]
    fn accepts_namespaced_names() {
        assert!(FieldName::new("billing.amount").is_ok());
        assert!(FieldName::new("form:total").is_ok());
        assert!(FieldName::new("_hidden-1").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(FieldName::new(""), Err(FieldNameError::Empty));
        assert_eq!(FieldName::new("   "), Err(FieldNameError::Empty));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(
            FieldName::new("unit price"),
            Err(FieldNameError::InvalidCharacters)
        );
        assert_eq!(
            FieldName::new("amount€"),
            Err(FieldNameError::InvalidCharacters)
        );
        assert_eq!(
            FieldName::new("-leading"),
            Err(FieldNameError::InvalidCharacters)
        );
    }

    #[test]
    fn rejects_too_long() {
        let long = "a".repeat(129);
        assert_eq!(FieldName::new(&long), Err(FieldNameError::TooLong));
    }

    #[test]
    fn accepts_max_length() {
        let exact = "a".repeat(128);
        assert!(FieldName::new(&exact).is_ok());
    }

    #[test]
    fn display_and_equality() {
        let name: FieldName = "amount".parse().unwrap();
        assert_eq!(name.to_string(), "amount");
        assert_eq!(name, "amount");
        assert_eq!(name, "amount".to_string());
    }

    #[test]
    fn serde_roundtrip() {
        let name: FieldName = "unit_price".parse().unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"unit_price\"");

        let back: FieldName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn serde_rejects_invalid() {
        let result: Result<FieldName, _> = serde_json::from_str("\"no spaces\"");
        assert!(result.is_err());
    }

    #[test]
    fn into_string() {
        let name: FieldName = "amount".parse().unwrap();
        let s: String = name.into();
        assert_eq!(s, "amount");
    }
}
