//! Field and input-mode discriminants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The control type a field renders as; becomes the HTML `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// `<input type="number">`
    Number,
    /// `<input type="range">`
    Range,
}

impl FieldKind {
    /// The kind as the HTML `type` attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Range => "range",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Virtual-keyboard hint for numeric inputs; becomes the HTML `inputmode`
/// attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Digits plus the locale's decimal separator.
    Decimal,
    /// Digits only.
    Numeric,
}

impl InputMode {
    /// The mode as the HTML `inputmode` attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Numeric => "numeric",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_type_attribute() {
        assert_eq!(FieldKind::Number.as_str(), "number");
        assert_eq!(FieldKind::Range.to_string(), "range");
    }

    #[test]
    fn kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&FieldKind::Number).unwrap(),
            "\"number\""
        );
        let back: FieldKind = serde_json::from_str("\"range\"").unwrap();
        assert_eq!(back, FieldKind::Range);
    }

    #[test]
    fn input_mode_maps_to_attribute() {
        assert_eq!(InputMode::Decimal.as_str(), "decimal");
        assert_eq!(
            serde_json::to_string(&InputMode::Numeric).unwrap(),
            "\"numeric\""
        );
    }
}
