//! Range submit validation, single- and multi-thumb.

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::number::NumberValidator;
use super::report::ValidationReport;
use super::traits::SubmitValidator;
use crate::core::format_number;

/// Raw submitted data for a range control.
///
/// Browsers send one text value per input name; multi-thumb widgets
/// either join their values with commas into one text entry or repeat
/// the input name, which surfaces here as a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    /// A single form entry.
    Text(String),
    /// Repeated form entries under the same name.
    List(Vec<String>),
}

impl RawInput {
    /// Creates a single-entry input.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a repeated-entry input.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Whether the input carries no data at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for RawInput {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// A range control's value: one thumb or several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeValue {
    /// Single-thumb value.
    Single(f64),
    /// Multi-thumb values, in submitted order.
    Multiple(Vec<f64>),
}

impl RangeValue {
    /// The value when single-thumb.
    #[must_use]
    pub fn as_single(&self) -> Option<f64> {
        match self {
            Self::Single(value) => Some(*value),
            Self::Multiple(_) => None,
        }
    }

    /// The values when multi-thumb.
    #[must_use]
    pub fn as_multiple(&self) -> Option<&[f64]> {
        match self {
            Self::Single(_) => None,
            Self::Multiple(values) => Some(values),
        }
    }

    /// Whether every contained value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Single(value) => value.is_finite(),
            Self::Multiple(values) => values.iter().all(|value| value.is_finite()),
        }
    }

    /// The value as it is written into a control attribute, multi-thumb
    /// values joined with commas.
    #[must_use]
    pub fn attr_value(&self) -> String {
        match self {
            Self::Single(value) => format_number(*value),
            Self::Multiple(values) => {
                let parts: Vec<String> = values.iter().map(|value| format_number(*value)).collect();
                parts.join(",")
            }
        }
    }
}

impl From<f64> for RangeValue {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<f64>> for RangeValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Multiple(values)
    }
}

/// Validator behind `range` inputs.
///
/// Single-thumb mode runs the inner [`NumberValidator`] over the first
/// submitted entry. Multi-thumb mode splits a text entry on commas (or
/// takes the repeated entries as-is) and validates each part separately;
/// parts that fail to parse are reported and dropped while the rest are
/// kept.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct RangeValidator {
    /// Per-value constraints and parser settings.
    #[builder(default)]
    pub number: NumberValidator,

    /// Whether the control submits multiple values.
    #[builder(default)]
    pub multiple: bool,
}

impl RangeValidator {
    /// Creates a single-thumb validator with no constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn validate_multiple(&self, raw: &RawInput, report: &mut ValidationReport) -> Vec<f64> {
        let mut values = Vec::new();
        match raw {
            RawInput::Text(text) => {
                for item in text.split(',') {
                    if let Some(value) = self.number.validate(item, report) {
                        values.push(value);
                    }
                }
            }
            RawInput::List(items) => {
                for item in items {
                    if let Some(value) = self.number.validate(item, report) {
                        values.push(value);
                    }
                }
            }
        }
        values
    }
}

impl SubmitValidator for RangeValidator {
    type Input = RawInput;
    type Output = RangeValue;

    fn name(&self) -> &'static str {
        "range"
    }

    fn validate(&self, raw: &RawInput, report: &mut ValidationReport) -> Option<RangeValue> {
        if self.multiple {
            if raw.is_empty() {
                return None;
            }
            Some(RangeValue::Multiple(self.validate_multiple(raw, report)))
        } else {
            let text = match raw {
                RawInput::Text(text) => text.as_str(),
                RawInput::List(items) => items.first().map(String::as_str).unwrap_or_default(),
            };
            self.number.validate(text, report).map(RangeValue::Single)
        }
    }
}
