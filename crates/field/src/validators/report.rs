//! Per-submit error sink.
//!
//! A [`ValidationReport`] is created for one field submit, carries the
//! field label every message is rendered with, and collects the failures
//! the validators record. The report outlives the validator chain and is
//! what the caller inspects afterwards.

use smallvec::SmallVec;

use super::error::{ValidationError, ValidationErrors};
use super::messages::Messages;

/// Collects validation failures for a single field submit.
///
/// # Examples
///
/// ```
/// use formwork_field::validators::{codes, ValidationReport};
///
/// let mut report = ValidationReport::new("Price");
/// report.add(codes::GREATER, &[("min", "1".to_string())]);
///
/// let error = &report.errors().errors()[0];
/// assert_eq!(error.message, "Field `Price` requires a value equal or greater than `1`.");
/// assert_eq!(error.param("min"), Some("1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    label: String,
    messages: Messages,
    errors: ValidationErrors,
}

impl ValidationReport {
    /// Creates a report for the field with the given display label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            messages: Messages::default(),
            errors: ValidationErrors::new(),
        }
    }

    /// Creates a report rendering messages from a custom catalog.
    pub fn with_messages(label: impl Into<String>, messages: Messages) -> Self {
        Self {
            label: label.into(),
            messages,
            errors: ValidationErrors::new(),
        }
    }

    /// The field label messages are rendered with.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Records a failure for `code`.
    ///
    /// The message template is rendered with `{0}` bound to the field
    /// label and `{1}`, `{2}`, … bound to `args` in order. The named
    /// `args` are also stored on the error as parameters.
    pub fn add(&mut self, code: &'static str, args: &[(&'static str, String)]) {
        let message = {
            let mut positional: SmallVec<[&str; 3]> = SmallVec::with_capacity(args.len() + 1);
            positional.push(self.label.as_str());
            positional.extend(args.iter().map(|(_, value)| value.as_str()));
            self.messages.render(code, &positional).into_owned()
        };
        tracing::debug!(code, field = %self.label, %message, "validation failed");

        let mut error = ValidationError::new(code, message).with_field(self.label.clone());
        for (key, value) in args {
            error = error.with_param(*key, value.clone());
        }
        self.errors.add(error);
    }

    /// Whether any failure was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    /// Number of recorded failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the report is clean.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The recorded failures.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Consumes the report, keeping only the failures.
    #[must_use]
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}
