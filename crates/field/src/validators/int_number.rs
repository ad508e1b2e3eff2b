//! Integer submit validation.

use bon::Builder;

use super::messages::codes;
use super::number::{ParseOutcome, parse_submitted};
use super::report::ValidationReport;
use super::traits::SubmitValidator;
use crate::core::{SubmitContext, format_number, nearly_integral};

/// Validator for inputs that must carry whole numbers.
///
/// Parses like [`NumberValidator`](super::NumberValidator), then requires
/// the value to be integral under the same relative tolerance the step
/// check uses, and to fit `i64`. The configured bounds only feed the
/// error message; they are not enforced here.
///
/// # Examples
///
/// ```
/// use formwork_field::validators::{IntNumberValidator, SubmitValidator, ValidationReport};
///
/// let validator = IntNumberValidator::new();
/// let mut report = ValidationReport::new("Seats");
///
/// assert_eq!(validator.validate("12", &mut report), Some(12));
/// assert_eq!(validator.validate("12.5", &mut report), None);
/// assert!(report.has_errors());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct IntNumberValidator {
    /// Lower bound shown in the error message.
    pub min: Option<f64>,

    /// Upper bound shown in the error message.
    pub max: Option<f64>,

    /// Parser settings for the submitting client.
    #[builder(default)]
    pub context: SubmitContext,
}

impl IntNumberValidator {
    /// Creates a validator with default parser settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn report_int(&self, report: &mut ValidationReport) {
        let min = self.min.map_or_else(|| i64::MIN.to_string(), format_number);
        let max = self.max.map_or_else(|| i64::MAX.to_string(), format_number);
        report.add(codes::INT, &[("min", min), ("max", max)]);
    }
}

impl SubmitValidator for IntNumberValidator {
    type Input = str;
    type Output = i64;

    fn name(&self) -> &'static str {
        "int_number"
    }

    fn validate(&self, raw: &str, report: &mut ValidationReport) -> Option<i64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match parse_submitted(&self.context, trimmed) {
            ParseOutcome::Value(value) => {
                let fits = value >= i64::MIN as f64 && value <= i64::MAX as f64;
                if fits && nearly_integral(value) {
                    Some(value.round() as i64)
                } else {
                    self.report_int(report);
                    None
                }
            }
            ParseOutcome::Unparsable => {
                self.report_int(report);
                None
            }
            ParseOutcome::Unavailable => {
                report.add(codes::PARSER, &[]);
                None
            }
        }
    }
}
