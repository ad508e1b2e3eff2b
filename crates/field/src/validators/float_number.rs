//! Float submit validation without constraint checks.

use bon::Builder;

use super::messages::codes;
use super::number::{ParseOutcome, parse_submitted};
use super::report::ValidationReport;
use super::traits::SubmitValidator;
use crate::core::{SubmitContext, format_number};

/// Bounds shown in the error message when none are configured, roughly
/// the `f64` domain.
const DISPLAY_MIN: &str = "-1.79e308";
const DISPLAY_MAX: &str = "1.79e308";

/// Validator for inputs that accept any finite float.
///
/// Parse-only: the configured bounds feed the error message and are never
/// enforced. Use [`NumberValidator`](super::NumberValidator) when bounds
/// or steps should actually reject values.
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct FloatNumberValidator {
    /// Lower bound shown in the error message.
    pub min: Option<f64>,

    /// Upper bound shown in the error message.
    pub max: Option<f64>,

    /// Parser settings for the submitting client.
    #[builder(default)]
    pub context: SubmitContext,
}

impl FloatNumberValidator {
    /// Creates a validator with default parser settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn report_float(&self, report: &mut ValidationReport) {
        let min = self.min.map_or_else(|| DISPLAY_MIN.to_string(), format_number);
        let max = self.max.map_or_else(|| DISPLAY_MAX.to_string(), format_number);
        report.add(codes::FLOAT, &[("min", min), ("max", max)]);
    }
}

impl SubmitValidator for FloatNumberValidator {
    type Input = str;
    type Output = f64;

    fn name(&self) -> &'static str {
        "float_number"
    }

    fn validate(&self, raw: &str, report: &mut ValidationReport) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match parse_submitted(&self.context, trimmed) {
            ParseOutcome::Value(value) => Some(value),
            ParseOutcome::Unparsable => {
                self.report_float(report);
                None
            }
            ParseOutcome::Unavailable => {
                report.add(codes::PARSER, &[]);
                None
            }
        }
    }
}
