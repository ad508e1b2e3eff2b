//! Float submit validation with bounds and step checks.

use bon::Builder;

use super::messages::codes;
use super::report::ValidationReport;
use super::traits::SubmitValidator;
use crate::core::{Step, SubmitContext, format_number};

/// What became of one raw submitted string.
#[cfg_attr(not(feature = "locale"), allow(dead_code))]
pub(crate) enum ParseOutcome {
    /// A finite float was extracted.
    Value(f64),
    /// The text is not a number in any supported notation.
    Unparsable,
    /// Parsing support is compiled out.
    Unavailable,
}

/// Runs the locale-aware parser over `raw`.
///
/// With the `locale` feature disabled every input maps to
/// [`ParseOutcome::Unavailable`]; callers report that as a configuration
/// problem, not as the user's fault.
pub(crate) fn parse_submitted(context: &SubmitContext, raw: &str) -> ParseOutcome {
    #[cfg(feature = "locale")]
    {
        match context.float_parser().parse(raw) {
            Some(value) => ParseOutcome::Value(value),
            None => ParseOutcome::Unparsable,
        }
    }
    #[cfg(not(feature = "locale"))]
    {
        let _ = (context, raw);
        tracing::warn!("number parsing requested with the `locale` feature disabled");
        ParseOutcome::Unavailable
    }
}

/// Validator behind `number` inputs.
///
/// Parses the submitted text through the locale-aware parser, then checks
/// the configured bounds and step. Bounds are enforced only when
/// positive; zero or negative bounds are treated as render-only hints.
/// The parsed value is returned even when a bounds or step failure was
/// recorded, so the caller can keep it and re-render it.
///
/// # Examples
///
/// ```
/// use formwork_field::validators::{SubmitValidator, ValidationReport};
/// use formwork_field::validators::NumberValidator;
///
/// let validator = NumberValidator::builder().min(1.0).max(100.0).build();
/// let mut report = ValidationReport::new("Quantity");
///
/// assert_eq!(validator.validate("42", &mut report), Some(42.0));
/// assert!(report.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct NumberValidator {
    /// Lower bound, enforced only when positive.
    pub min: Option<f64>,

    /// Upper bound, enforced only when positive.
    pub max: Option<f64>,

    /// Step the value must be divisible by.
    pub step: Option<Step>,

    /// Parser settings for the submitting client.
    #[builder(default)]
    pub context: SubmitContext,
}

impl NumberValidator {
    /// Creates a validator with no constraints and default parser
    /// settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn parse(&self, raw: &str, report: &mut ValidationReport) -> Option<f64> {
        match parse_submitted(&self.context, raw) {
            ParseOutcome::Value(value) => Some(value),
            ParseOutcome::Unparsable => {
                report.add(codes::NUMBER, &[]);
                None
            }
            ParseOutcome::Unavailable => {
                report.add(codes::PARSER, &[]);
                None
            }
        }
    }

    fn check_bounds(&self, value: f64, report: &mut ValidationReport) {
        let min = self.min.filter(|&min| min > 0.0);
        let max = self.max.filter(|&max| max > 0.0);
        match (min, max) {
            (Some(min), Some(max)) => {
                if value < min || value > max {
                    report.add(
                        codes::RANGE,
                        &[("min", format_number(min)), ("max", format_number(max))],
                    );
                }
            }
            (Some(min), None) if value < min => {
                report.add(codes::GREATER, &[("min", format_number(min))]);
            }
            (None, Some(max)) if value > max => {
                report.add(codes::LOWER, &[("max", format_number(max))]);
            }
            _ => {}
        }
    }

    fn check_step(&self, value: f64, report: &mut ValidationReport) {
        match self.step {
            Some(step) if !step.allows(value) => {
                if let Step::Of(size) = step {
                    report.add(codes::DIVISIBLE, &[("step", format_number(size))]);
                }
            }
            _ => {}
        }
    }
}

impl SubmitValidator for NumberValidator {
    type Input = str;
    type Output = f64;

    fn name(&self) -> &'static str {
        "number"
    }

    fn validate(&self, raw: &str, report: &mut ValidationReport) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let value = self.parse(trimmed, report)?;
        self.check_bounds(value, report);
        self.check_step(value, report);
        Some(value)
    }
}
