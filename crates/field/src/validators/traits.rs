//! The submit validation contract.

use super::report::ValidationReport;

/// Normalizes one field's raw submitted data and records failures.
///
/// A validator is the bridge between the wire format (text, or lists of
/// text) and the field's typed value. It never fails hard: problems are
/// recorded on the [`ValidationReport`] and the returned `Option` carries
/// whatever value could still be normalized.
///
/// Returning `Some` together with recorded errors is legal and common:
/// an out-of-bounds number is reported *and* kept, so the re-rendered
/// form can show the offending value alongside the message.
///
/// # Examples
///
/// ```rust,ignore
/// let validator = NumberValidator::builder().min(1.0).max(100.0).build();
/// let mut report = ValidationReport::new("Quantity");
/// let value = validator.validate("250", &mut report);
///
/// assert_eq!(value, Some(250.0));
/// assert!(report.has_errors());
/// ```
pub trait SubmitValidator {
    /// Raw input shape, typically `str`.
    type Input: ?Sized;

    /// The normalized value.
    type Output;

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str {
        "submit_validator"
    }

    /// Normalizes `raw`, recording any failures on `report`.
    ///
    /// `None` means no value could be extracted at all; silent for empty
    /// input, with recorded errors otherwise.
    fn validate(&self, raw: &Self::Input, report: &mut ValidationReport) -> Option<Self::Output>;
}
