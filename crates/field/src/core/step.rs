//! The `step` constraint of numeric fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::attrs::format_number;

/// Error from parsing a step attribute value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("step must be a number or the literal 'any'")]
pub struct StepParseError;

/// The `step` of a numeric field.
///
/// HTML allows the literal `any` besides a number; `any` disables the
/// divisibility check, and so does a zero step.
///
/// # Examples
///
/// ```
/// use formwork_field::Step;
///
/// assert!(Step::Any.allows(0.37));
/// assert!(Step::Of(0.1).allows(0.3));
/// assert!(!Step::Of(0.1).allows(0.35));
/// assert_eq!("any".parse::<Step>(), Ok(Step::Any));
/// assert_eq!("0.5".parse::<Step>(), Ok(Step::Of(0.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StepRepr", into = "StepRepr")]
pub enum Step {
    /// Any value is acceptable.
    Any,
    /// Values must be whole multiples of the step.
    Of(f64),
}

impl Step {
    /// Whether `value` satisfies this step.
    ///
    /// `value / step` must be a whole number under [`nearly_integral`]'s
    /// relative tolerance, so `0.3` with step `0.1` passes even though the
    /// binary quotient is `2.999…`.
    #[must_use]
    pub fn allows(self, value: f64) -> bool {
        match self {
            Self::Any => true,
            Self::Of(step) if step == 0.0 => true,
            Self::Of(step) => nearly_integral(value / step),
        }
    }

    /// Whether the step permits fractional values. `Any` does; a numeric
    /// step does when it has a fractional part itself.
    #[must_use]
    pub fn is_fractional(self) -> bool {
        match self {
            Self::Any => true,
            Self::Of(step) => step.fract() != 0.0,
        }
    }

    /// The step as the HTML `step` attribute value.
    #[must_use]
    pub fn attr_value(self) -> String {
        match self {
            Self::Any => "any".to_owned(),
            Self::Of(step) => format_number(step),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.attr_value())
    }
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }
        trimmed
            .parse::<f64>()
            .map(Self::Of)
            .map_err(|_| StepParseError)
    }
}

impl From<f64> for Step {
    fn from(step: f64) -> Self {
        Self::Of(step)
    }
}

/// Serde shape: the literal `"any"` or a bare number, matching the HTML
/// attribute grammar.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StepRepr {
    Value(f64),
    Text(String),
}

impl TryFrom<StepRepr> for Step {
    type Error = StepParseError;

    fn try_from(repr: StepRepr) -> Result<Self, Self::Error> {
        match repr {
            StepRepr::Value(step) => Ok(Self::Of(step)),
            StepRepr::Text(text) => text.parse(),
        }
    }
}

impl From<Step> for StepRepr {
    fn from(step: Step) -> Self {
        match step {
            Step::Any => Self::Text("any".to_owned()),
            Step::Of(value) => Self::Value(value),
        }
    }
}

/// Whether `x` is a whole number within a tolerance that scales with its
/// magnitude. Plain `x == x.round()` would reject quotients like
/// `0.3 / 0.1`, which binary floats carry as `2.999…96`.
#[must_use]
pub fn nearly_integral(x: f64) -> bool {
    let nearest = x.round();
    let tolerance = f64::EPSILON * x.abs().max(1.0) * 2.0;
    (x - nearest).abs() <= tolerance
}
