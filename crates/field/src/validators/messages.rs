//! Error codes and message templates.
//!
//! Each validator failure is identified by a short code. The code maps to
//! an English template whose positional tokens are substituted at render
//! time: `{0}` is always the field label, further tokens are
//! validator-specific (bounds, step). Applications replace individual
//! templates through [`Messages`] without touching the codes.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Well-known error codes recorded by the built-in validators.
pub mod codes {
    /// Submitted text did not parse as a number.
    pub const NUMBER: &str = "number";
    /// Parsed value is below the configured minimum.
    pub const GREATER: &str = "greater";
    /// Parsed value is above the configured maximum.
    pub const LOWER: &str = "lower";
    /// Parsed value is outside the configured minimum and maximum.
    pub const RANGE: &str = "range";
    /// Parsed value is not divisible by the configured step.
    pub const DIVISIBLE: &str = "divisible";
    /// Submitted text did not parse as an integer.
    pub const INT: &str = "int";
    /// Submitted text did not parse as a float.
    pub const FLOAT: &str = "float";
    /// Parsing support is compiled out.
    pub const PARSER: &str = "parser";
}

/// Default English template for a built-in code.
#[must_use]
pub fn default_template(code: &str) -> Option<&'static str> {
    match code {
        codes::NUMBER => Some("Field `{0}` requires a valid number."),
        codes::GREATER => Some("Field `{0}` requires a value equal or greater than `{1}`."),
        codes::LOWER => Some("Field `{0}` requires a value equal or lower than `{1}`."),
        codes::RANGE => Some("Field `{0}` requires a value of `{1}` to `{2}` inclusive."),
        codes::DIVISIBLE => Some("Field `{0}` requires a divisible value of `{1}`."),
        codes::INT => Some("Field `{0}` requires a valid integer (from `{1}` to `{2}` incl.)."),
        codes::FLOAT => Some("Field `{0}` requires a valid float number (from `{1}` to `{2}`)."),
        codes::PARSER => {
            Some("Number parsing support is not available (crate feature `locale` is disabled).")
        }
        _ => None,
    }
}

/// Substitutes `{N}` tokens in `template` with `args[N]`.
///
/// Tokens without a matching argument and malformed tokens are kept
/// verbatim.
///
/// # Examples
///
/// ```
/// use formwork_field::validators::format_template;
///
/// let message = format_template("Field `{0}` requires a value of `{1}` to `{2}` inclusive.", &["Price", "1", "100"]);
/// assert_eq!(message, "Field `Price` requires a value of `1` to `100` inclusive.");
/// ```
#[must_use]
pub fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        if let Some(close) = after.find('}') {
            let token = &after[..close];
            if let Ok(index) = token.parse::<usize>() {
                match args.get(index) {
                    Some(arg) => out.push_str(arg),
                    None => {
                        out.push('{');
                        out.push_str(token);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
                continue;
            }
        }
        out.push('{');
        rest = after;
    }
    out.push_str(rest);
    out
}

/// Message catalog with per-code template overrides.
///
/// # Examples
///
/// ```
/// use formwork_field::validators::{codes, Messages};
///
/// let messages = Messages::new()
///     .with_template(codes::NUMBER, "`{0}` must be numeric.");
///
/// assert_eq!(messages.resolve(codes::NUMBER), "`{0}` must be numeric.");
/// assert_eq!(
///     messages.resolve(codes::DIVISIBLE),
///     "Field `{0}` requires a divisible value of `{1}`.",
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    overrides: HashMap<String, String>,
}

impl Messages {
    /// Creates a catalog with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the template for `code`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_template(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.set_template(code, template);
        self
    }

    /// Replaces the template for `code` in place.
    pub fn set_template(&mut self, code: impl Into<String>, template: impl Into<String>) {
        self.overrides.insert(code.into(), template.into());
    }

    /// The template for `code`: the override if present, the built-in
    /// default otherwise, the code itself as a last resort.
    #[must_use]
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        if let Some(template) = self.overrides.get(code) {
            return template;
        }
        default_template(code).unwrap_or(code)
    }

    /// Renders the message for `code` with positional arguments.
    #[must_use]
    pub fn render<'a>(&'a self, code: &'a str, args: &[&str]) -> Cow<'a, str> {
        let template = self.resolve(code);
        if template.contains('{') {
            Cow::Owned(format_template(template, args))
        } else {
            Cow::Borrowed(template)
        }
    }
}
