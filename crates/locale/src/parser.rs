//! Float parsing with locale-aware separator handling.

use bon::Builder;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::conventions::{self, SeparatorConvention};

/// Strict numeric form a candidate must match after separator
/// normalization, before it is handed to the `f64` parser.
static NUMERIC_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?$").unwrap());

/// Parses user-typed numeric strings into finite `f64` values.
///
/// Two strategies are available. *Convention parsing* resolves separators
/// from the configured language/locale via [`conventions::lookup`].
/// *Heuristic parsing* infers separators from the string itself and needs
/// no locale at all. The `prefer_locale_parsing` flag decides which
/// strategy runs first; the other one serves as the fallback. Without a
/// known convention only the heuristic applies.
///
/// # Examples
///
/// ```
/// use formwork_locale::FloatParser;
///
/// let parser = FloatParser::builder()
///     .language("de")
///     .prefer_locale_parsing(true)
///     .build();
/// assert_eq!(parser.parse("1.234,56"), Some(1234.56));
///
/// let generic = FloatParser::new();
/// assert_eq!(generic.parse("1,234.56"), Some(1234.56));
/// assert_eq!(generic.parse("not a number"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
pub struct FloatParser {
    /// ISO 639-1 language code (`en`, `de`, `cs`, ...).
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Region code narrowing the language (`US`, `CH`, ...).
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Try convention parsing before the heuristic.
    #[builder(default)]
    #[serde(default)]
    pub prefer_locale_parsing: bool,
}

impl FloatParser {
    /// Creates a parser with no locale configured; only heuristic parsing
    /// applies until a language is set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The separator convention for the configured language and locale,
    /// when the built-in table covers it.
    #[must_use]
    pub fn convention(&self) -> Option<SeparatorConvention> {
        self.language
            .as_deref()
            .and_then(|language| conventions::lookup(language, self.locale.as_deref()))
    }

    /// Parses `raw` into a finite float.
    ///
    /// Returns `None` for empty input and for anything that does not
    /// normalize into a strictly numeric string under either strategy.
    /// Absence is the only failure signal; no error is produced.
    #[must_use]
    pub fn parse(&self, raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match self.convention() {
            Some(convention) if self.prefer_locale_parsing => {
                Self::parse_by_convention(trimmed, convention).or_else(|| {
                    tracing::debug!(input = trimmed, "convention parse failed, trying heuristic");
                    Self::parse_heuristic(trimmed)
                })
            }
            Some(convention) => Self::parse_heuristic(trimmed).or_else(|| {
                tracing::debug!(input = trimmed, "heuristic parse failed, trying convention");
                Self::parse_by_convention(trimmed, convention)
            }),
            None => Self::parse_heuristic(trimmed),
        }
    }

    /// Normalizes `raw` under a fixed separator convention: grouping
    /// characters are dropped, the decimal separator becomes `.`.
    fn parse_by_convention(raw: &str, convention: SeparatorConvention) -> Option<f64> {
        let mut cleaned = String::with_capacity(raw.len());
        for ch in raw.chars() {
            if ch == convention.decimal {
                cleaned.push('.');
            } else if !convention.is_grouping(ch) {
                cleaned.push(ch);
            }
        }
        parse_numeric(&cleaned)
    }

    /// Infers separators from the string itself.
    ///
    /// After removing spaces: when both `.` and `,` occur, whichever
    /// occurs last is the decimal separator and the other one is grouping.
    /// A separator occurring more than once is grouping. A single `,` or
    /// `.` is the decimal separator, so `1,234` parses as `1.234`.
    fn parse_heuristic(raw: &str) -> Option<f64> {
        let compact: String = raw
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '\u{00a0}' | '\u{202f}'))
            .collect();
        let cleaned = match (compact.rfind('.'), compact.rfind(',')) {
            (Some(dot), Some(comma)) => {
                if dot > comma {
                    compact.chars().filter(|&ch| ch != ',').collect()
                } else {
                    compact
                        .chars()
                        .filter(|&ch| ch != '.')
                        .map(|ch| if ch == ',' { '.' } else { ch })
                        .collect()
                }
            }
            (Some(_), None) => {
                if compact.matches('.').count() > 1 {
                    compact.chars().filter(|&ch| ch != '.').collect()
                } else {
                    compact
                }
            }
            (None, Some(_)) => {
                if compact.matches(',').count() > 1 {
                    compact.chars().filter(|&ch| ch != ',').collect()
                } else {
                    compact.replace(',', ".")
                }
            }
            (None, None) => compact,
        };
        parse_numeric(&cleaned)
    }
}

/// Gates `candidate` through the strict numeric form and converts it.
/// Non-finite results (overflowing exponents) are rejected.
fn parse_numeric(candidate: &str) -> Option<f64> {
    if !NUMERIC_FORM.is_match(candidate) {
        return None;
    }
    let value: f64 = candidate.parse().ok()?;
    value.is_finite().then_some(value)
}
