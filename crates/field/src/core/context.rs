//! Per-request data a form hands to its fields at submit time.

use bon::Builder;
use serde::{Deserialize, Serialize};

#[cfg(feature = "locale")]
use formwork_locale::FloatParser;

/// What the surrounding form knows about the current request: the user's
/// language and locale, and whether locale conventions should be
/// preferred over heuristic parsing.
///
/// An empty context is valid; numbers then parse heuristically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
pub struct SubmitContext {
    /// ISO 639-1 language code of the request (`en`, `de`, ...).
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Region code narrowing the language (`US`, `CH`, ...).
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Try locale-convention parsing before the heuristic.
    #[builder(default)]
    #[serde(default)]
    pub prefer_locale_parsing: bool,
}

impl SubmitContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A float parser configured from this context.
    #[cfg(feature = "locale")]
    #[must_use]
    pub fn float_parser(&self) -> FloatParser {
        FloatParser::builder()
            .maybe_language(self.language.clone())
            .maybe_locale(self.locale.clone())
            .prefer_locale_parsing(self.prefer_locale_parsing)
            .build()
    }
}
