//! Number separator conventions per language and region.
//!
//! The table covers the locales commonly seen in web-form submissions.
//! Languages not listed here get no convention; [`crate::FloatParser`]
//! then relies on heuristic parsing alone.

/// Decimal and grouping separators a locale writes numbers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorConvention {
    /// Character between the integer and fractional parts.
    pub decimal: char,
    /// Characters accepted between digit groups.
    pub grouping: &'static [char],
}

impl SeparatorConvention {
    /// Returns `true` when `ch` is one of this convention's grouping
    /// separators.
    #[must_use]
    pub fn is_grouping(&self, ch: char) -> bool {
        self.grouping.contains(&ch)
    }
}

const GROUP_COMMA: &[char] = &[','];
const GROUP_DOT: &[char] = &['.'];
// U+00A0 no-break space and U+202F narrow no-break space both occur in
// copy-pasted values from locales that group with spaces.
const GROUP_SPACE: &[char] = &[' ', '\u{00a0}', '\u{202f}'];
const GROUP_APOSTROPHE: &[char] = &['\'', '\u{2019}'];

const DOT_DECIMAL: SeparatorConvention = SeparatorConvention {
    decimal: '.',
    grouping: GROUP_COMMA,
};
const COMMA_DECIMAL_DOT_GROUPS: SeparatorConvention = SeparatorConvention {
    decimal: ',',
    grouping: GROUP_DOT,
};
const COMMA_DECIMAL_SPACE_GROUPS: SeparatorConvention = SeparatorConvention {
    decimal: ',',
    grouping: GROUP_SPACE,
};
const SWISS: SeparatorConvention = SeparatorConvention {
    decimal: '.',
    grouping: GROUP_APOSTROPHE,
};

/// Languages writing `1,234.56`.
const DOT_DECIMAL_LANGS: &[&str] = &["en", "ga", "he", "hi", "ja", "ko", "ms", "th", "zh"];

/// Languages writing `1.234,56`.
const COMMA_DOT_LANGS: &[&str] = &[
    "da", "de", "el", "es", "hr", "id", "it", "nl", "pt", "ro", "sl", "sr", "tr", "vi",
];

/// Languages writing `1 234,56`.
const COMMA_SPACE_LANGS: &[&str] = &[
    "bg", "cs", "et", "fi", "fr", "hu", "lt", "lv", "nb", "pl", "ru", "sk", "sv", "uk",
];

/// Regions whose convention differs from the base language.
const REGION_OVERRIDES: &[(&str, &str, SeparatorConvention)] = &[
    ("de", "CH", SWISS),
    ("de", "LI", SWISS),
    ("it", "CH", SWISS),
    ("es", "MX", DOT_DECIMAL),
    ("es", "US", DOT_DECIMAL),
];

/// Looks up the separator convention for a language (ISO 639-1, case
/// insensitive) optionally narrowed by a region code.
///
/// Returns `None` for languages the table does not cover.
#[must_use]
pub fn lookup(language: &str, region: Option<&str>) -> Option<SeparatorConvention> {
    let language = language.trim().to_ascii_lowercase();
    if language.is_empty() {
        return None;
    }
    if let Some(region) = region {
        let region = region.trim().to_ascii_uppercase();
        if let Some((_, _, convention)) = REGION_OVERRIDES
            .iter()
            .find(|(lang, reg, _)| *lang == language && *reg == region)
        {
            return Some(*convention);
        }
    }
    if DOT_DECIMAL_LANGS.contains(&language.as_str()) {
        Some(DOT_DECIMAL)
    } else if COMMA_DOT_LANGS.contains(&language.as_str()) {
        Some(COMMA_DECIMAL_DOT_GROUPS)
    } else if COMMA_SPACE_LANGS.contains(&language.as_str()) {
        Some(COMMA_DECIMAL_SPACE_GROUPS)
    } else {
        None
    }
}
