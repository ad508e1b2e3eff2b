//! Property-based tests for formwork-locale.

use formwork_locale::FloatParser;
use proptest::prelude::*;

// ============================================================================
// TOTALITY: parse accepts arbitrary input without panicking
// ============================================================================

proptest! {
    #[test]
    fn parse_never_panics(s in ".*") {
        let _ = FloatParser::new().parse(&s);
    }

    #[test]
    fn parse_never_panics_with_locale(s in ".*") {
        let parser = FloatParser::builder()
            .language("de")
            .locale("CH")
            .prefer_locale_parsing(true)
            .build();
        let _ = parser.parse(&s);
    }
}

// ============================================================================
// DETERMINISM: parse(x) == parse(x)
// ============================================================================

proptest! {
    #[test]
    fn parse_is_deterministic(s in ".*") {
        let parser = FloatParser::builder().language("fr").build();
        prop_assert_eq!(parser.parse(&s), parser.parse(&s));
    }
}

// ============================================================================
// ROUND TRIP: canonical renderings parse back to the same value
// ============================================================================

proptest! {
    #[test]
    fn display_round_trips(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let rendered = format!("{value}");
        prop_assert_eq!(FloatParser::new().parse(&rendered), Some(value));
    }

    // At least two grouping separators, so the heuristic cannot mistake
    // them for a decimal point.
    #[test]
    fn grouped_thousands_parse_back(
        magnitude in 1_000_000_i64..=999_999_999_999,
        negative in any::<bool>(),
    ) {
        let value = if negative { -magnitude } else { magnitude };
        let mut digits = magnitude.to_string();
        let mut pos = digits.len() as isize - 3;
        while pos > 0 {
            digits.insert(pos as usize, ',');
            pos -= 3;
        }
        let rendered = if negative { format!("-{digits}") } else { digits };
        prop_assert_eq!(FloatParser::new().parse(&rendered), Some(value as f64));
    }

    #[test]
    fn decimal_comma_and_dot_agree(whole in 0_i64..=999_999, cents in 0_u32..=99) {
        let with_dot = format!("{whole}.{cents:02}");
        let with_comma = format!("{whole},{cents:02}");
        let parser = FloatParser::new();
        prop_assert_eq!(parser.parse(&with_dot), parser.parse(&with_comma));
        prop_assert!(parser.parse(&with_dot).is_some());
    }
}
