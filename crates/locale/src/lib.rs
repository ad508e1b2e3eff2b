//! Locale-aware float parsing for Formwork form fields.
//!
//! Submitted numbers arrive as strings whose decimal and grouping
//! separators depend on the user's locale: `1,234.56` and `1.234,56` can
//! mean the same value. [`FloatParser`] turns such strings into finite
//! `f64` values, combining a per-locale separator convention table with a
//! heuristic that needs no locale at all.
//!
//! # Quick start
//!
//! ```
//! use formwork_locale::FloatParser;
//!
//! let parser = FloatParser::builder()
//!     .language("cs")
//!     .locale("CZ")
//!     .prefer_locale_parsing(true)
//!     .build();
//!
//! assert_eq!(parser.parse("1 234,5"), Some(1234.5));
//! assert_eq!(parser.parse(""), None);
//! ```

pub mod conventions;
pub mod parser;

pub use conventions::{SeparatorConvention, lookup};
pub use parser::FloatParser;
