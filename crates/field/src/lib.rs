//! Server-side `number` and `range` form fields with locale-aware
//! submit validation.
//!
//! A field owns its metadata, constraints, and current value. Submitting
//! raw browser data runs the paired validator: the text is parsed the way
//! the client's locale writes numbers, bounds and step are checked, and
//! every failure lands in a [`validators::ValidationReport`] as rendered
//! message data. The field then knows its value and can assemble its
//! HTML attributes for whatever template layer renders the form.
//!
//! ```
//! use formwork_field::prelude::*;
//!
//! # fn main() -> Result<(), FieldError> {
//! let mut field = NumberField::builder()
//!     .metadata(FieldMetadata::builder().name("price").label("Price").build()?)
//!     .options(NumberFieldOptions::builder().min(0.5).max(100.0).step(Step::Of(0.5)).build())
//!     .build();
//!
//! // A German client submits a decimal comma.
//! let context = SubmitContext::builder()
//!     .language("de")
//!     .prefer_locale_parsing(true)
//!     .build();
//! let report = field.submit("12,5", &context);
//!
//! assert!(report.is_empty());
//! assert_eq!(field.value, Some(12.5));
//! assert!(field.control_attrs().to_string().contains(r#"value="12.5""#));
//! # Ok(())
//! # }
//! ```
//!
//! Parsing lives in the `formwork-locale` crate behind the default-on
//! `locale` feature; without it, submits report a configuration error
//! instead of guessing at number formats.

pub mod core;
pub mod fields;
pub mod validators;

// Re-export the field foundation
pub use self::core::*;

// Re-export field types
pub use fields::*;

// Re-export the parser from formwork-locale
#[cfg(feature = "locale")]
pub use formwork_locale::FloatParser;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        AttrList, FieldError, FieldKind, FieldMetadata, FieldName, FieldNameError, FieldType,
        HasValue, InputMode, MinMaxStep, Step, StepParseError, SubmitContext,
    };

    pub use crate::fields::{NumberField, NumberFieldOptions, RangeField};

    pub use crate::validators::{
        FloatNumberValidator, IntNumberValidator, Messages, NumberValidator, RangeValidator,
        RangeValue, RawInput, SubmitValidator, ValidationError, ValidationErrors,
        ValidationReport, codes,
    };

    #[cfg(feature = "locale")]
    pub use formwork_locale::FloatParser;
}
