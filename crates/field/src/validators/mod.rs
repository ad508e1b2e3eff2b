//! Submit validators for numeric form fields.
//!
//! A validator turns one field's raw submitted data into a typed value
//! while recording user-facing failures on a [`ValidationReport`]. The
//! flow for every built-in validator is the same: trim, parse through the
//! locale-aware parser, check constraints, and hand back whatever value
//! survived. Failures never abort the chain; they accumulate so the form
//! can show all of them at once.
//!
//! ```
//! use formwork_field::validators::{NumberValidator, SubmitValidator, ValidationReport};
//! use formwork_field::Step;
//!
//! let validator = NumberValidator::builder()
//!     .min(0.5)
//!     .max(9.5)
//!     .step(Step::Of(0.5))
//!     .build();
//!
//! let mut report = ValidationReport::new("Duration");
//! let value = validator.validate("2,5", &mut report);
//!
//! assert_eq!(value, Some(2.5));
//! assert!(report.is_empty());
//! ```

pub mod error;
pub mod float_number;
pub mod int_number;
pub mod messages;
pub mod number;
pub mod range;
pub mod report;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use float_number::FloatNumberValidator;
pub use int_number::IntNumberValidator;
pub use messages::{Messages, codes, default_template, format_template};
pub use number::NumberValidator;
pub use range::{RangeValidator, RangeValue, RawInput};
pub use report::ValidationReport;
pub use traits::SubmitValidator;
