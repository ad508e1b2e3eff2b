//! Shared field foundation.
//!
//! Everything a concrete field type builds on: validated control names,
//! presentation metadata, the step model, submit-time client settings,
//! and HTML attribute assembly. Field types and validators live in their
//! own modules and pull from here.

pub mod attrs;
pub mod context;
pub mod error;
pub mod kind;
pub mod metadata;
pub mod name;
pub mod step;
pub mod traits;

pub use attrs::{AttrList, format_number};
pub use context::SubmitContext;
pub use error::FieldError;
pub use kind::{FieldKind, InputMode};
pub use metadata::FieldMetadata;
pub use name::{FIELD_NAME_MAX_LEN, FieldName, FieldNameError};
pub use step::{Step, StepParseError, nearly_integral};
pub use traits::{FieldType, HasValue, MinMaxStep};
