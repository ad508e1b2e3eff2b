//! Concrete field types.

pub mod number;
pub mod range;

pub use number::{NumberField, NumberFieldOptions};
pub use range::RangeField;
