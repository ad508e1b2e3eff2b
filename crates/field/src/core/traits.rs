//! Seams every field implements.

use crate::core::error::FieldError;
use crate::core::kind::FieldKind;
use crate::core::metadata::FieldMetadata;
use crate::core::name::FieldName;
use crate::core::step::Step;

/// Identification every field exposes.
pub trait FieldType {
    /// The control type this field renders as.
    fn kind(&self) -> FieldKind;

    /// The field's metadata.
    fn metadata(&self) -> &FieldMetadata;

    /// The control name.
    fn name(&self) -> &FieldName {
        &self.metadata().name
    }

    /// Whether submitting an empty value is an error.
    fn is_required(&self) -> bool {
        self.metadata().required
    }
}

/// Typed value storage on a field.
///
/// # Examples
///
/// ```rust,ignore
/// let mut field = NumberField::builder().name("quantity").build()?;
/// field.set_value(3.0)?;
/// assert_eq!(field.value(), Some(&3.0));
/// field.clear_value();
/// assert!(!field.has_value());
/// ```
pub trait HasValue {
    /// The field's value type.
    type Value;

    /// The current value.
    fn value(&self) -> Option<&Self::Value>;

    /// Mutable access to the current value.
    fn value_mut(&mut self) -> Option<&mut Self::Value>;

    /// Sets the value, enforcing the field's value contract (a numeric
    /// field rejects non-finite values, for instance).
    fn set_value(&mut self, value: Self::Value) -> Result<(), FieldError>;

    /// Removes the current value.
    fn clear_value(&mut self);

    /// Takes the current value out of the field.
    fn take_value(&mut self) -> Option<Self::Value>;

    /// The configured default value.
    fn default_value(&self) -> Option<&Self::Value>;

    /// Whether a value is present.
    fn has_value(&self) -> bool {
        self.value().is_some()
    }

    /// The current value, falling back to the default.
    fn value_or_default(&self) -> Option<&Self::Value> {
        self.value().or_else(|| self.default_value())
    }

    /// The current value, or [`FieldError::MissingValue`] naming the field.
    fn require_value(&self) -> Result<&Self::Value, FieldError>
    where
        Self: FieldType,
    {
        let name = self.metadata().name_str().to_owned();
        self.value().ok_or(FieldError::MissingValue { name })
    }

    /// Replaces the current value with the default, or clears it when no
    /// default is configured.
    fn reset_to_default(&mut self) -> Result<(), FieldError>
    where
        Self::Value: Clone,
    {
        match self.default_value().cloned() {
            Some(default) => self.set_value(default),
            None => {
                self.clear_value();
                Ok(())
            }
        }
    }
}

/// The numeric constraint triple shared by `number` and `range` controls.
///
/// `min > max` configurations are representable; the paired validators
/// apply whatever is configured without reconciling the pair.
pub trait MinMaxStep {
    /// Lower bound, when configured.
    fn min(&self) -> Option<f64>;

    /// Upper bound, when configured.
    fn max(&self) -> Option<f64>;

    /// Step constraint, when configured.
    fn step(&self) -> Option<Step>;

    /// Sets the lower bound.
    fn set_min(&mut self, min: Option<f64>);

    /// Sets the upper bound.
    fn set_max(&mut self, max: Option<f64>);

    /// Sets the step constraint.
    fn set_step(&mut self, step: Option<Step>);

    /// Whether any bound is configured.
    fn has_bounds(&self) -> bool {
        self.min().is_some() || self.max().is_some()
    }
}
