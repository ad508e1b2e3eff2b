use serde::{Deserialize, Serialize};

use crate::core::{
    AttrList, FieldError, FieldKind, FieldMetadata, FieldType, HasValue, MinMaxStep, Step,
    SubmitContext,
};
use crate::fields::NumberFieldOptions;
use crate::validators::{
    NumberValidator, RangeValidator, RangeValue, RawInput, SubmitValidator, ValidationReport,
};

/// Field for a slider control (`<input type="range">`), single- or
/// multi-thumb.
///
/// Multi-thumb sliders need client-side support; on the server side the
/// field submits the control name with a `[]` suffix, accepts repeated or
/// comma-joined entries, and mirrors the joined value into a
/// `data-value` attribute for the widget to initialize from.
///
/// # Examples
///
/// ```
/// use formwork_field::fields::RangeField;
/// use formwork_field::{FieldMetadata, FieldType};
///
/// # fn main() -> Result<(), formwork_field::FieldError> {
/// let field = RangeField::builder()
///     .metadata(FieldMetadata::builder().name("volume").build()?)
///     .build();
///
/// assert_eq!(field.name().as_str(), "volume");
/// assert!(!field.multiple);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct RangeField {
    #[serde(flatten)]
    /// Field metadata including name, label, and presentation flags.
    pub metadata: FieldMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Value rendered when nothing was submitted yet.
    pub default: Option<RangeValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Current value, set by [`RangeField::submit`] or directly.
    pub value: Option<RangeValue>,

    /// Whether the control carries several thumbs.
    #[serde(default)]
    #[builder(default)]
    pub multiple: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Configuration options, shared with number fields.
    pub options: Option<NumberFieldOptions>,
}

impl FieldType for RangeField {
    fn kind(&self) -> FieldKind {
        FieldKind::Range
    }

    fn metadata(&self) -> &FieldMetadata {
        &self.metadata
    }
}

impl std::fmt::Display for RangeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RangeField({})", self.metadata.name)
    }
}

impl HasValue for RangeField {
    type Value = RangeValue;

    fn value(&self) -> Option<&RangeValue> {
        self.value.as_ref()
    }

    fn value_mut(&mut self) -> Option<&mut RangeValue> {
        self.value.as_mut()
    }

    fn set_value(&mut self, value: RangeValue) -> Result<(), FieldError> {
        if !value.is_finite() {
            return Err(FieldError::invalid_value(
                self.metadata.name_str(),
                "range values must be finite numbers",
            ));
        }
        self.value = Some(value);
        Ok(())
    }

    fn clear_value(&mut self) {
        self.value = None;
    }

    fn take_value(&mut self) -> Option<RangeValue> {
        self.value.take()
    }

    fn default_value(&self) -> Option<&RangeValue> {
        self.default.as_ref()
    }
}

impl MinMaxStep for RangeField {
    fn min(&self) -> Option<f64> {
        self.options.as_ref().and_then(|opts| opts.min)
    }

    fn max(&self) -> Option<f64> {
        self.options.as_ref().and_then(|opts| opts.max)
    }

    fn step(&self) -> Option<Step> {
        self.options.as_ref().and_then(|opts| opts.step)
    }

    fn set_min(&mut self, min: Option<f64>) {
        self.options.get_or_insert_with(NumberFieldOptions::default).min = min;
    }

    fn set_max(&mut self, max: Option<f64>) {
        self.options.get_or_insert_with(NumberFieldOptions::default).max = max;
    }

    fn set_step(&mut self, step: Option<Step>) {
        self.options.get_or_insert_with(NumberFieldOptions::default).step = step;
    }
}

impl RangeField {
    /// The validator this field pairs with, configured from the field's
    /// constraints and the submitting client's parser settings.
    #[must_use]
    pub fn validator(&self, context: &SubmitContext) -> RangeValidator {
        let number = NumberValidator::builder()
            .maybe_min(self.min())
            .maybe_max(self.max())
            .maybe_step(self.step())
            .context(context.clone())
            .build();
        RangeValidator::builder()
            .number(number)
            .multiple(self.multiple)
            .build()
    }

    /// Accepts the submitted raw data: validates it, stores the result
    /// (clearing the value when nothing parsed), and returns the report.
    pub fn submit(&mut self, raw: &RawInput, context: &SubmitContext) -> ValidationReport {
        let mut report = ValidationReport::new(self.metadata.display_label());
        self.value = self.validator(context).validate(raw, &mut report);
        tracing::debug!(
            field = self.metadata.name_str(),
            value = ?self.value,
            errors = report.len(),
            "range field submit",
        );
        report
    }

    /// Assembles the control's HTML attributes. The default value renders
    /// when no value is set.
    #[must_use]
    pub fn control_attrs(&self) -> AttrList {
        let mut attrs = AttrList::new();
        attrs.push("type", self.kind().as_str());
        let name = self.metadata.name_str();
        if self.multiple {
            attrs.push("name", format!("{name}[]"));
        } else {
            attrs.push("name", name);
        }
        attrs.push("id", name);
        if let Some(value) = self.value.as_ref().or(self.default.as_ref()) {
            let rendered = value.attr_value();
            if self.multiple {
                attrs.push("value", rendered.clone());
                attrs.push("data-value", rendered);
            } else {
                attrs.push("value", rendered);
            }
        }
        if let Some(min) = self.min() {
            attrs.push_number("min", min);
        }
        if let Some(max) = self.max() {
            attrs.push_number("max", max);
        }
        if let Some(step) = self.step() {
            attrs.push("step", step.attr_value());
        }
        let options = self.options.as_ref();
        attrs.push_opt("list", options.and_then(|opts| opts.list.as_deref()));
        attrs.push_opt("autocomplete", options.and_then(|opts| opts.autocomplete.as_deref()));
        if self.multiple {
            attrs.push_flag("multiple");
        }
        self.metadata.extend_attrs(&mut attrs);
        attrs
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn slider() -> RangeField {
        RangeField::builder()
            .metadata(
                FieldMetadata::builder()
                    .name("volume")
                    .label("Volume")
                    .build()
                    .unwrap(),
            )
            .options(
                NumberFieldOptions::builder()
                    .min(1.0)
                    .max(10.0)
                    .step(Step::Of(0.5))
                    .build(),
            )
            .build()
    }

    fn multi_slider() -> RangeField {
        let mut field = slider();
        field.multiple = true;
        field
    }

    #[test]
    fn kind_and_name() {
        let field = slider();
        assert_eq!(field.kind(), FieldKind::Range);
        assert_eq!(field.to_string(), "RangeField(volume)");
    }

    #[test]
    fn single_thumb_attrs() {
        let mut field = slider();
        field.set_value(RangeValue::Single(2.5)).unwrap();

        assert_eq!(
            field.control_attrs().to_string(),
            r#"type="range" name="volume" id="volume" value="2.5" min="1" max="10" step="0.5""#,
        );
    }

    #[test]
    fn multi_thumb_attrs_suffix_name_and_mirror_value() {
        let mut field = multi_slider();
        field
            .set_value(RangeValue::Multiple(vec![2.0, 7.5]))
            .unwrap();

        let attrs = field.control_attrs();
        assert_eq!(attrs.get("name"), Some("volume[]"));
        assert_eq!(attrs.get("id"), Some("volume"));
        assert_eq!(attrs.get("value"), Some("2,7.5"));
        assert_eq!(attrs.get("data-value"), Some("2,7.5"));
        assert_eq!(attrs.get("multiple"), Some("multiple"));
    }

    #[test]
    fn default_value_renders_until_a_value_lands() {
        let mut field = slider();
        field.default = Some(RangeValue::Single(5.0));
        assert_eq!(field.control_attrs().get("value"), Some("5"));

        field.set_value(RangeValue::Single(8.0)).unwrap();
        assert_eq!(field.control_attrs().get("value"), Some("8"));
    }

    #[test]
    fn set_value_rejects_non_finite_thumbs() {
        let mut field = multi_slider();
        let result = field.set_value(RangeValue::Multiple(vec![1.0, f64::NAN]));
        assert!(result.is_err());
        assert!(field.value.is_none());
    }

    #[cfg(feature = "locale")]
    #[test]
    fn submit_single_stores_single_value() {
        let mut field = slider();
        let report = field.submit(&RawInput::text("2.5"), &SubmitContext::new());

        assert!(report.is_empty());
        assert_eq!(field.value, Some(RangeValue::Single(2.5)));
    }

    #[cfg(feature = "locale")]
    #[test]
    fn submit_multiple_splits_and_validates_each_thumb() {
        let mut field = multi_slider();
        let report = field.submit(&RawInput::text("2,7.5"), &SubmitContext::new());

        assert!(report.is_empty());
        assert_eq!(field.value, Some(RangeValue::Multiple(vec![2.0, 7.5])));
    }

    #[cfg(feature = "locale")]
    #[test]
    fn submit_reports_out_of_range_thumbs_but_keeps_them() {
        let mut field = multi_slider();
        let report = field.submit(&RawInput::list(["0.5", "5"]), &SubmitContext::new());

        assert_eq!(field.value, Some(RangeValue::Multiple(vec![0.5, 5.0])));
        assert_eq!(report.len(), 1);
        assert_eq!(report.errors().errors()[0].code, "range");
        assert_eq!(
            report.errors().errors()[0].message,
            "Field `Volume` requires a value of `1` to `10` inclusive.",
        );
    }

    #[cfg(feature = "locale")]
    #[test]
    fn submit_empty_clears_silently() {
        let mut field = multi_slider();
        field
            .set_value(RangeValue::Multiple(vec![3.0, 4.0]))
            .unwrap();

        let report = field.submit(&RawInput::text(""), &SubmitContext::new());
        assert!(report.is_empty());
        assert_eq!(field.value, None);
    }

    #[test]
    fn serde_round_trip_with_multiple_values() {
        let mut field = multi_slider();
        field
            .set_value(RangeValue::Multiple(vec![2.0, 7.5]))
            .unwrap();

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["name"], "volume");
        assert_eq!(json["multiple"], true);
        assert_eq!(json["value"][0], 2.0);

        let back: RangeField = serde_json::from_value(json).unwrap();
        assert_eq!(back, field);
    }
}
