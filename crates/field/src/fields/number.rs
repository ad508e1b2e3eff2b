use serde::{Deserialize, Serialize};

use crate::core::{
    AttrList, FieldError, FieldKind, FieldMetadata, FieldType, HasValue, InputMode, MinMaxStep,
    Step, SubmitContext, format_number,
};
use crate::validators::{NumberValidator, SubmitValidator, ValidationReport};

/// Field for a numeric text input (`<input type="number">`).
///
/// # Examples
///
/// ```
/// use formwork_field::fields::{NumberField, NumberFieldOptions};
/// use formwork_field::{FieldMetadata, FieldType, Step};
///
/// # fn main() -> Result<(), formwork_field::FieldError> {
/// let field = NumberField::builder()
///     .metadata(FieldMetadata::builder().name("age").label("Age").build()?)
///     .options(NumberFieldOptions::builder().min(0.0).max(150.0).step(Step::Of(1.0)).build())
///     .default(18.0)
///     .build();
///
/// assert_eq!(field.name().as_str(), "age");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct NumberField {
    #[serde(flatten)]
    /// Field metadata including name, label, and presentation flags.
    pub metadata: FieldMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Value rendered when nothing was submitted yet.
    pub default: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Current value, set by [`NumberField::submit`] or directly.
    pub value: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Configuration options for this field type.
    pub options: Option<NumberFieldOptions>,
}

/// Configuration options for number fields.
///
/// # Examples
///
/// ```
/// use formwork_field::fields::NumberFieldOptions;
/// use formwork_field::Step;
///
/// let options = NumberFieldOptions::builder()
///     .min(0.0)
///     .max(100.0)
///     .step(Step::Of(0.5))
///     .placeholder("0.0")
///     .build();
///
/// assert_eq!(options.min, Some(0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct NumberFieldOptions {
    /// Minimum allowed value (the HTML `min` attribute).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Maximum allowed value (the HTML `max` attribute).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Step increment for the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<Step>,

    /// `id` of a `<datalist>` with suggested values.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub list: Option<String>,

    /// Placeholder text shown in the empty control.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub placeholder: Option<String>,

    /// The HTML `autocomplete` token.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub autocomplete: Option<String>,

    /// Explicit virtual keyboard hint; derived from the step when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<InputMode>,
}

impl FieldType for NumberField {
    fn kind(&self) -> FieldKind {
        FieldKind::Number
    }

    fn metadata(&self) -> &FieldMetadata {
        &self.metadata
    }
}

impl std::fmt::Display for NumberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NumberField({})", self.metadata.name)
    }
}

impl HasValue for NumberField {
    type Value = f64;

    fn value(&self) -> Option<&f64> {
        self.value.as_ref()
    }

    fn value_mut(&mut self) -> Option<&mut f64> {
        self.value.as_mut()
    }

    fn set_value(&mut self, value: f64) -> Result<(), FieldError> {
        if !value.is_finite() {
            return Err(FieldError::invalid_value(
                self.metadata.name_str(),
                "value must be a finite number",
            ));
        }
        self.value = Some(value);
        Ok(())
    }

    fn clear_value(&mut self) {
        self.value = None;
    }

    fn take_value(&mut self) -> Option<f64> {
        self.value.take()
    }

    fn default_value(&self) -> Option<&f64> {
        self.default.as_ref()
    }
}

impl MinMaxStep for NumberField {
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

impl NumberField {
    /// The virtual keyboard hint for the control.
    ///
    /// An explicit option wins; otherwise the step decides: a whole step
    /// means integers only, so the plain numeric keyboard suffices, while
    /// a fractional, `any`, or absent step needs the decimal one.
    #[must_use]
    pub fn effective_input_mode(&self) -> InputMode {
        if let Some(mode) = self.options.as_ref().and_then(|opts| opts.input_mode) {
            return mode;
        }
        match self.step() {
            Some(step) if !step.is_fractional() => InputMode::Numeric,
            _ => InputMode::Decimal,
        }
    }

    /// The validator this field pairs with, configured from the field's
    /// constraints and the submitting client's parser settings.
    #[must_use]
    pub fn validator(&self, context: &SubmitContext) -> NumberValidator {
        NumberValidator::builder()
            .maybe_min(self.min())
            .maybe_max(self.max())
            .maybe_step(self.step())
            .context(context.clone())
            .build()
    }

    /// Accepts one submitted raw value: validates it, stores the result
    /// (clearing the value when nothing parsed), and returns the report.
    ///
    /// For custom message catalogs, run [`NumberField::validator`] against
    /// a [`ValidationReport::with_messages`](crate::validators::ValidationReport::with_messages)
    /// report instead.
    pub fn submit(&mut self, raw: &str, context: &SubmitContext) -> ValidationReport {
        let mut report = ValidationReport::new(self.metadata.display_label());
        self.value = self.validator(context).validate(raw, &mut report);
        tracing::debug!(
            field = self.metadata.name_str(),
            value = ?self.value,
            errors = report.len(),
            "number field submit",
        );
        report
    }

    /// Assembles the control's HTML attributes. The default value renders
    /// when no value is set.
    #[must_use]
    pub fn control_attrs(&self) -> AttrList {
        let mut attrs = AttrList::new();
        attrs.push("type", self.kind().as_str());
        attrs.push("name", self.metadata.name_str());
        attrs.push("id", self.metadata.name_str());
        if let Some(value) = self.value.or(self.default) {
            attrs.push("value", format_number(value));
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
        attrs.push_opt("placeholder", options.and_then(|opts| opts.placeholder.as_deref()));
        attrs.push_opt("autocomplete", options.and_then(|opts| opts.autocomplete.as_deref()));
        attrs.push("inputmode", self.effective_input_mode().as_str());
        self.metadata.extend_attrs(&mut attrs);
        attrs
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn field() -> NumberField {
        NumberField::builder()
            .metadata(
                FieldMetadata::builder()
                    .name("quantity")
                    .label("Quantity")
                    .build()
                    .unwrap(),
            )
            .options(
                NumberFieldOptions::builder()
                    .min(1.0)
                    .max(100.0)
                    .step(Step::Of(1.0))
                    .build(),
            )
            .build()
    }

    #[test]
    fn kind_and_name() {
        let field = field();
        assert_eq!(field.kind(), FieldKind::Number);
        assert_eq!(field.name().as_str(), "quantity");
        assert_eq!(field.to_string(), "NumberField(quantity)");
    }

    #[test]
    fn set_value_rejects_non_finite() {
        let mut field = field();
        assert!(field.set_value(42.0).is_ok());
        assert_eq!(field.value(), Some(&42.0));

        assert!(field.set_value(f64::NAN).is_err());
        assert!(field.set_value(f64::INFINITY).is_err());
        // The stored value survives a rejected set.
        assert_eq!(field.value(), Some(&42.0));
    }

    #[test]
    fn value_or_default_prefers_current() {
        let mut field = field();
        field.default = Some(5.0);
        assert_eq!(field.value_or_default(), Some(&5.0));

        field.set_value(9.0).unwrap();
        assert_eq!(field.value_or_default(), Some(&9.0));

        field.clear_value();
        assert_eq!(field.value_or_default(), Some(&5.0));
    }

    #[test]
    fn min_max_step_setters_create_options_on_demand() {
        let mut field = NumberField::builder()
            .metadata(FieldMetadata::builder().name("plain").build().unwrap())
            .build();
        assert!(field.options.is_none());
        assert!(!field.has_bounds());

        field.set_min(Some(2.0));
        field.set_step(Some(Step::Any));
        assert_eq!(field.min(), Some(2.0));
        assert_eq!(field.step(), Some(Step::Any));
        assert!(field.has_bounds());
    }

    #[rstest]
    #[case(None, InputMode::Decimal)]
    #[case(Some(Step::Any), InputMode::Decimal)]
    #[case(Some(Step::Of(0.25)), InputMode::Decimal)]
    #[case(Some(Step::Of(1.0)), InputMode::Numeric)]
    #[case(Some(Step::Of(5.0)), InputMode::Numeric)]
    fn input_mode_follows_step(#[case] step: Option<Step>, #[case] expected: InputMode) {
        let mut field = field();
        field.set_step(step);
        assert_eq!(field.effective_input_mode(), expected);
    }

    #[test]
    fn explicit_input_mode_wins() {
        let mut field = field();
        field.set_step(Some(Step::Of(1.0)));
        field.options.as_mut().unwrap().input_mode = Some(InputMode::Decimal);
        assert_eq!(field.effective_input_mode(), InputMode::Decimal);
    }

    #[cfg(feature = "locale")]
    #[test]
    fn submit_stores_valid_value() {
        let mut field = field();
        let report = field.submit("42", &SubmitContext::new());

        assert!(report.is_empty());
        assert_eq!(field.value, Some(42.0));
    }

    #[cfg(feature = "locale")]
    #[test]
    fn submit_clears_value_on_parse_failure() {
        let mut field = field();
        field.set_value(7.0).unwrap();

        let report = field.submit("not a number", &SubmitContext::new());
        assert_eq!(field.value, None);
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.errors().errors()[0].message,
            "Field `Quantity` requires a valid number.",
        );
    }

    #[cfg(feature = "locale")]
    #[test]
    fn submit_keeps_out_of_range_value_and_reports() {
        let mut field = field();
        let report = field.submit("500", &SubmitContext::new());

        assert_eq!(field.value, Some(500.0));
        assert_eq!(report.len(), 1);
        assert_eq!(report.errors().errors()[0].code, "range");
    }

    #[cfg(feature = "locale")]
    #[test]
    fn submit_empty_clears_silently() {
        let mut field = field();
        field.set_value(7.0).unwrap();

        let report = field.submit("", &SubmitContext::new());
        assert_eq!(field.value, None);
        assert!(report.is_empty());
    }

    #[cfg(feature = "locale")]
    #[test]
    fn submit_uses_client_locale() {
        let mut field = field();
        let context = SubmitContext::builder()
            .language("de")
            .prefer_locale_parsing(true)
            .build();

        let report = field.submit("1,5", &context);
        assert_eq!(field.value, Some(1.5));
        // 1.5 violates the whole step but stays stored.
        assert_eq!(report.errors().errors()[0].code, "divisible");
    }

    #[test]
    fn control_attrs_full_assembly() {
        let mut field = field();
        field.value = Some(2.5);
        field.metadata.required = true;

        assert_eq!(
            field.control_attrs().to_string(),
            r#"type="number" name="quantity" id="quantity" value="2.5" min="1" max="100" step="1" inputmode="numeric" required="required""#,
        );
    }

    #[test]
    fn control_attrs_omit_unset_pieces() {
        let field = NumberField::builder()
            .metadata(FieldMetadata::builder().name("plain").build().unwrap())
            .build();
        let attrs = field.control_attrs();

        assert_eq!(attrs.get("type"), Some("number"));
        assert_eq!(attrs.get("min"), None);
        assert_eq!(attrs.get("value"), None);
        assert_eq!(attrs.get("inputmode"), Some("decimal"));
    }

    #[test]
    fn control_attrs_fall_back_to_the_default_value() {
        let mut field = field();
        field.default = Some(10.0);
        assert_eq!(field.control_attrs().get("value"), Some("10"));

        field.set_value(3.0).unwrap();
        assert_eq!(field.control_attrs().get("value"), Some("3"));
    }

    #[test]
    fn control_attrs_render_option_extras() {
        let mut field = field();
        field.options.as_mut().unwrap().list = Some("qty-choices".to_string());
        field.options.as_mut().unwrap().placeholder = Some("enter amount".to_string());

        let attrs = field.control_attrs();
        assert_eq!(attrs.get("list"), Some("qty-choices"));
        assert_eq!(attrs.get("placeholder"), Some("enter amount"));
    }

    #[test]
    fn serde_flattens_metadata() {
        let field = field();
        let json = serde_json::to_value(&field).unwrap();

        assert_eq!(json["name"], "quantity");
        assert_eq!(json["label"], "Quantity");
        assert_eq!(json["options"]["min"], 1.0);

        let back: NumberField = serde_json::from_value(json).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn require_value_names_the_field() {
        let field = field();
        let error = field.require_value().unwrap_err();
        assert!(error.to_string().contains("quantity"));
    }
}
