//! Attribute assembly from configured fields.
//!
//! What these tests pin down is the exact attribute surface a template
//! layer receives: ordering, the XHTML-style boolean flags, escaping,
//! and the pieces that only appear when configured.

use formwork_field::prelude::*;

fn metadata(name: &str) -> FieldMetadata {
    FieldMetadata::builder().name(name).build().unwrap()
}

#[test]
fn test_number_attrs_complete_ordering() {
    let field = NumberField::builder()
        .metadata(
            FieldMetadata::builder()
                .name("amount")
                .required(true)
                .tab_index(4)
                .css_classes(vec!["money".to_string()])
                .build()
                .unwrap(),
        )
        .options(
            NumberFieldOptions::builder()
                .min(0.5)
                .max(9.5)
                .step(Step::Of(0.5))
                .placeholder("0.0")
                .build(),
        )
        .default(1.5)
        .build();

    assert_eq!(
        field.control_attrs().to_string(),
        r#"type="number" name="amount" id="amount" value="1.5" min="0.5" max="9.5" step="0.5" placeholder="0.0" inputmode="decimal" required="required" tabindex="4" class="money""#,
    );
}

#[test]
fn test_minimal_number_attrs() {
    let field = NumberField::builder().metadata(metadata("n")).build();

    assert_eq!(
        field.control_attrs().to_string(),
        r#"type="number" name="n" id="n" inputmode="decimal""#,
    );
}

#[test]
fn test_step_any_renders_the_keyword() {
    let mut field = NumberField::builder().metadata(metadata("n")).build();
    field.set_step(Some(Step::Any));

    assert_eq!(field.control_attrs().get("step"), Some("any"));
}

#[test]
fn test_inputmode_tracks_the_step() {
    let mut field = NumberField::builder().metadata(metadata("n")).build();

    field.set_step(Some(Step::Of(1.0)));
    assert_eq!(field.control_attrs().get("inputmode"), Some("numeric"));

    field.set_step(Some(Step::Of(0.1)));
    assert_eq!(field.control_attrs().get("inputmode"), Some("decimal"));
}

#[test]
fn test_attribute_values_are_escaped_on_render() {
    let field = NumberField::builder()
        .metadata(
            FieldMetadata::builder()
                .name("n")
                .control_attrs(vec![(
                    "data-hint".to_string(),
                    r#"1 < 2 & "quotes""#.to_string(),
                )])
                .build()
                .unwrap(),
        )
        .build();

    let rendered = field.control_attrs().to_string();
    assert!(
        rendered.contains(r#"data-hint="1 &lt; 2 &amp; &quot;quotes&quot;""#),
        "rendered: {rendered}"
    );

    // Lookup still sees the raw value; only rendering escapes.
    assert_eq!(
        field.control_attrs().get("data-hint"),
        Some(r#"1 < 2 & "quotes""#),
    );
}

#[test]
fn test_range_single_vs_multiple_name() {
    let single = RangeField::builder().metadata(metadata("volume")).build();
    assert_eq!(single.control_attrs().get("name"), Some("volume"));
    assert_eq!(single.control_attrs().get("multiple"), None);
    assert_eq!(single.control_attrs().get("data-value"), None);

    let mut multiple = RangeField::builder()
        .metadata(metadata("volume"))
        .multiple(true)
        .build();
    multiple
        .set_value(RangeValue::Multiple(vec![1.0, 9.0]))
        .unwrap();

    let attrs = multiple.control_attrs();
    assert_eq!(attrs.get("name"), Some("volume[]"));
    assert_eq!(attrs.get("multiple"), Some("multiple"));
    assert_eq!(attrs.get("data-value"), Some("1,9"));
}

#[test]
fn test_range_has_no_inputmode() {
    let field = RangeField::builder().metadata(metadata("volume")).build();
    assert_eq!(field.control_attrs().get("inputmode"), None);
}

#[test]
fn test_disabled_and_readonly_flags() {
    let field = NumberField::builder()
        .metadata(
            FieldMetadata::builder()
                .name("n")
                .disabled(true)
                .read_only(true)
                .build()
                .unwrap(),
        )
        .build();

    let rendered = field.control_attrs().to_string();
    assert!(rendered.contains(r#"disabled="disabled""#));
    assert!(rendered.contains(r#"readonly="readonly""#));
}

#[test]
fn test_whole_number_formatting_drops_the_fraction() {
    let mut field = NumberField::builder().metadata(metadata("n")).build();
    field.set_value(42.0).unwrap();
    assert_eq!(field.control_attrs().get("value"), Some("42"));

    field.set_value(42.5).unwrap();
    assert_eq!(field.control_attrs().get("value"), Some("42.5"));
}
