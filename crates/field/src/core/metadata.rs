// =============================================================================
// Field Metadata - identification and presentation shared by all fields
// =============================================================================
//!
//! Metadata carries everything a field needs besides its type-specific
//! options: the control name, label, and the presentation flags that map
//! onto common HTML input attributes.

use bon::bon;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::core::FieldError;
use crate::core::attrs::AttrList;
use crate::core::name::FieldName;

/// Core metadata for all fields.
///
/// # Examples
///
/// ```
/// use formwork_field::FieldMetadata;
///
/// let metadata = FieldMetadata::builder()
///     .name("unit_price")
///     .label("Unit price")
///     .required(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(metadata.name.as_str(), "unit_price");
/// assert!(metadata.is_required());
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Control name, sent to the browser and back verbatim.
    pub name: FieldName,

    /// Human-readable label. Falls back to the name in error messages.
    pub label: Option<String>,

    /// Advisory title (the HTML `title` attribute).
    pub title: Option<String>,

    /// Whether submitting an empty value is an error.
    ///
    /// The paired validators themselves stay silent on empty input; the
    /// form drives its required check off this flag.
    #[serde(default)]
    pub required: bool,

    /// Renders the control disabled; disabled controls do not submit.
    #[serde(default)]
    pub disabled: bool,

    /// Renders the control read-only.
    #[serde(default)]
    pub read_only: bool,

    /// Requests focus on page load.
    #[serde(default)]
    pub auto_focus: bool,

    /// Keyboard shortcut (the HTML `accesskey` attribute).
    pub access_key: Option<char>,

    /// Tab order (the HTML `tabindex` attribute).
    pub tab_index: Option<i32>,

    /// Extra CSS classes for the control.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css_classes: Vec<String>,

    /// Extra attributes rendered onto the control verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub control_attrs: Vec<(String, String)>,
}

#[bon]
impl FieldMetadata {
    /// Creates metadata, validating the control name.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidName`] if the name is not a valid
    /// control name.
    #[builder]
    pub fn new(
        name: impl Into<String>,
        #[builder(into)] label: Option<String>,
        #[builder(into)] title: Option<String>,
        #[builder(default = false)] required: bool,
        #[builder(default = false)] disabled: bool,
        #[builder(default = false)] read_only: bool,
        #[builder(default = false)] auto_focus: bool,
        access_key: Option<char>,
        tab_index: Option<i32>,
        #[builder(default)] css_classes: Vec<String>,
        #[builder(default)] control_attrs: Vec<(String, String)>,
    ) -> Result<Self, FieldError> {
        Ok(Self {
            name: FieldName::new(name.into())?,
            label,
            title,
            required,
            disabled,
            read_only,
            auto_focus,
            access_key,
            tab_index,
            css_classes,
            control_attrs,
        })
    }
}

// =============================================================================
// Helper methods
// =============================================================================

impl FieldMetadata {
    /// The control name as a string slice.
    #[inline]
    #[must_use]
    pub fn name_str(&self) -> &str {
        self.name.as_str()
    }

    /// The label when set, otherwise the control name. This is what error
    /// messages substitute for the field placeholder.
    #[inline]
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.name.as_str())
    }

    /// Whether submitting an empty value is an error.
    #[inline]
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the control renders disabled.
    #[inline]
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Appends the metadata-driven attributes shared by every control:
    /// boolean flags, `accesskey`, `tabindex`, `class`, and the verbatim
    /// extra attributes, in that order.
    pub fn extend_attrs(&self, attrs: &mut AttrList) {
        if self.required {
            attrs.push_flag("required");
        }
        if self.disabled {
            attrs.push_flag("disabled");
        }
        if self.read_only {
            attrs.push_flag("readonly");
        }
        if self.auto_focus {
            attrs.push_flag("autofocus");
        }
        if let Some(access_key) = self.access_key {
            attrs.push("accesskey", access_key.to_string());
        }
        if let Some(tab_index) = self.tab_index {
            attrs.push("tabindex", tab_index.to_string());
        }
        if !self.css_classes.is_empty() {
            attrs.push("class", self.css_classes.join(" "));
        }
        for (name, value) in &self.control_attrs {
            attrs.push(name.clone(), value.clone());
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
