//! Assembly of HTML control attributes.
//!
//! Fields produce their attribute surface as an ordered list of
//! name/value pairs. Turning the list into markup stays with the
//! consumer's templating layer; the [`std::fmt::Display`] impl exists for
//! the common case of dropping the pairs into an `<input ...>` tag as-is.

use std::borrow::Cow;
use std::fmt;

/// Renders a float the way HTML numeric attributes expect: whole numbers
/// without a decimal point (`42`, not `42.0`), fractions as typed
/// (`0.5`), no exponent notation for any value in form range.
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

/// An ordered list of control attributes.
///
/// Order is insertion order, so assembled output is stable for snapshot
/// assertions and template diffs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrList(Vec<(Cow<'static, str>, String)>);

impl AttrList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute.
    pub fn push(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// Appends a numeric attribute via [`format_number`].
    pub fn push_number(&mut self, name: impl Into<Cow<'static, str>>, value: f64) {
        self.push(name, format_number(value));
    }

    /// Appends a boolean attribute, rendered `name="name"`.
    pub fn push_flag(&mut self, name: &'static str) {
        self.push(name, name);
    }

    /// Appends `value` under `name` when it is set.
    pub fn push_opt(&mut self, name: impl Into<Cow<'static, str>>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// The first value recorded under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_ref(), value.as_str()))
    }
}

impl IntoIterator for AttrList {
    type Item = (Cow<'static, str>, String);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for AttrList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}=\"{}\"", escape(value))?;
        }
        Ok(())
    }
}

/// Minimal escaping for double-quoted attribute values.
fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
