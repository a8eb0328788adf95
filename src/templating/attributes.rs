//! HTML attribute collections.
//!
//! Templates receive an `attributes` value rendered from the caller's
//! `defaultAttributes`, which may be given either as a list of `[name, value]`
//! pairs or as a mapping. Both shapes normalize to the same ordered pairs, so
//! they produce identical markup.

use serde_json::Value;
use tera::escape_html;

/// Ordered attribute collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    pairs: Vec<(String, Value)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `[name, value]` pairs or a `name → value` mapping.
    ///
    /// `null` yields an empty collection. Any other shape, or a pair whose
    /// name is not a string, returns `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let mut attributes = Self::new();
        match value {
            Value::Null => {}
            Value::Object(map) => {
                for (name, value) in map {
                    attributes.set(name.clone(), value.clone());
                }
            }
            Value::Array(items) => {
                for item in items {
                    let pair = item.as_array()?;
                    match pair.as_slice() {
                        [Value::String(name), value] => attributes.set(name.clone(), value.clone()),
                        [Value::String(name)] => attributes.set(name.clone(), Value::Bool(true)),
                        _ => return None,
                    }
                }
            }
            _ => return None,
        }
        Some(attributes)
    }

    /// Set `name`, keeping the position of an earlier value with the same name.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        if let Some(existing) = self.pairs.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.pairs.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.pairs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// The normalized `[name, value]` pairs.
    pub fn pairs(&self) -> &[(String, Value)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as markup, each attribute preceded by a space (` class="a b" hidden`).
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.pairs {
            match value {
                Value::Null | Value::Bool(false) => {}
                Value::Bool(true) => {
                    out.push(' ');
                    out.push_str(&escape_html(name));
                }
                other => {
                    let Some(text) = attribute_text(other) else {
                        tracing::debug!("Skipping attribute '{}' with non-scalar value", name);
                        continue;
                    };
                    out.push(' ');
                    out.push_str(&escape_html(name));
                    out.push_str("=\"");
                    out.push_str(&escape_html(&text));
                    out.push('"');
                }
            }
        }
        out
    }
}

fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::Array(_) | Value::Object(_) | Value::Null => None,
                    scalar => attribute_text(scalar),
                })
                .collect::<Vec<_>>()
                .join(" "),
        ),
        _ => None,
    }
}
