//! Utility functions for building render contexts.

use serde_json::{Map, Value};

/// Merge a caller context over configured global values.
///
/// The merge is shallow: a top-level key supplied by the caller replaces the
/// global value entirely. A `null` context counts as empty; a non-object
/// context is ignored (with a debug log) because templates can only address
/// named variables.
///
/// # Examples
///
/// ```rust,no_run
/// use serde_json::json;
/// use twig_bundle::templating::merge_context;
///
/// let globals = json!({ "theme": "olivero", "site": { "name": "Demo" } });
/// let merged = merge_context(globals.as_object().unwrap(), &json!({ "site": { "slogan": "x" } }));
/// // merged: { "theme": "olivero", "site": { "slogan": "x" } }
/// ```
pub fn merge_context(globals: &Map<String, Value>, context: &Value) -> Map<String, Value> {
    let mut merged = globals.clone();
    match context {
        Value::Object(overrides) => {
            for (key, value) in overrides {
                merged.insert(key.clone(), value.clone());
            }
        }
        Value::Null => {}
        other => {
            tracing::debug!("Ignoring non-object render context: {}", other);
        }
    }
    merged
}
