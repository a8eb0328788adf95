//! Drupal-flavoured Tera extensions.
//!
//! Templates written for Drupal themes lean on a handful of helpers that plain
//! Tera does not ship. Every instantiated module installs them:
//!
//! - `clean_class` filter: `{{ "Primary Menu" | clean_class }}` → `primary-menu`
//! - `clean_id` filter: `{{ "edit[field]" | clean_id }}` → `edit-field`
//! - `t` filter: pass-through translation with `@placeholder` substitution,
//!   `{{ "Hello @name" | t(name=user) }}`
//! - `without` filter: drop keys from a mapping, `{{ content | without(key="links") }}`
//! - `create_attribute` function: `<div{{ create_attribute(attributes=attrs) }}>`

use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;
use tera::Tera;

use super::attributes::Attributes;

static INVALID_CLASS_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\-\x{00A0}-\x{FFFF}]").expect("valid class regex"));
static INVALID_ID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\-_]").expect("valid id regex"));
static REPEATED_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\-+").expect("valid hyphen regex"));

/// Register every built-in extension on `tera`.
pub fn register_drupal_extensions(tera: &mut Tera) {
    tera.register_filter("clean_class", clean_class_filter);
    tera.register_filter("clean_id", clean_id_filter);
    tera.register_filter("t", translate_filter);
    tera.register_filter("without", without_filter);
    tera.register_function("create_attribute", create_attribute_function);
}

/// Turn arbitrary text into a valid CSS class name.
pub fn clean_class(input: &str) -> String {
    let lowered = input.to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| match c {
            ' ' | '_' | '/' | '[' => '-',
            ']' => '\0',
            c => c,
        })
        .filter(|c| *c != '\0')
        .collect();
    INVALID_CLASS_CHARS.replace_all(&replaced, "").into_owned()
}

/// Turn arbitrary text into a valid HTML id.
pub fn clean_id(input: &str) -> String {
    let lowered = input.to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| match c {
            ' ' | '_' | '[' => '-',
            ']' => '\0',
            c => c,
        })
        .filter(|c| *c != '\0')
        .collect();
    let stripped = INVALID_ID_CHARS.replace_all(&replaced, "");
    REPEATED_HYPHENS.replace_all(&stripped, "-").into_owned()
}

fn expect_string<'a>(filter: &str, value: &'a Value) -> tera::Result<&'a str> {
    value.as_str().ok_or_else(|| {
        tera::Error::msg(format!("Filter `{filter}` expects a string, got {value}"))
    })
}

fn clean_class_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(clean_class(expect_string("clean_class", value)?)))
}

fn clean_id_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(clean_id(expect_string("clean_id", value)?)))
}

fn translate_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let mut text = expect_string("t", value)?.to_string();

    // Longest names first so `@name` does not clobber `@name_full`.
    let mut names: Vec<&String> = args.keys().collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    for name in names {
        let replacement = match &args[name] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        text = text.replace(&format!("@{name}"), &replacement);
    }
    Ok(Value::String(text))
}

fn without_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let Value::Object(map) = value else {
        return Ok(value.clone());
    };

    let mut keys: Vec<&str> = Vec::new();
    if let Some(key) = args.get("key").and_then(Value::as_str) {
        keys.push(key);
    }
    if let Some(list) = args.get("keys").and_then(Value::as_array) {
        keys.extend(list.iter().filter_map(Value::as_str));
    }

    let mut filtered = map.clone();
    for key in keys {
        filtered.remove(key);
    }
    Ok(Value::Object(filtered))
}

fn create_attribute_function(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let source = args.get("attributes").unwrap_or(&Value::Null);
    let attributes = Attributes::from_value(source).ok_or_else(|| {
        tera::Error::msg(
            "`create_attribute` expects `attributes` to be a mapping or a list of [name, value] pairs",
        )
    })?;
    Ok(Value::String(attributes.render()))
}
