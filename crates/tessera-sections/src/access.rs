//! Total accessors for untyped configuration values.
//!
//! Section props arrive as arbitrary [`serde_json::Value`] trees authored by
//! hand. Every function in this module is defined for every input: missing
//! keys, `null`, and wrongly-typed values all map to an explicit fallback
//! instead of an error or a panic. Renderers use these accessors to build
//! their typed props once, up front.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tessera_sections::access::{as_string, get_nested, has_content};
//!
//! let props = json!({"hero": {"title": "Ship faster"}});
//! let fallback = json!("Untitled");
//!
//! assert_eq!(as_string(get_nested(&props, "hero.title", &fallback), ""), "Ship faster");
//! assert_eq!(get_nested(&props, "hero.title.text", &fallback), &fallback);
//! assert!(!has_content(&json!({})));
//! ```

use serde_json::{Map, Value};

use crate::section::Section;

/// Shared `null`, returned by reference when a lookup misses.
pub static NULL: Value = Value::Null;

/// Look up a dot-separated path through nested objects.
///
/// Returns `None` as soon as a segment is missing or the value being descended
/// into is not an object. An explicit `null` at the end of the path is a hit.
#[must_use]
pub fn lookup<'a>(obj: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(obj, |current, key| current.as_object()?.get(key))
}

/// Look up a dot-separated path, returning `default` on any miss.
///
/// `get_nested(&json!({"a": {"b": 5}}), "a.b.c", &fallback)` yields
/// `fallback` because `5` is not an object and cannot be descended into.
#[must_use]
pub fn get_nested<'a>(obj: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    lookup(obj, path).unwrap_or(default)
}

/// Look up a single key, returning `null` when `obj` is not an object or the
/// key is absent.
#[must_use]
pub fn field<'a>(obj: &'a Value, key: &str) -> &'a Value {
    obj.as_object().and_then(|map| map.get(key)).unwrap_or(&NULL)
}

/// Whether a value carries anything worth showing.
///
/// True for a string with non-whitespace characters, any number, any
/// boolean, a non-empty array, or an object with at least one key.
#[must_use]
pub fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Number(_) | Value::Bool(_) => true,
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// The elements of `value` if it is an array, otherwise an empty slice.
#[must_use]
pub fn as_array(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        _ => &[],
    }
}

/// String identity, numbers stringified, anything else yields `fallback`.
#[must_use]
pub fn as_string(value: &Value, fallback: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => fallback.to_owned(),
    }
}

/// Like [`as_string`], but an empty or whitespace-only result also yields
/// `fallback`.
#[must_use]
pub fn as_text(value: &Value, fallback: &str) -> String {
    let text = as_string(value, fallback);
    if text.trim().is_empty() {
        fallback.to_owned()
    } else {
        text
    }
}

/// Boolean identity; the literal strings `"true"` and `"false"` coerce.
#[must_use]
pub fn as_bool(value: &Value, fallback: bool) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) if s == "true" => true,
        Value::String(s) if s == "false" => false,
        _ => fallback,
    }
}

/// Non-negative integer coercion for counts such as columns and ratings.
///
/// Accepts integers, finite non-negative floats (truncated) and numeric
/// strings. Everything else is `None`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Keep the object items in which every required field has content.
#[must_use]
pub fn filter_valid_items<'a>(items: &'a Value, required_fields: &[&str]) -> Vec<&'a Value> {
    as_array(items)
        .iter()
        .filter(|item| {
            item.is_object()
                && required_fields
                    .iter()
                    .all(|key| has_content(field(item, key)))
        })
        .collect()
}

/// Overlay `actual` onto `defaults`, ignoring values without content.
///
/// Keys that only exist in `actual` are added when they carry content.
#[must_use]
pub fn merge_props(defaults: &Map<String, Value>, actual: &Value) -> Map<String, Value> {
    let mut merged = defaults.clone();
    if let Some(actual) = actual.as_object() {
        for (key, value) in actual {
            if has_content(value) {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

/// Join class name fragments, skipping blank ones.
#[must_use]
pub fn class_names<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The single gate applied before dispatch.
///
/// A section is renderable only when it declares a non-blank `type` and its
/// `props` is an object with at least one key.
#[must_use]
pub fn can_render_section(section: &Section) -> bool {
    !section.section_type.trim().is_empty()
        && section.props.is_object()
        && has_content(&section.props)
}
