//! Tolerant field readers for the configuration document.
//!
//! Used through `#[serde(deserialize_with = "...")]`. A field of the wrong
//! shape reads as its default instead of failing the whole document, the
//! same way section props are read by the renderers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tessera_sections::access::{as_array, as_bool, as_string};

/// Text, with numbers stringified. Anything else is empty.
pub(crate) fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(as_string(&Value::deserialize(deserializer)?, ""))
}

/// Text, with numbers stringified. Anything else is `None`.
pub(crate) fn opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(_) | Value::Number(_) => Some(as_string(&value, "")),
        _ => None,
    })
}

/// Boolean or `"true"`/`"false"`. Anything else is `false`.
pub(crate) fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(as_bool(&Value::deserialize(deserializer)?, false))
}

/// Boolean or `"true"`/`"false"`. Anything else is `None`.
pub(crate) fn opt_flag<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let (when_true, when_false) = (as_bool(&value, true), as_bool(&value, false));
    Ok((when_true == when_false).then_some(when_true))
}

/// A nested block. Non-objects are `None`.
pub(crate) fn opt_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(convert(value))
}

/// A list. Non-arrays are empty and unreadable entries are dropped.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(entries(&value))
}

/// A list that may be absent. Non-arrays are `None`.
pub(crate) fn opt_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.is_array().then(|| entries(&value)))
}

fn entries<T: DeserializeOwned>(value: &Value) -> Vec<T> {
    as_array(value).iter().cloned().filter_map(convert).collect()
}

fn convert<T: DeserializeOwned>(value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(converted) => Some(converted),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable configuration entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "string")]
        name: String,
        #[serde(default, deserialize_with = "opt_string")]
        label: Option<String>,
        #[serde(default, deserialize_with = "flag")]
        enabled: bool,
        #[serde(default, deserialize_with = "opt_flag")]
        sticky: Option<bool>,
        #[serde(default, deserialize_with = "list")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "opt_object")]
        child: Option<Box<Sample>>,
    }

    fn sample(value: Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_well_typed_fields() {
        let parsed = sample(json!({
            "name": "Acme",
            "label": 7,
            "enabled": true,
            "sticky": "false",
            "tags": ["a", "b"],
            "child": {"name": "inner"}
        }));
        assert_eq!(parsed.name, "Acme");
        assert_eq!(parsed.label.as_deref(), Some("7"));
        assert!(parsed.enabled);
        assert_eq!(parsed.sticky, Some(false));
        assert_eq!(parsed.tags, vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(parsed.child.unwrap().name, "inner");
    }

    #[test]
    fn test_mistyped_fields_fall_back() {
        let parsed = sample(json!({
            "name": {"nested": true},
            "label": [],
            "enabled": "yes",
            "sticky": 1,
            "tags": ["ok", {"bad": 1}, 3],
            "child": "not an object"
        }));
        assert_eq!(
            parsed,
            Sample {
                tags: vec!["ok".to_owned()],
                ..Default::default()
            }
        );
    }
}
