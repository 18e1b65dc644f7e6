//! Forgiving field decoders.
//!
//! Sheet forms submit numbers as strings, leave fields empty, or store
//! `null`. These decoders accept all of that and fall back to `None` or
//! the type's default instead of rejecting the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Integer from a number, a numeric string, or nothing.
pub(crate) fn int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_int))
}

/// Non-empty string; numbers are stringified.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_string))
}

/// Boolean from a bool, "true"/"false", or 1/0.
pub(crate) fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(as_bool))
}

/// Any structured field; malformed content becomes `T::default()`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(T::deserialize(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring malformed document field");
        T::default()
    }))
}

/// A list whose malformed entries are dropped individually.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(Value::Array(entries)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| match T::deserialize(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(error = %e, "Dropping malformed list entry");
                None
            }
        })
        .collect())
}

pub(crate) fn as_int(value: &Value) -> Option<i32> {
    let wide = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }?;
    i32::try_from(wide).ok()
}

fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "int")]
        number: Option<i32>,
        #[serde(default, deserialize_with = "string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "boolean")]
        flag: Option<bool>,
    }

    fn probe(value: Value) -> Probe {
        serde_json::from_value(value).expect("lenient probe decodes")
    }

    #[test]
    fn ints_from_numbers_and_strings() {
        assert_eq!(probe(json!({"number": 14})).number, Some(14));
        assert_eq!(probe(json!({"number": "14"})).number, Some(14));
        assert_eq!(probe(json!({"number": " 7 "})).number, Some(7));
        assert_eq!(probe(json!({"number": 12.9})).number, Some(12));
        assert_eq!(probe(json!({"number": "lots"})).number, None);
        assert_eq!(probe(json!({"number": null})).number, None);
        assert_eq!(probe(json!({"number": [1]})).number, None);
        assert_eq!(probe(json!({})).number, None);
    }

    #[test]
    fn out_of_range_ints_are_dropped() {
        assert_eq!(probe(json!({"number": 9_999_999_999_i64})).number, None);
    }

    #[test]
    fn blank_strings_are_absent() {
        assert_eq!(probe(json!({"text": "  "})).text, None);
        assert_eq!(probe(json!({"text": 6})).text.as_deref(), Some("6"));
        assert_eq!(probe(json!({"text": "1d8"})).text.as_deref(), Some("1d8"));
    }

    #[test]
    fn booleans_from_form_values() {
        assert_eq!(probe(json!({"flag": true})).flag, Some(true));
        assert_eq!(probe(json!({"flag": "true"})).flag, Some(true));
        assert_eq!(probe(json!({"flag": 0})).flag, Some(false));
        assert_eq!(probe(json!({"flag": "maybe"})).flag, None);
    }
}
