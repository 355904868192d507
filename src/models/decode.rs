//! Forgiving decoding for marketplace API responses.
//!
//! Field decoders for `deserialize_with`, plus the `{ "data": ... }`
//! envelope unwrapping shared by every model the API returns.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{AppError, Result};

/// Decode a list response: the `{ "data": [...] }` envelope or a bare array.
///
/// A missing or `null` `data` field is an empty list. Entries that are not
/// JSON objects, or that fail to decode, are skipped with a warning.
pub fn collection<T: DeserializeOwned>(body: &str, context: &str) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(body)?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                return Err(AppError::fetch(
                    format!("{context} collection"),
                    format!("`data` is not an array: {other}"),
                ));
            }
        },
        other => {
            return Err(AppError::fetch(
                format!("{context} collection"),
                format!("unexpected response shape: {other}"),
            ));
        }
    };

    let mut decoded = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            log::warn!("Skipping {context} entry {index}: not a JSON object");
            continue;
        }
        match serde_json::from_value::<T>(item) {
            Ok(entry) => decoded.push(entry),
            Err(e) => log::warn!("Skipping {context} entry {index}: {e}"),
        }
    }
    Ok(decoded)
}

/// Decode a single-object response (`{ "data": {...} }` or a bare object).
pub fn single<T: DeserializeOwned>(body: &str, context: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)?;
    let item = match value {
        Value::Object(mut map) => match map.remove("data") {
            Some(data @ Value::Object(_)) => data,
            Some(_) => return Err(AppError::fetch(context, "`data` is not an object")),
            None => Value::Object(map),
        },
        other => {
            return Err(AppError::fetch(
                context,
                format!("unexpected response shape: {other}"),
            ));
        }
    };
    Ok(serde_json::from_value(item)?)
}

pub fn string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // MongoDB extended JSON: { "$oid": "..." }
        Value::Object(map) => match map.get("$oid") {
            Some(Value::String(oid)) => oid.clone(),
            _ => String::new(),
        },
        _ => String::new(),
    })
}

pub fn optional_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        // MongoDB extended JSON: { "$date": "..." }
        Value::Object(map) => match map.get("$date") {
            Some(Value::String(date)) => Some(date.clone()),
            _ => None,
        },
        _ => None,
    })
}

/// A non-negative finite number. Numeric strings are accepted and a leading
/// `$` is ignored.
pub fn amount<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_start_matches('$').parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|a| a.is_finite() && *a >= 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Entry {
        #[serde(default, deserialize_with = "string")]
        name: String,
    }

    #[test]
    fn test_collection_skips_non_objects() {
        let entries: Vec<Entry> =
            collection(r#"{ "data": [ { "name": "a" }, 7, { "name": 3 } ] }"#, "entry").unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "3"]);
    }

    #[test]
    fn test_collection_error_names_context() {
        let err = collection::<Entry>(r#"{ "data": {} }"#, "review").unwrap_err();
        assert!(err.to_string().contains("review collection"));
    }

    #[test]
    fn test_single_unwraps_envelope() {
        let entry: Entry = single(r#"{ "data": { "name": "x" } }"#, "entry").unwrap();
        assert_eq!(entry.name, "x");
        assert!(single::<Entry>(r#"{ "data": [] }"#, "entry").is_err());
    }
}
