//! Tolerant deserializers for fields written by a language model or a form.
//!
//! Model output drifts between numbers and strings, arrays and comma lists.
//! These helpers accept the common variants instead of rejecting the payload.

use log::warn;
use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Accepts an array (of strings, numbers, or objects), a comma-separated
/// string, a checkbox-style object, a single scalar, or null. Never fails.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(to_string_list(Value::deserialize(deserializer)?))
}

/// Value form of [`string_list`].
///
/// An object with a `name` or `title` is one item. Any other object is read
/// as a checkbox map (`{"Math": true, "Art": false}`) and yields the keys
/// whose values are set.
pub(crate) fn to_string_list(value: Value) -> Vec<String> {
    match value {
        Value::Null | Value::Bool(_) => Vec::new(),
        Value::String(s) => split_list(&s),
        Value::Number(n) => vec![n.to_string()],
        Value::Array(items) => items.iter().filter_map(value_to_text).collect(),
        Value::Object(map) => match name_or_title(&map) {
            Some(name) => vec![name],
            None => map
                .into_iter()
                .filter(|(_, v)| is_set(v))
                .map(|(key, _)| key)
                .collect(),
        },
    }
}

/// Accepts a string, a list (joined with "; "), or any other JSON value as
/// its compact text.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Array(items) => items
            .iter()
            .filter_map(value_to_text)
            .collect::<Vec<_>>()
            .join("; "),
        Value::Null => String::new(),
        other => value_to_text(&other).unwrap_or_default(),
    })
}

/// Like [`text`], but blank or missing becomes `None`
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = text(deserializer)?;
    let trimmed = text.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// Accepts a non-negative integer or a numeric string
pub fn step_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_id(&value).ok_or_else(|| D::Error::custom(format!("invalid step id: {value}")))
}

/// A list of step ids; entries that are not ids are dropped.
pub fn step_ids<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items.iter().filter_map(value_to_id).collect()),
        single => Ok(value_to_id(&single).into_iter().collect()),
    }
}

/// Accepts 85, 85.4, "85", "85%" or "75-95%" (first number wins), clamped to 0-100.
pub fn percentage<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => leading_number(&s),
        _ => None,
    };
    Ok(number.map(|n| n.round().clamp(0.0, 100.0) as u8))
}

pub(crate) fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Decode each item on its own, dropping the ones that do not fit `T`.
pub(crate) fn decode_each<T: DeserializeOwned>(items: Vec<Value>, what: &str) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!("Dropping malformed {} #{}: {}", what, index + 1, e);
                None
            }
        })
        .collect()
}

pub(crate) fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => name_or_title(map).or_else(|| Some(value.to_string())),
        Value::Array(_) => Some(value.to_string()),
    }
}

fn name_or_title(map: &Map<String, Value>) -> Option<String> {
    ["name", "title"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .map(String::from)
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.trim().is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

fn value_to_id(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|id| u32::try_from(id).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn leading_number(s: &str) -> Option<f64> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let digits: String = s[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.trim_end_matches('.').parse().ok()
}
