//! Conversions between `Value`, `serde_json::Value` and serde types.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Error, Value};

/// Deserialize a Rust type from a record.
pub fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T, Error> {
    serde_json::from_value(value_to_json(value)).map_err(|e| Error::Conversion {
        message: e.to_string(),
    })
}

/// Serialize a Rust type into a record.
pub fn to_value<T: Serialize>(data: &T) -> Result<Value, Error> {
    let json = serde_json::to_value(data).map_err(|e| Error::Conversion {
        message: e.to_string(),
    })?;
    Ok(json_to_value(json))
}

/// Render a record as JSON. Non-finite floats become `null`.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(arr) => arr.iter().map(value_to_json).collect(),
        Value::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), value_to_json(v)))
                .collect(),
        ),
    }
}

/// Build a record from JSON.
///
/// Numbers that fit `i64` become integers, other numbers floats.
pub fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Value::Integer(i),
            (None, Some(f)) => Value::Float(f),
            (None, None) => Value::String(n.to_string()),
        },
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(json_to_value).collect()),
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(k, v)| (k, json_to_value(v)))
            .collect(),
    }
}
