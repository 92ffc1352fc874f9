//! Conversion between plain JSON and Firestore's typed value encoding.

use crate::{BackendError, BackendResult};

use serde_json::{Map, Number, Value, json};

pub(crate) fn encode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), encode(value)))
        .collect()
}

pub(crate) fn decode_fields(fields: &Map<String, Value>) -> BackendResult<Map<String, Value>> {
    fields
        .iter()
        .map(|(key, value)| Ok((key.clone(), decode(value)?)))
        .collect()
}

pub(crate) fn encode(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

pub(crate) fn decode(value: &Value) -> BackendResult<Value> {
    let Some((kind, inner)) = value.as_object().and_then(|o| o.iter().next()) else {
        return Err(BackendError::decode(format!(
            "expected a typed Firestore value, got {value}"
        )));
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "integerValue" => decode_integer(inner),
        "booleanValue" | "doubleValue" | "stringValue" | "timestampValue" | "referenceValue"
        | "bytesValue" | "geoPointValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = match inner.get("values").and_then(Value::as_array) {
                Some(values) => values.iter().map(decode).collect::<BackendResult<Vec<Value>>>()?,
                None => Vec::new(),
            };
            Ok(Value::Array(values))
        }
        "mapValue" => match inner.get("fields").and_then(Value::as_object) {
            Some(fields) => Ok(Value::Object(decode_fields(fields)?)),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(BackendError::decode(format!(
            "unsupported Firestore value type '{other}'"
        ))),
    }
}

/// Integers travel as decimal strings to keep 64-bit precision
fn decode_integer(inner: &Value) -> BackendResult<Value> {
    match inner {
        Value::Number(_) => Ok(inner.clone()),
        Value::String(s) => s
            .parse::<i64>()
            .map(|i| Value::Number(Number::from(i)))
            .map_err(|e| BackendError::decode(format!("bad integerValue '{s}': {e}"))),
        _ => Err(BackendError::decode(format!("bad integerValue {inner}"))),
    }
}
