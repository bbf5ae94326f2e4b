//! Firestore typed-value codec
//!
//! Firestore's REST surface wraps every field in a type tag
//! (`{"stringValue": "x"}`, `{"integerValue": "42"}`, ...). These helpers map
//! plain JSON documents onto that representation and back.

use serde_json::{json, Map, Number, Value};

use crate::{DocStoreError, Document};

/// Encode a JSON value as a Firestore `Value`.
pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else if let Some(u) = n.as_u64() {
                json!({ "integerValue": u.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_map(map) } }),
    }
}

fn encode_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(k, v)| (k.clone(), encode_value(v)))
        .collect()
}

/// Encode a top-level document body. Only JSON objects can be documents.
pub fn encode_fields(data: &Value) -> Result<Value, DocStoreError> {
    match data {
        Value::Object(map) => Ok(Value::Object(encode_map(map))),
        other => Err(DocStoreError::Decode(format!(
            "document body must be an object, got {}",
            type_name(other)
        ))),
    }
}

/// Decode a Firestore `Value` back into plain JSON.
pub fn decode_value(value: &Value) -> Result<Value, DocStoreError> {
    let obj = value
        .as_object()
        .ok_or_else(|| DocStoreError::Decode("typed value must be an object".to_string()))?;
    let (tag, inner) = obj
        .iter()
        .next()
        .ok_or_else(|| DocStoreError::Decode("empty typed value".to_string()))?;

    match tag.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| DocStoreError::Decode("booleanValue is not a bool".to_string())),
        "integerValue" => {
            // Sent as a decimal string on the wire, occasionally as a number
            let parsed = match inner {
                Value::String(s) => s.parse::<i64>().ok(),
                Value::Number(n) => n.as_i64(),
                _ => None,
            };
            parsed
                .map(|i| Value::Number(i.into()))
                .ok_or_else(|| DocStoreError::Decode(format!("bad integerValue: {inner}")))
        }
        "doubleValue" => inner
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| DocStoreError::Decode(format!("bad doubleValue: {inner}"))),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| DocStoreError::Decode(format!("{tag} is not a string"))),
        "geoPointValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = match inner.get("values") {
                Some(Value::Array(values)) => values
                    .iter()
                    .map(decode_value)
                    .collect::<Result<Vec<_>, _>>()?,
                _ => Vec::new(),
            };
            Ok(Value::Array(values))
        }
        "mapValue" => match inner.get("fields") {
            Some(fields) => decode_fields(fields),
            None => Ok(Value::Object(Map::new())),
        },
        other => Err(DocStoreError::Decode(format!("unknown value type: {other}"))),
    }
}

/// Decode a Firestore `fields` map into a JSON object.
pub fn decode_fields(fields: &Value) -> Result<Value, DocStoreError> {
    let map = fields
        .as_object()
        .ok_or_else(|| DocStoreError::Decode("fields must be an object".to_string()))?;
    let mut out = Map::with_capacity(map.len());
    for (k, v) in map {
        out.insert(k.clone(), decode_value(v)?);
    }
    Ok(Value::Object(out))
}

/// Decode a Firestore `Document` resource. The id is the last path segment of `name`.
pub fn decode_document(resource: &Value) -> Result<Document, DocStoreError> {
    let name = resource
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| DocStoreError::Decode("document has no name".to_string()))?;
    let id = name
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| DocStoreError::Decode(format!("malformed document name: {name}")))?;

    let data = match resource.get("fields") {
        Some(fields) => decode_fields(fields)?,
        None => Value::Object(Map::new()),
    };

    Ok(Document {
        id: id.to_string(),
        data,
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
