// SPDX-License-Identifier: MIT

//! Shape predicates over JSON values

use serde_json::Value;

/// True for a JSON object. Arrays and `null` are not plain objects.
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// True for a JSON array
pub fn is_sequence(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}
