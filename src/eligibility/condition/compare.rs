// SPDX-License-Identifier: MIT

//! Loose (typeless) comparison of JSON values
//!
//! Rules:
//! - `null` equals only `null` and has no ordering
//! - numbers and numeric strings compare as `f64` (`20 == "20" == 20.0`)
//! - other scalars compare by their string form (`true == "true"`)
//! - arrays and objects compare structurally and are never ordered

use serde_json::Value;
use std::cmp::Ordering;

/// Coerce a value to a number: numbers as-is, strings when they parse after trimming.
/// Booleans, null, arrays and objects do not coerce.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Loose equality between a field value and an operand
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => {
            left == right
        }
        _ => {
            if let (Some(a), Some(b)) = (as_number(left), as_number(right)) {
                return a == b;
            }
            match (scalar_text(left), scalar_text(right)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        }
    }
}

/// Ordering between a field value and an operand, `None` when unordered
pub fn loose_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (as_number(left), as_number(right)) {
        return a.partial_cmp(&b);
    }

    match (left, right) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
