// SPDX-License-Identifier: MIT

//! Criteria parser - converts JSON criteria into the condition AST
//!
//! Shapes:
//! - `{ "price": 20 }` - loose equality
//! - `{ "price": { "gt": 10 } }` - one operator per condition object
//! - `{ "sku": { "in": ["A", "B"] } }` - membership
//! - `{ "price": { "and": { "gt": 10, "lt": 100 } } }` - every operator on the same field

use serde_json::{Map, Value};

use super::ast::{Condition, Criterion, FieldPath, Operator};
use crate::eligibility::error::{EligibilityError, Result};

/// Parse every `path -> condition` entry of a criteria object, keeping authored order
pub fn parse_criteria(criteria: &Map<String, Value>) -> Result<Vec<Criterion>> {
    criteria
        .iter()
        .map(|(path, value)| {
            Ok(Criterion {
                path: FieldPath::new(path.as_str()),
                condition: parse_condition(path, value)?,
            })
        })
        .collect()
}

/// Parse the condition attached to `field`
pub fn parse_condition(field: &str, value: &Value) -> Result<Condition> {
    let obj = match value {
        // arrays are neither literals nor operator objects
        Value::Array(_) => return Err(EligibilityError::not_supported("[array]", field)),
        Value::Object(obj) => obj,
        literal => return Ok(Condition::Equals(literal.clone())),
    };

    let mut entries = obj.iter();
    match (entries.next(), entries.next()) {
        (None, _) => Ok(Condition::never()),
        (Some((key, operand)), None) => parse_operator(field, key, operand),
        (Some(_), Some(_)) => Err(EligibilityError::AmbiguousCondition {
            field: field.to_string(),
            operators: obj.keys().cloned().collect(),
        }),
    }
}

fn parse_operator(field: &str, key: &str, operand: &Value) -> Result<Condition> {
    let op = Operator::parse(key).ok_or_else(|| EligibilityError::not_supported(key, field))?;

    let condition = match op {
        Operator::Lt => Condition::LessThan(operand.clone()),
        Operator::Lte => Condition::LessOrEqual(operand.clone()),
        Operator::Gt => Condition::GreaterThan(operand.clone()),
        Operator::Gte => Condition::GreaterOrEqual(operand.clone()),
        Operator::In => match operand {
            Value::Array(values) => Condition::In(values.clone()),
            _ => return Err(EligibilityError::invalid_operand(op.as_str(), field, "an array")),
        },
        Operator::And => Condition::And(parse_composition(field, op, operand)?),
        Operator::Or => Condition::Or(parse_composition(field, op, operand)?),
    };

    Ok(condition)
}

/// Each `operator: operand` pair of an and/or object becomes its own condition on `field`
fn parse_composition(field: &str, op: Operator, operand: &Value) -> Result<Vec<Condition>> {
    let obj = operand
        .as_object()
        .ok_or_else(|| EligibilityError::invalid_operand(op.as_str(), field, "an object"))?;

    obj.iter()
        .map(|(key, value)| parse_operator(field, key, value))
        .collect()
}
