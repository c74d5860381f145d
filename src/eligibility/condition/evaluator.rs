// SPDX-License-Identifier: MIT

//! Condition evaluator - resolves field paths and applies conditions

use serde_json::Value;
use std::cmp::Ordering;

use super::ast::Condition;
use super::compare::{loose_cmp, loose_eq};
use crate::eligibility::predicates::{is_plain_object, is_sequence};

/// Check `condition` against the field at `path` inside `record`.
///
/// Every segment but the last is traversed; when a traversed value is an array
/// the remaining path is checked against each element and any match succeeds.
/// A missing segment, or a level that is not an object, yields `false`.
pub fn check_field(record: &Value, path: &[String], condition: &Condition) -> bool {
    let Some((head, rest)) = path.split_first() else {
        return false;
    };

    let Some(value) = lookup(record, head) else {
        return false;
    };

    if rest.is_empty() {
        return evaluate(value, condition);
    }

    if !is_sequence(value) {
        return check_field(value, rest, condition);
    }

    log::trace!("Broadcasting '{}' over array field '{}'", rest.join("."), head);
    value
        .as_array()
        .is_some_and(|items| items.iter().any(|item| check_field(item, rest, condition)))
}

fn lookup<'a>(record: &'a Value, field: &str) -> Option<&'a Value> {
    if !is_plain_object(record) {
        return None;
    }
    record.get(field)
}

/// Apply a condition to a resolved leaf value
pub fn evaluate(value: &Value, condition: &Condition) -> bool {
    match condition {
        Condition::Equals(expected) => loose_eq(value, expected),
        Condition::LessThan(operand) => ordered(value, operand, |o| o == Ordering::Less),
        Condition::LessOrEqual(operand) => ordered(value, operand, |o| o != Ordering::Greater),
        Condition::GreaterThan(operand) => ordered(value, operand, |o| o == Ordering::Greater),
        Condition::GreaterOrEqual(operand) => ordered(value, operand, |o| o != Ordering::Less),
        Condition::In(values) => values.iter().any(|v| loose_eq(value, v)),
        // empty And = true (vacuous truth)
        Condition::And(conditions) => conditions.iter().all(|c| evaluate(value, c)),
        // empty Or = false
        Condition::Or(conditions) => conditions.iter().any(|c| evaluate(value, c)),
    }
}

fn ordered<F>(value: &Value, operand: &Value, accept: F) -> bool
where
    F: Fn(Ordering) -> bool,
{
    match loose_cmp(value, operand) {
        Some(ordering) => accept(ordering),
        None => {
            log::trace!("Unordered comparison: {} vs {}", value, operand);
            false
        }
    }
}
