// SPDX-License-Identifier: MIT

//! Parsed form of eligibility criteria

use serde_json::Value;
use std::fmt;

/// Operator keywords accepted inside a condition object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// lt
    Lt,
    /// lte
    Lte,
    /// gt
    Gt,
    /// gte
    Gte,
    /// in (operand is an array)
    In,
    /// and (operand is an object of operator conditions)
    And,
    /// or (operand is an object of operator conditions)
    Or,
}

impl Operator {
    /// Parse an operator keyword; `None` for anything unrecognized
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lt" => Some(Operator::Lt),
            "lte" => Some(Operator::Lte),
            "gt" => Some(Operator::Gt),
            "gte" => Some(Operator::Gte),
            "in" => Some(Operator::In),
            "and" => Some(Operator::And),
            "or" => Some(Operator::Or),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::In => "in",
            Operator::And => "and",
            Operator::Or => "or",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A condition applied to a single field
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Loose equality with a literal
    Equals(Value),
    LessThan(Value),
    LessOrEqual(Value),
    GreaterThan(Value),
    GreaterOrEqual(Value),
    /// Field loosely equals any listed value
    In(Vec<Value>),
    /// Every sub-condition holds on the same field
    And(Vec<Condition>),
    /// At least one sub-condition holds on the same field
    Or(Vec<Condition>),
}

impl Condition {
    /// Condition that no value satisfies
    pub fn never() -> Self {
        Condition::Or(vec![])
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Equals(v) => write!(f, "== {}", v),
            Condition::LessThan(v) => write!(f, "< {}", v),
            Condition::LessOrEqual(v) => write!(f, "<= {}", v),
            Condition::GreaterThan(v) => write!(f, "> {}", v),
            Condition::GreaterOrEqual(v) => write!(f, ">= {}", v),
            Condition::In(values) => {
                write!(f, "in [")?;
                write_list(f, values)?;
                write!(f, "]")
            }
            Condition::And(conditions) => {
                write!(f, "and(")?;
                write_list(f, conditions)?;
                write!(f, ")")
            }
            Condition::Or(conditions) => {
                write!(f, "or(")?;
                write_list(f, conditions)?;
                write!(f, ")")
            }
        }
    }
}

/// A dotted field path such as `items.sku`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = raw.split('.').map(str::to_string).collect();
        Self { raw, segments }
    }

    /// Path segments in traversal order; never empty
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// One field path paired with its condition
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub path: FieldPath,
    pub condition: Condition,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.condition)
    }
}
