// SPDX-License-Identifier: MIT

//! Criteria sets and the top-level eligibility check

use serde_json::Value;
use std::fmt;

use super::condition::{check_field, parse_criteria, Criterion};
use super::error::{EligibilityError, Result};

/// A parsed set of criteria. Every criterion must hold for a cart to be eligible.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Criteria {
    criteria: Vec<Criterion>,
}

impl Criteria {
    /// Parse criteria from a JSON object of `field path -> condition`
    pub fn parse(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| EligibilityError::invalid_input("criteria must be an object"))?;

        Ok(Self {
            criteria: parse_criteria(obj)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    /// Check whether `cart` satisfies every criterion.
    ///
    /// Empty criteria accept any cart, even an empty one. An empty cart fails
    /// any non-empty criteria.
    pub fn is_satisfied_by(&self, cart: &Value) -> Result<bool> {
        if self.is_empty() {
            return Ok(true);
        }

        let fields = cart
            .as_object()
            .ok_or_else(|| EligibilityError::invalid_input("cart must be an object"))?;
        if fields.is_empty() {
            log::debug!("Empty cart cannot satisfy {} criteria", self.len());
            return Ok(false);
        }

        Ok(self.matches(cart))
    }

    fn matches(&self, cart: &Value) -> bool {
        for criterion in &self.criteria {
            if !check_field(cart, criterion.path.segments(), &criterion.condition) {
                log::debug!("Criterion not satisfied: {}", criterion);
                return false;
            }
        }
        true
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, criterion) in self.criteria.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", criterion)?;
        }
        Ok(())
    }
}

/// Decide whether `cart` satisfies `criteria`.
///
/// Returns `Ok(false)` for any data mismatch. Errors are reserved for malformed
/// criteria, most notably [`EligibilityError::ConditionNotSupported`] for an
/// unknown operator keyword.
pub fn is_eligible(cart: &Value, criteria: &Value) -> Result<bool> {
    let entries = criteria
        .as_object()
        .ok_or_else(|| EligibilityError::invalid_input("criteria must be an object"))?;
    if entries.is_empty() {
        return Ok(true);
    }

    let fields = cart
        .as_object()
        .ok_or_else(|| EligibilityError::invalid_input("cart must be an object"))?;
    if fields.is_empty() {
        return Ok(false);
    }

    Criteria::parse(criteria)?.is_satisfied_by(cart)
}
