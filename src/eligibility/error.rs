// SPDX-License-Identifier: MIT

//! Typed error handling for cart-eligibility
//!
//! Malformed criteria are programming errors and surface here. A cart that
//! simply does not match is a normal `Ok(false)`, never an error.

use thiserror::Error;

/// Top-level error type for eligibility evaluation
#[derive(Debug, Error)]
pub enum EligibilityError {
    /// Operator keyword outside of lt, lte, gt, gte, in, and, or
    #[error("Condition not supported: '{operator}' on field '{field}'")]
    ConditionNotSupported { operator: String, field: String },

    /// More than one operator key in a single condition object
    #[error("Ambiguous condition on field '{field}': expected one operator, got {operators:?}")]
    AmbiguousCondition {
        field: String,
        operators: Vec<String>,
    },

    /// Operator operand has the wrong shape (e.g. `in` without an array)
    #[error("Invalid operand for '{operator}' on field '{field}': expected {expected}")]
    InvalidOperand {
        operator: String,
        field: String,
        expected: &'static str,
    },

    /// Top-level cart or criteria is not a mapping
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl EligibilityError {
    /// Create a condition-not-supported error
    pub fn not_supported(operator: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ConditionNotSupported {
            operator: operator.into(),
            field: field.into(),
        }
    }

    /// Create an invalid-operand error
    pub fn invalid_operand(
        operator: impl Into<String>,
        field: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidOperand {
            operator: operator.into(),
            field: field.into(),
            expected,
        }
    }

    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// True for the unrecognized-operator error
    pub fn is_unsupported_condition(&self) -> bool {
        matches!(self, Self::ConditionNotSupported { .. })
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, EligibilityError>;
