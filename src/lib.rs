// SPDX-License-Identifier: MIT

//! Declarative eligibility criteria for nested cart data.
//!
//! ```
//! use cart_eligibility::is_eligible;
//! use serde_json::json;
//!
//! let cart = json!({ "items": [{ "sku": "A" }, { "sku": "B" }] });
//! let criteria = json!({ "items.sku": { "in": ["B", "C"] } });
//! assert!(is_eligible(&cart, &criteria).unwrap());
//! ```
//!
//! Inputs are assumed to be finite, acyclic JSON trees.

pub mod eligibility;

pub use eligibility::{is_eligible, Criteria, CriteriaLoader, EligibilityError, Format, Result};
