// SPDX-License-Identifier: MIT

//! Cart eligibility evaluation
//!
//! A cart is a nested JSON object. Criteria map dotted field paths to
//! conditions; a cart is eligible when every condition holds.

pub mod condition;
pub mod criteria;
pub mod error;
pub mod loader;
pub mod predicates;

pub use criteria::{is_eligible, Criteria};
pub use error::{EligibilityError, Result};
pub use loader::{CriteriaLoader, Format};
