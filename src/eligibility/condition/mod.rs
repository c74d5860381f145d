// SPDX-License-Identifier: MIT

//! Field conditions for eligibility criteria
//!
//! A condition is either a literal (loose equality) or an object holding one
//! operator keyword:
//! - comparison: `lt`, `lte`, `gt`, `gte`
//! - membership: `in`
//! - composition on the same field: `and`, `or`

mod ast;
mod compare;
mod evaluator;
mod parser;

pub use ast::{Condition, Criterion, FieldPath, Operator};
pub use compare::{as_number, loose_cmp, loose_eq};
pub use evaluator::{check_field, evaluate};
pub use parser::{parse_condition, parse_criteria};
