//! Integration tests for eligibility evaluation
//!
//! These tests go through the public API only: `is_eligible`, parsed
//! `Criteria`, and the file loader.

use cart_eligibility::{is_eligible, Criteria, CriteriaLoader, EligibilityError};
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Helpers
// ============================================================================

fn eligible(cart: Value, criteria: Value) -> bool {
    is_eligible(&cart, &criteria).expect("criteria should be well formed")
}

/// Create a temporary directory for loader tests
fn create_test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("cart_eligibility_tests")
        .join(name);
    if dir.exists() {
        fs::remove_dir_all(&dir).ok();
    }
    fs::create_dir_all(&dir).expect("Failed to create test directory");
    dir
}

fn sample_cart() -> Value {
    json!({
        "total": 120.5,
        "currency": "EUR",
        "customer": {
            "tier": "gold",
            "age": 34,
            "address": { "country": "FR" }
        },
        "items": [
            { "sku": "BOOK-1", "qty": 2, "category": "books", "tags": [{ "name": "sale" }] },
            { "sku": "CD-9", "qty": 1, "category": "music", "tags": [] }
        ]
    })
}

// ============================================================================
// Empty inputs
// ============================================================================

#[test]
fn test_empty_criteria_always_eligible() {
    assert!(eligible(json!({}), json!({})));
    assert!(eligible(sample_cart(), json!({})));
}

#[test]
fn test_empty_cart_never_eligible() {
    assert!(!eligible(json!({}), json!({ "total": 1 })));
    assert!(!eligible(json!({}), json!({ "total": { "gte": 0 } })));
}

// ============================================================================
// Equality and comparisons
// ============================================================================

#[test]
fn test_loose_equality() {
    assert!(eligible(json!({ "qty": 20 }), json!({ "qty": "20" })));
    assert!(eligible(json!({ "qty": 20 }), json!({ "qty": 20.0 })));
    assert!(eligible(json!({ "qty": "20" }), json!({ "qty": 20 })));
    assert!(!eligible(json!({ "qty": 20 }), json!({ "qty": "twenty" })));
}

#[test]
fn test_missing_field_is_false_not_error() {
    assert!(!eligible(json!({ "a": 1 }), json!({ "b": { "gt": 0 } })));
    assert!(!eligible(json!({ "a": 1 }), json!({ "a.b.c": 1 })));
}

#[test]
fn test_mixed_type_comparison_is_false() {
    assert!(!eligible(json!({ "name": "abc" }), json!({ "name": { "gt": 1 } })));
    assert!(!eligible(json!({ "name": "abc" }), json!({ "name": { "lte": 1 } })));
    assert!(eligible(json!({ "price": "50" }), json!({ "price": { "gt": 10 } })));
}

// ============================================================================
// Paths and arrays
// ============================================================================

#[test]
fn test_nested_path_traversal() {
    assert!(eligible(
        json!({ "user": { "age": 30 } }),
        json!({ "user.age": { "gte": 18 } })
    ));
    assert!(!eligible(
        json!({ "user": { "age": 15 } }),
        json!({ "user.age": { "gte": 18 } })
    ));
}

#[test]
fn test_array_broadcast() {
    let cart = json!({ "items": [{ "sku": "A" }, { "sku": "B" }] });
    assert!(eligible(cart.clone(), json!({ "items.sku": { "in": ["B", "C"] } })));
    assert!(!eligible(cart, json!({ "items.sku": { "in": ["X", "C"] } })));
}

#[test]
fn test_realistic_cart() {
    let criteria = json!({
        "total": { "gte": 100 },
        "currency": "EUR",
        "customer.tier": { "in": ["gold", "platinum"] },
        "customer.address.country": { "or": { "in": ["FR", "BE"], "gt": "X" } },
        "items.category": "books",
        "items.tags.name": "sale",
        "items.qty": { "and": { "gte": 1, "lt": 10 } }
    });
    assert!(eligible(sample_cart(), criteria));

    let criteria = json!({
        "total": { "gte": 100 },
        "items.category": "games"
    });
    assert!(!eligible(sample_cart(), criteria));
}

// ============================================================================
// Logical composition
// ============================================================================

#[test]
fn test_and_composition() {
    assert!(eligible(
        json!({ "price": 50 }),
        json!({ "price": { "and": { "gt": 10, "lt": 100 } } })
    ));
    assert!(!eligible(
        json!({ "price": 50 }),
        json!({ "price": { "and": { "gt": 60, "lt": 100 } } })
    ));
}

#[test]
fn test_or_composition() {
    assert!(eligible(
        json!({ "price": 50 }),
        json!({ "price": { "or": { "gt": 60, "lt": 100 } } })
    ));
    assert!(!eligible(
        json!({ "price": 50 }),
        json!({ "price": { "or": { "gt": 60, "lt": 40 } } })
    ));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unsupported_operator_errors() {
    let err = is_eligible(&json!({ "price": 50 }), &json!({ "price": { "foo": 1 } })).unwrap_err();
    assert!(err.is_unsupported_condition());
    assert!(matches!(err, EligibilityError::ConditionNotSupported { .. }));
}

#[test]
fn test_unsupported_operator_on_missing_field_errors() {
    let err = is_eligible(&json!({ "price": 50 }), &json!({ "cost": { "foo": 1 } })).unwrap_err();
    assert!(err.is_unsupported_condition());
}

#[test]
fn test_multiple_operators_rejected() {
    let err = is_eligible(
        &json!({ "price": 50 }),
        &json!({ "price": { "gt": 10, "lt": 100 } }),
    )
    .unwrap_err();
    assert!(matches!(err, EligibilityError::AmbiguousCondition { .. }));
    assert!(!err.is_unsupported_condition());
}

// ============================================================================
// Loader
// ============================================================================

#[test]
fn test_loader_round_trip_from_files() {
    let dir = create_test_dir("loader_files");
    let criteria_path = dir.join("criteria.yaml");
    let carts_path = dir.join("carts.json");

    fs::write(
        &criteria_path,
        "total:\n  gte: 100\nitems.sku:\n  in: [BOOK-1]\n",
    )
    .expect("Failed to write criteria");
    fs::write(
        &carts_path,
        serde_json::to_string(&json!([sample_cart(), { "total": 5 }])).unwrap(),
    )
    .expect("Failed to write carts");

    let loader = CriteriaLoader::new();
    let criteria = loader.load_criteria(&criteria_path).unwrap();
    let carts = loader.load_carts(&carts_path).unwrap();

    let results: Vec<bool> = carts
        .iter()
        .map(|cart| criteria.is_satisfied_by(cart).unwrap())
        .collect();
    assert_eq!(results, vec![true, false]);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_loader_missing_file() {
    let dir = create_test_dir("loader_missing");
    let err = CriteriaLoader::new()
        .load_criteria(dir.join("nope.json"))
        .unwrap_err();
    assert!(matches!(err, EligibilityError::Io(_)));
    fs::remove_dir_all(&dir).ok();
}

// ============================================================================
// Purity
// ============================================================================

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-100i64..100).prop_map(|n| json!(n)),
        (-100i64..100).prop_map(|n| json!(n.to_string())),
        "[a-c]{0,2}".prop_map(Value::String),
    ]
}

fn arb_record() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map("[a-c]", inner, 0..3)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<String, Value>>())),
        ]
    })
}

fn arb_condition() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        arb_scalar(),
        arb_scalar().prop_map(|v| json!({ "lt": v })),
        arb_scalar().prop_map(|v| json!({ "gte": v })),
        prop::collection::vec(arb_scalar(), 0..3).prop_map(|v| json!({ "in": v })),
    ];
    leaf.prop_recursive(2, 8, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|c| match c {
                Value::Object(op) => json!({ "and": op }),
                literal => literal,
            }),
            inner.prop_map(|c| match c {
                Value::Object(op) => json!({ "or": op }),
                literal => literal,
            }),
        ]
    })
}

fn arb_criteria() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-c](\\.[a-c]){0,2}", arb_condition(), 0..4)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<String, Value>>()))
}

proptest! {
    #[test]
    fn prop_evaluation_is_pure(cart in arb_record(), criteria in arb_criteria()) {
        let cart_before = cart.clone();
        let criteria_before = criteria.clone();

        let first = is_eligible(&cart, &criteria).map_err(|e| e.to_string());
        let second = is_eligible(&cart, &criteria).map_err(|e| e.to_string());

        prop_assert_eq!(first, second);
        prop_assert_eq!(&cart, &cart_before);
        prop_assert_eq!(&criteria, &criteria_before);
    }

    #[test]
    fn prop_parsed_criteria_agree_with_is_eligible(
        cart in arb_record(),
        criteria in arb_criteria(),
    ) {
        prop_assume!(cart.is_object());
        let direct = is_eligible(&cart, &criteria).map_err(|e| e.to_string());
        let parsed = Criteria::parse(&criteria)
            .and_then(|c| c.is_satisfied_by(&cart))
            .map_err(|e| e.to_string());
        prop_assert_eq!(direct, parsed);
    }
}
