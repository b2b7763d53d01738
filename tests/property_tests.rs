//! Property-based tests for the parse/render round trip.
//!
//! Trees are generated without NaN (NaN is not equal to itself, so tree
//! equality cannot hold) — the NaN literal has its own targeted tests in the
//! grammar suite.

use jot_format::{from_str, to_json_string, to_string, to_string_with_options, JotOptions};
use jot_format::{JotMap, JotValue, Number};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = String> {
    // Mix of identifier-shaped keys and keys that force quoting
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "[a-z ,:@#-]{1,10}",
    ]
}

fn arb_leaf() -> impl Strategy<Value = JotValue> {
    prop_oneof![
        Just(JotValue::Null),
        Just(JotValue::Undefined),
        any::<bool>().prop_map(JotValue::Bool),
        any::<i64>().prop_map(|i| JotValue::Number(Number::Integer(i))),
        any::<u64>().prop_map(|u| JotValue::Number(Number::Hex(u))),
        any::<u64>().prop_map(|u| JotValue::Number(Number::Binary(u))),
        any::<f64>()
            .prop_filter("no NaN", |f| !f.is_nan())
            .prop_map(|f| JotValue::Number(Number::Float(f))),
        "[a-zA-Z0-9 _.,:'\"\\\\/-]{0,20}".prop_map(JotValue::String),
    ]
}

fn arb_value() -> impl Strategy<Value = JotValue> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JotValue::Array),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(|members| {
                JotValue::Object(members.into_iter().collect::<JotMap>())
            }),
        ]
    })
}

/// Leaves restricted to what strict JSON can express losslessly.
fn arb_json_leaf() -> impl Strategy<Value = JotValue> {
    prop_oneof![
        Just(JotValue::Null),
        any::<bool>().prop_map(JotValue::Bool),
        any::<i64>().prop_map(|i| JotValue::Number(Number::Integer(i))),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(|f| JotValue::Number(Number::Float(f))),
        "[a-zA-Z0-9 _.,:'\"\\\\/-]{0,20}".prop_map(JotValue::String),
    ]
}

fn arb_json_value() -> impl Strategy<Value = JotValue> {
    arb_json_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(JotValue::Array),
            prop::collection::vec((arb_key(), inner), 0..6).prop_map(|members| {
                JotValue::Object(members.into_iter().collect::<JotMap>())
            }),
        ]
    })
}

proptest! {
    #[test]
    fn prop_extended_round_trip(value in arb_value()) {
        let text = to_string(&value);
        let reparsed = from_str(&text).unwrap();
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn prop_round_trip_all_option_combinations(
        value in arb_value(),
        unquoted in any::<bool>(),
        trailing in any::<bool>(),
        single in any::<bool>(),
        indent in 0usize..8,
    ) {
        let options = JotOptions::new()
            .with_unquoted_keys(unquoted)
            .with_trailing_commas(trailing)
            .with_single_quotes(single)
            .with_indent(indent);
        let text = to_string_with_options(&value, options);
        let reparsed = from_str(&text).unwrap();
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn prop_json_output_is_legal_json(value in arb_json_value()) {
        let text = to_json_string(&value);
        let reference: Result<serde_json::Value, _> = serde_json::from_str(&text);
        prop_assert!(reference.is_ok(), "not valid JSON: {}", text);
    }

    #[test]
    fn prop_json_output_reparses_to_same_tree(value in arb_json_value()) {
        // For JSON-expressible trees the strict renderer is lossless
        let text = to_json_string(&value);
        let reparsed = from_str(&text).unwrap();
        prop_assert_eq!(reparsed, value);
    }

    #[test]
    fn prop_integer_literals(n in any::<i64>()) {
        let value = from_str(&n.to_string()).unwrap();
        prop_assert_eq!(value, JotValue::Number(Number::Integer(n)));
    }

    #[test]
    fn prop_hex_literals(n in any::<u64>()) {
        let text = format!("0x{:X}", n);
        let value = from_str(&text).unwrap();
        prop_assert_eq!(value.clone(), JotValue::Number(Number::Hex(n)));
        prop_assert_eq!(to_string(&value), text);
    }

    #[test]
    fn prop_binary_literals(n in any::<u64>()) {
        let text = format!("0b{:b}", n);
        let value = from_str(&text).unwrap();
        prop_assert_eq!(value.clone(), JotValue::Number(Number::Binary(n)));
        prop_assert_eq!(to_string(&value), text);
    }

    #[test]
    fn prop_string_escaping_round_trips(s in "\\PC*") {
        // Arbitrary printable content, including quotes and backslashes
        let value = JotValue::String(s.clone());
        let reparsed = from_str(&to_string(&value)).unwrap();
        prop_assert_eq!(reparsed.as_str(), Some(s.as_str()));
    }

    #[test]
    fn prop_trailing_comma_never_changes_tree(
        xs in prop::collection::vec(any::<i32>(), 1..8)
    ) {
        let items: Vec<String> = xs.iter().map(|x| x.to_string()).collect();
        let without = format!("[{}]", items.join(","));
        let with = format!("[{},]", items.join(","));
        prop_assert_eq!(from_str(&without).unwrap(), from_str(&with).unwrap());
    }
}
