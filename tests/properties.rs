//! Property-based tests for the numeric builtins and the evaluator.
//!
//! These check laws that must hold for every input, not just hand-picked
//! examples:
//! 1. `add` is an exact left-to-right floating point fold.
//! 2. `mod` always lands in the half-open range of its divisor's sign.
//! 3. `sub` with one argument negates.
//! 4. Atomic values evaluate to themselves.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lioliosh::{
    evaluate_source,
    interpreter::{
        evaluator::{core::evaluate, function::arithmetic::{add, modulo, sub}},
        value::core::{Group, Value},
    },
};
use proptest::prelude::*;

fn numbers(xs: &[f64]) -> Group {
    xs.iter().copied().map(Value::Number).collect()
}

/// Finite numbers spread over many magnitudes, so that summation order
/// actually changes the rounded result.
fn finite() -> impl Strategy<Value = f64> {
    prop_oneof![-1e6..1e6f64, -1e-6..1e-6f64, -1e16..1e16f64]
}

fn nonzero() -> impl Strategy<Value = f64> {
    prop_oneof![-1e3..-1e-3f64, 1e-3..1e3f64]
}

proptest! {
    #[test]
    fn add_is_a_bit_exact_left_fold(xs in prop::collection::vec(finite(), 1..24)) {
        let expected = xs.iter().copied().reduce(|acc, x| acc + x).unwrap();
        let Value::Number(sum) = add(numbers(&xs)).unwrap() else {
            panic!("add returned a non-number");
        };
        prop_assert_eq!(sum.to_bits(), expected.to_bits());
    }

    #[test]
    fn mod_lands_in_the_divisor_range(x in finite(), y in nonzero()) {
        let Value::Number(r) = modulo(numbers(&[x, y])).unwrap() else {
            panic!("mod returned a non-number");
        };
        if y > 0.0 {
            prop_assert!((0.0..y).contains(&r), "{} mod {} = {}", x, y, r);
        } else {
            prop_assert!(r <= 0.0 && r > y, "{} mod {} = {}", x, y, r);
        }
    }

    #[test]
    fn sub_with_one_argument_negates(x in finite()) {
        prop_assert_eq!(sub(numbers(&[x])).unwrap(), Value::Number(-x));
    }

    #[test]
    fn atoms_evaluate_to_themselves(x in finite(), message in "[a-z ]{0,12}") {
        prop_assert_eq!(evaluate(Value::Number(x)), Value::Number(x));
        prop_assert_eq!(evaluate(Value::error(message.clone())), Value::error(message));
    }

    #[test]
    fn source_level_sum_matches_the_fold(xs in prop::collection::vec(-1000i32..1000, 1..12)) {
        let source = format!("(+ {})", xs.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "));
        let expected: i32 = xs.iter().sum();
        prop_assert_eq!(evaluate_source(&source).unwrap(), Value::Number(f64::from(expected)));
    }
}
