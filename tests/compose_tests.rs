//! Unit tests for function composition utilities.
//!
//! Tests for the identity, constant, compose and flip functions.

#![cfg(feature = "compose")]

use pmonad::compose::{compose, constant, flip, identity};
use rstest::rstest;

// =============================================================================
// identity function tests
// =============================================================================

#[test]
fn test_identity_returns_same_integer() {
    assert_eq!(identity(42), 42);
    assert_eq!(identity(-100), -100);
}

#[test]
fn test_identity_returns_same_string() {
    assert_eq!(identity("hello"), "hello");
    assert_eq!(identity(String::from("world")), String::from("world"));
}

#[test]
fn test_identity_as_function_value() {
    let values: Vec<i32> = vec![1, 2, 3].into_iter().map(identity).collect();
    assert_eq!(values, vec![1, 2, 3]);
}

// =============================================================================
// constant function tests
// =============================================================================

#[test]
fn test_constant_ignores_argument() {
    let always_seven = constant(7);
    assert_eq!(always_seven("anything"), 7);
    assert_eq!(always_seven("else"), 7);
}

#[test]
fn test_constant_clones_owned_value() {
    let always_name = constant(String::from("pmonad"));
    let names: Vec<String> = (0..3).map(always_name).collect();
    assert_eq!(names, vec!["pmonad", "pmonad", "pmonad"]);
}

// =============================================================================
// compose function tests
// =============================================================================

#[rstest]
#[case(0, 2)]
#[case(5, 12)]
#[case(-1, 0)]
fn test_compose_applies_first_then_second(#[case] input: i32, #[case] expected: i32) {
    let add_one = |x: i32| x + 1;
    let double = |x: i32| x * 2;
    assert_eq!(compose(add_one, double)(input), expected);
}

#[test]
fn test_compose_changes_types() {
    let length = |text: &str| text.len();
    let describe = |n: usize| format!("{n} characters");
    let composed = compose(length, describe);
    assert_eq!(composed("hello"), "5 characters");
}

#[test]
fn test_compose_is_associative() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 3;
    let h = |x: i32| x - 4;

    let left = compose(compose(f, g), h);
    let right = compose(f, compose(g, h));
    for value in -5..5 {
        assert_eq!(left(value), right(value));
    }
}

#[test]
fn test_compose_with_identity_is_neutral() {
    let square = |x: i32| x * x;
    assert_eq!(compose(identity, square)(7), square(7));
    assert_eq!(compose(square, identity)(7), square(7));
}

// =============================================================================
// flip function tests
// =============================================================================

#[test]
fn test_flip_swaps_arguments() {
    let subtract = |a: i32, b: i32| a - b;
    let flipped = flip(subtract);
    assert_eq!(flipped(3, 10), 7);
}

#[test]
fn test_flip_twice_is_original() {
    let divide = |a: f64, b: f64| a / b;
    let restored = flip(flip(divide));
    assert!((restored(9.0, 3.0) - divide(9.0, 3.0)).abs() < f64::EPSILON);
}

#[test]
fn test_flip_with_different_argument_types() {
    let repeat = |text: &str, count: usize| text.repeat(count);
    let flipped = flip(repeat);
    assert_eq!(flipped(3, "ab"), "ababab");
}
