//! Unit tests for the curry! macro family.
//!
//! Tests for converting multi-argument functions to curried form.

#![cfg(feature = "compose")]

// =============================================================================
// curry2! tests (2-argument functions)
// =============================================================================

mod curry2_tests {
    use pmonad::curry2;

    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    fn concat(first: String, second: &str) -> String {
        format!("{first}{second}")
    }

    #[test]
    fn test_curry2_basic() {
        let curried_add = curry2!(add);
        let add_five = curried_add(5);
        assert_eq!(add_five(3), 8);
    }

    #[test]
    fn test_curry2_partial_application_is_reusable() {
        let curried_add = curry2!(add);
        let add_five = curried_add(5);
        let add_ten = curried_add(10);

        assert_eq!(add_five(3), 8);
        assert_eq!(add_five(4), 9);
        assert_eq!(add_ten(1), 11);
    }

    #[test]
    fn test_curry2_clones_owned_first_argument() {
        let curried_concat = curry2!(concat);
        let greet = curried_concat(String::from("hello, "));
        assert_eq!(greet("world"), "hello, world");
        assert_eq!(greet("rust"), "hello, rust");
    }

    #[test]
    fn test_curry2_with_capturing_closure() {
        let offset = 100;
        let curried = curry2!(move |a: i32, b: i32| a * b + offset);
        let triple = curried(3);
        assert_eq!(triple(2), 106);
    }
}

// =============================================================================
// curry3! tests (3-argument functions)
// =============================================================================

mod curry3_tests {
    use pmonad::curry3;

    fn clamp(low: i32, high: i32, value: i32) -> i32 {
        value.max(low).min(high)
    }

    #[test]
    fn test_curry3_staged_application() {
        let curried_clamp = curry3!(clamp);
        let from_zero = curried_clamp(0);
        let percent = from_zero(100);

        assert_eq!(percent(150), 100);
        assert_eq!(percent(-5), 0);
        assert_eq!(percent(42), 42);
    }

    #[test]
    fn test_curry3_stages_are_independent() {
        let curried_clamp = curry3!(clamp);
        let from_zero = curried_clamp(0);
        let to_ten = from_zero(10);
        let to_twenty = from_zero(20);

        assert_eq!(to_ten(15), 10);
        assert_eq!(to_twenty(15), 15);
    }
}

// =============================================================================
// curry4! tests (4-argument functions)
// =============================================================================

mod curry4_tests {
    use pmonad::curry4;

    fn join(a: &str, b: &str, c: &str, d: &str) -> String {
        [a, b, c, d].join("-")
    }

    #[test]
    fn test_curry4_full_application() {
        let curried_join = curry4!(join);
        assert_eq!(curried_join("a")("b")("c")("d"), "a-b-c-d");
    }

    #[test]
    fn test_curry4_shared_prefix() {
        let curried_join = curry4!(join);
        let prefix = curried_join("x")("y");
        let with_z = prefix("z");
        assert_eq!(with_z("1"), "x-y-z-1");
        assert_eq!(with_z("2"), "x-y-z-2");
        assert_eq!(prefix("w")("3"), "x-y-w-3");
    }
}

// =============================================================================
// Curried functions inside effects
// =============================================================================

#[cfg(feature = "effect")]
mod effect_tests {
    use pmonad::effect::{Either, Maybe};
    use pmonad::typeclass::{Applicative, Functor};
    use pmonad::{curry2, curry3};

    #[test]
    fn test_curry2_through_maybe_apply() {
        let add = |first: i32, second: i32| first + second;
        let partial = Maybe::Just(3).fmap(curry2!(add));
        assert_eq!(Maybe::Just(4).apply(partial), Maybe::Just(7));
    }

    #[test]
    fn test_curry3_through_either_apply_short_circuits() {
        let sum = |a: i32, b: i32, c: i32| a + b + c;
        let partial: Either<&str, _> = Either::Right(1).fmap(curry3!(sum));
        let partial = Either::Left("missing").apply(partial);
        assert_eq!(Either::Right(3).apply(partial), Either::Left("missing"));
    }
}
