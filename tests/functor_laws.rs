//! Property-based tests for Functor laws.
//!
//! This module verifies that all Functor implementations satisfy the required laws:
//!
//! - **Identity Law**: `fa.fmap(identity) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(compose(f, g))`

use pmonad::compose::{compose, identity};
use pmonad::container::MList;
use pmonad::effect::{Either, EitherT, IO, Maybe, MaybeT};
use pmonad::typeclass::{Functor, FunctorMut, Identity};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Either::from)
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_strategy()) {
        prop_assert_eq!(value.fmap(identity), value);
    }

    #[test]
    fn prop_maybe_composition_law(value in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(compose(function1, function2));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_string_composition_law(value in any::<Option<String>>().prop_map(Maybe::from)) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(compose(function1, function2));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Either<E, A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        prop_assert_eq!(value.clone().fmap(identity), value);
    }

    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| n.to_string();

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(compose(function1, function2));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// IO<A> and Identity<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_io_identity_law(value in any::<i32>()) {
        prop_assert_eq!(IO::pure(value).fmap(identity), IO::pure(value));
    }

    #[test]
    fn prop_io_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(3);
        let function2 = |n: i32| n.wrapping_mul(5);

        let left = IO::new(|| value).fmap(function1).fmap(function2);
        let right = IO::new(|| value).fmap(compose(function1, function2));

        prop_assert_eq!(left.run_unsafe(), right.run_unsafe());
    }

    #[test]
    fn prop_identity_composition_law(value in any::<i64>()) {
        let function1 = |n: i64| n.wrapping_neg();
        let function2 = |n: i64| n.wrapping_add(1);

        let left = Identity(value).fmap(function1).fmap(function2);
        let right = Identity(value).fmap(compose(function1, function2));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Transformer Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_t_identity_law(value in maybe_strategy()) {
        let transformer = MaybeT::new(Identity(value));
        prop_assert_eq!(transformer.fmap(identity).run(), Identity(value));
    }

    #[test]
    fn prop_maybe_t_composition_law(value in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| i64::from(n) * 2;

        let left = MaybeT::new(IO::pure(value)).fmap(function1).fmap(function2);
        let right = MaybeT::new(IO::pure(value)).fmap(compose(function1, function2));

        prop_assert_eq!(left.run(), right.run());
    }

    #[test]
    fn prop_either_t_composition_law(value in either_strategy()) {
        let function1 = |n: i32| n.wrapping_mul(3);
        let function2 = |n: i32| n % 10;

        let left = EitherT::new(Identity(value.clone())).fmap(function1).fmap(function2);
        let right = EitherT::new(Identity(value)).fmap(compose(function1, function2));

        prop_assert_eq!(left.run(), right.run());
    }
}

// =============================================================================
// MList<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_mlist_identity_law(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let list = MList::from(elements);
        prop_assert_eq!(list.clone().fmap_mut(identity), list);
    }

    #[test]
    fn prop_mlist_composition_law(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = MList::from(elements.clone()).fmap_mut(function1).fmap_mut(function2);
        let right = MList::from(elements).fmap_mut(compose(function1, function2));

        prop_assert_eq!(left, right);
    }
}
