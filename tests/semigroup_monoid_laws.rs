//! Property-based tests for Semigroup and Monoid laws.
//!
//! - **Associativity**: `(a <> b) <> c == a <> (b <> c)`
//! - **Left Identity**: `empty <> a == a`
//! - **Right Identity**: `a <> empty == a`

use pmonad::container::{MDict, MList};
use pmonad::effect::{Either, IO, Maybe};
use pmonad::typeclass::{Monoid, Semigroup};
use proptest::prelude::*;

fn maybe_string() -> impl Strategy<Value = Maybe<String>> {
    any::<Option<String>>().prop_map(Maybe::from)
}

fn either_value() -> impl Strategy<Value = Either<String, i32>> {
    prop::result::maybe_ok(any::<i32>(), "[a-z]{0,4}").prop_map(Either::from)
}

proptest! {
    #[test]
    fn prop_maybe_associativity(a in maybe_string(), b in maybe_string(), c in maybe_string()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_identity(value in maybe_string()) {
        prop_assert_eq!(Maybe::empty().combine(value.clone()), value.clone());
        prop_assert_eq!(value.clone().combine(Maybe::empty()), value);
    }

    #[test]
    fn prop_either_associativity(a in either_value(), b in either_value(), c in either_value()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_right_always_wins_from_the_left(x in any::<i32>(), other in either_value()) {
        prop_assert_eq!(Either::Right(x).combine(other), Either::Right(x));
    }

    #[test]
    fn prop_either_left_yields_to_right(error in "[a-z]{1,4}", y in any::<i32>()) {
        prop_assert_eq!(Either::Left(error).combine(Either::Right(y)), Either::Right(y));
    }

    #[test]
    fn prop_io_identity(value in any::<String>()) {
        prop_assert_eq!(IO::empty().combine(IO::pure(value.clone())), IO::pure(value));
    }

    #[test]
    fn prop_mlist_associativity(
        a in prop::collection::vec(any::<u8>(), 0..8),
        b in prop::collection::vec(any::<u8>(), 0..8),
        c in prop::collection::vec(any::<u8>(), 0..8),
    ) {
        let (a, b, c) = (MList::from(a), MList::from(b), MList::from(c));
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_mdict_identity(entries in prop::collection::vec(("[a-c]", any::<i32>()), 0..6)) {
        let mapping: MDict<String, i32> = entries.into_iter().collect();
        prop_assert_eq!(MDict::empty().combine(mapping.clone()), mapping.clone());
        prop_assert_eq!(mapping.clone().combine(MDict::empty()), mapping);
    }

    #[test]
    fn prop_mdict_associativity(
        a in prop::collection::vec(("[a-c]", any::<i32>()), 0..4),
        b in prop::collection::vec(("[a-c]", any::<i32>()), 0..4),
        c in prop::collection::vec(("[a-c]", any::<i32>()), 0..4),
    ) {
        let a: MDict<String, i32> = a.into_iter().collect();
        let b: MDict<String, i32> = b.into_iter().collect();
        let c: MDict<String, i32> = c.into_iter().collect();
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }
}

#[test]
fn combine_all_of_maybes_skips_nothing() {
    let values = vec![
        Maybe::Just(String::from("a")),
        Maybe::Nothing,
        Maybe::Just(String::from("b")),
    ];
    assert_eq!(Maybe::combine_all(values), Maybe::Just(String::from("ab")));
}

#[test]
fn reduce_all_of_eithers_finds_first_right() {
    let values: Vec<Either<&str, i32>> = vec![Either::Left("a"), Either::Right(2), Either::Right(3)];
    assert_eq!(Either::reduce_all(values), Some(Either::Right(2)));
}
