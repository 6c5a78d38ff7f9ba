//! `Monoid` - appendable values with an empty value.
//!
//! `empty` is the value that `combine` leaves unchanged. For `Maybe` it is
//! `Nothing`, for the containers the empty list or mapping, for `IO` the
//! pure empty payload.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pmonad::effect::Maybe;
//! use pmonad::typeclass::{Monoid, Semigroup};
//!
//! let value = Maybe::Just(String::from("x"));
//! assert_eq!(Maybe::empty().combine(value.clone()), value);
//! assert_eq!(String::combine_all(vec![String::from("a"), String::from("b")]), "ab");
//! ```

use super::Identity;
use super::semigroup::Semigroup;

/// Semigroups with a neutral element.
pub trait Monoid: Semigroup {
    /// The value that [`Semigroup::combine`] leaves unchanged.
    fn empty() -> Self;

    /// Appends every value of `values` in order; an empty input gives
    /// [`Monoid::empty`].
    fn combine_all<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        values.into_iter().fold(Self::empty(), Self::combine)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

impl<A: Monoid> Monoid for Identity<A> {
    fn empty() -> Self {
        Identity(A::empty())
    }
}
