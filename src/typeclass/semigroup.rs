//! `Semigroup` - values that can be appended.
//!
//! `combine` is the append operation. Effects use it to merge two results:
//! `Maybe` appends payloads and skips `Nothing`, `Either` keeps the first
//! `Right`, and the containers concatenate or merge.
//!
//! Every instance must be associative:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pmonad::typeclass::Semigroup;
//!
//! let greeting = String::from("good ").combine(String::from("morning"));
//! assert_eq!(greeting, "good morning");
//!
//! let merged = (String::from("a"), vec![1]).combine((String::from("b"), vec![2]));
//! assert_eq!(merged, (String::from("ab"), vec![1, 2]));
//! ```

use super::Identity;

/// Types with an associative append operation.
pub trait Semigroup {
    /// Appends `other` to `self`.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Appends `count` copies of `self` together.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::typeclass::Semigroup;
    ///
    /// assert_eq!(vec![0].combine_n(3), vec![0, 0, 0]);
    /// ```
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert_ne!(count, 0, "combine_n needs at least one copy");

        std::iter::repeat_n(self.clone(), count - 1).fold(self, Self::combine)
    }

    /// Appends every value of `values` in order.
    ///
    /// Returns `None` for an empty input. [`Monoid::combine_all`](super::Monoid::combine_all)
    /// returns the empty value instead.
    fn reduce_all<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        values.into_iter().reduce(Self::combine)
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, (): Self) -> Self {}
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, (first, second): Self) -> Self {
        (self.0.combine(first), self.1.combine(second))
    }
}

impl<A: Semigroup> Semigroup for Identity<A> {
    fn combine(self, other: Self) -> Self {
        Identity(self.0.combine(other.0))
    }
}
