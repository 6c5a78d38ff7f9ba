//! Foldable type class - reducing payloads against a seed.
//!
//! Single-payload effects hold at most one element: folding a `Just(a)` calls
//! the function once with `a`, folding `Nothing` returns the seed untouched.
//! Containers fold every element in order.
//!
//! # Laws
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold(seed, f) == MList::from(fa.to_list()).fold(seed, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pmonad::effect::Maybe;
//! use pmonad::typeclass::Foldable;
//!
//! assert_eq!(Maybe::Just(10).fold(5, |element, seed| element + seed), 15);
//! assert_eq!(Maybe::<i32>::Nothing.fold(5, |element, seed| element + seed), 5);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;
use super::monoid::Monoid;

/// A type class for effects whose payloads can be reduced to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds every payload into `init`, in order.
    ///
    /// `function` receives the payload first and the running seed second.
    fn fold<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps every payload into a monoid and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::container::MList;
    /// use pmonad::typeclass::Foldable;
    ///
    /// let words = MList::from(vec![1, 2, 3]).fold_map(|n: i32| n.to_string());
    /// assert_eq!(words, "123");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold(M::empty(), |element, accumulator| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether there is no payload at all.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold(true, |_, _| false)
    }

    /// Returns the number of payloads.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold(0, |_, count| count + 1)
    }

    /// Collects the payloads into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold(Vec::new(), |element, mut accumulator| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns whether any payload satisfies `predicate`.
    fn exists<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold(false, |element, found| found || predicate(&element))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Foldable for Identity<A> {
    #[inline]
    fn fold<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, init)
    }
}
