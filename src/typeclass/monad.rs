//! Monad type class - sequencing dependent computations.
//!
//! `Monad` extends `Applicative` with `flat_map` (bind): the payload of one
//! step decides which effect runs next. Empty and failure values stop the
//! chain; every later step is skipped.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pmonad::effect::Either;
//! use pmonad::typeclass::Monad;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|_| format!("not a number: {input}")).into()
//! }
//!
//! let doubled = parse("21").flat_map(|n| Either::Right(n * 2));
//! assert_eq!(doubled, Either::Right(42));
//!
//! let failed = parse("x").flat_map(|n| Either::Right(n * 2));
//! assert_eq!(failed, Either::Left("not a number: x".to_string()));
//! ```

use super::applicative::Applicative;
use super::functor::FunctorMut;
use super::identity::Identity;

/// A type class for effects that support sequencing of dependent steps.
///
/// # Examples
///
/// ```rust
/// use pmonad::effect::Maybe;
/// use pmonad::typeclass::Monad;
///
/// let halve = |n: i32| if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing };
///
/// assert_eq!(Maybe::Just(8).flat_map(halve).flat_map(halve), Maybe::Just(2));
/// assert_eq!(Maybe::Just(6).flat_map(halve).flat_map(halve), Maybe::Nothing);
/// ```
pub trait Monad: Applicative {
    /// Feeds the payload into `function` and returns the effect it produces.
    ///
    /// Empty and failure values are returned as they are, without calling
    /// `function`.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Same as [`flat_map`](Monad::flat_map), under the name `Option` and
    /// `Result` use.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two effects, discarding the payload of the first.
    ///
    /// If `self` is empty or a failure, that short-circuit is kept and `next`
    /// is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::Maybe;
    /// use pmonad::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Just(5).then(Maybe::Just("next")), Maybe::Just("next"));
    /// assert_eq!(Maybe::<i32>::Nothing.then(Maybe::Just("next")), Maybe::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}


// =============================================================================
// Multi-element containers
// =============================================================================

/// Sequencing for containers that hold many payloads.
///
/// The continuation runs once per payload and the containers it returns are
/// merged in source order. Only [`FunctorMut`] is required, so containers
/// whose `pure` needs extra bounds can still be bound.
///
/// # Examples
///
/// ```rust
/// use pmonad::mlist;
/// use pmonad::typeclass::MonadMut;
///
/// let expanded = mlist![1, 2].flat_map(|n| mlist![n, -n]);
/// assert_eq!(expanded, mlist![1, -1, 2, -2]);
/// ```
pub trait MonadMut: FunctorMut {
    /// Feeds every payload into `function` and merges the results.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Same as [`flat_map`](MonadMut::flat_map).
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Replaces every payload with a copy of `next`.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone,
    {
        self.flat_map(|_| next.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn and_then_is_flat_map() {
        let square = |n: u32| Identity(n * n);
        assert_eq!(Identity(7).and_then(square), Identity(7).flat_map(square));
    }

    #[rstest]
    fn identity_left_identity() {
        let function = |n: i32| Identity::new(n + 1);
        assert_eq!(<Identity<()>>::pure(1).flat_map(function), function(1));
    }

    #[rstest]
    fn identity_right_identity() {
        let value = Identity::new("x");
        assert_eq!(value.flat_map(<Identity<()>>::pure), value);
    }

    #[rstest]
    fn identity_then_returns_next() {
        assert_eq!(Identity::new(1).then(Identity::new('n')), Identity::new('n'));
    }
}
