//! Applicative type class - applying wrapped functions to wrapped payloads.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `pure`: lifting a plain value into the success case of the effect
//! - `apply`: feeding the payload of `self` into a function carried by another
//!   value of the same effect
//! - `map2` (liftA2) and the `product*` family, convenience combinators built
//!   from the two above
//!
//! Both operands of `apply` short-circuit: if either is empty or a failure the
//! result is empty or a failure, and the argument's failure is reported first.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! v.apply(pure(|x| x)) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(x).apply(pure(f)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! pure(y).apply(u) == u.apply(pure(|f| f(y)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pmonad::effect::Maybe;
//! use pmonad::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::Just(42));
//!
//! let sum = Maybe::Just(1).map2(Maybe::Just(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::Just(3));
//! ```

use super::functor::{Functor, FunctorMut};
use super::identity::Identity;

/// A type class for effects that can lift values and apply wrapped functions.
///
/// Implementors provide `pure`, `apply` and `map2`. `map2` is expected to be
/// written in terms of the implementor's own `fmap` and `apply`
/// (`other.apply(self.fmap(curried))`); the generic associated type encoding
/// cannot express that composition once for every implementor, because
/// `Self::WithType<B>` and `Self` are distinct types to the trait solver.
pub trait Applicative: Functor {
    /// Lifts a pure value into the success case of the effect.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::Either;
    /// use pmonad::typeclass::Applicative;
    ///
    /// let value: Either<String, i32> = <Either<String, ()>>::pure(7);
    /// assert_eq!(value, Either::Right(7));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies the function carried by `function` to the payload of `self`.
    ///
    /// Short-circuits to the empty/failure side if either operand is
    /// empty/failure; the failure of `self` takes precedence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::Maybe;
    /// use pmonad::typeclass::Applicative;
    ///
    /// let increment = Maybe::Just(|x: i32| x + 1);
    /// assert_eq!(Maybe::Just(41).apply(increment), Maybe::Just(42));
    ///
    /// let missing: Maybe<fn(i32) -> i32> = Maybe::Nothing;
    /// assert_eq!(Maybe::Just(41).apply(missing), Maybe::Nothing);
    /// ```
    fn apply<B, F>(self, function: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Combines two effects with a binary function (liftA2).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::Maybe;
    /// use pmonad::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::Just(3).map2(Maybe::Just(4), |a, b| a * b), Maybe::Just(12));
    /// assert_eq!(Maybe::Just(3).map2(Maybe::<i32>::Nothing, |a, b| a * b), Maybe::Nothing);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two effects into a tuple of their payloads.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both effects and keeps the payload of `self` (lapply).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::Either;
    /// use pmonad::typeclass::Applicative;
    ///
    /// let kept: Either<&str, i32> = Either::Right(1).product_left(Either::Right("ignored"));
    /// assert_eq!(kept, Either::Right(1));
    ///
    /// let failed: Either<&str, i32> = Either::Right(1).product_left(Either::<&str, ()>::Left("boom"));
    /// assert_eq!(failed, Either::Left("boom"));
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both effects and keeps the payload of `other` (rapply).
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    #[inline]
    fn apply<B, F>(self, function: Identity<F>) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity::new((function.into_inner())(self.into_inner()))
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        other.apply(self.fmap(|a| move |b| function(a, b)))
    }
}


// =============================================================================
// Multi-element containers
//
// Containers with several payloads call the function once per payload, so
// they need `FnMut` and clone their payloads to build every combination.
// =============================================================================

/// Applicative operations for containers that hold many payloads.
///
/// `apply` and `map2` visit every combination of the two operands, ordered
/// by the payloads of `self` first.
///
/// # Examples
///
/// ```rust
/// use pmonad::container::MList;
/// use pmonad::mlist;
/// use pmonad::typeclass::ApplicativeMut;
///
/// let pairs: MList<(i32, char)> = mlist![1, 2].map2(mlist!['a', 'b'], |n, c| (n, c));
/// assert_eq!(pairs, mlist![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
/// ```
pub trait ApplicativeMut: FunctorMut {
    /// Wraps a single payload.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies every function in `functions` to every payload of `self`.
    fn apply<B, G>(self, functions: Self::WithType<G>) -> Self::WithType<B>
    where
        Self::Inner: Clone,
        G: FnMut(Self::Inner) -> B;

    /// Combines every payload of `self` with every payload of `other`.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self::Inner: Clone,
        B: Clone,
        F: FnMut(Self::Inner, B) -> C;
}
