//! Functor type class - mapping over wrapped payloads.
//!
//! A `Functor` can have a function applied to its payload(s) while the shape
//! of the effect stays the same: a `Nothing` stays `Nothing`, a `Left` keeps
//! its error, a `Just` keeps being a `Just`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(compose(f, g))
//! ```
//!
//! # Partially applied payloads
//!
//! Functions are never inspected for arity. To build up a multi-argument
//! function inside an effect, map a curried function; the payload becomes the
//! partially applied remainder, which [`Applicative::apply`] completes later.
//!
//! ```rust
//! use pmonad::curry2;
//! use pmonad::effect::Maybe;
//! use pmonad::typeclass::{Applicative, Functor};
//!
//! let add = |first: i32, second: i32| first + second;
//! let partial = Maybe::Just(3).fmap(curry2!(add));
//! assert_eq!(Maybe::Just(4).apply(partial), Maybe::Just(7));
//! ```
//!
//! [`Applicative::apply`]: super::Applicative::apply

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for effects whose payload can be transformed.
///
/// # Examples
///
/// ```rust
/// use pmonad::effect::Maybe;
/// use pmonad::typeclass::Functor;
///
/// assert_eq!(Maybe::Just(3).fmap(|x| x * 2), Maybe::Just(6));
/// assert_eq!(Maybe::<i32>::Nothing.fmap(|x| x * 2), Maybe::Nothing);
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the payload, or reproduces the empty/failure
    /// case unchanged.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the payload with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::Maybe;
    /// use pmonad::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Just(5).replace("replaced"), Maybe::Just("replaced"));
    /// assert_eq!(Maybe::<i32>::Nothing.replace("replaced"), Maybe::Nothing);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the payload, keeping only the shape of the effect.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// An extension of `Functor` for effects carrying several payloads.
///
/// `Functor::fmap` takes a `FnOnce`, which is enough for single-payload
/// effects. Containers such as `MList` call the function once per element and
/// implement this trait instead.
///
/// # Examples
///
/// ```rust
/// use pmonad::container::MList;
/// use pmonad::typeclass::FunctorMut;
///
/// let doubled = MList::from(vec![1, 2, 3]).fmap_mut(|n| n * 2);
/// assert_eq!(doubled, MList::from(vec![2, 4, 6]));
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies `function` to every payload, preserving order and shape.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}
