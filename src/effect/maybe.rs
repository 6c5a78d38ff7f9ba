//! Maybe type - the optional-value effect.
//!
//! `Maybe<A>` is either `Just(a)`, carrying exactly one payload, or `Nothing`,
//! carrying none. `Nothing` short-circuits every capability operation:
//! mapping, applying and binding a `Nothing` reproduces `Nothing` without
//! calling the supplied function.
//!
//! A `Just` wrapping an "empty" payload such as `()` or `String::new()` is
//! still a `Just`; only the variant decides presence.
//!
//! # Examples
//!
//! ```rust
//! use pmonad::effect::Maybe;
//! use pmonad::typeclass::{Foldable, Functor, Monad};
//!
//! let present = Maybe::Just(3).fmap(|x| x * 2);
//! assert_eq!(present, Maybe::Just(6));
//!
//! let absent = Maybe::<i32>::Nothing.flat_map(|x| Maybe::Just(x * 2));
//! assert_eq!(absent, Maybe::Nothing);
//!
//! assert_eq!(present.fold(1, |element, seed| element + seed), 7);
//! ```

use std::fmt;

use crate::typeclass::{
    Applicative, Foldable, Functor, Monad, Monoid, Semigroup, TypeConstructor,
};

/// An optional value: `Just(payload)` or `Nothing`.
///
/// # Capabilities
///
/// Functor, Applicative, Monad, Foldable, and Semigroup/Monoid when the
/// payload is a [`Semigroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<A> {
    /// A present payload.
    Just(A),
    /// No payload.
    Nothing,
}

impl<A> Maybe<A> {
    /// Returns `true` if this is a `Just` value.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns a `Maybe` borrowing the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the payload, or `default` for `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).unwrap_or(0), 1);
    /// assert_eq!(Maybe::Nothing.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.into()
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(option: Option<A>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just {value}"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn apply<B, F>(self, function: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, function) {
            (Self::Just(value), Maybe::Just(function)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        other.apply(self.fmap(|a| move |b| function(a, b)))
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Foldable for Maybe<A> {
    #[inline]
    fn fold<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Just(value) => function(value, init),
            Self::Nothing => init,
        }
    }
}

/// `Just` payloads are combined; `Nothing` is the identity element.
///
/// - `Just(a).combine(Just(b))` = `Just(a.combine(b))`
/// - `Just(a).combine(Nothing)` = `Just(a)`
/// - `Nothing.combine(Just(b))` = `Just(b)`
/// - `Nothing.combine(Nothing)` = `Nothing`
impl<A: Semigroup> Semigroup for Maybe<A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Just(left), Self::Just(right)) => Self::Just(left.combine(right)),
            (Self::Just(value), Self::Nothing) | (Self::Nothing, Self::Just(value)) => {
                Self::Just(value)
            }
            (Self::Nothing, Self::Nothing) => Self::Nothing,
        }
    }
}

impl<A: Semigroup> Monoid for Maybe<A> {
    fn empty() -> Self {
        Self::Nothing
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Monad, Foldable);
static_assertions::assert_impl_all!(Maybe<String>: Monoid);
