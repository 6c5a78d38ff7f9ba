//! Either type - the result effect.
//!
//! `Either<E, A>` is `Right(a)` for a successful payload or `Left(e)` for a
//! carried error. Errors are ordinary values: they are never raised, they are
//! simply passed along by `fmap`, `apply` and `flat_map`, which all
//! short-circuit on `Left`.
//!
//! Combining two values with [`Semigroup::combine`] is a left-biased choice:
//! the first `Right` wins, whichever side it is on. Errors are not
//! accumulated.
//!
//! # Examples
//!
//! ```rust
//! use pmonad::effect::Either;
//! use pmonad::typeclass::{Monad, Semigroup};
//!
//! let success: Either<String, i32> = Either::Right(5);
//! assert_eq!(success.flat_map(|x| Either::Right(x + 1)), Either::Right(6));
//!
//! let failure: Either<&str, i32> = Either::Left("e");
//! assert_eq!(failure.combine(Either::Right(2)), Either::Right(2));
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Foldable, Functor, Monad, Semigroup, TypeConstructor};

/// A success payload (`Right`) or a carried error (`Left`).
///
/// # Capabilities
///
/// Functor, Applicative, Monad, Foldable, Semigroup.
///
/// # Type Parameters
///
/// * `E` - The error type carried by `Left`
/// * `A` - The payload type carried by `Right`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<E, A> {
    /// A carried error (Failure).
    Left(E),
    /// A successful payload (Success).
    Right(A),
}

impl<E, A> Either<E, A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the error, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<E> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Returns the payload, if any.
    #[inline]
    pub fn right(self) -> Option<A> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the carried error, leaving a `Right` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::Either;
    ///
    /// let failure: Either<&str, i32> = Either::Left("bad");
    /// assert_eq!(failure.map_left(str::len), Either::Left(3));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, A>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Collapses both sides into one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::Either;
    ///
    /// let outcome: Either<String, i32> = Either::Right(7);
    /// let message = outcome.either(|error| error, |value| format!("got {value}"));
    /// assert_eq!(message, "got 7");
    /// ```
    #[inline]
    pub fn either<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Left(error) => left_function(error),
            Self::Right(value) => right_function(value),
        }
    }

    /// Converts into the standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    fn from(either: Either<E, A>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Either<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => write!(formatter, "Left {error}"),
            Self::Right(value) => write!(formatter, "Right {value}"),
        }
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<E, A> TypeConstructor for Either<E, A> {
    type Inner = A;
    type WithType<B> = Either<E, B>;
}

impl<E, A> Functor for Either<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<E, A> Applicative for Either<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Either<E, B> {
        Either::Right(value)
    }

    /// The error of `self` is reported before the error of `function`.
    #[inline]
    fn apply<B, F>(self, function: Either<E, F>) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, function) {
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
            (Self::Right(value), Either::Right(function)) => Either::Right(function(value)),
        }
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<E, B>, function: F) -> Either<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        other.apply(self.fmap(|a| move |b| function(a, b)))
    }
}

impl<E, A> Monad for Either<E, A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }
}

impl<E, A> Foldable for Either<E, A> {
    #[inline]
    fn fold<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(value, init),
        }
    }
}

/// Left-biased choice: the first `Right` wins.
///
/// - `Right(x).combine(_)` = `Right(x)`
/// - `Left(_).combine(Right(y))` = `Right(y)`
/// - `Left(_).combine(Left(e))` = `Left(e)`
impl<E, A> Semigroup for Either<E, A> {
    fn combine(self, other: Self) -> Self {
        match self {
            Self::Right(_) => self,
            Self::Left(_) => other,
        }
    }
}

static_assertions::assert_impl_all!(Either<String, i32>: Monad, Foldable, Semigroup);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn right_fmap_applies_function() {
        let value: Either<String, i32> = Either::Right(2);
        assert_eq!(value.fmap(|x| x * 10), Either::Right(20));
    }

    #[rstest]
    fn left_fmap_keeps_error() {
        let value: Either<&str, i32> = Either::Left("e");
        assert_eq!(value.fmap(|x| x * 10), Either::Left("e"));
    }

    #[rstest]
    fn left_flat_map_never_calls_function() {
        let value: Either<&str, i32> = Either::Left("e");
        let result = value.flat_map(|_| -> Either<&str, i32> { panic!("must not be called") });
        assert_eq!(result, Either::Left("e"));
    }

    #[rstest]
    fn right_flat_map_chains() {
        let value: Either<&str, i32> = Either::Right(5);
        assert_eq!(value.flat_map(|x| Either::Right(x + 1)), Either::Right(6));
    }

    #[rstest]
    fn apply_reports_value_error_first() {
        let value: Either<&str, i32> = Either::Left("value");
        let function: Either<&str, fn(i32) -> i32> = Either::Left("function");
        assert_eq!(value.apply(function), Either::Left("value"));
    }

    #[rstest]
    fn apply_reports_function_error() {
        let value: Either<&str, i32> = Either::Right(1);
        let function: Either<&str, fn(i32) -> i32> = Either::Left("function");
        assert_eq!(value.apply(function), Either::Left("function"));
    }

    #[rstest]
    #[case(Either::Right(1), Either::Right(2), Either::Right(1))]
    #[case(Either::Right(1), Either::Left("b"), Either::Right(1))]
    #[case(Either::Left("a"), Either::Right(2), Either::Right(2))]
    #[case(Either::Left("a"), Either::Left("b"), Either::Left("b"))]
    fn combine_is_first_success(
        #[case] left: Either<&'static str, i32>,
        #[case] right: Either<&'static str, i32>,
        #[case] expected: Either<&'static str, i32>,
    ) {
        assert_eq!(left.combine(right), expected);
    }

    #[rstest]
    fn fold_skips_left() {
        let value: Either<&str, i32> = Either::Left("e");
        assert_eq!(value.fold(3, |element, seed| element + seed), 3);
    }

    #[rstest]
    fn result_conversions_round_trip() {
        let ok: Result<i32, String> = Ok(1);
        assert_eq!(Either::from(ok), Either::Right(1));
        let either: Either<String, i32> = Either::Left(String::from("e"));
        assert_eq!(either.into_result(), Err(String::from("e")));
    }

    #[rstest]
    fn display_names_the_variant() {
        let value: Either<String, i32> = Either::Right(3);
        assert_eq!(value.to_string(), "Right 3");
    }
}
