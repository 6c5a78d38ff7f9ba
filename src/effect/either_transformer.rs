//! `EitherT` - Either Monad Transformer.
//!
//! `EitherT` adds error handling capability to any monad.
//! `EitherT<E, M>` wraps a value of the inner monad `M` whose payload is an
//! `Either<E, A>`, so `EitherT<E, IO<Either<E, A>>>` is an IO action that can
//! fail with an error of type `E`.
//!
//! # Examples
//!
//! ```rust
//! use pmonad::effect::{Either, EitherT, IO};
//!
//! let doubled = EitherT::<String, _>::lift(IO::new(|| 5))
//!     .flat_map(|x| EitherT::lift(IO::new(move || x * 2)));
//! assert_eq!(doubled.run().run_unsafe(), Either::Right(10));
//! ```

#![forbid(unsafe_code)]

use std::marker::PhantomData;

use super::{Either, IO, Maybe, MaybeT};
use crate::typeclass::{
    Applicative, Functor, Identity, Monad, MonadTransformer, TypeConstructor,
};

/// A monad transformer that adds a carried error `E` to the inner monad `M`.
///
/// # Type Parameters
///
/// - `E`: The error type
/// - `M`: The full inner value, e.g. `IO<Either<E, A>>`
///
/// # Examples
///
/// ```rust
/// use pmonad::effect::{Either, EitherT, Identity};
///
/// fn validate_positive(value: i32) -> EitherT<String, Identity<Either<String, i32>>> {
///     if value > 0 {
///         EitherT::pure(value)
///     } else {
///         EitherT::throw("Value must be positive".to_string())
///     }
/// }
///
/// assert_eq!(validate_positive(5).run(), Identity(Either::Right(5)));
/// assert_eq!(
///     validate_positive(-1).run(),
///     Identity(Either::Left("Value must be positive".to_string()))
/// );
/// ```
pub struct EitherT<E, M> {
    inner: M,
    _error: PhantomData<E>,
}

impl<E, M: Monad> EitherT<E, M> {
    /// Wraps an inner monad that already carries an `Either` payload.
    pub const fn new(inner: M) -> Self {
        Self {
            inner,
            _error: PhantomData,
        }
    }
}

impl<E, M> EitherT<E, M> {
    const fn wrap(inner: M) -> Self {
        Self {
            inner,
            _error: PhantomData,
        }
    }

    /// Returns the wrapped inner monad unchanged.
    pub fn run(self) -> M {
        self.inner
    }
}

impl<E, M: Clone> Clone for EitherT<E, M> {
    fn clone(&self) -> Self {
        Self::wrap(self.inner.clone())
    }
}

impl<E, M: Copy> Copy for EitherT<E, M> {}

impl<E, M: PartialEq> PartialEq for EitherT<E, M> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E, M: Eq> Eq for EitherT<E, M> {}

impl<E, M: std::fmt::Debug> std::fmt::Debug for EitherT<E, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("EitherT").field(&self.inner).finish()
    }
}

impl<E, A, M> EitherT<E, M>
where
    M: Monad<Inner = Either<E, A>>,
{
    /// Wraps `value` as `Right` inside the inner monad's `pure`.
    pub fn pure(value: A) -> Self
    where
        M: TypeConstructor<WithType<Either<E, A>> = M>,
    {
        Self::new(M::pure(Either::Right(value)))
    }

    /// Builds the short-circuit value: `Left(error)` inside the inner monad's
    /// `pure`.
    pub fn throw(error: E) -> Self
    where
        M: TypeConstructor<WithType<Either<E, A>> = M>,
    {
        Self::new(M::pure(Either::Left(error)))
    }

    /// Lifts a plain inner effect, wrapping its payload in `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::{Either, EitherT, IO};
    ///
    /// let lifted = EitherT::<String, _>::lift(IO::new(|| 1));
    /// assert_eq!(lifted.run().run_unsafe(), Either::Right(1));
    /// ```
    pub fn lift<N>(base: N) -> Self
    where
        N: Monad<Inner = A, WithType<Either<E, A>> = M>,
    {
        Self::new(base.fmap(Either::Right))
    }

    /// Applies the function carried by `function` to the payload of `self`.
    ///
    /// A `Left` in `self` is reported before one in `function`, and then
    /// `function` is never looked at.
    pub fn apply<B, G>(
        self,
        function: EitherT<E, M::WithType<Either<E, G>>>,
    ) -> EitherT<E, M::WithType<Either<E, B>>>
    where
        G: FnOnce(A) -> B,
        M::WithType<Either<E, G>>: Functor<WithType<Either<E, B>> = M::WithType<Either<E, B>>>,
    {
        EitherT::wrap(apply_inner(self.inner, function.inner))
    }

    /// Feeds the payload into `function`; a `Left` skips it.
    pub fn flat_map<B, F>(self, function: F) -> EitherT<E, M::WithType<Either<E, B>>>
    where
        F: FnOnce(A) -> EitherT<E, M::WithType<Either<E, B>>>,
    {
        EitherT::wrap(bind_inner(self.inner, |value| function(value).inner))
    }

    /// Sequences `next` after `self`, keeping a `Left` from `self`.
    pub fn then<B>(
        self,
        next: EitherT<E, M::WithType<Either<E, B>>>,
    ) -> EitherT<E, M::WithType<Either<E, B>>> {
        self.flat_map(|_| next)
    }
}

fn bind_inner<E, A, B, M, F>(inner: M, function: F) -> M::WithType<Either<E, B>>
where
    M: Monad<Inner = Either<E, A>>,
    F: FnOnce(A) -> M::WithType<Either<E, B>>,
{
    inner.flat_map(|outer| match outer {
        Either::Right(value) => function(value),
        Either::Left(error) => {
            trace_short_circuit!("EitherT", "flat_map");
            M::pure(Either::Left(error))
        }
    })
}

fn apply_inner<E, A, B, G, M>(
    inner: M,
    function: M::WithType<Either<E, G>>,
) -> M::WithType<Either<E, B>>
where
    M: Monad<Inner = Either<E, A>>,
    G: FnOnce(A) -> B,
    M::WithType<Either<E, G>>: Functor<WithType<Either<E, B>> = M::WithType<Either<E, B>>>,
{
    inner.flat_map(|outer| match outer {
        Either::Right(value) => {
            function.fmap(|carried| carried.fmap(|function| function(value)))
        }
        Either::Left(error) => {
            trace_short_circuit!("EitherT", "apply");
            M::pure(Either::Left(error))
        }
    })
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<E, A, M> TypeConstructor for EitherT<E, M>
where
    M: TypeConstructor<Inner = Either<E, A>>,
{
    type Inner = A;
    type WithType<B> = EitherT<E, M::WithType<Either<E, B>>>;
}

impl<E, A, M> Functor for EitherT<E, M>
where
    M: Functor<Inner = Either<E, A>>,
{
    fn fmap<B, F>(self, function: F) -> EitherT<E, M::WithType<Either<E, B>>>
    where
        F: FnOnce(A) -> B,
    {
        EitherT::wrap(self.inner.fmap(|outer| outer.fmap(function)))
    }
}

/// Implements `Applicative`, `Monad` and `MonadTransformer` for `EitherT` over
/// the listed inner monads.
macro_rules! either_transformer_capabilities {
    ($([$($parameter:ident),*] $base:ty;)*) => {
        $(
            impl<E, $($parameter),*> Applicative for EitherT<E, $base> {
                fn pure<B>(value: B) -> Self::WithType<B> {
                    EitherT::wrap(<$base as Applicative>::pure(Either::Right(value)))
                }

                fn apply<B, G>(self, function: Self::WithType<G>) -> Self::WithType<B>
                where
                    G: FnOnce(Self::Inner) -> B,
                {
                    EitherT::wrap(apply_inner(self.inner, function.inner))
                }

                fn map2<B, C, G>(self, other: Self::WithType<B>, function: G) -> Self::WithType<C>
                where
                    G: FnOnce(Self::Inner, B) -> C,
                {
                    let partial = Functor::fmap(self, |first| move |second| function(first, second));
                    EitherT::wrap(apply_inner(other.inner, partial.inner))
                }
            }

            impl<E, $($parameter),*> Monad for EitherT<E, $base> {
                fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
                where
                    F: FnOnce(Self::Inner) -> Self::WithType<B>,
                {
                    EitherT::wrap(bind_inner(self.inner, |value| function(value).inner))
                }
            }

            impl<E, $($parameter),*> MonadTransformer for EitherT<E, $base> {
                type Base = <$base as TypeConstructor>::WithType<<Self as TypeConstructor>::Inner>;
                type Stacked = $base;

                fn lift(base: Self::Base) -> Self {
                    EitherT::wrap(base.fmap(Either::Right))
                }

                fn run(self) -> $base {
                    self.inner
                }
            }
        )*
    };
}

either_transformer_capabilities! {
    [A] IO<Either<E, A>>;
    [A] Identity<Either<E, A>>;
    [A] Maybe<Either<E, A>>;
    [E2, A] Either<E2, Either<E, A>>;
    [A] MaybeT<IO<Maybe<Either<E, A>>>>;
    [E2, A] EitherT<E2, IO<Either<E2, Either<E, A>>>>;
}

static_assertions::assert_impl_all!(EitherT<String, IO<Either<String, i32>>>: Monad, MonadTransformer);
static_assertions::assert_impl_all!(EitherT<String, MaybeT<IO<Maybe<Either<String, i32>>>>>: Monad);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Checked<A> = EitherT<String, Identity<Either<String, A>>>;

    #[rstest]
    fn lift_then_bind_doubles() {
        let doubled = EitherT::<String, _>::lift(IO::new(|| 5))
            .flat_map(|x: i32| EitherT::lift(IO::new(move || x * 2)));
        assert_eq!(doubled.run().run_unsafe(), Either::Right(10));
    }

    #[rstest]
    fn flat_map_skips_function_on_left() {
        let failed: Checked<i32> = EitherT::throw("boom".to_string());
        let result = failed.flat_map(|_| -> Checked<i32> { panic!("must not be called") });
        assert_eq!(result.run(), Identity(Either::Left("boom".to_string())));
    }

    #[rstest]
    fn fmap_keeps_left() {
        let failed: Checked<i32> = EitherT::throw("boom".to_string());
        assert_eq!(
            failed.fmap(|x| x + 1).run(),
            Identity(Either::Left("boom".to_string()))
        );
    }

    #[rstest]
    fn apply_reports_value_error_first() {
        let value: Checked<i32> = EitherT::throw("value".to_string());
        let function: Checked<fn(i32) -> i32> = EitherT::throw("function".to_string());
        assert_eq!(
            value.apply(function).run(),
            Identity(Either::Left("value".to_string()))
        );
    }

    #[rstest]
    fn apply_reports_function_error() {
        let value: Checked<i32> = EitherT::pure(1);
        let function: Checked<fn(i32) -> i32> = EitherT::throw("function".to_string());
        assert_eq!(
            value.apply(function).run(),
            Identity(Either::Left("function".to_string()))
        );
    }

    #[rstest]
    fn then_keeps_left_short_circuit() {
        let failed: Checked<i32> = EitherT::throw("first".to_string());
        let next: Checked<&str> = EitherT::pure("next");
        assert_eq!(
            failed.then(next).run(),
            Identity(Either::Left("first".to_string()))
        );
    }

    #[rstest]
    fn stacked_over_maybe_t_propagates_inner_nothing() {
        let inner: MaybeT<IO<Maybe<Either<String, i32>>>> = MaybeT::nothing();
        let stacked = EitherT::new(inner);
        let result = stacked.flat_map(|x| EitherT::pure(x + 1));
        assert_eq!(result.run().run().run_unsafe(), Maybe::Nothing);
    }

    #[rstest]
    fn trait_lift_wraps_right() {
        let lifted = <EitherT<String, Maybe<Either<String, i32>>> as MonadTransformer>::lift(
            Maybe::Just(3),
        );
        assert_eq!(MonadTransformer::run(lifted), Maybe::Just(Either::Right(3)));
    }
}
