//! `MaybeT` - Maybe Monad Transformer.
//!
//! `MaybeT` adds optional results to any monad. `MaybeT<M>` wraps a value of
//! the inner monad `M` whose payload is a `Maybe<A>`, so `MaybeT<IO<Maybe<A>>>`
//! is an IO action that may produce no value.
//!
//! Binding a `MaybeT` whose payload is `Nothing` skips the continuation and
//! puts `Nothing` back into the inner monad with its `pure`.
//!
//! # Examples
//!
//! ```rust
//! use pmonad::effect::{IO, Maybe, MaybeT};
//!
//! let positive = |x: i32| -> MaybeT<IO<Maybe<i32>>> {
//!     if x > 0 { MaybeT::pure(x) } else { MaybeT::nothing() }
//! };
//!
//! let result = MaybeT::lift(IO::new(|| 5)).flat_map(positive);
//! assert_eq!(result.run().run_unsafe(), Maybe::Just(5));
//!
//! let result = MaybeT::lift(IO::new(|| -5)).flat_map(positive);
//! assert_eq!(result.run().run_unsafe(), Maybe::Nothing);
//! ```

#![forbid(unsafe_code)]

use super::{Either, EitherT, IO, Maybe};
use crate::typeclass::{
    Applicative, Functor, Identity, Monad, MonadTransformer, TypeConstructor,
};

/// A monad transformer that adds an optional result to the inner monad `M`.
///
/// `M` is the full inner value, e.g. `IO<Maybe<A>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaybeT<M> {
    inner: M,
}

impl<M: Monad> MaybeT<M> {
    /// Wraps an inner monad that already carries a `Maybe` payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::{IO, Maybe, MaybeT};
    ///
    /// let maybe_t = MaybeT::new(IO::pure(Maybe::Just(42)));
    /// assert_eq!(maybe_t.run().run_unsafe(), Maybe::Just(42));
    /// ```
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M> MaybeT<M> {
    /// Returns the wrapped inner monad unchanged.
    pub fn run(self) -> M {
        self.inner
    }
}

impl<A, M> MaybeT<M>
where
    M: Monad<Inner = Maybe<A>>,
{
    /// Wraps `value` as `Just` inside the inner monad's `pure`.
    pub fn pure(value: A) -> Self
    where
        M: TypeConstructor<WithType<Maybe<A>> = M>,
    {
        Self::new(M::pure(Maybe::Just(value)))
    }

    /// Builds the short-circuit value: `Nothing` inside the inner monad's `pure`.
    pub fn nothing() -> Self
    where
        M: TypeConstructor<WithType<Maybe<A>> = M>,
    {
        Self::new(M::pure(Maybe::Nothing))
    }

    /// Lifts a plain inner effect, wrapping its payload in `Just`.
    pub fn lift<N>(base: N) -> Self
    where
        N: Monad<Inner = A, WithType<Maybe<A>> = M>,
    {
        Self::new(base.fmap(Maybe::Just))
    }

    /// Applies the function carried by `function` to the payload of `self`.
    ///
    /// When `self` holds `Nothing`, `function` is never looked at.
    pub fn apply<B, G>(self, function: MaybeT<M::WithType<Maybe<G>>>) -> MaybeT<M::WithType<Maybe<B>>>
    where
        G: FnOnce(A) -> B,
        M::WithType<Maybe<G>>: Functor<WithType<Maybe<B>> = M::WithType<Maybe<B>>>,
    {
        MaybeT {
            inner: apply_inner(self.inner, function.inner),
        }
    }

    /// Feeds the payload into `function`; `Nothing` skips it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::{Identity, Maybe, MaybeT};
    ///
    /// let empty: MaybeT<Identity<Maybe<i32>>> = MaybeT::nothing();
    /// let result = empty.flat_map(|x| MaybeT::pure(x + 1));
    /// assert_eq!(result.run(), Identity(Maybe::Nothing));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> MaybeT<M::WithType<Maybe<B>>>
    where
        F: FnOnce(A) -> MaybeT<M::WithType<Maybe<B>>>,
    {
        MaybeT {
            inner: bind_inner(self.inner, |value| function(value).inner),
        }
    }

    /// Sequences `next` after `self`, keeping a `Nothing` from `self`.
    pub fn then<B>(self, next: MaybeT<M::WithType<Maybe<B>>>) -> MaybeT<M::WithType<Maybe<B>>> {
        self.flat_map(|_| next)
    }
}

fn bind_inner<A, B, M, F>(inner: M, function: F) -> M::WithType<Maybe<B>>
where
    M: Monad<Inner = Maybe<A>>,
    F: FnOnce(A) -> M::WithType<Maybe<B>>,
{
    inner.flat_map(|outer| match outer {
        Maybe::Just(value) => function(value),
        Maybe::Nothing => {
            trace_short_circuit!("MaybeT", "flat_map");
            M::pure(Maybe::Nothing)
        }
    })
}

fn apply_inner<A, B, G, M>(inner: M, function: M::WithType<Maybe<G>>) -> M::WithType<Maybe<B>>
where
    M: Monad<Inner = Maybe<A>>,
    G: FnOnce(A) -> B,
    M::WithType<Maybe<G>>: Functor<WithType<Maybe<B>> = M::WithType<Maybe<B>>>,
{
    inner.flat_map(|outer| match outer {
        Maybe::Just(value) => function.fmap(|carried| carried.fmap(|function| function(value))),
        Maybe::Nothing => {
            trace_short_circuit!("MaybeT", "apply");
            M::pure(Maybe::Nothing)
        }
    })
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<A, M> TypeConstructor for MaybeT<M>
where
    M: TypeConstructor<Inner = Maybe<A>>,
{
    type Inner = A;
    type WithType<B> = MaybeT<M::WithType<Maybe<B>>>;
}

impl<A, M> Functor for MaybeT<M>
where
    M: Functor<Inner = Maybe<A>>,
{
    fn fmap<B, F>(self, function: F) -> MaybeT<M::WithType<Maybe<B>>>
    where
        F: FnOnce(A) -> B,
    {
        MaybeT {
            inner: self.inner.fmap(|outer| outer.fmap(function)),
        }
    }
}

/// Implements `Applicative`, `Monad` and `MonadTransformer` for `MaybeT` over
/// the listed inner monads.
macro_rules! maybe_transformer_capabilities {
    ($([$($parameter:ident),*] $base:ty;)*) => {
        $(
            impl<$($parameter),*> Applicative for MaybeT<$base> {
                fn pure<B>(value: B) -> Self::WithType<B> {
                    MaybeT {
                        inner: <$base as Applicative>::pure(Maybe::Just(value)),
                    }
                }

                fn apply<B, G>(self, function: Self::WithType<G>) -> Self::WithType<B>
                where
                    G: FnOnce(Self::Inner) -> B,
                {
                    MaybeT {
                        inner: apply_inner(self.inner, function.inner),
                    }
                }

                fn map2<B, C, G>(self, other: Self::WithType<B>, function: G) -> Self::WithType<C>
                where
                    G: FnOnce(Self::Inner, B) -> C,
                {
                    let partial = Functor::fmap(self, |first| move |second| function(first, second));
                    MaybeT {
                        inner: apply_inner(other.inner, partial.inner),
                    }
                }
            }

            impl<$($parameter),*> Monad for MaybeT<$base> {
                fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
                where
                    F: FnOnce(Self::Inner) -> Self::WithType<B>,
                {
                    MaybeT {
                        inner: bind_inner(self.inner, |value| function(value).inner),
                    }
                }
            }

            impl<$($parameter),*> MonadTransformer for MaybeT<$base> {
                type Base = <$base as TypeConstructor>::WithType<<Self as TypeConstructor>::Inner>;
                type Stacked = $base;

                fn lift(base: Self::Base) -> Self {
                    MaybeT {
                        inner: base.fmap(Maybe::Just),
                    }
                }

                fn run(self) -> $base {
                    self.inner
                }
            }
        )*
    };
}

maybe_transformer_capabilities! {
    [A] IO<Maybe<A>>;
    [A] Identity<Maybe<A>>;
    [A] Maybe<Maybe<A>>;
    [E, A] Either<E, Maybe<A>>;
    [A] MaybeT<IO<Maybe<Maybe<A>>>>;
    [E, A] EitherT<E, IO<Either<E, Maybe<A>>>>;
}

static_assertions::assert_impl_all!(MaybeT<IO<Maybe<i32>>>: Monad, MonadTransformer);
static_assertions::assert_impl_all!(MaybeT<Either<String, Maybe<i32>>>: Monad);
