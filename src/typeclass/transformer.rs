//! MonadTransformer type class - stacking an effect on top of another.
//!
//! A transformer `T` wraps a value of the inner monad `M` whose payload is
//! the outer effect, `M<Outer<A>>`. [`MonadTransformer::lift`] injects a plain
//! `M<A>` into the stack and [`MonadTransformer::run`] is the only way back
//! out.
//!
//! # Laws
//!
//! ## Lift Pure
//!
//! ```text
//! T::lift(M::pure(a)) == T::pure(a)
//! ```
//!
//! ## Lift Bind
//!
//! ```text
//! T::lift(m.flat_map(f)) == T::lift(m).flat_map(|x| T::lift(f(x)))
//! ```

use super::monad::Monad;

/// A type class for monad transformers.
///
/// `Base` is the plain inner effect that [`lift`](MonadTransformer::lift)
/// accepts; `Stacked` is the `M<Outer<A>>` value that
/// [`run`](MonadTransformer::run) hands back.
///
/// Only values that satisfy [`Monad`] can be lifted:
///
/// ```rust,compile_fail
/// use pmonad::effect::EitherT;
/// use pmonad::typeclass::MonadTransformer;
///
/// struct NotAMonad(i32);
///
/// let _ = EitherT::<String, _>::lift(NotAMonad(1));
/// ```
pub trait MonadTransformer: Sized {
    /// The plain inner effect accepted by `lift`, e.g. `IO<A>`.
    type Base: Monad;

    /// The wrapped inner-of-outer effect, e.g. `IO<Either<E, A>>`.
    type Stacked;

    /// Wraps the payload of `base` in the outer success case.
    fn lift(base: Self::Base) -> Self;

    /// Returns the wrapped inner effect unchanged.
    fn run(self) -> Self::Stacked;
}
