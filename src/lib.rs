//! # pmonad
//!
//! Functor / Applicative / Monad abstractions with concrete effects and
//! monad transformers.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Semigroup,
//!   Monoid and `MonadTransformer`, built on a GAT-based higher-kinded type
//!   emulation
//! - **Effects**: `Maybe` (optional value), `Either` (payload or carried
//!   error) and `IO` (result of a side effect)
//! - **Monad Transformers**: `MaybeT` and `EitherT`, stacked over any monad
//! - **Containers**: `MList` and `MDict`, effects with many payloads
//! - **Function Utilities**: identity, constant, compose, flip and the
//!   `curry2!`..`curry4!` macros
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `compose`: Function utilities and currying macros
//! - `effect`: Maybe, Either, IO and the transformers
//! - `container`: `MList` and `MDict`
//! - `async`: `MList::traverse_async`
//! - `tracing`: structured `tracing` events for IO execution and
//!   transformer short-circuits
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use pmonad::prelude::*;
//!
//! let add = |first: i32, second: i32| first + second;
//! let partial = Maybe::Just(3).fmap(curry2!(add));
//! assert_eq!(Maybe::Just(4).apply(partial), Maybe::Just(7));
//!
//! let doubled = EitherT::<String, _>::lift(IO::new(|| 5))
//!     .flat_map(|x| EitherT::lift(IO::new(move || x * 2)));
//! assert_eq!(doubled.run().run_unsafe(), Either::Right(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use pmonad::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "container")]
    pub use crate::container::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "container")]
pub mod container;
