//! Type class traits for functional programming abstractions.
//!
//! This module provides the capability hierarchy shared by every effect in
//! the crate:
//!
//! - [`Functor`]: Mapping over wrapped payloads
//! - [`FunctorMut`]: Mapping with mutable functions for multi-element containers
//! - [`Applicative`]: Applying wrapped functions to wrapped payloads
//! - [`Monad`]: Sequencing computations with dependency
//! - [`ApplicativeMut`], [`MonadMut`]: The same for multi-element containers
//! - [`Foldable`]: Folding payloads into summary values
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`MonadTransformer`]: Stacking one effect on top of another monad
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to name "the same
//! effect with a different payload", which lets the capability traits be
//! written once for every effect.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Identity`]: Identity wrapper type (identity functor)
//!
//! # Examples
//!
//! ## Using Semigroup
//!
//! ```rust
//! use pmonad::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```
//!
//! ## Using Applicative
//!
//! ```rust
//! use pmonad::effect::Maybe;
//! use pmonad::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::Just(42));
//!
//! let sum = Maybe::Just(1).map2(Maybe::Just(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::Just(3));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod transformer;

pub use applicative::{Applicative, ApplicativeMut};
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::{Monad, MonadMut};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use transformer::MonadTransformer;
