//! Function utilities.
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`compose`]: Chains two functions, first to second
//! - [`flip`]: Swaps the arguments of a binary function
//! - [`curry2!`] through [`curry4!`]: Convert multi-argument functions to curried form
//!
//! # Examples
//!
//! ```
//! use pmonad::compose::{compose, identity};
//! use pmonad::effect::Maybe;
//! use pmonad::typeclass::Functor;
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! let stepwise = Maybe::Just(5).fmap(add_one).fmap(double);
//! let composed = Maybe::Just(5).fmap(compose(add_one, double));
//! assert_eq!(stepwise, composed);
//! assert_eq!(Maybe::Just(5).fmap(identity), Maybe::Just(5));
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//! - **Currying**: `curry2!(f)(a)(b) == f(a, b)`

mod curry_macro;
mod utils;

pub use utils::{compose, constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
