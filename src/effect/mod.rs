//! Effects: values that carry absence, failure or the result of a side effect.
//!
//! # Base Effects
//!
//! - [`Maybe`]: an optional payload (`Just` / `Nothing`)
//! - [`Either`]: a payload or a carried error (`Right` / `Left`)
//! - [`IO`]: the result of a console or other side-effecting action
//!
//! # Monad Transformers
//!
//! - [`MaybeT`]: adds optional results to an inner monad
//! - [`EitherT`]: adds a carried error to an inner monad
//!
//! # Examples
//!
//! ```rust
//! use pmonad::effect::{Either, EitherT, IO};
//!
//! let parsed = EitherT::<String, _>::lift(IO::new(|| "42"))
//!     .flat_map(|text| match text.parse::<i32>() {
//!         Ok(number) => EitherT::pure(number),
//!         Err(error) => EitherT::throw(error.to_string()),
//!     });
//! assert_eq!(parsed.run().run_unsafe(), Either::Right(42));
//! ```

/// Records that a transformer skipped its continuation.
macro_rules! trace_short_circuit {
    ($transformer:literal, $operation:literal) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            transformer = $transformer,
            operation = $operation,
            "short-circuit"
        );
    };
}

// =============================================================================
// Base Effects
// =============================================================================

mod either;
mod error;
mod io;
mod maybe;

pub use either::Either;
pub use error::ConsoleError;
pub use io::{IO, io_effect};
pub use maybe::Maybe;

pub use crate::typeclass::Identity;

// =============================================================================
// Monad Transformers
// =============================================================================

mod either_transformer;
mod maybe_transformer;

pub use either_transformer::EitherT;
pub use maybe_transformer::MaybeT;
