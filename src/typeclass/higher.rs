//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] works around this with a generic associated type: a
//! value of type `Maybe<i32>` knows that its payload is `i32` and that the
//! "same shape, different payload" type is `Maybe<B>`.
//!
//! # Example
//!
//! ```rust
//! use pmonad::typeclass::TypeConstructor;
//! use pmonad::effect::Maybe;
//!
//! fn reshape<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let reshaped: Maybe<String> = reshape(Maybe::Just(42));
//! assert_eq!(reshaped, Maybe::Nothing);
//! ```

/// A trait representing a type constructor applied to a payload type.
///
/// # Associated Types
///
/// - `Inner`: the payload type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The payload type, e.g. `i32` for `Maybe<i32>`.
    type Inner;

    /// The same type constructor applied to a different payload type `B`.
    ///
    /// The bound keeps the result a type constructor whose payload is `B`, so
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}
