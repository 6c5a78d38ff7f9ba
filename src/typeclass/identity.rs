//! `Identity` - the effect that does nothing.
//!
//! `Identity<A>` only holds an `A`. As an inner monad it turns a transformer
//! back into its plain effect: `MaybeT<Identity<Maybe<A>>>` behaves like
//! `Maybe<A>` and `EitherT<E, Identity<Either<E, A>>>` like `Either<E, A>`.

use super::TypeConstructor;

/// A payload with no effect around it.
///
/// # Examples
///
/// ```rust
/// use pmonad::effect::{Either, EitherT};
/// use pmonad::typeclass::Identity;
///
/// let checked: EitherT<String, Identity<Either<String, u8>>> = EitherT::pure(1);
/// assert_eq!(checked.run().into_inner(), Either::Right(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the payload.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_and_tuple_constructor_agree() {
        assert_eq!(Identity::new('q'), Identity('q'));
    }

    #[rstest]
    fn as_inner_borrows_without_moving() {
        let wrapped = Identity(String::from("kept"));
        assert_eq!(wrapped.as_inner().len(), 4);
        assert_eq!(wrapped.into_inner(), "kept");
    }

    #[rstest]
    #[case(Some(1))]
    #[case(None)]
    fn from_wraps_any_value(#[case] value: Option<u8>) {
        assert_eq!(Identity::from(value).0, value);
    }
}
