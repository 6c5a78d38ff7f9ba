//! Containers that carry many payloads at once.
//!
//! - [`MList`]: an ordered sequence; `flat_map` concatenates results
//! - [`MDict`]: an insertion-ordered keyed mapping; `apply` combines keys
//!
//! Both implement [`FunctorMut`](crate::typeclass::FunctorMut),
//! [`ApplicativeMut`](crate::typeclass::ApplicativeMut),
//! [`MonadMut`](crate::typeclass::MonadMut),
//! [`Foldable`](crate::typeclass::Foldable) and
//! [`Monoid`](crate::typeclass::Monoid), so generic code written against
//! those traits runs over either container.

mod dict;
mod list;

pub use dict::MDict;
pub use list::MList;
