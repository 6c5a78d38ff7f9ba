//! `MList` - an ordered sequence with the multiple-results effect.
//!
//! Every operation keeps source order. `apply` runs every function against
//! every element (element-major), and `flat_map` concatenates the lists the
//! continuation produces.
//!
//! # Examples
//!
//! ```rust
//! use pmonad::mlist;
//! use pmonad::typeclass::MonadMut;
//!
//! let expanded = mlist![1, 2].flat_map(|x| mlist![x, x * 10]);
//! assert_eq!(expanded, mlist![1, 10, 2, 20]);
//! ```

use crate::typeclass::{
    ApplicativeMut, Foldable, FunctorMut, MonadMut, Monoid, Semigroup, TypeConstructor,
};

/// Builds an [`MList`] from its elements.
///
/// # Examples
///
/// ```rust
/// use pmonad::container::MList;
/// use pmonad::mlist;
///
/// assert_eq!(mlist![1, 2, 3], MList::from(vec![1, 2, 3]));
/// assert!(mlist![0; 0].is_empty());
/// ```
#[macro_export]
macro_rules! mlist {
    () => {
        $crate::container::MList::new()
    };
    ($element:expr; $count:expr) => {
        $crate::container::MList::from(::std::vec![$element; $count])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::container::MList::from(::std::vec![$($element),+])
    };
}

/// An ordered sequence of payloads.
///
/// # Capabilities
///
/// `FunctorMut`, [`ApplicativeMut`] (element-major), [`MonadMut`],
/// `Foldable`, `Semigroup` (concatenation) and `Monoid` (the empty list).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MList<A> {
    elements: Vec<A>,
}

impl<A> MList<A> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a single-element list.
    #[must_use]
    pub fn pure(value: A) -> Self {
        Self {
            elements: vec![value],
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.elements.iter()
    }

    /// Views the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[A] {
        &self.elements
    }

    /// Applies an asynchronous transform to each element in order.
    ///
    /// Each element's future is awaited before the next one is started.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::mlist;
    ///
    /// let doubled = futures::executor::block_on(
    ///     mlist![1, 2, 3].traverse_async(|x| async move { x * 2 }),
    /// );
    /// assert_eq!(doubled, mlist![2, 4, 6]);
    /// ```
    #[cfg(feature = "async")]
    pub async fn traverse_async<B, F, Fut>(self, function: F) -> MList<B>
    where
        F: FnMut(A) -> Fut,
        Fut: std::future::Future<Output = B>,
    {
        use futures::stream::{self, StreamExt};

        let elements = stream::iter(self.elements).then(function).collect().await;
        MList { elements }
    }
}

impl<A> Default for MList<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> From<Vec<A>> for MList<A> {
    fn from(elements: Vec<A>) -> Self {
        Self { elements }
    }
}

impl<A> From<MList<A>> for Vec<A> {
    fn from(list: MList<A>) -> Self {
        list.elements
    }
}

impl<A> FromIterator<A> for MList<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iterator: I) -> Self {
        Self {
            elements: iterator.into_iter().collect(),
        }
    }
}

impl<A> IntoIterator for MList<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a MList<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<A> TypeConstructor for MList<A> {
    type Inner = A;
    type WithType<B> = MList<B>;
}

impl<A> FunctorMut for MList<A> {
    fn fmap_mut<B, F>(self, function: F) -> MList<B>
    where
        F: FnMut(A) -> B,
    {
        MList {
            elements: self.elements.into_iter().map(function).collect(),
        }
    }
}

impl<A> ApplicativeMut for MList<A> {
    fn pure<B>(value: B) -> MList<B> {
        MList {
            elements: vec![value],
        }
    }

    /// Results are ordered element-major: all results for the first element
    /// come first, each in the order of `functions`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::mlist;
    /// use pmonad::typeclass::ApplicativeMut;
    ///
    /// fn add_one(x: i32) -> i32 { x + 1 }
    /// fn times_ten(x: i32) -> i32 { x * 10 }
    ///
    /// let functions = mlist![add_one as fn(i32) -> i32, times_ten];
    /// assert_eq!(mlist![1, 2].apply(functions), mlist![2, 10, 3, 20]);
    /// ```
    fn apply<B, G>(self, mut functions: MList<G>) -> MList<B>
    where
        A: Clone,
        G: FnMut(A) -> B,
    {
        let mut results = Vec::with_capacity(self.elements.len() * functions.elements.len());
        for element in self.elements {
            for function in &mut functions.elements {
                results.push(function(element.clone()));
            }
        }
        MList { elements: results }
    }

    fn map2<B, C, F>(self, other: MList<B>, mut function: F) -> MList<C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut results = Vec::with_capacity(self.elements.len() * other.elements.len());
        for element in self.elements {
            for paired in &other.elements {
                results.push(function(element.clone(), paired.clone()));
            }
        }
        MList { elements: results }
    }
}

impl<A> MonadMut for MList<A> {
    fn flat_map<B, F>(self, function: F) -> MList<B>
    where
        F: FnMut(A) -> MList<B>,
    {
        MList {
            elements: self.elements.into_iter().flat_map(function).collect(),
        }
    }
}

impl<A> Foldable for MList<A> {
    fn fold<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.elements
            .into_iter()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

impl<A> Semigroup for MList<A> {
    fn combine(mut self, mut other: Self) -> Self {
        self.elements.append(&mut other.elements);
        self
    }
}

impl<A> Monoid for MList<A> {
    fn empty() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(MList<i32>: ApplicativeMut, MonadMut, Foldable, Monoid);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fmap_mut_keeps_order() {
        let mut calls = Vec::new();
        let result = mlist![3, 1, 2].fmap_mut(|x| {
            calls.push(x);
            x * 2
        });
        assert_eq!(result, mlist![6, 2, 4]);
        assert_eq!(calls, vec![3, 1, 2]);
    }

    #[rstest]
    fn apply_is_element_major() {
        let functions: MList<Box<dyn FnMut(&str) -> String>> = mlist![
            Box::new(|s: &str| s.to_uppercase()) as Box<dyn FnMut(&str) -> String>,
            Box::new(|s: &str| format!("{s}!")),
        ];
        assert_eq!(
            mlist!["a", "b"].apply(functions),
            mlist![
                String::from("A"),
                String::from("a!"),
                String::from("B"),
                String::from("b!")
            ]
        );
    }

    #[rstest]
    fn apply_with_no_functions_is_empty() {
        let functions: MList<fn(i32) -> i32> = MList::new();
        assert!(mlist![1, 2].apply(functions).is_empty());
    }

    #[rstest]
    fn flat_map_concatenates_in_order() {
        assert_eq!(
            mlist![1, 2].flat_map(|x| mlist![x, x * 10]),
            mlist![1, 10, 2, 20]
        );
    }

    #[rstest]
    fn flat_map_can_drop_elements() {
        let evens = mlist![1, 2, 3, 4].flat_map(|x| if x % 2 == 0 { mlist![x] } else { mlist![] });
        assert_eq!(evens, mlist![2, 4]);
    }

    #[rstest]
    fn fold_visits_elements_in_order() {
        let digits = mlist![1, 2, 3].fold(String::new(), |element, mut seed| {
            seed.push_str(&element.to_string());
            seed
        });
        assert_eq!(digits, "123");
    }

    #[rstest]
    fn combine_concatenates() {
        assert_eq!(mlist![1].combine(mlist![2, 3]), mlist![1, 2, 3]);
        assert_eq!(MList::empty().combine(mlist![4]), mlist![4]);
    }

    #[rstest]
    fn map2_pairs_every_combination() {
        let labels = mlist!["x", "y"].map2(mlist![1, 2], |label, n| format!("{label}{n}"));
        assert_eq!(labels.len(), 4);
        assert_eq!(labels.as_slice()[1], "x2");
    }

    #[rstest]
    fn then_repeats_next_per_element() {
        assert_eq!(mlist![(), ()].then(mlist!['a', 'b']), mlist!['a', 'b', 'a', 'b']);
    }

    #[rstest]
    fn pure_is_single_element() {
        assert_eq!(MList::pure('x'), mlist!['x']);
    }
}
