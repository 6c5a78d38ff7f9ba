//! `MDict` - an insertion-ordered keyed mapping with the multiple-results effect.
//!
//! Keys are compared with `PartialEq` and kept in the order they were first
//! inserted. Inserting an existing key replaces its value in place.
//!
//! `apply` pairs every value with every function and joins their keys with
//! `Semigroup`, so `pure` needs a key type with an identity (`Monoid`).
//!
//! # Examples
//!
//! ```rust
//! use pmonad::container::MDict;
//! use pmonad::typeclass::{ApplicativeMut, MonadMut};
//!
//! let prices = MDict::from_iter([(String::from("tea"), 3), (String::from("cake"), 5)]);
//! let with_tax = prices.clone().apply(MDict::from_iter([(String::from("+tax"), |p: i32| p + 1)]));
//! assert_eq!(with_tax.get(&String::from("tea+tax")), Some(&4));
//!
//! let sizes = prices.flat_map(|p| MDict::from_iter([(String::from("small"), p), (String::from("large"), p * 2)]));
//! assert_eq!(sizes.get(&String::from("large")), Some(&10));
//! ```

use crate::typeclass::{
    ApplicativeMut, Foldable, FunctorMut, MonadMut, Monoid, Semigroup, TypeConstructor,
};

/// A keyed mapping whose payloads are its values.
///
/// # Capabilities
///
/// `FunctorMut` (keys kept), [`ApplicativeMut`] (keys combined),
/// [`MonadMut`] (later keys overwrite), `Foldable` (over values), `Semigroup`
/// (right side wins on key collision) and `Monoid` (the empty mapping).
///
/// # Examples
///
/// ```rust
/// use pmonad::container::MDict;
/// use pmonad::typeclass::Semigroup;
///
/// let left = MDict::from_iter([("a", 1), ("b", 2)]);
/// let right = MDict::from_iter([("b", 20), ("c", 30)]);
/// let merged = left.combine(right);
/// assert_eq!(merged.get(&"b"), Some(&20));
/// assert_eq!(merged.keys().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MDict<K, A> {
    entries: Vec<(K, A)>,
}

impl<K, A> MDict<K, A> {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &A)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &A> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<K: PartialEq, A> MDict<K, A> {
    /// Creates a mapping with a single entry under the identity key.
    #[must_use]
    pub fn pure(value: A) -> Self
    where
        K: Monoid,
    {
        Self {
            entries: vec![(K::empty(), value)],
        }
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: A) -> Option<A> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&A> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if `key` has an entry.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }
}

impl<K, A> Default for MDict<K, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, A> FromIterator<(K, A)> for MDict<K, A> {
    fn from_iter<I: IntoIterator<Item = (K, A)>>(iterator: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iterator {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl<K, A> IntoIterator for MDict<K, A> {
    type Item = (K, A);
    type IntoIter = std::vec::IntoIter<(K, A)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<K, A> TypeConstructor for MDict<K, A> {
    type Inner = A;
    type WithType<B> = MDict<K, B>;
}

impl<K, A> FunctorMut for MDict<K, A> {
    fn fmap_mut<B, F>(self, mut function: F) -> MDict<K, B>
    where
        F: FnMut(A) -> B,
    {
        MDict {
            entries: self
                .entries
                .into_iter()
                .map(|(key, value)| (key, function(value)))
                .collect(),
        }
    }
}

impl<K: Monoid + PartialEq + Clone, A> ApplicativeMut for MDict<K, A> {
    fn pure<B>(value: B) -> MDict<K, B> {
        MDict {
            entries: vec![(K::empty(), value)],
        }
    }

    /// The result key is `self`'s key combined with the function's key. When
    /// two combinations produce the same key, the later one wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::container::MDict;
    /// use pmonad::typeclass::ApplicativeMut;
    ///
    /// fn double(x: i32) -> i32 { x * 2 }
    /// fn negate(x: i32) -> i32 { -x }
    ///
    /// let values = MDict::from_iter([(String::from("a"), 1)]);
    /// let functions = MDict::from_iter([
    ///     (String::from("x"), double as fn(i32) -> i32),
    ///     (String::from("y"), negate),
    /// ]);
    /// let result = values.apply(functions);
    /// assert_eq!(result.get(&String::from("ax")), Some(&2));
    /// assert_eq!(result.get(&String::from("ay")), Some(&-1));
    /// ```
    fn apply<B, G>(self, mut functions: MDict<K, G>) -> MDict<K, B>
    where
        A: Clone,
        G: FnMut(A) -> B,
    {
        let mut result = MDict::new();
        for (key, value) in self.entries {
            for (function_key, function) in &mut functions.entries {
                result.insert(key.clone().combine(function_key.clone()), function(value.clone()));
            }
        }
        result
    }

    fn map2<B, C, F>(self, other: MDict<K, B>, mut function: F) -> MDict<K, C>
    where
        A: Clone,
        B: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut result = MDict::new();
        for (key, value) in self.entries {
            for (other_key, paired) in &other.entries {
                result.insert(key.clone().combine(other_key.clone()), function(value.clone(), paired.clone()));
            }
        }
        result
    }
}

/// Entries from later values overwrite entries with the same key.
impl<K: PartialEq, A> MonadMut for MDict<K, A> {
    fn flat_map<B, F>(self, mut function: F) -> MDict<K, B>
    where
        F: FnMut(A) -> MDict<K, B>,
    {
        self.entries
            .into_iter()
            .fold(MDict::new(), |merged, (_, value)| merged.combine(function(value)))
    }
}

impl<K, A> Foldable for MDict<K, A> {
    fn fold<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.entries
            .into_iter()
            .fold(init, |accumulator, (_, value)| function(value, accumulator))
    }
}

/// Right-biased merge: entries of `other` replace entries with equal keys.
impl<K: PartialEq, A> Semigroup for MDict<K, A> {
    fn combine(mut self, other: Self) -> Self {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
        self
    }
}

impl<K: PartialEq, A> Monoid for MDict<K, A> {
    fn empty() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(MDict<String, i32>: ApplicativeMut, MonadMut, Foldable, Monoid);
