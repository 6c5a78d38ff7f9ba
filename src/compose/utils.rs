//! Helper functions (combinators) for building functions out of functions.
//!
//! - [`identity`]: hands its argument back
//! - [`constant`]: builds a function that ignores its argument
//! - [`compose`]: runs one function, then feeds its result to a second one
//! - [`flip`]: swaps the arguments of a two-argument function

/// Returns the value unchanged.
///
/// The identity function is the unit element of [`compose`]:
/// `compose(identity, f)` and `compose(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use pmonad::compose::identity;
/// use pmonad::effect::Maybe;
/// use pmonad::typeclass::Functor;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(Maybe::Just(3).fmap(identity), Maybe::Just(3));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its argument and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use pmonad::compose::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
///
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Composes two functions: the result applies `first`, then `second`.
///
/// `compose(f, g)(x) == g(f(x))`, which is the order in which
/// `e.fmap(f).fmap(g)` runs them.
///
/// # Examples
///
/// ```
/// use pmonad::compose::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// let composed = compose(add_one, double);
/// assert_eq!(composed(5), 12);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |argument| second(first(argument))
}

/// Swaps the two arguments of `function`.
///
/// # Laws
///
/// - `flip(f)(a, b) == f(b, a)`
/// - `flip(flip(f))` behaves like `f`
///
/// # Examples
///
/// ```
/// use pmonad::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
