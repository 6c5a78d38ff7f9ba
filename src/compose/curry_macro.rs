//! Explicit currying for multi-argument functions.
//!
//! Effects never inspect a function's arity. To use a multi-argument function
//! with [`Functor::fmap`](crate::typeclass::Functor::fmap) and
//! [`Applicative::apply`](crate::typeclass::Applicative::apply), curry it
//! first: `fmap` then stores the partially applied remainder as the payload.
//!
//! The function is shared through `std::rc::Rc`, and already supplied
//! arguments are cloned on every call, so every stage implements `Fn` and
//! partial applications can be reused. Arguments other than the last must
//! implement [`Clone`].

/// Converts a 2-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use pmonad::curry2;
///
/// fn greet(greeting: &str, name: &str) -> String { format!("{greeting}, {name}") }
///
/// let curried = curry2!(greet);
/// let hello = curried("hello");
///
/// assert_eq!(hello("Ada"), "hello, Ada");
/// assert_eq!(hello("Alan"), "hello, Alan");
/// ```
///
/// Inside an effect:
///
/// ```
/// use pmonad::curry2;
/// use pmonad::effect::Maybe;
/// use pmonad::typeclass::{Applicative, Functor};
///
/// let add = |first: i32, second: i32| first + second;
/// let partial = Maybe::Just(3).fmap(curry2!(add));
/// assert_eq!(Maybe::Just(4).apply(partial), Maybe::Just(7));
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use pmonad::curry3;
///
/// fn between(low: u8, high: u8, value: u8) -> bool {
///     (low..=high).contains(&value)
/// }
///
/// let curried = curry3!(between);
/// let from_ten = curried(10);
/// let teens = from_ten(19);
/// assert!(teens(13));
/// assert!(!teens(9));
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// # Examples
///
/// ```
/// use pmonad::curry4;
///
/// use pmonad::effect::Maybe;
/// use pmonad::typeclass::{Applicative, Functor};
///
/// fn date(year: u16, month: u8, day: u8, separator: char) -> String {
///     format!("{year}{separator}{month:02}{separator}{day:02}")
/// }
///
/// let partial = Maybe::Just(2024).fmap(curry4!(date));
/// let partial = Maybe::Just(5).apply(partial);
/// let partial = Maybe::Just(9).apply(partial);
/// assert_eq!(Maybe::Just('-').apply(partial), Maybe::Just(String::from("2024-05-09")));
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}
