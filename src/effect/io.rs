//! IO Monad - side effects captured as values.
//!
//! `IO<A>` runs its action once, at construction, and keeps the produced
//! value as its payload. Mapping and binding work on that stored payload, so
//! an `IO` can be passed around, combined and stacked inside transformers
//! without ever running the action a second time.
//!
//! [`IO::run_unsafe`] hands the payload back at the program's edge.
//!
//! # Examples
//!
//! ```rust
//! use pmonad::effect::IO;
//! use pmonad::typeclass::{Functor, Monad};
//!
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe(), 21);
//! ```
//!
//! # Eager Execution
//!
//! ```rust
//! use pmonad::effect::IO;
//! use std::cell::Cell;
//!
//! let executed = Cell::new(0);
//! let io = IO::new(|| {
//!     executed.set(executed.get() + 1);
//!     42
//! });
//!
//! // Already executed, exactly once
//! assert_eq!(executed.get(), 1);
//! assert_eq!(io.run_unsafe(), 42);
//! assert_eq!(executed.get(), 1);
//! ```

use std::fmt;
use std::io::{self, BufRead, Write};

use super::{ConsoleError, Either};
use crate::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// The result of a side-effecting action.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IO<A> {
    result: A,
}

impl<A> IO<A> {
    /// Runs `action` immediately and stores its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::IO;
    ///
    /// let io = IO::new(|| 5);
    /// assert_eq!(io.run_unsafe(), 5);
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A,
    {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            result_type = std::any::type_name::<A>(),
            "running IO action"
        );
        Self { result: action() }
    }

    /// Wraps a value without performing any effect.
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self { result: value }
    }

    /// Returns the stored result.
    ///
    /// The action itself already ran when the `IO` was built; this only
    /// gives the value back.
    #[inline]
    pub fn run_unsafe(self) -> A {
        self.result
    }

    /// Borrows the stored result.
    #[inline]
    pub const fn as_ref(&self) -> &A {
        &self.result
    }
}

impl<A: fmt::Display> fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "IO {}", self.result)
    }
}

// =============================================================================
// Console Helpers
// =============================================================================

fn console_failure(operation: &'static str, error: &io::Error) -> ConsoleError {
    #[cfg(feature = "tracing")]
    tracing::warn!(operation, error = %error, "console operation failed");
    ConsoleError::new(operation, error)
}

impl IO<Either<ConsoleError, ()>> {
    /// Writes `message` and a newline to standard output.
    ///
    /// A failed write is carried as `Left(ConsoleError)`.
    pub fn print_line(message: impl fmt::Display) -> Self {
        let stdout = io::stdout();
        Self::print_line_to(&mut stdout.lock(), message)
    }

    /// Writes `message` and a newline to `writer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::{Either, IO};
    ///
    /// let mut buffer = Vec::new();
    /// let io = IO::print_line_to(&mut buffer, "hello");
    /// assert_eq!(io.run_unsafe(), Either::Right(()));
    /// assert_eq!(buffer, b"hello\n");
    /// ```
    pub fn print_line_to<W: Write>(writer: &mut W, message: impl fmt::Display) -> Self {
        Self::new(|| {
            writeln!(writer, "{message}")
                .map_err(|error| console_failure("print_line", &error))
                .into()
        })
    }
}

impl IO<Either<ConsoleError, String>> {
    /// Prints `prompt` and reads one line from standard input.
    ///
    /// The trailing line terminator is stripped. End of input and read
    /// failures are carried as `Left(ConsoleError)`.
    pub fn read_line(prompt: &str) -> Self {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Self::read_line_from(&mut stdin.lock(), &mut stdout.lock(), prompt)
    }

    /// Writes `prompt` to `writer` and reads one line from `reader`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pmonad::effect::{Either, IO};
    /// use std::io::Cursor;
    ///
    /// let mut input = Cursor::new("apple\n");
    /// let mut output = Vec::new();
    /// let io = IO::read_line_from(&mut input, &mut output, "word? ");
    /// assert_eq!(io.run_unsafe(), Either::Right(String::from("apple")));
    /// assert_eq!(output, b"word? ");
    /// ```
    pub fn read_line_from<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> Self
    where
        R: BufRead,
        W: Write,
    {
        Self::new(|| {
            read_prompted_line(reader, writer, prompt)
                .map_err(|error| console_failure("read_line", &error))
                .into()
        })
    }
}

fn read_prompted_line<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        ));
    }
    let trimmed_length = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_length);
    Ok(line)
}

/// Turns a plain function into one that produces `IO` actions.
///
/// # Examples
///
/// ```rust
/// use pmonad::effect::io_effect;
///
/// let double = io_effect(|x: i32| x * 2);
/// assert_eq!(double(21).run_unsafe(), 42);
/// ```
pub fn io_effect<A, B, F>(function: F) -> impl Fn(A) -> IO<B>
where
    F: Fn(A) -> B,
{
    move |argument| IO::new(|| function(argument))
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<A> TypeConstructor for IO<A> {
    type Inner = A;
    type WithType<B> = IO<B>;
}

impl<A> Functor for IO<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B,
    {
        IO::pure(function(self.result))
    }
}

impl<A> Applicative for IO<A> {
    #[inline]
    fn pure<B>(value: B) -> IO<B> {
        IO::pure(value)
    }

    #[inline]
    fn apply<B, F>(self, function: IO<F>) -> IO<B>
    where
        F: FnOnce(A) -> B,
    {
        IO::pure((function.result)(self.result))
    }

    #[inline]
    fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C,
    {
        IO::pure(function(self.result, other.result))
    }
}

impl<A> Monad for IO<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B>,
    {
        function(self.result)
    }
}

impl<A: Semigroup> Semigroup for IO<A> {
    fn combine(self, other: Self) -> Self {
        Self::pure(self.result.combine(other.result))
    }
}

impl<A: Monoid> Monoid for IO<A> {
    fn empty() -> Self {
        Self::pure(A::empty())
    }
}

static_assertions::assert_impl_all!(IO<i32>: Monad);
static_assertions::assert_impl_all!(IO<String>: Monoid);
