//! Error types for the effect system.
//!
//! Effects never raise: failures travel as `Either::Left` payloads. The only
//! failure produced by the library itself is [`ConsoleError`], reported by the
//! console helpers on [`IO`](super::IO).

use std::io;

/// Represents a failed console operation.
///
/// # Examples
///
/// ```rust
/// use pmonad::effect::ConsoleError;
///
/// let error = ConsoleError::new(
///     "read_line",
///     &std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed"),
/// );
/// assert_eq!(error.to_string(), "read_line: stdin closed (unexpected end of file)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleError {
    /// The name of the console operation that failed.
    pub operation: &'static str,
    /// The kind of the underlying I/O error.
    pub kind: io::ErrorKind,
    /// The message of the underlying I/O error.
    pub message: String,
}

impl ConsoleError {
    /// Captures an I/O error raised by `operation`.
    #[must_use]
    pub fn new(operation: &'static str, error: &io::Error) -> Self {
        Self {
            operation,
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {} ({})", self.operation, self.message, self.kind)
    }
}

impl std::error::Error for ConsoleError {}

impl From<ConsoleError> for io::Error {
    fn from(error: ConsoleError) -> Self {
        Self::new(error.kind, error.message)
    }
}
