use crate::text::Expected;
use thiserror::Error;

/// Crate-specific error enum.
#[derive(Debug, Error)]
pub enum Error {
    /// The text did not match the `(r,g,b)` grammar.
    #[error("expected {expected} at position {offset}")]
    MalformedInput {
        /// What the parser was looking for.
        expected: Expected,

        /// The zero-based byte offset where the expectation was violated.
        offset: usize,
    },

    /// The buffer is too short to hold a color.
    #[error("truncated buffer: needed {needed} bytes, {available} available")]
    TruncatedBuffer {
        /// The number of bytes required.
        needed: usize,

        /// The number of bytes that were available.
        available: usize,
    },

    /// [std::io::Error]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
