//! Error type for bounds-checked buffer reads.

use std::fmt;

/// Errors produced by the bounds-checked `try_*` reader methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A read would run past the end of the buffer.
    EndOfBuffer,
    /// A byte range requested as UTF-8 was not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "unexpected end of buffer"),
            BufferError::InvalidUtf8 => write!(f, "invalid UTF-8"),
        }
    }
}

impl std::error::Error for BufferError {}
