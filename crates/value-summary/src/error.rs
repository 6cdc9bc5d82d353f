//! Decode error type.

use thiserror::Error;
use value_summary_buffers::BufferError;

/// Fatal, structural decode errors.
///
/// These abort the whole decode: the encoder and decoder ship together, so
/// an unknown tag or a version mismatch indicates a real bug rather than a
/// compatibility case. Missing shape-table entries are deliberately *not*
/// represented here — they degrade locally into summaries without a class
/// or preview.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("unexpected end of buffer")]
    UnexpectedEof,
    #[error("invalid string payload")]
    InvalidString,
    #[error("bad value type 0x{0:02x}")]
    BadValueType(u8),
    #[error("bad object kind {0}")]
    BadObjectKind(u8),
    #[error("unexpected values buffer format: expected {expected}, received {received}")]
    UnexpectedVersion { expected: u32, received: u32 },
}

impl From<BufferError> for SummaryError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => SummaryError::UnexpectedEof,
            BufferError::InvalidUtf8 => SummaryError::InvalidString,
        }
    }
}
