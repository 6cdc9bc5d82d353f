//! Byte-cursor primitives for the value-summary wire format.
//!
//! The format is little-endian throughout, with no alignment padding.
//! [`Reader`] provides sequential typed reads over a borrowed slice with an
//! explicit, publicly addressable cursor; [`Writer`] is the auto-growing
//! counterpart used by tests and tooling to construct buffers.

mod error;
mod reader;
mod writer;

pub use error::BufferError;
pub use reader::Reader;
pub use writer::Writer;
