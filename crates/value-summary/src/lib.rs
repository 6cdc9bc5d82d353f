//! Decoder for the tracer value-summary binary format.
//!
//! A tracing layer captures JavaScript runtime values — primitives, objects,
//! arrays, maps, functions, DOM nodes, exceptions — into a compact
//! little-endian tagged encoding, together with a shape table that maps
//! integer ids to property-name lists so object layouts are not re-encoded
//! per instance. This crate deserializes that encoding into a JSON-like
//! [`ValueSummary`] tree suitable for rendering value previews.
//!
//! The top-level entry point is [`argument_summaries`], which decodes the
//! recorded argument list of one traced call from a versioned buffer.
//! [`SummaryDecoder`] exposes the recursive single-value decode for callers
//! that manage their own framing.
//!
//! Decoding is a pure function of `(buffer, shapes, offset)`: the only
//! mutable state is the cursor inside one decode pass, so independent
//! decodes of different buffers can run concurrently.

mod arguments;
pub mod constants;
mod decoder;
mod error;
mod external;
mod strings;
mod summary;
mod to_json;

pub use arguments::{argument_summaries, buffer_version};
pub use decoder::SummaryDecoder;
pub use error::SummaryError;
pub use strings::read_string;
pub use summary::{
    ArgumentSummaries, ExceptionPreview, NodeDetails, NodePreview, ObjectPreview, ObjectSummary,
    PropertyDescriptor, Shape, ValueSummary,
};
pub use to_json::{arguments_to_json, summary_to_json};
