//! Wire constants of the value-summary format.
//!
//! The tag values are part of the wire contract shared with the recording
//! encoder and are fixed tables, never derived from declaration order.

/// At most this many call arguments are recorded per traced call; the
/// decoder mirrors the cap.
pub const MAX_ARGUMENTS_TO_RECORD: u32 = 4;

/// Sentinel buffer index: the call had zero arguments; no bytes were
/// recorded for it.
pub const ZERO_ARGUMENTS_MAGIC: i64 = -2;

/// Sentinel buffer index: the recorded values have expired and are no
/// longer available.
pub const EXPIRED_VALUES_MAGIC: i64 = -1;

/// Format version carried as a `u32` at offset 0 of every values buffer.
pub const EXPECTED_VALUE_SUMMARIES_VERSION: u32 = 2;

// Value type tags (low nibble of the header byte).
pub const VALUE_TYPE_DOUBLE: u8 = 0x00;
pub const VALUE_TYPE_INT32: u8 = 0x01;
pub const VALUE_TYPE_BOOLEAN: u8 = 0x02;
pub const VALUE_TYPE_UNDEFINED: u8 = 0x03;
pub const VALUE_TYPE_NULL: u8 = 0x04;
/// Sparse-array hole marker: a slot with no value, one tag byte and no
/// payload.
pub const VALUE_TYPE_HOLE: u8 = 0x05;
pub const VALUE_TYPE_STRING: u8 = 0x06;
pub const VALUE_TYPE_SYMBOL: u8 = 0x07;
pub const VALUE_TYPE_BIGINT: u8 = 0x09;
pub const VALUE_TYPE_OBJECT: u8 = 0x0c;

/// Peeked ahead of a named property to select a getter/setter pair instead
/// of a plain value.
pub const GETTER_SETTER_MAGIC: u8 = 0x0f;

/// Object-level flag: a generic object carries dense numeric elements after
/// its named properties.
pub const GENERIC_OBJECT_HAS_DENSE_ELEMENTS: u8 = 1;

/// Symbol flag: the symbol has no description string.
pub const SYMBOL_NO_DESCRIPTION: u8 = 1;

/// Flag nibble signaling that a number's payload is stored out of line
/// (an `f64` or `i32` follows the header byte).
pub const NUMBER_OUT_OF_LINE_MAGIC: u8 = 0xf;

/// Bias applied to the 4-bit inline integer encoding.
pub const MIN_INLINE_INT: i32 = -1;

// String encodings (top two bits of the string header).
pub const STRING_ENCODING_LATIN1: u8 = 0;
pub const STRING_ENCODING_TWO_BYTE: u8 = 1;
pub const STRING_ENCODING_UTF8: u8 = 2;

// Object kinds (one byte following an object-tagged header).
pub const OBJECT_KIND_NOT_IMPLEMENTED: u8 = 0;
pub const OBJECT_KIND_ARRAY_LIKE: u8 = 1;
pub const OBJECT_KIND_MAP_LIKE: u8 = 2;
pub const OBJECT_KIND_FUNCTION: u8 = 3;
pub const OBJECT_KIND_WRAPPED_PRIMITIVE_OBJECT: u8 = 4;
pub const OBJECT_KIND_GENERIC_OBJECT: u8 = 5;
pub const OBJECT_KIND_PROXY_OBJECT: u8 = 6;
pub const OBJECT_KIND_EXTERNAL: u8 = 7;
pub const OBJECT_KIND_ERROR: u8 = 8;

/// Collection previews materialize at most this many items/entries/
/// properties; declared lengths are still reported in full.
pub const MAX_COLLECTION_VALUES: u32 = 16;

/// Version byte of the self-framed external sub-summary.
pub const EXTERNAL_SUMMARY_EXPECTED_VERSION: u8 = 1;

// External sub-summary kinds.
pub const EXTERNAL_SUMMARY_KIND_OTHER: u8 = 0;
pub const EXTERNAL_SUMMARY_KIND_NODE: u8 = 1;
pub const EXTERNAL_SUMMARY_KIND_EXCEPTION: u8 = 2;

// DOM node subkinds (low 7 bits of the packed subkind byte; subkind 0 and
// anything unrecognized carry no fields beyond the common header).
pub const EXTERNAL_NODE_SUBKIND_ELEMENT: u8 = 1;
pub const EXTERNAL_NODE_SUBKIND_ATTR: u8 = 2;
pub const EXTERNAL_NODE_SUBKIND_DOCUMENT: u8 = 3;
pub const EXTERNAL_NODE_SUBKIND_DOCUMENT_FRAGMENT: u8 = 4;
pub const EXTERNAL_NODE_SUBKIND_TEXT: u8 = 5;
pub const EXTERNAL_NODE_SUBKIND_COMMENT: u8 = 6;

/// Placeholder the JSON conversion emits for the expired-values sentinel.
pub const EXPIRED_VALUES_PLACEHOLDER: &str = "<missing>";
