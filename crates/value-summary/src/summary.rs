//! The decoded value-summary tree.

use indexmap::IndexMap;

/// One shape-table entry: `shape[0]` is a class name, `shape[1..]` are
/// property names in encoding order. The table itself is owned by the
/// caller; this crate only reads it.
pub type Shape = Vec<String>;

/// The decoded representation of one captured runtime value.
///
/// This is a display-oriented summary, not a full serialization: containers
/// materialize at most one level of children and at most
/// [`MAX_COLLECTION_VALUES`](crate::constants::MAX_COLLECTION_VALUES)
/// of them.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSummary {
    /// Inline or out-of-line 32-bit integer.
    Int(i32),
    /// Plain finite double, including the implicit `0.0` of an inline
    /// double tag.
    Float(f64),
    /// Positive infinity, kept as a tagged singleton rather than a number.
    Infinity,
    /// Negative infinity.
    NegInfinity,
    /// Not-a-number.
    NaN,
    /// Negative zero.
    NegZero,
    Bool(bool),
    Null,
    Undefined,
    Str(String),
    /// Symbol; `None` when the symbol has no description.
    Symbol(Option<String>),
    /// Big integer as decimal text.
    BigInt(String),
    Object(Box<ObjectSummary>),
}

/// Summary of one captured object.
///
/// Which fields are populated depends on the object kind; a missing shape
/// entry leaves `class` and `preview` unset without failing the decode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSummary {
    pub class: Option<String>,
    pub own_property_length: u32,
    pub is_error: bool,
    pub extensible: bool,
    pub sealed: bool,
    pub frozen: bool,
    /// Function name (Function kind only).
    pub name: Option<String>,
    /// Function parameter names (Function kind only).
    pub parameter_names: Option<Vec<String>>,
    /// The unwrapped value of a boxed primitive (WrappedPrimitiveObject
    /// kind only).
    pub wrapped_value: Option<ValueSummary>,
    pub preview: Option<ObjectPreview>,
}

/// Kind-specific preview of an object's contents.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectPreview {
    ArrayLike {
        /// Declared length; always decoded in full even when items are
        /// elided by the depth or collection cap.
        length: u32,
        items: Vec<ValueSummary>,
    },
    MapLike {
        /// Declared entry count, reported in full like `ArrayLike::length`.
        size: u32,
        entries: Vec<(ValueSummary, ValueSummary)>,
    },
    Object {
        own_properties: IndexMap<String, PropertyDescriptor>,
        own_properties_length: u32,
    },
    Error {
        name: String,
        message: String,
        stack: String,
        file_name: String,
        line_number: u32,
        column_number: u32,
    },
    Node(NodePreview),
    Exception(ExceptionPreview),
}

/// Own-property descriptor: either a plain value or a getter/setter pair.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyDescriptor {
    /// configurable, enumerable, writable.
    Value(ValueSummary),
    /// configurable, enumerable.
    Accessor {
        get: ValueSummary,
        set: ValueSummary,
    },
}

/// Preview of a captured DOM node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePreview {
    pub node_type: u16,
    /// Node name, case-folded to lowercase.
    pub node_name: String,
    pub is_connected: bool,
    pub details: NodeDetails,
}

/// Subkind-specific fields of a DOM node preview.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeDetails {
    Element {
        attributes: IndexMap<String, String>,
        /// Declared attribute count; attributes are capped at 16.
        attributes_length: u32,
    },
    Attr {
        value: String,
    },
    Document {
        location: String,
    },
    DocumentFragment {
        child_nodes_length: u32,
        /// `None` when the depth cap elides children.
        child_nodes: Option<Vec<ValueSummary>>,
    },
    Text {
        text_content: String,
    },
    Comment {
        text_content: String,
    },
    /// Subkind 0 or an unrecognized subkind: header fields only.
    Other,
}

/// Preview of a captured DOM exception.
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionPreview {
    pub name: String,
    pub message: String,
    pub code: u16,
    pub result: u32,
    pub line_number: u32,
    pub column_number: u32,
    pub stack: String,
}

/// Result of decoding one recorded argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentSummaries {
    /// The decoded arguments, at most
    /// [`MAX_ARGUMENTS_TO_RECORD`](crate::constants::MAX_ARGUMENTS_TO_RECORD)
    /// of them. Empty for the zero-arguments sentinel.
    Arguments(Vec<ValueSummary>),
    /// The recorded values expired before they could be read.
    Expired,
}
