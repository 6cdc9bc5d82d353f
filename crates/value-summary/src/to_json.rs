//! Conversion of decoded summaries into plain JSON trees.
//!
//! The presentation layer consumes camelCase JSON objects; field names and
//! shapes here are the wire contract with it. Special numbers, null,
//! undefined, symbols, and big integers all become `{"type": ...}` tagged
//! objects rather than raw JSON values.

use serde_json::{json, Map, Value};

use crate::constants::EXPIRED_VALUES_PLACEHOLDER;
use crate::summary::{
    ArgumentSummaries, NodeDetails, ObjectPreview, ObjectSummary, PropertyDescriptor, ValueSummary,
};

/// Converts one decoded value summary into a JSON tree.
pub fn summary_to_json(summary: &ValueSummary) -> Value {
    match summary {
        ValueSummary::Int(i) => json!(i),
        ValueSummary::Float(f) => json!(f),
        ValueSummary::Infinity => json!({ "type": "Infinity" }),
        ValueSummary::NegInfinity => json!({ "type": "-Infinity" }),
        ValueSummary::NaN => json!({ "type": "NaN" }),
        ValueSummary::NegZero => json!({ "type": "-0" }),
        ValueSummary::Bool(b) => json!(b),
        ValueSummary::Null => json!({ "type": "null" }),
        ValueSummary::Undefined => json!({ "type": "undefined" }),
        ValueSummary::Str(s) => json!(s),
        ValueSummary::Symbol(None) => json!({ "type": "symbol" }),
        ValueSummary::Symbol(Some(name)) => json!({ "type": "symbol", "name": name }),
        ValueSummary::BigInt(text) => json!({ "type": "BigInt", "text": text }),
        ValueSummary::Object(object) => object_to_json(object),
    }
}

/// Converts a decoded argument list into JSON: an array of summaries, or
/// the historical placeholder string for expired values.
pub fn arguments_to_json(arguments: &ArgumentSummaries) -> Value {
    match arguments {
        ArgumentSummaries::Arguments(args) => {
            Value::Array(args.iter().map(summary_to_json).collect())
        }
        ArgumentSummaries::Expired => json!(EXPIRED_VALUES_PLACEHOLDER),
    }
}

fn object_to_json(object: &ObjectSummary) -> Value {
    let mut map = Map::new();
    map.insert("type".into(), json!("object"));
    if let Some(class) = &object.class {
        map.insert("class".into(), json!(class));
    }
    map.insert(
        "ownPropertyLength".into(),
        json!(object.own_property_length),
    );
    map.insert("isError".into(), json!(object.is_error));
    map.insert("extensible".into(), json!(object.extensible));
    map.insert("sealed".into(), json!(object.sealed));
    map.insert("frozen".into(), json!(object.frozen));
    if let Some(name) = &object.name {
        map.insert("name".into(), json!(name));
    }
    if let Some(parameter_names) = &object.parameter_names {
        map.insert("parameterNames".into(), json!(parameter_names));
    }
    if let Some(wrapped_value) = &object.wrapped_value {
        map.insert("wrappedValue".into(), summary_to_json(wrapped_value));
    }
    if let Some(preview) = &object.preview {
        map.insert("preview".into(), preview_to_json(preview));
    }
    Value::Object(map)
}

fn preview_to_json(preview: &ObjectPreview) -> Value {
    match preview {
        ObjectPreview::ArrayLike { length, items } => json!({
            "kind": "ArrayLike",
            "items": items.iter().map(summary_to_json).collect::<Vec<_>>(),
            "length": length,
        }),
        ObjectPreview::MapLike { size, entries } => json!({
            "kind": "MapLike",
            "entries": entries
                .iter()
                .map(|(key, value)| {
                    json!([value_descriptor_json(key), value_descriptor_json(value)])
                })
                .collect::<Vec<_>>(),
            "size": size,
        }),
        ObjectPreview::Object {
            own_properties,
            own_properties_length,
        } => {
            let mut props = Map::new();
            for (name, descriptor) in own_properties {
                props.insert(name.clone(), descriptor_to_json(descriptor));
            }
            json!({
                "kind": "Object",
                "ownProperties": props,
                "ownPropertiesLength": own_properties_length,
            })
        }
        ObjectPreview::Error {
            name,
            message,
            stack,
            file_name,
            line_number,
            column_number,
        } => json!({
            "kind": "Error",
            "name": name,
            "message": message,
            "stack": stack,
            "fileName": file_name,
            "lineNumber": line_number,
            "columnNumber": column_number,
        }),
        ObjectPreview::Node(node) => {
            let mut map = Map::new();
            map.insert("kind".into(), json!("DOMNode"));
            map.insert("nodeType".into(), json!(node.node_type));
            map.insert("nodeName".into(), json!(node.node_name));
            map.insert("isConnected".into(), json!(node.is_connected));
            match &node.details {
                NodeDetails::Element {
                    attributes,
                    attributes_length,
                } => {
                    let mut attrs = Map::new();
                    for (name, value) in attributes {
                        attrs.insert(name.clone(), json!(value));
                    }
                    map.insert("attributes".into(), Value::Object(attrs));
                    map.insert("attributesLength".into(), json!(attributes_length));
                }
                NodeDetails::Attr { value } => {
                    map.insert("value".into(), json!(value));
                }
                NodeDetails::Document { location } => {
                    map.insert("location".into(), json!(location));
                }
                NodeDetails::DocumentFragment {
                    child_nodes_length,
                    child_nodes,
                } => {
                    map.insert("childNodesLength".into(), json!(child_nodes_length));
                    if let Some(child_nodes) = child_nodes {
                        map.insert(
                            "childNodes".into(),
                            Value::Array(child_nodes.iter().map(summary_to_json).collect()),
                        );
                    }
                }
                NodeDetails::Text { text_content } | NodeDetails::Comment { text_content } => {
                    map.insert("textContent".into(), json!(text_content));
                }
                NodeDetails::Other => {}
            }
            Value::Object(map)
        }
        ObjectPreview::Exception(exception) => json!({
            "kind": "DOMException",
            "name": exception.name,
            "message": exception.message,
            "code": exception.code,
            "result": exception.result,
            "lineNumber": exception.line_number,
            "columnNumber": exception.column_number,
            "stack": exception.stack,
        }),
    }
}

fn descriptor_to_json(descriptor: &PropertyDescriptor) -> Value {
    match descriptor {
        PropertyDescriptor::Value(value) => value_descriptor_json(value),
        PropertyDescriptor::Accessor { get, set } => json!({
            "configurable": true,
            "enumerable": true,
            "get": summary_to_json(get),
            "set": summary_to_json(set),
        }),
    }
}

fn value_descriptor_json(value: &ValueSummary) -> Value {
    json!({
        "configurable": true,
        "enumerable": true,
        "writable": true,
        "value": summary_to_json(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(summary_to_json(&ValueSummary::Int(5)), json!(5));
        assert_eq!(summary_to_json(&ValueSummary::Bool(true)), json!(true));
        assert_eq!(
            summary_to_json(&ValueSummary::Str("hi".into())),
            json!("hi")
        );
        assert_eq!(
            summary_to_json(&ValueSummary::Null),
            json!({ "type": "null" })
        );
        assert_eq!(
            summary_to_json(&ValueSummary::NegZero),
            json!({ "type": "-0" })
        );
        assert_eq!(
            summary_to_json(&ValueSummary::Symbol(Some("tag".into()))),
            json!({ "type": "symbol", "name": "tag" })
        );
        assert_eq!(
            summary_to_json(&ValueSummary::BigInt("123456789".into())),
            json!({ "type": "BigInt", "text": "123456789" })
        );
    }

    #[test]
    fn test_expired_placeholder() {
        assert_eq!(
            arguments_to_json(&ArgumentSummaries::Expired),
            json!("<missing>")
        );
    }

    #[test]
    fn test_object_skips_unset_fields() {
        let object = ObjectSummary::default();
        let value = object_to_json(&object);
        let map = value.as_object().unwrap();
        assert!(!map.contains_key("class"));
        assert!(!map.contains_key("preview"));
        assert_eq!(map["type"], json!("object"));
        assert_eq!(map["isError"], json!(false));
    }
}
