/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Reader for the serialized JSON form of a Lexical document.
//!
//! Editor output is tolerated rather than validated: decoding a JSON value
//! into nodes is total. Every missing or ill-typed field takes its default,
//! unrecognized node types are kept as transparent [`Unknown`] wrappers,
//! and entries in a `children` array that are not objects are skipped.
//! The only failure mode is JSON text that does not parse at all.

use lexical_ast::{
    Document, Heading, HeadingLevel, Image, Link, List, ListItem, ListKind, Node, Nodes,
    Paragraph, Quote, Text, TextFormat, Unknown,
};
use serde_json::{Map, Value};
use thiserror::Error;

/// A serialized document whose JSON text could not be parsed.
#[derive(Error, Debug)]
#[error("invalid document JSON: {0}")]
pub struct DocumentError(#[from] serde_json::Error);

/// Parse serialized editor JSON into a [`Document`].
///
/// A parseable document with a missing `root.children` path yields an
/// empty document, not an error.
pub fn parse_document(serialized: &str) -> Result<Document, DocumentError> {
    let value: Value = serde_json::from_str(serialized)?;
    let children = value
        .get("root")
        .and_then(|root| root.get("children"))
        .map(decode_nodes)
        .unwrap_or_default();
    Ok(Document::new(children))
}

/// Decode a `children` value. Anything that is not an array decodes to no
/// nodes; array entries that are not objects are skipped.
pub fn decode_nodes(value: &Value) -> Nodes {
    let Some(items) = value.as_array() else {
        return Nodes::new();
    };
    items.iter().filter_map(decode_node).collect()
}

/// Decode a single serialized node. Returns `None` only for entries that
/// are not JSON objects; every object decodes to some node.
pub fn decode_node(value: &Value) -> Option<Node> {
    let obj = value.as_object()?;
    let node = match obj.get("type").and_then(Value::as_str).unwrap_or("") {
        "text" => Node::Text(Text {
            text: string_field(obj, "text"),
            format: TextFormat::new(obj.get("format").and_then(Value::as_u64).unwrap_or(0) as u32),
            style: obj.get("style").and_then(Value::as_str).map(str::to_owned),
        }),
        "linebreak" => Node::LineBreak,
        "paragraph" => Node::Paragraph(Paragraph {
            children: child_nodes(obj),
        }),
        "quote" => Node::Quote(Quote {
            children: child_nodes(obj),
        }),
        "listitem" => Node::ListItem(ListItem {
            children: child_nodes(obj),
        }),
        "heading" => Node::Heading(Heading {
            level: HeadingLevel::from_tag(obj.get("tag").and_then(Value::as_str)),
            children: child_nodes(obj),
        }),
        "list" => Node::List(List {
            kind: ListKind::from_tag(obj.get("tag").and_then(Value::as_str)),
            children: child_nodes(obj),
        }),
        "link" => Node::Link(Link {
            url: obj
                .get("url")
                .and_then(Value::as_str)
                .unwrap_or("#")
                .to_string(),
            children: child_nodes(obj),
        }),
        "image" => Node::Image(Image {
            src: string_field(obj, "src"),
            alt_text: string_field(obj, "altText"),
            width: obj.get("width").and_then(Value::as_f64),
            height: obj.get("height").and_then(Value::as_f64),
        }),
        _ => Node::Unknown(Unknown {
            children: obj
                .get("children")
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(decode_node).collect()),
        }),
    };
    Some(node)
}

fn child_nodes(obj: &Map<String, Value>) -> Nodes {
    obj.get("children").map(decode_nodes).unwrap_or_default()
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_document_extracts_root_children() {
        let document =
            parse_document(r#"{"root":{"children":[{"type":"paragraph","children":[]}]}}"#)
                .unwrap();
        assert_eq!(document.children.len(), 1);
        assert!(matches!(document.children[0], Node::Paragraph(_)));
    }

    #[test]
    fn test_parse_document_missing_root_is_empty() {
        assert!(parse_document(r#"{}"#).unwrap().is_empty());
        assert!(parse_document(r#"{"root":{}}"#).unwrap().is_empty());
        assert!(parse_document(r#"{"root":{"children":"nope"}}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_document_rejects_malformed_json() {
        assert!(parse_document("{not json").is_err());
    }

    #[test]
    fn test_decode_skips_non_object_entries() {
        let nodes = decode_nodes(&json!([null, 7, "x", {"type": "linebreak"}]));
        assert_eq!(nodes, vec![Node::LineBreak]);
    }

    #[test]
    fn test_decode_text_defaults() {
        let Some(Node::Text(text)) = decode_node(&json!({"type": "text"})) else {
            panic!("expected a text node");
        };
        assert_eq!(text.text, "");
        assert_eq!(text.format.bits(), 0);
        assert_eq!(text.style, None);
    }

    #[test]
    fn test_decode_text_ill_typed_format_defaults_to_zero() {
        let Some(Node::Text(text)) =
            decode_node(&json!({"type": "text", "text": "a", "format": "bold"}))
        else {
            panic!("expected a text node");
        };
        assert_eq!(text.format.bits(), 0);
    }

    #[test]
    fn test_decode_link_default_url() {
        let Some(Node::Link(link)) = decode_node(&json!({"type": "link", "children": []})) else {
            panic!("expected a link node");
        };
        assert_eq!(link.url, "#");
    }

    #[test]
    fn test_decode_heading_invalid_tag_falls_back() {
        let Some(Node::Heading(heading)) =
            decode_node(&json!({"type": "heading", "tag": "h9", "children": []}))
        else {
            panic!("expected a heading node");
        };
        assert_eq!(heading.level, HeadingLevel::H2);
    }

    #[test]
    fn test_decode_unknown_with_and_without_children() {
        let Some(Node::Unknown(with)) =
            decode_node(&json!({"type": "customBlock", "children": [{"type": "linebreak"}]}))
        else {
            panic!("expected an unknown node");
        };
        assert_eq!(with.children, Some(vec![Node::LineBreak]));

        let Some(Node::Unknown(without)) = decode_node(&json!({"type": "customBlock"})) else {
            panic!("expected an unknown node");
        };
        assert_eq!(without.children, None);
    }

    #[test]
    fn test_decode_missing_type_is_unknown() {
        assert!(matches!(
            decode_node(&json!({"text": "orphan"})),
            Some(Node::Unknown(_))
        ));
    }
}
