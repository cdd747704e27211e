/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::format::TextFormat;
use serde::{Deserialize, Serialize};

/// One element of a Lexical document tree.
///
/// The serialized form discriminates nodes by a `type` string. Node kinds
/// the renderer does not know about are kept as [`Unknown`] so that their
/// children can still be spliced into the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Text(Text),
    LineBreak,
    Paragraph(Paragraph),
    Quote(Quote),
    Heading(Heading),
    List(List),
    ListItem(ListItem),
    Link(Link),
    Image(Image),
    Unknown(Unknown),
}

pub type Nodes = Vec<Node>;

/// Leaf text run with bit-flag formatting and an optional inline style
/// string of semicolon-separated `property:value` declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
    pub format: TextFormat,
    pub style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub children: Nodes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub children: Nodes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub children: Nodes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub kind: ListKind,
    pub children: Nodes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub children: Nodes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub children: Nodes,
}

/// Leaf image node. A node with an empty `src` produces no output.
/// Dimensions are applied only when greater than zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt_text: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Node of an unrecognized `type`. When the serialized node carried a
/// `children` array the wrapper is transparent and the children render in
/// its place; otherwise the node renders nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unknown {
    pub children: Option<Nodes>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Validate a serialized heading tag. Absent or unrecognized tags fall
    /// back to `h2`.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("h1") => HeadingLevel::H1,
            Some("h2") => HeadingLevel::H2,
            Some("h3") => HeadingLevel::H3,
            Some("h4") => HeadingLevel::H4,
            Some("h5") => HeadingLevel::H5,
            Some("h6") => HeadingLevel::H6,
            _ => HeadingLevel::H2,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListKind {
    Ordered,
    #[default]
    Unordered,
}

impl ListKind {
    /// Any tag other than `"ol"` (including an absent one) is unordered.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("ol") => ListKind::Ordered,
            _ => ListKind::Unordered,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}
