/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Lexical document tree type definitions.
 *
 * This crate provides pure data type definitions for the serialized
 * document trees produced by the Lexical rich-text editor. It has a
 * single dependency (serde) and can be used by any crate that needs
 * to work with Lexical document structures.
 */

pub mod document;
pub mod format;
pub mod node;
pub mod style;

// Re-export commonly used types at the crate root
pub use document::Document;
pub use format::TextFormat;
pub use node::{
    Heading, HeadingLevel, Image, Link, List, ListItem, ListKind, Node, Nodes, Paragraph, Quote,
    Text, Unknown,
};
pub use style::{Declaration, parse_declarations};
