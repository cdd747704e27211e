/*
 * plaintext.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Plain-text writer for Lexical node trees.
//!
//! Produces raw text with no escaping or markup. Used for plain
//! projections of rich content (excerpts, meta descriptions, titles).
//! Inline structure is stripped; block nodes end with a newline.

use lexical_ast::Node;
use std::io::Write;

/// Write a sequence of nodes as plain text.
pub fn write_nodes<W: Write>(nodes: &[Node], w: &mut W) -> std::io::Result<()> {
    for node in nodes {
        write_node(node, w)?;
    }
    Ok(())
}

fn write_node<W: Write>(node: &Node, w: &mut W) -> std::io::Result<()> {
    match node {
        Node::Text(text) => write!(w, "{}", text.text)?,
        Node::LineBreak => writeln!(w)?,

        // Block containers end with a newline
        Node::Paragraph(para) => {
            write_nodes(&para.children, w)?;
            writeln!(w)?;
        }
        Node::Quote(quote) => {
            write_nodes(&quote.children, w)?;
            writeln!(w)?;
        }
        Node::Heading(heading) => {
            write_nodes(&heading.children, w)?;
            writeln!(w)?;
        }
        Node::List(list) => write_nodes(&list.children, w)?,
        Node::ListItem(item) => {
            write_nodes(&item.children, w)?;
            writeln!(w)?;
        }

        // Inline structure is stripped
        Node::Link(link) => write_nodes(&link.children, w)?,

        // No textual content
        Node::Image(_) => {}

        Node::Unknown(unknown) => {
            if let Some(children) = &unknown.children {
                write_nodes(children, w)?;
            }
        }
    }
    Ok(())
}

/// Render a sequence of nodes to a plain-text string.
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut buf = Vec::new();
    write_nodes(nodes, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("writer output is UTF-8")
}
