/*
 * html.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! HTML writer for Lexical node trees.
//!
//! Conversion is pure and total over well-typed nodes: nodes render in
//! input order, degraded fields fall back to their defaults, and the
//! writer never fails except for errors from the underlying `Write`.

use lexical_ast::{Declaration, Image, Node, Text, parse_declarations};
use std::io::Write;

// =============================================================================
// Helper functions
// =============================================================================

/// Escape HTML special characters
pub(crate) fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Render declarations as CSS text for a `style` attribute.
fn style_attr(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|d| format!("{}: {}", d.css_name(), d.value))
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Node writing
// =============================================================================

/// Write a text run with its formatting wrappers.
///
/// The nesting order is fixed, innermost to outermost: the styled span (or
/// bare text when no style declarations parse), one combined
/// underline/strikethrough span, `<em>`, `<strong>`, `<code>`, `<sub>`,
/// `<sup>`. Nesting order matters for the visual result under CSS
/// inheritance, so wrappers open outermost-first below.
fn write_text<W: Write>(text: &Text, w: &mut W) -> std::io::Result<()> {
    let format = text.format;

    if format.is_superscript() {
        write!(w, "<sup>")?;
    }
    if format.is_subscript() {
        write!(w, "<sub>")?;
    }
    if format.is_code() {
        write!(w, "<code>")?;
    }
    if format.is_bold() {
        write!(w, "<strong>")?;
    }
    if format.is_italic() {
        write!(w, "<em>")?;
    }

    let decoration = match (format.is_underline(), format.is_strikethrough()) {
        (true, true) => Some("underline strikethrough"),
        (true, false) => Some("underline"),
        (false, true) => Some("strikethrough"),
        (false, false) => None,
    };
    if let Some(classes) = decoration {
        write!(w, "<span class=\"{}\">", classes)?;
    }

    let declarations = parse_declarations(text.style.as_deref().unwrap_or(""));
    if declarations.is_empty() {
        write!(w, "{}", escape_html(&text.text))?;
    } else {
        write!(
            w,
            "<span style=\"{}\">{}</span>",
            escape_html(&style_attr(&declarations)),
            escape_html(&text.text)
        )?;
    }

    if decoration.is_some() {
        write!(w, "</span>")?;
    }
    if format.is_italic() {
        write!(w, "</em>")?;
    }
    if format.is_bold() {
        write!(w, "</strong>")?;
    }
    if format.is_code() {
        write!(w, "</code>")?;
    }
    if format.is_subscript() {
        write!(w, "</sub>")?;
    }
    if format.is_superscript() {
        write!(w, "</sup>")?;
    }
    Ok(())
}

/// Write an image element. A node with an empty `src` produces no output,
/// and a dimension is written only when greater than zero.
fn write_image<W: Write>(image: &Image, w: &mut W) -> std::io::Result<()> {
    if image.src.is_empty() {
        return Ok(());
    }
    write!(
        w,
        "<img src=\"{}\" alt=\"{}\"",
        escape_html(&image.src),
        escape_html(&image.alt_text)
    )?;
    if let Some(width) = image.width.filter(|v| *v > 0.0) {
        write!(w, " width=\"{}\"", width)?;
    }
    if let Some(height) = image.height.filter(|v| *v > 0.0) {
        write!(w, " height=\"{}\"", height)?;
    }
    write!(w, " />")?;
    Ok(())
}

/// Write a single node
fn write_node<W: Write>(node: &Node, w: &mut W) -> std::io::Result<()> {
    match node {
        Node::Text(text) => {
            write_text(text, w)?;
        }
        Node::LineBreak => {
            write!(w, "<br />")?;
        }
        Node::Paragraph(para) => {
            write!(w, "<p>")?;
            write_nodes(&para.children, w)?;
            writeln!(w, "</p>")?;
        }
        Node::Quote(quote) => {
            writeln!(w, "<blockquote>")?;
            write_nodes(&quote.children, w)?;
            writeln!(w, "</blockquote>")?;
        }
        Node::Heading(heading) => {
            write!(w, "<{}>", heading.level.tag())?;
            write_nodes(&heading.children, w)?;
            writeln!(w, "</{}>", heading.level.tag())?;
        }
        Node::List(list) => {
            writeln!(w, "<{}>", list.kind.tag())?;
            write_nodes(&list.children, w)?;
            writeln!(w, "</{}>", list.kind.tag())?;
        }
        Node::ListItem(item) => {
            write!(w, "<li>")?;
            write_nodes(&item.children, w)?;
            writeln!(w, "</li>")?;
        }
        Node::Link(link) => {
            write!(w, "<a href=\"{}\">", escape_html(&link.url))?;
            write_nodes(&link.children, w)?;
            write!(w, "</a>")?;
        }
        Node::Image(image) => {
            write_image(image, w)?;
        }
        // Unrecognized wrappers are transparent: their children render in
        // place. A childless unknown node renders nothing.
        Node::Unknown(unknown) => {
            if let Some(children) = &unknown.children {
                write_nodes(children, w)?;
            }
        }
    }
    Ok(())
}

/// Write a sequence of nodes in input order
pub fn write_nodes<W: Write>(nodes: &[Node], w: &mut W) -> std::io::Result<()> {
    for node in nodes {
        write_node(node, w)?;
    }
    Ok(())
}

// =============================================================================
// Public API
// =============================================================================

/// Write a sequence of nodes to a writer.
pub fn write_nodes_to<W: Write>(nodes: &[Node], mut writer: W) -> std::io::Result<()> {
    write_nodes(nodes, &mut writer)
}

/// Render a sequence of nodes to an HTML string.
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut buf = Vec::new();
    write_nodes(nodes, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("writer output is UTF-8")
}
