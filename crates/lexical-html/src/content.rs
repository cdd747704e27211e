/*
 * content.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Entry point for rendering a content item.
//!
//! A content item carries two optional strings: a serialized document and
//! a plain-text fallback. A parseable document renders inside the content
//! container, even when empty. A document that fails to parse degrades
//! silently to the fallback text; the failure is never surfaced or logged
//! here. With neither input usable, nothing is written.

use crate::readers::json::parse_document;
use crate::writers::html;
use std::io::Write;

/// Write a content item as HTML.
pub fn write_content<W: Write>(
    serialized: Option<&str>,
    fallback: Option<&str>,
    mut writer: W,
) -> std::io::Result<()> {
    if let Some(serialized) = serialized.filter(|s| !s.is_empty()) {
        if let Ok(document) = parse_document(serialized) {
            writeln!(writer, "<div class=\"rich-text\">")?;
            html::write_nodes(&document.children, &mut writer)?;
            writeln!(writer, "</div>")?;
            return Ok(());
        }
        // Malformed document: fall through to the fallback text
    }

    if let Some(fallback) = fallback.filter(|s| !s.is_empty()) {
        writeln!(
            writer,
            "<pre class=\"rich-text-fallback\">{}</pre>",
            html::escape_html(fallback)
        )?;
    }

    Ok(())
}

/// Render a content item to an HTML string.
pub fn render_content(serialized: Option<&str>, fallback: Option<&str>) -> String {
    let mut buf = Vec::new();
    write_content(serialized, fallback, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("writer output is UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_inputs_no_output() {
        assert_eq!(render_content(None, None), "");
    }

    #[test]
    fn test_empty_strings_are_unusable() {
        assert_eq!(render_content(Some(""), Some("")), "");
    }

    #[test]
    fn test_valid_empty_document_renders_empty_container() {
        let html = render_content(Some(r#"{"root":{"children":[]}}"#), Some("fallback"));
        assert_eq!(html, "<div class=\"rich-text\">\n</div>\n");
    }

    #[test]
    fn test_parse_failure_falls_back_silently() {
        let degraded = render_content(Some("{not json"), Some("Hello"));
        let fallback_only = render_content(None, Some("Hello"));
        assert_eq!(degraded, fallback_only);
        assert_eq!(
            degraded,
            "<pre class=\"rich-text-fallback\">Hello</pre>\n"
        );
    }

    #[test]
    fn test_fallback_text_is_escaped() {
        let html = render_content(None, Some("1 < 2"));
        assert_eq!(html, "<pre class=\"rich-text-fallback\">1 &lt; 2</pre>\n");
    }
}
