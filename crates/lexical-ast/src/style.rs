/*
 * style.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

/// One parsed inline-style declaration.
///
/// Property names are stored camelCased (`font-weight` parses to
/// `fontWeight`), matching the canonical spelling the editor ecosystem
/// applies them with. [`Declaration::css_name`] recovers the hyphenated
/// spelling for CSS text output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    /// CSS (hyphenated) spelling of the camelCase property name.
    pub fn css_name(&self) -> String {
        let mut out = String::with_capacity(self.property.len() + 4);
        for c in self.property.chars() {
            if c.is_ascii_uppercase() {
                out.push('-');
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

/// Parse a semicolon-separated inline style string into declarations.
///
/// Each piece is split on its first `:`; both sides are trimmed. Pieces
/// without a colon, or with an empty property or value, are dropped
/// silently without affecting the remaining declarations.
pub fn parse_declarations(style: &str) -> Vec<Declaration> {
    style
        .split(';')
        .filter_map(|piece| {
            let (property, value) = piece.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                return None;
            }
            Some(Declaration {
                property: camel_case(property),
                value: value.to_string(),
            })
        })
        .collect()
}

fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper_next = false;
    for c in property.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(property: &str, value: &str) -> Declaration {
        Declaration {
            property: property.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_parse_two_declarations_with_whitespace() {
        let declarations = parse_declarations("font-weight: bold; color : red;");
        assert_eq!(
            declarations,
            vec![decl("fontWeight", "bold"), decl("color", "red")]
        );
    }

    #[test]
    fn test_malformed_piece_is_dropped() {
        let declarations = parse_declarations("invalid; color: red");
        assert_eq!(declarations, vec![decl("color", "red")]);
    }

    #[test]
    fn test_empty_property_or_value_is_dropped() {
        assert!(parse_declarations(": red").is_empty());
        assert!(parse_declarations("color:").is_empty());
        assert!(parse_declarations("color:   ").is_empty());
        assert!(parse_declarations("").is_empty());
        assert!(parse_declarations(";;;").is_empty());
    }

    #[test]
    fn test_value_split_on_first_colon_only() {
        let declarations = parse_declarations("background: url(a:b)");
        assert_eq!(declarations, vec![decl("background", "url(a:b)")]);
    }

    #[test]
    fn test_camel_case_multiple_hyphens() {
        let declarations = parse_declarations("border-top-left-radius: 2px");
        assert_eq!(declarations, vec![decl("borderTopLeftRadius", "2px")]);
    }

    #[test]
    fn test_css_name_round_trips() {
        let declarations = parse_declarations("font-weight: bold");
        assert_eq!(declarations[0].css_name(), "font-weight");

        let declarations = parse_declarations("color: red");
        assert_eq!(declarations[0].css_name(), "color");
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            // The parser is total: any input yields declarations with
            // trimmed, non-empty parts and camelCased property names.
            #[test]
            fn parse_never_panics_and_normalizes(input in ".{0,200}") {
                for declaration in parse_declarations(&input) {
                    prop_assert!(!declaration.value.is_empty());
                    prop_assert!(!declaration.property.contains('-'));
                    prop_assert_eq!(declaration.value.trim(), declaration.value.as_str());
                }
            }
        }
    }
}
