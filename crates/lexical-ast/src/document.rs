/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::node::Nodes;
use serde::{Deserialize, Serialize};

/// A deserialized Lexical document: the children of the tree's root node.
///
/// A serialized document whose `root.children` path is missing yields an
/// empty document, which is distinct from having no document at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub children: Nodes,
}

impl Document {
    pub fn new(children: Nodes) -> Self {
        Document { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
