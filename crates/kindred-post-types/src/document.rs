/*
 * document.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::block::EditorBlock;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Post-level key/value data such as tags or visibility.
///
/// Insertion order is kept for output; equality ignores it.
pub type Metadata = IndexMap<String, String>;

/// An ordered sequence of blocks plus metadata.
///
/// Block order defines render order. Equality is deep structural equality,
/// which is what the diff and undo deduplication compare against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDocument {
    pub blocks: Vec<EditorBlock>,
    pub metadata: Metadata,
}

impl PostDocument {
    pub fn new(blocks: Vec<EditorBlock>) -> Self {
        Self {
            blocks,
            metadata: Metadata::new(),
        }
    }

    pub fn with_blocks(&self, blocks: Vec<EditorBlock>) -> Self {
        Self {
            blocks,
            metadata: self.metadata.clone(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
