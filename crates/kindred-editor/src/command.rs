/*
 * command.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Editor commands.
//!
//! A command is a deterministic, copy-on-write transformation of a whole
//! document. Commands do not carry their own inverse: the session records
//! the document before and after each command and undo restores snapshots.
//!
//! ```ignore
//! use kindred_editor::{EditorSession, InsertBlock};
//! use kindred_post_types::{Paragraph, PostDocument};
//!
//! let mut session = EditorSession::new(PostDocument::default());
//! session.execute(&InsertBlock::new(Paragraph::text("Hello"), 0));
//! session.undo();
//! ```

use crate::normalize::{NormalizationConfig, normalize_document};
use crate::ops;
use kindred_post_types::{EditorBlock, PostDocument, StyleFlag};

/// A pure document transformation.
pub trait EditorCommand: Send + Sync {
    /// Short human-readable label, suitable for logs or an undo tooltip.
    fn description(&self) -> String;

    /// Produce the transformed document. `document` is left untouched.
    fn apply(&self, document: &PostDocument) -> PostDocument;
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertBlock {
    pub block: EditorBlock,
    pub index: usize,
}

impl InsertBlock {
    pub fn new(block: impl Into<EditorBlock>, index: usize) -> Self {
        Self {
            block: block.into(),
            index,
        }
    }
}

impl EditorCommand for InsertBlock {
    fn description(&self) -> String {
        format!("Insert {} at {}", self.block.kind(), self.index)
    }

    fn apply(&self, document: &PostDocument) -> PostDocument {
        document.with_blocks(ops::insert(&document.blocks, self.block.clone(), self.index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveBlock {
    pub index: usize,
}

impl EditorCommand for RemoveBlock {
    fn description(&self) -> String {
        format!("Remove block {}", self.index)
    }

    fn apply(&self, document: &PostDocument) -> PostDocument {
        document.with_blocks(ops::remove(&document.blocks, self.index))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceBlock {
    pub index: usize,
    pub block: EditorBlock,
}

impl ReplaceBlock {
    pub fn new(index: usize, block: impl Into<EditorBlock>) -> Self {
        Self {
            index,
            block: block.into(),
        }
    }
}

impl EditorCommand for ReplaceBlock {
    fn description(&self) -> String {
        format!("Replace block {} with {}", self.index, self.block.kind())
    }

    fn apply(&self, document: &PostDocument) -> PostDocument {
        document.with_blocks(ops::replace(
            &document.blocks,
            self.index,
            self.block.clone(),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveBlock {
    pub from: usize,
    pub to: usize,
}

impl EditorCommand for MoveBlock {
    fn description(&self) -> String {
        format!("Move block {} to {}", self.from, self.to)
    }

    fn apply(&self, document: &PostDocument) -> PostDocument {
        document.with_blocks(ops::move_to(&document.blocks, self.from, self.to))
    }
}

/// Split the paragraph at `index` into two adjacent paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitParagraph {
    pub index: usize,
    pub at_chunk: usize,
}

impl EditorCommand for SplitParagraph {
    fn description(&self) -> String {
        format!("Split paragraph {} at chunk {}", self.index, self.at_chunk)
    }

    fn apply(&self, document: &PostDocument) -> PostDocument {
        let Some((first, second)) = document
            .blocks
            .get(self.index)
            .and_then(|block| ops::split(block, self.at_chunk))
        else {
            return document.clone();
        };
        let blocks = ops::replace(&document.blocks, self.index, first.into());
        document.with_blocks(ops::insert(&blocks, second.into(), self.index + 1))
    }
}

/// Merge the paragraph at `index` with the paragraph that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeParagraphs {
    pub index: usize,
}

impl EditorCommand for MergeParagraphs {
    fn description(&self) -> String {
        match self.index.checked_add(1) {
            Some(next) => format!("Merge paragraphs {} and {}", self.index, next),
            None => format!("Merge paragraph {} with its successor", self.index),
        }
    }

    fn apply(&self, document: &PostDocument) -> PostDocument {
        let Some(next) = self.index.checked_add(1) else {
            return document.clone();
        };
        let merged = match (document.blocks.get(self.index), document.blocks.get(next)) {
            (Some(a), Some(b)) => ops::merge(a, b),
            _ => None,
        };
        let Some(merged) = merged else {
            return document.clone();
        };
        let blocks = ops::replace(&document.blocks, self.index, merged.into());
        document.with_blocks(ops::remove(&blocks, next))
    }
}

/// Toggle a style on one chunk of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleChunkStyle {
    pub block_index: usize,
    pub chunk_index: usize,
    pub flag: StyleFlag,
}

impl EditorCommand for ToggleChunkStyle {
    fn description(&self) -> String {
        format!(
            "Toggle {:?} on chunk {} of block {}",
            self.flag, self.chunk_index, self.block_index
        )
    }

    fn apply(&self, document: &PostDocument) -> PostDocument {
        let Some(EditorBlock::Paragraph(paragraph)) = document.blocks.get(self.block_index) else {
            return document.clone();
        };
        let Some(chunk) = paragraph.chunks.get(self.chunk_index) else {
            return document.clone();
        };
        let chunks = ops::replace(
            &paragraph.chunks,
            self.chunk_index,
            ops::toggle_style(chunk, self.flag),
        );
        let updated = paragraph.clone().with_chunks(chunks);
        document.with_blocks(ops::replace(
            &document.blocks,
            self.block_index,
            updated.into(),
        ))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeDocument {
    pub config: NormalizationConfig,
}

impl EditorCommand for NormalizeDocument {
    fn description(&self) -> String {
        "Normalize document".to_string()
    }

    fn apply(&self, document: &PostDocument) -> PostDocument {
        normalize_document(document, &self.config)
    }
}
