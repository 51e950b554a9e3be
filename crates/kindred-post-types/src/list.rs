/*
 * list.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::alignment::Alignment;
use crate::chunk::TextChunk;
use crate::id::BlockId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListType {
    #[default]
    Unordered,
    Ordered,
    Checklist,
}

/// One entry of a list. `checked` is only meaningful for checklists;
/// `sub_items` nest to any depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub chunks: Vec<TextChunk>,
    #[serde(default)]
    pub checked: Option<bool>,
    #[serde(default)]
    pub sub_items: Vec<ListItem>,
}

impl ListItem {
    pub fn new(chunks: Vec<TextChunk>) -> Self {
        Self {
            chunks,
            checked: None,
            sub_items: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![TextChunk::plain(text)])
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn with_sub_items(mut self, sub_items: Vec<ListItem>) -> Self {
        self.sub_items = sub_items;
        self
    }

    /// Neither text nor nested items.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty() && self.sub_items.is_empty()
    }

    pub fn is_blank(&self) -> bool {
        self.chunks.iter().all(TextChunk::is_blank)
    }
}

/// Ordered, unordered or checklist block.
///
/// The list type is serialized as `listType` since `type` carries the
/// block tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBlock {
    #[serde(default)]
    pub id: BlockId,
    pub items: Vec<ListItem>,
    #[serde(default)]
    pub list_type: ListType,
    #[serde(default)]
    pub alignment: Alignment,
}

impl ListBlock {
    pub fn new(items: Vec<ListItem>, list_type: ListType) -> Self {
        Self {
            id: BlockId::new(),
            items,
            list_type,
            alignment: Alignment::Auto,
        }
    }

    pub fn with_items(mut self, items: Vec<ListItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}
