/*
 * table.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::alignment::Alignment;
use crate::chunk::TextChunk;
use crate::id::BlockId;
use serde::{Deserialize, Serialize};

fn default_span() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

/// A table cell. `col_span` and `row_span` default to 1 and must be at
/// least 1 in a valid document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub chunks: Vec<TextChunk>,
    #[serde(default = "default_span")]
    pub col_span: u32,
    #[serde(default = "default_span")]
    pub row_span: u32,
}

impl TableCell {
    pub fn new(chunks: Vec<TextChunk>) -> Self {
        Self {
            chunks,
            col_span: 1,
            row_span: 1,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![TextChunk::plain(text)])
    }

    /// Spans are at least 1. Zero is stored as given and reported by
    /// validation rather than rejected here.
    pub fn with_col_span(mut self, span: u32) -> Self {
        self.col_span = span;
        self
    }

    /// See [`TableCell::with_col_span`].
    pub fn with_row_span(mut self, span: u32) -> Self {
        self.row_span = span;
        self
    }

    pub fn is_blank(&self) -> bool {
        self.chunks.iter().all(TextChunk::is_blank)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default)]
    pub id: BlockId,
    pub rows: Vec<TableRow>,
    #[serde(default = "default_true")]
    pub has_header: bool,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Table {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self {
            id: BlockId::new(),
            rows,
            has_header: true,
            alignment: Alignment::Auto,
        }
    }

    pub fn with_rows(mut self, rows: Vec<TableRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}
