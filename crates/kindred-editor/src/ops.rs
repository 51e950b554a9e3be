/*
 * ops.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Pure structural edits over block sequences.
//!
//! Every function here is total: out-of-range positions clamp (insert) or
//! leave the input unchanged (remove, replace, move), and operations that
//! only make sense for paragraphs return `None` for anything else. Inputs
//! are never modified; a new sequence or block is returned.

use kindred_post_types::{BlockId, EditorBlock, Paragraph, StyleFlag, TextChunk};

/// Insert `block` at `index`. `0` prepends; anything at or past the end
/// appends.
pub fn insert<T: Clone>(blocks: &[T], block: T, index: usize) -> Vec<T> {
    let at = index.min(blocks.len());
    let mut out = Vec::with_capacity(blocks.len() + 1);
    out.extend_from_slice(&blocks[..at]);
    out.push(block);
    out.extend_from_slice(&blocks[at..]);
    out
}

/// Remove the element at `index`, or return an unchanged copy when out of range.
pub fn remove<T: Clone>(blocks: &[T], index: usize) -> Vec<T> {
    if index >= blocks.len() {
        return blocks.to_vec();
    }
    let mut out = blocks.to_vec();
    out.remove(index);
    out
}

pub fn replace<T: Clone>(blocks: &[T], index: usize, block: T) -> Vec<T> {
    let mut out = blocks.to_vec();
    if let Some(slot) = out.get_mut(index) {
        *slot = block;
    }
    out
}

/// Move the element at `from` so that it ends up at `to`.
///
/// Unchanged when either index is out of range or they are equal.
pub fn move_to<T: Clone>(blocks: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = blocks.to_vec();
    if from >= blocks.len() || to >= blocks.len() || from == to {
        return out;
    }
    let item = out.remove(from);
    out.insert(to, item);
    out
}

/// Split a paragraph's chunk list at `at` (`0..=len`).
///
/// The first half keeps the original identifier; the second half is a new
/// block with the same alignment.
pub fn split(block: &EditorBlock, at: usize) -> Option<(Paragraph, Paragraph)> {
    let EditorBlock::Paragraph(paragraph) = block else {
        return None;
    };
    split_paragraph(paragraph, at)
}

pub fn split_paragraph(paragraph: &Paragraph, at: usize) -> Option<(Paragraph, Paragraph)> {
    if at > paragraph.chunks.len() {
        return None;
    }
    let (head, tail) = paragraph.chunks.split_at(at);
    let first = paragraph.clone().with_chunks(head.to_vec());
    let second = Paragraph {
        id: BlockId::new(),
        chunks: tail.to_vec(),
        alignment: paragraph.alignment,
    };
    Some((first, second))
}

/// Concatenate the chunks of two paragraphs. The result keeps the first
/// paragraph's identifier and alignment.
pub fn merge(a: &EditorBlock, b: &EditorBlock) -> Option<Paragraph> {
    match (a, b) {
        (EditorBlock::Paragraph(a), EditorBlock::Paragraph(b)) => {
            let mut chunks = a.chunks.clone();
            chunks.extend(b.chunks.iter().cloned());
            Some(a.clone().with_chunks(chunks))
        }
        _ => None,
    }
}

/// Flip exactly one boolean style.
pub fn toggle_style(chunk: &TextChunk, flag: StyleFlag) -> TextChunk {
    chunk.clone().with_flag(flag, !chunk.flag(flag))
}
