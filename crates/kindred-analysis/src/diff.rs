/*
 * diff.rs
 * Copyright (c) 2025 Posit, PBC
 */

use kindred_post_types::PostDocument;
use serde::{Deserialize, Serialize};

/// Index-aligned change report between two versions of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostChangeSummary {
    pub added_blocks: Vec<usize>,
    pub removed_blocks: Vec<usize>,
    pub modified_blocks: Vec<usize>,
    pub has_significant_changes: bool,
}

/// Compare `old` and `new` position by position.
///
/// Positions past the end of `old` are additions, positions past the end of
/// `new` are removals, and shared positions whose blocks differ structurally
/// are modifications. Reordering is not detected: a moved block shows up as
/// modifications at every position it shifted.
pub fn diff(old: &PostDocument, new: &PostDocument) -> PostChangeSummary {
    let mut summary = PostChangeSummary::default();
    let len = old.blocks.len().max(new.blocks.len());

    for index in 0..len {
        match (old.blocks.get(index), new.blocks.get(index)) {
            (None, Some(_)) => summary.added_blocks.push(index),
            (Some(_), None) => summary.removed_blocks.push(index),
            (Some(a), Some(b)) if a != b => summary.modified_blocks.push(index),
            _ => {}
        }
    }

    summary.has_significant_changes = !summary.added_blocks.is_empty()
        || !summary.removed_blocks.is_empty()
        || !summary.modified_blocks.is_empty();
    tracing::debug!(
        added = summary.added_blocks.len(),
        removed = summary.removed_blocks.len(),
        modified = summary.modified_blocks.len(),
        "diffed documents"
    );
    summary
}
