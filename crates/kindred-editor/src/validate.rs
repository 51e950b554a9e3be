/*
 * validate.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Publishing constraints.
//!
//! [`validate`] never fails: every problem becomes a [`ValidationFinding`]
//! and a document is publishable when the list is empty. Document-wide
//! ceilings on length and block count are checked first, then each block in
//! order, then aggregate ceilings on images, videos, mentions and links.

use kindred_post_types::{BlockKind, EditorBlock, PostDocument, TextChunk};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Ceiling on paragraph characters across the document.
    pub max_chars: Option<usize>,
    pub max_blocks: Option<usize>,
    pub max_images: Option<usize>,
    pub max_videos: Option<usize>,
    pub max_mentions: Option<usize>,
    pub max_links: Option<usize>,
    pub disallowed_block_kinds: BTreeSet<BlockKind>,
    pub allow_empty_paragraphs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCode {
    TooManyBlocks,
    TooManyChars,
    EmptyParagraph,
    MissingImageUrl,
    MissingVideoUrl,
    PollTooFewOptions,
    EmptyCodeBlock,
    MissingEmbedUrl,
    InvalidAspectRatio,
    EmptyHeading,
    HeadingLevelOutOfRange,
    EmptyList,
    EmptyListItem,
    EmptyTable,
    EmptyTableRow,
    EmptyTableCell,
    InvalidTableSpan,
    DisallowedBlockKind,
    TooManyImages,
    TooManyVideos,
    TooManyMentions,
    TooManyLinks,
}

/// A single constraint violation.
///
/// `block_index` is `None` for document-level findings and serializes as
/// `-1` in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFinding {
    pub code: FindingCode,
    pub message: String,
    #[serde(with = "block_index")]
    pub block_index: Option<usize>,
    pub user_message: Option<String>,
}

impl ValidationFinding {
    fn document(code: FindingCode, message: String, user_message: impl Into<String>) -> Self {
        Self {
            code,
            message,
            block_index: None,
            user_message: Some(user_message.into()),
        }
    }

    fn block(
        code: FindingCode,
        index: usize,
        message: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            block_index: Some(index),
            user_message: Some(user_message.into()),
        }
    }
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.block_index {
            Some(index) => write!(f, "block {index}: {}", self.message),
            None => write!(f, "document: {}", self.message),
        }
    }
}

mod block_index {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(index) => serializer.serialize_u64(*index as u64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(usize::try_from(raw).ok())
    }
}

#[derive(Default)]
struct Tally {
    images: usize,
    videos: usize,
    mentions: usize,
    links: usize,
}

pub fn validate(document: &PostDocument, config: &ValidationConfig) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    if let Some(max) = config.max_blocks {
        let count = document.blocks.len();
        if count > max {
            findings.push(ValidationFinding::document(
                FindingCode::TooManyBlocks,
                format!("Too many blocks ({count} > {max})"),
                "This post is too long. Please shorten it.",
            ));
        }
    }

    if let Some(max) = config.max_chars {
        let total: usize = document
            .blocks
            .iter()
            .filter_map(EditorBlock::as_paragraph)
            .flat_map(|p| p.chunks.iter())
            .map(|c| c.text.chars().count())
            .sum();
        if total > max {
            findings.push(ValidationFinding::document(
                FindingCode::TooManyChars,
                format!("Post exceeds max character count ({total} > {max})"),
                "Your post is too long. Try trimming it down.",
            ));
        }
    }

    let mut tally = Tally::default();
    for (index, block) in document.blocks.iter().enumerate() {
        check_block(index, block, config, &mut tally, &mut findings);
        if config.disallowed_block_kinds.contains(&block.kind()) {
            findings.push(ValidationFinding::block(
                FindingCode::DisallowedBlockKind,
                index,
                format!("Block type not allowed: {}", block.kind()),
                "This type of content isn’t allowed in your post.",
            ));
        }
    }

    if let Some(max) = config.max_images.filter(|max| tally.images > *max) {
        findings.push(ValidationFinding::document(
            FindingCode::TooManyImages,
            format!("Too many images ({} > {max})", tally.images),
            "You’ve added too many images.",
        ));
    }
    if let Some(max) = config.max_videos.filter(|max| tally.videos > *max) {
        findings.push(ValidationFinding::document(
            FindingCode::TooManyVideos,
            format!("Too many videos ({} > {max})", tally.videos),
            format!("Only {max} video(s) allowed per post."),
        ));
    }
    if let Some(max) = config.max_mentions.filter(|max| tally.mentions > *max) {
        findings.push(ValidationFinding::document(
            FindingCode::TooManyMentions,
            format!("Too many mentions ({} > {max})", tally.mentions),
            "You’ve mentioned too many people.",
        ));
    }
    if let Some(max) = config.max_links.filter(|max| tally.links > *max) {
        findings.push(ValidationFinding::document(
            FindingCode::TooManyLinks,
            format!("Too many links ({} > {max})", tally.links),
            "You’ve included too many links.",
        ));
    }

    tracing::debug!(
        blocks = document.blocks.len(),
        findings = findings.len(),
        "validated document"
    );
    findings
}

/// True when [`validate`] reports nothing.
pub fn is_valid(document: &PostDocument, config: &ValidationConfig) -> bool {
    validate(document, config).is_empty()
}

fn all_blank(chunks: &[TextChunk]) -> bool {
    chunks.iter().all(TextChunk::is_blank)
}

fn check_block(
    index: usize,
    block: &EditorBlock,
    config: &ValidationConfig,
    tally: &mut Tally,
    findings: &mut Vec<ValidationFinding>,
) {
    let mut push = |code, message: String, user_message: &str| {
        findings.push(ValidationFinding::block(code, index, message, user_message));
    };

    match block {
        EditorBlock::Paragraph(p) => {
            let empty = p
                .chunks
                .iter()
                .all(|c| c.is_blank() && c.emoji.is_none() && c.mention.is_none());
            if !config.allow_empty_paragraphs && empty {
                push(
                    FindingCode::EmptyParagraph,
                    "Empty paragraph".into(),
                    "You left a paragraph empty. Please write something or remove it.",
                );
            }
            tally.mentions += p.chunks.iter().filter(|c| c.mention.is_some()).count();
            tally.links += p.chunks.iter().filter(|c| c.link.is_some()).count();
        }
        EditorBlock::Image(img) => {
            if img.url.trim().is_empty() {
                push(
                    FindingCode::MissingImageUrl,
                    "Image block missing URL".into(),
                    "One of your images is missing a link.",
                );
            }
            tally.images += 1;
        }
        EditorBlock::Video(video) => {
            if video.url.trim().is_empty() {
                push(
                    FindingCode::MissingVideoUrl,
                    "Video block missing URL".into(),
                    "One of your videos is missing a link.",
                );
            }
            tally.videos += 1;
        }
        EditorBlock::Poll(poll) => {
            if poll.options.len() < 2 {
                push(
                    FindingCode::PollTooFewOptions,
                    "Poll has fewer than 2 options".into(),
                    "Polls must have at least 2 answer choices.",
                );
            }
        }
        EditorBlock::CodeBlock(code) => {
            if code.code.trim().is_empty() {
                push(
                    FindingCode::EmptyCodeBlock,
                    "Code block is empty".into(),
                    "You added a code block but didn’t include any code.",
                );
            }
        }
        EditorBlock::Quote(_) | EditorBlock::Divider(_) => {}
        EditorBlock::Embed(embed) => {
            if embed.url.trim().is_empty() {
                push(
                    FindingCode::MissingEmbedUrl,
                    "Embed block is missing a URL.".into(),
                    "One of your embeds doesn’t have a valid link.",
                );
            }
            if let Some(ratio) = embed.aspect_ratio.filter(|r| *r <= 0.0) {
                push(
                    FindingCode::InvalidAspectRatio,
                    format!("Embed block has invalid aspect ratio: {ratio}"),
                    "Embedded media has a broken size ratio. Try resetting or removing it.",
                );
            }
        }
        EditorBlock::Heading(heading) => {
            if heading.text.trim().is_empty() {
                push(
                    FindingCode::EmptyHeading,
                    "Heading block is empty.".into(),
                    "You included a heading but didn’t write anything in it.",
                );
            }
            if !(1..=6).contains(&heading.level) {
                push(
                    FindingCode::HeadingLevelOutOfRange,
                    format!("Heading level {} is out of range (1–6).", heading.level),
                    "A heading level is invalid. Try using H1 to H6 only.",
                );
            }
        }
        EditorBlock::ListBlock(list) => {
            if list.items.is_empty() {
                push(
                    FindingCode::EmptyList,
                    "List block has no items.".into(),
                    "You created a list block but didn’t add any items.",
                );
            }
            for (item_index, item) in list.items.iter().enumerate() {
                if all_blank(&item.chunks) {
                    push(
                        FindingCode::EmptyListItem,
                        format!("List item #{} is empty.", item_index + 1),
                        "One of your list items is empty. Consider removing or editing it.",
                    );
                }
            }
        }
        EditorBlock::Table(table) => {
            if table.rows.is_empty() {
                push(
                    FindingCode::EmptyTable,
                    "Table block has no rows.".into(),
                    "You added a table but didn’t include any rows.",
                );
            }
            for (row_index, row) in table.rows.iter().enumerate() {
                if row.cells.is_empty() {
                    push(
                        FindingCode::EmptyTableRow,
                        format!("Table row #{} has no cells.", row_index + 1),
                        "A row in your table has no columns. Add at least one cell.",
                    );
                }
                for (cell_index, cell) in row.cells.iter().enumerate() {
                    if all_blank(&cell.chunks) {
                        push(
                            FindingCode::EmptyTableCell,
                            format!("Cell [{row_index}][{cell_index}] in table is empty."),
                            "There’s an empty cell in your table. Consider removing or filling it.",
                        );
                    }
                    if cell.col_span == 0 || cell.row_span == 0 {
                        push(
                            FindingCode::InvalidTableSpan,
                            format!(
                                "Cell [{row_index}][{cell_index}] has span {}x{}; spans must be at least 1.",
                                cell.col_span, cell.row_span
                            ),
                            "A cell in your table has an invalid size.",
                        );
                    }
                }
            }
        }
    }
}
