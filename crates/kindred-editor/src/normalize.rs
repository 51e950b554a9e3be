/*
 * normalize.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Canonicalization of raw editor input.
//!
//! Normalization trims text fields, drops degenerate blocks and merges
//! adjacent inline chunks that share a style. It is idempotent for every
//! configuration, except for the poll rule noted on [`normalize_block`].

use kindred_post_types::{EditorBlock, PostDocument, TextChunk};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Drop blocks whose primary content is blank.
    pub remove_empty_blocks: bool,
    /// Keep paragraphs that end up with no chunks. Independent of
    /// `remove_empty_blocks`.
    pub allow_empty_paragraphs: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            remove_empty_blocks: true,
            allow_empty_paragraphs: false,
        }
    }
}

pub fn normalize_document(document: &PostDocument, config: &NormalizationConfig) -> PostDocument {
    let blocks: Vec<EditorBlock> = document
        .blocks
        .iter()
        .filter_map(|block| normalize_block(block, config))
        .collect();
    tracing::debug!(
        before = document.blocks.len(),
        after = blocks.len(),
        "normalized document"
    );
    document.with_blocks(blocks)
}

/// Normalize one block, or `None` when it should be removed.
///
/// A poll is removed only when its question is blank and its option list
/// is structurally empty. A blank question with options that are all blank
/// survives with an empty option list, so a second pass would remove it.
pub fn normalize_block(block: &EditorBlock, config: &NormalizationConfig) -> Option<EditorBlock> {
    let remove_empty = config.remove_empty_blocks;
    let normalized = match block {
        EditorBlock::Paragraph(p) => {
            let chunks = normalize_chunks(&p.chunks);
            if chunks.is_empty() && !config.allow_empty_paragraphs {
                None
            } else {
                Some(p.clone().with_chunks(chunks).into())
            }
        }
        EditorBlock::Quote(q) => {
            if is_blank(&q.text) && remove_empty {
                None
            } else {
                Some(q.clone().with_text(q.text.trim()).into())
            }
        }
        EditorBlock::Heading(h) => {
            if is_blank(&h.text) && remove_empty {
                None
            } else {
                Some(h.clone().with_text(h.text.trim()).into())
            }
        }
        EditorBlock::CodeBlock(c) => {
            if is_blank(&c.code) && remove_empty {
                None
            } else {
                Some(c.clone().with_code(c.code.trim()).into())
            }
        }
        EditorBlock::Image(img) => keep_unless(is_blank(&img.url) && remove_empty, block),
        EditorBlock::Video(video) => keep_unless(is_blank(&video.url) && remove_empty, block),
        EditorBlock::Embed(embed) => keep_unless(is_blank(&embed.url) && remove_empty, block),
        EditorBlock::Poll(poll) => {
            if is_blank(&poll.question) && poll.options.is_empty() && remove_empty {
                None
            } else {
                let options = poll
                    .options
                    .iter()
                    .map(|o| o.trim())
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect();
                Some(
                    poll.clone()
                        .with_question(poll.question.trim())
                        .with_options(options)
                        .into(),
                )
            }
        }
        EditorBlock::ListBlock(list) => {
            let items: Vec<_> = list
                .items
                .iter()
                .filter(|item| !item.is_empty())
                .cloned()
                .collect();
            if items.is_empty() && remove_empty {
                None
            } else {
                Some(list.clone().with_items(items).into())
            }
        }
        EditorBlock::Table(table) => keep_unless(table.rows.is_empty() && remove_empty, block),
        EditorBlock::Divider(_) => Some(block.clone()),
    };
    if normalized.is_none() {
        tracing::trace!(kind = %block.kind(), id = %block.id(), "dropped block");
    }
    normalized
}

fn keep_unless(drop: bool, block: &EditorBlock) -> Option<EditorBlock> {
    if drop { None } else { Some(block.clone()) }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Drop degenerate chunks and merge adjacent style-equal runs.
///
/// Empty chunks are always dropped. Whitespace-only chunks survive only
/// when they carry a style (a bold space is meaningful). Merging is a single
/// left-to-right pass over directly adjacent chunks.
pub fn normalize_chunks(chunks: &[TextChunk]) -> Vec<TextChunk> {
    let mut cleaned: Vec<TextChunk> = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let keep = !chunk.text.is_empty() && (!chunk.is_blank() || chunk.has_style());
        if !keep {
            continue;
        }
        match cleaned.last_mut() {
            Some(last) if last.style_eq(chunk) => last.text.push_str(&chunk.text),
            _ => cleaned.push(chunk.clone()),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_post_types::{
        CodeBlock, Divider, Embed, EmbedService, Heading, Image, ListBlock, ListItem, ListType,
        Paragraph, Poll, Quote, StyleFlag, Table, Video,
    };

    fn bold(text: &str) -> TextChunk {
        TextChunk::styled(text, &[StyleFlag::Bold])
    }

    fn cfg() -> NormalizationConfig {
        NormalizationConfig::default()
    }

    #[test]
    fn test_merges_bold_runs_including_bold_space() {
        let chunks = vec![bold("Hello"), bold(" "), bold("World")];
        assert_eq!(normalize_chunks(&chunks), vec![bold("Hello World")]);
    }

    #[test]
    fn test_differing_styles_never_merge() {
        let chunks = vec![bold("a"), TextChunk::plain("b"), bold("c")];
        assert_eq!(normalize_chunks(&chunks), chunks);
    }

    #[test]
    fn test_drops_empty_and_unstyled_whitespace() {
        let chunks = vec![
            TextChunk::plain(""),
            TextChunk::plain("   "),
            bold(""),
            TextChunk::plain("kept"),
        ];
        assert_eq!(normalize_chunks(&chunks), vec![TextChunk::plain("kept")]);
    }

    #[test]
    fn test_keeps_styled_whitespace() {
        let space = TextChunk::plain(" ").with_link("https://a.b");
        assert_eq!(normalize_chunks(&[space.clone()]), vec![space]);
    }

    #[test]
    fn test_merge_only_joins_adjacent_runs() {
        let chunks = vec![
            TextChunk::plain("a"),
            TextChunk::plain(" "),
            TextChunk::plain("b"),
        ];
        // The unstyled space is dropped first, so "a" and "b" become adjacent.
        assert_eq!(normalize_chunks(&chunks), vec![TextChunk::plain("ab")]);
    }

    #[test]
    fn test_empty_paragraph_removed_unless_allowed() {
        let block: EditorBlock = Paragraph::text("  ").into();
        assert_eq!(normalize_block(&block, &cfg()), None);

        let allow = NormalizationConfig {
            allow_empty_paragraphs: true,
            ..cfg()
        };
        let kept = normalize_block(&block, &allow).unwrap();
        assert_eq!(kept.as_paragraph().map(|p| p.chunks.len()), Some(0));
        assert_eq!(kept.id(), block.id());
    }

    #[test]
    fn test_empty_paragraph_removed_even_when_keeping_empty_blocks() {
        let block: EditorBlock = Paragraph::new(vec![]).into();
        let keep_blocks = NormalizationConfig {
            remove_empty_blocks: false,
            allow_empty_paragraphs: false,
        };
        assert_eq!(normalize_block(&block, &keep_blocks), None);
    }

    #[test]
    fn test_text_blocks_are_trimmed() {
        let quote: EditorBlock = Quote::new("  wise words \n").into();
        let Some(EditorBlock::Quote(q)) = normalize_block(&quote, &cfg()) else {
            panic!("quote should survive");
        };
        assert_eq!(q.text, "wise words");

        let heading: EditorBlock = Heading::new(2, " Title ").into();
        let Some(EditorBlock::Heading(h)) = normalize_block(&heading, &cfg()) else {
            panic!("heading should survive");
        };
        assert_eq!(h.text, "Title");

        let code: EditorBlock = CodeBlock::new("\n  x = 1\n").into();
        let Some(EditorBlock::CodeBlock(c)) = normalize_block(&code, &cfg()) else {
            panic!("code should survive");
        };
        assert_eq!(c.code, "x = 1");
    }

    #[test]
    fn test_blank_text_blocks_follow_remove_flag() {
        let keep = NormalizationConfig {
            remove_empty_blocks: false,
            ..cfg()
        };
        for block in [
            EditorBlock::from(Quote::new(" ")),
            Heading::new(1, "").into(),
            CodeBlock::new("\t").into(),
            Image::new(" ").into(),
            Video::new("").into(),
            Embed::new("", EmbedService::Vimeo).into(),
            Table::new(vec![]).into(),
            ListBlock::new(vec![], ListType::Ordered).into(),
        ] {
            assert_eq!(normalize_block(&block, &cfg()), None, "{:?}", block.kind());
            assert!(normalize_block(&block, &keep).is_some(), "{:?}", block.kind());
        }
    }

    #[test]
    fn test_media_passes_through_unchanged() {
        let image: EditorBlock = Image::new(" https://a/b.png ").into();
        assert_eq!(normalize_block(&image, &cfg()), Some(image));
    }

    #[test]
    fn test_divider_always_kept() {
        let divider: EditorBlock = Divider::new().into();
        let keep_nothing = NormalizationConfig {
            remove_empty_blocks: true,
            allow_empty_paragraphs: false,
        };
        assert_eq!(normalize_block(&divider, &keep_nothing), Some(divider));
    }

    #[test]
    fn test_poll_options_trimmed_and_filtered() {
        let poll: EditorBlock =
            Poll::new(" Q? ", vec![" a ".into(), "  ".into(), "b".into()]).into();
        let Some(EditorBlock::Poll(p)) = normalize_block(&poll, &cfg()) else {
            panic!("poll should survive");
        };
        assert_eq!(p.question, "Q?");
        assert_eq!(p.options, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_poll_removal_requires_structurally_empty_options() {
        let empty: EditorBlock = Poll::new(" ", vec![]).into();
        assert_eq!(normalize_block(&empty, &cfg()), None);

        let blank_options: EditorBlock = Poll::new(" ", vec!["  ".into()]).into();
        let Some(EditorBlock::Poll(p)) = normalize_block(&blank_options, &cfg()) else {
            panic!("poll with a non-empty option list is kept");
        };
        assert!(p.options.is_empty());
    }

    #[test]
    fn test_list_items_without_content_are_filtered() {
        let list: EditorBlock = ListBlock::new(
            vec![
                ListItem::new(vec![]),
                ListItem::text(" "),
                ListItem::new(vec![]).with_sub_items(vec![ListItem::text("nested")]),
            ],
            ListType::Unordered,
        )
        .into();
        let Some(EditorBlock::ListBlock(l)) = normalize_block(&list, &cfg()) else {
            panic!("list should survive");
        };
        assert_eq!(l.items.len(), 2);
    }

    #[test]
    fn test_document_order_preserved() {
        let doc = PostDocument::new(vec![
            Paragraph::text("one").into(),
            Paragraph::text(" ").into(),
            Heading::new(1, "two").into(),
            Image::new("").into(),
            Divider::new().into(),
        ])
        .with_metadata("k", "v");
        let out = normalize_document(&doc, &cfg());
        let kinds: Vec<_> = out.blocks.iter().map(|b| b.kind().name()).collect();
        assert_eq!(kinds, vec!["paragraph", "heading", "divider"]);
        assert_eq!(out.metadata, doc.metadata);
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: NormalizationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, NormalizationConfig::default());
    }
}
