/*
 * metrics.rs
 * Copyright (c) 2025 Posit, PBC
 */

use kindred_post_types::{EditorBlock, ListItem, PostDocument, TextChunk};
use serde::{Deserialize, Serialize};

/// Aggregate counts over a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetrics {
    pub total_words: usize,
    pub total_chars: usize,
    pub block_count: usize,
    pub image_count: usize,
    pub video_count: usize,
    pub mention_count: usize,
    pub emoji_count: usize,
    pub link_count: usize,
    pub has_poll: bool,
    pub has_code: bool,
    pub has_quote: bool,
}

impl PostMetrics {
    fn add_text(&mut self, text: &str) {
        self.total_chars += text.chars().count();
        self.total_words += text.split_whitespace().count();
    }

    fn add_chunk(&mut self, chunk: &TextChunk) {
        self.add_text(&chunk.text);
        self.mention_count += usize::from(chunk.mention.is_some());
        self.emoji_count += usize::from(chunk.emoji.is_some());
        self.link_count += usize::from(chunk.link.is_some());
    }

    fn add_chunks(&mut self, chunks: &[TextChunk]) {
        chunks.iter().for_each(|c| self.add_chunk(c));
    }

    fn add_list_items(&mut self, items: &[ListItem]) {
        for item in items {
            self.add_chunks(&item.chunks);
            self.add_list_items(&item.sub_items);
        }
    }
}

/// Count words and characters across paragraph, heading, quote, list item
/// and table cell text, along with media, mentions, emoji and links.
///
/// Words are whitespace-delimited within each chunk, so a word split across
/// two chunks counts twice.
pub fn analyze(document: &PostDocument) -> PostMetrics {
    let mut metrics = PostMetrics {
        block_count: document.blocks.len(),
        ..PostMetrics::default()
    };

    for block in &document.blocks {
        match block {
            EditorBlock::Paragraph(p) => metrics.add_chunks(&p.chunks),
            EditorBlock::Heading(h) => metrics.add_text(&h.text),
            EditorBlock::Quote(q) => {
                metrics.has_quote = true;
                metrics.add_text(&q.text);
            }
            EditorBlock::Image(_) => metrics.image_count += 1,
            EditorBlock::Video(_) => metrics.video_count += 1,
            EditorBlock::Poll(_) => metrics.has_poll = true,
            EditorBlock::CodeBlock(_) => metrics.has_code = true,
            EditorBlock::ListBlock(list) => metrics.add_list_items(&list.items),
            EditorBlock::Table(table) => {
                for cell in table.rows.iter().flat_map(|row| row.cells.iter()) {
                    metrics.add_chunks(&cell.chunks);
                }
            }
            EditorBlock::Embed(_) | EditorBlock::Divider(_) => {}
        }
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_post_types::{
        CodeBlock, EmojiToken, Heading, Image, ListBlock, ListType, MentionToken, Paragraph,
        Poll, Quote, Table, TableCell, TableRow, Video,
    };

    #[test]
    fn test_empty_document() {
        assert_eq!(analyze(&PostDocument::default()), PostMetrics::default());
    }

    #[test]
    fn test_counts_words_and_chars() {
        let doc = PostDocument::new(vec![
            Paragraph::new(vec![
                TextChunk::plain("  Hello   world "),
                TextChunk::plain("\t"),
            ])
            .into(),
            Heading::new(1, "Big title").into(),
            Quote::new("Less is more").into(),
        ]);
        let metrics = analyze(&doc);
        assert_eq!(metrics.total_words, 7);
        assert_eq!(metrics.total_chars, 17 + 9 + 12);
        assert!(metrics.has_quote);
        assert_eq!(metrics.block_count, 3);
    }

    #[test]
    fn test_counts_media_and_inline_tokens() {
        let doc = PostDocument::new(vec![
            Image::new("a").into(),
            Image::new("b").into(),
            Video::new("c").into(),
            Poll::new("q", vec![]).into(),
            CodeBlock::new("x").into(),
            Paragraph::new(vec![
                TextChunk::plain("@ann").with_mention(MentionToken::new("1", "ann")),
                TextChunk::plain("site").with_link("https://x"),
                TextChunk::plain("")
                    .with_emoji(EmojiToken::new(":star:", "Star", "https://e/star.png")),
            ])
            .into(),
        ]);
        let metrics = analyze(&doc);
        assert_eq!(metrics.image_count, 2);
        assert_eq!(metrics.video_count, 1);
        assert_eq!(metrics.mention_count, 1);
        assert_eq!(metrics.link_count, 1);
        assert_eq!(metrics.emoji_count, 1);
        assert!(metrics.has_poll);
        assert!(metrics.has_code);
        assert!(!metrics.has_quote);
    }

    #[test]
    fn test_nested_list_items_and_table_cells_count() {
        let doc = PostDocument::new(vec![
            ListBlock::new(
                vec![ListItem::text("one").with_sub_items(vec![ListItem::text("two three")])],
                ListType::Unordered,
            )
            .into(),
            Table::new(vec![TableRow::new(vec![
                TableCell::text("four"),
                TableCell::text("five"),
            ])])
            .into(),
        ]);
        assert_eq!(analyze(&doc).total_words, 5);
    }

    #[test]
    fn test_metrics_json_shape() {
        let json = serde_json::to_value(analyze(&PostDocument::default())).unwrap();
        assert_eq!(json["totalWords"], 0);
        assert_eq!(json["hasPoll"], false);
    }
}
