/*
 * mentions.rs
 * Copyright (c) 2025 Posit, PBC
 */

use kindred_post_types::{EditorBlock, ListItem, PostDocument, TextChunk};
use once_cell::sync::Lazy;
use regex::Regex;

static MENTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@(\w{2,32})").unwrap_or_else(|e| panic!("invalid mention pattern: {e}"))
});

/// Find `@handle` tokens (2 to 32 word characters) in free text.
/// Handles are returned lowercased and without the `@`.
pub fn extract_mention_usernames(input: &str) -> Vec<String> {
    MENTION_RE
        .captures_iter(input)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Every mention in a post, lowercased and de-duplicated in first-seen order.
///
/// Structured mention tokens contribute their display name; all other chunk
/// text, headings and quotes are scanned for `@handle` tokens.
pub fn collect_mentions(document: &PostDocument) -> Vec<String> {
    let mut found = Vec::new();
    for block in &document.blocks {
        match block {
            EditorBlock::Paragraph(p) => scan_chunks(&p.chunks, &mut found),
            EditorBlock::Heading(h) => scan_text(&h.text, &mut found),
            EditorBlock::Quote(q) => scan_text(&q.text, &mut found),
            EditorBlock::ListBlock(list) => scan_items(&list.items, &mut found),
            EditorBlock::Table(table) => {
                for cell in table.rows.iter().flat_map(|r| r.cells.iter()) {
                    scan_chunks(&cell.chunks, &mut found);
                }
            }
            _ => {}
        }
    }
    found
}

fn push_unique(found: &mut Vec<String>, name: String) {
    if !found.contains(&name) {
        found.push(name);
    }
}

fn scan_text(text: &str, found: &mut Vec<String>) {
    for name in extract_mention_usernames(text) {
        push_unique(found, name);
    }
}

fn scan_chunks(chunks: &[TextChunk], found: &mut Vec<String>) {
    for chunk in chunks {
        match &chunk.mention {
            Some(mention) => push_unique(found, mention.display_name.to_lowercase()),
            None => scan_text(&chunk.text, found),
        }
    }
}

fn scan_items(items: &[ListItem], found: &mut Vec<String>) {
    for item in items {
        scan_chunks(&item.chunks, found);
        scan_items(&item.sub_items, found);
    }
}
