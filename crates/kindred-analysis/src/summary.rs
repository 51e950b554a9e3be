/*
 * summary.rs
 * Copyright (c) 2025 Posit, PBC
 */

use kindred_post_types::{EditorBlock, PostDocument};
use serde::{Deserialize, Serialize};

/// Maximum snippet length, in characters.
pub const SNIPPET_LENGTH: usize = 160;

/// Preview data for feeds and link cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub title: Option<String>,
    pub plain_text_snippet: String,
    pub first_image_url: Option<String>,
    pub first_video_url: Option<String>,
    pub contains_poll: bool,
}

/// Build a preview from the first non-empty paragraph, first image, first
/// video and poll presence. Stops scanning once all four are known.
pub fn summarize(document: &PostDocument, title: Option<&str>) -> PostSummary {
    let mut snippet: Option<String> = None;
    let mut image: Option<String> = None;
    let mut video: Option<String> = None;
    let mut contains_poll = false;

    for block in &document.blocks {
        match block {
            EditorBlock::Paragraph(p) if snippet.is_none() => {
                let joined = p
                    .chunks
                    .iter()
                    .map(|c| c.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let raw = joined.trim();
                if !raw.is_empty() {
                    snippet = Some(raw.chars().take(SNIPPET_LENGTH).collect());
                }
            }
            EditorBlock::Image(img) if image.is_none() => image = Some(img.url.clone()),
            EditorBlock::Video(v) if video.is_none() => video = Some(v.url.clone()),
            EditorBlock::Poll(_) => contains_poll = true,
            _ => {}
        }

        if snippet.is_some() && image.is_some() && video.is_some() && contains_poll {
            break;
        }
    }

    PostSummary {
        title: title.map(str::to_string),
        plain_text_snippet: snippet.unwrap_or_default(),
        first_image_url: image,
        first_video_url: video,
        contains_poll,
    }
}
