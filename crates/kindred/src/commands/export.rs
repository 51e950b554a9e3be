/*
 * export.rs
 * Copyright (c) 2025 Posit, PBC
 */

use anyhow::{Result, bail};
use kindred_post_types::{EditorBlock, PostDocument};
use kindred_render::{HtmlExportConfig, export_html, render, to_vtt};

pub fn html(document: &PostDocument, config: &HtmlExportConfig) -> String {
    let tree = render(document);
    let html = export_html(&tree, config);
    tracing::info!(blocks = tree.len(), "exported html");
    html
}

/// WebVTT for a video's caption track.
///
/// With `index`, the block at that position must be a video carrying a
/// track; otherwise the first video with a track is used.
pub fn vtt(document: &PostDocument, index: Option<usize>) -> Result<String> {
    let track = match index {
        Some(index) => match document.blocks.get(index) {
            Some(EditorBlock::Video(video)) => match &video.track {
                Some(track) => track,
                None => bail!("Video at block {} has no caption track", index),
            },
            Some(other) => bail!("Block {} is a {}, not a video", index, other.kind()),
            None => bail!(
                "Block index {} is out of range for a document of {} blocks",
                index,
                document.len()
            ),
        },
        None => match document.blocks.iter().find_map(|block| match block {
            EditorBlock::Video(video) => video.track.as_ref(),
            _ => None,
        }) {
            Some(track) => track,
            None => bail!("Document has no video with a caption track"),
        },
    };
    tracing::info!(cues = track.cues.len(), src = %track.src, "exported webvtt");
    Ok(to_vtt(track))
}
