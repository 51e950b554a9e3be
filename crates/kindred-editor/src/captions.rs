/*
 * captions.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Caption generation seam.
//!
//! Speech-to-text lives outside this crate. Callers implement
//! [`CaptionGenerator`] for whatever provider they use; the editor only
//! awaits the result. Dropping the future cancels the request and leaves
//! no partial state behind.

use async_trait::async_trait;
use kindred_post_types::{CaptionTrack, Video};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptionError {
    #[error("caption generation failed for {video_url}: {reason}")]
    Failed { video_url: String, reason: String },

    #[error("unsupported video source: {0}")]
    Unsupported(String),

    #[error("caption generation was cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, CaptionError>;

/// Produces a caption track for a video.
#[async_trait]
pub trait CaptionGenerator: Send + Sync {
    async fn generate_captions(&self, video_url: &str) -> Result<CaptionTrack>;
}

/// Returns a placeholder track without doing any work.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCaptionGenerator;

#[async_trait]
impl CaptionGenerator for NoOpCaptionGenerator {
    async fn generate_captions(&self, _video_url: &str) -> Result<CaptionTrack> {
        Ok(CaptionTrack::new("about:blank")
            .with_format("vtt")
            .with_label("No Captions"))
    }
}

/// Generate captions for `video` and return a copy carrying the new track.
///
/// Errors are passed through unchanged; `video` itself is never touched.
pub async fn attach_captions<G>(generator: &G, video: &Video) -> Result<Video>
where
    G: CaptionGenerator + ?Sized,
{
    tracing::debug!(url = %video.url, "generating captions");
    let track = generator.generate_captions(&video.url).await?;
    tracing::debug!(cues = track.cues.len(), src = %track.src, "captions generated");
    Ok(video.clone().with_track(track))
}
