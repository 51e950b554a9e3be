/*
 * vtt.rs
 * Copyright (c) 2025 Posit, PBC
 */

use kindred_post_types::{CaptionCue, CaptionTrack};
use std::fmt::Write;

/// Accumulates cues and emits a WebVTT file.
#[derive(Debug, Clone, Default)]
pub struct WebVttBuilder {
    cues: Vec<CaptionCue>,
}

impl WebVttBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cue(
        &mut self,
        start: impl Into<String>,
        end: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut Self {
        self.cues.push(CaptionCue::new(start, end, text));
        self
    }

    /// Add a cue from millisecond offsets.
    pub fn add_cue_millis(&mut self, start_ms: u64, end_ms: u64, text: impl Into<String>) -> &mut Self {
        self.cues.push(CaptionCue::from_millis(start_ms, end_ms, text));
        self
    }

    pub fn extend(&mut self, cues: impl IntoIterator<Item = CaptionCue>) -> &mut Self {
        self.cues.extend(cues);
        self
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Header, then one `start --> end` line and trimmed text per cue,
    /// each followed by a blank line.
    pub fn build(&self) -> String {
        let mut out = String::from("WEBVTT\n\n");
        for cue in &self.cues {
            // Writing into a String cannot fail.
            let _ = write!(out, "{} --> {}\n{}\n\n", cue.start, cue.end, cue.text.trim());
        }
        tracing::debug!(cues = self.cues.len(), "built webvtt");
        out
    }
}

/// Export a track's cues as WebVTT.
pub fn to_vtt(track: &CaptionTrack) -> String {
    let mut builder = WebVttBuilder::new();
    builder.extend(track.cues.iter().cloned());
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cue() {
        let track = CaptionTrack::new("captions.vtt").with_cues(vec![CaptionCue::new(
            "00:00:01.000",
            "00:00:04.000",
            "Hi",
        )]);
        assert_eq!(
            to_vtt(&track),
            "WEBVTT\n\n00:00:01.000 --> 00:00:04.000\nHi\n\n"
        );
    }

    #[test]
    fn test_empty_track_is_header_only() {
        assert_eq!(to_vtt(&CaptionTrack::new("x.vtt")), "WEBVTT\n\n");
    }

    #[test]
    fn test_builder_trims_and_keeps_order() {
        let mut builder = WebVttBuilder::new();
        builder
            .add_cue_millis(0, 1_500, "  first ")
            .add_cue("00:00:02.000", "00:00:03.250", "second\n");
        assert_eq!(builder.len(), 2);
        assert_eq!(
            builder.build(),
            "WEBVTT\n\n00:00:00.000 --> 00:00:01.500\nfirst\n\n00:00:02.000 --> 00:00:03.250\nsecond\n\n"
        );
    }
}
