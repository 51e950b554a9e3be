/*
 * caption.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

/// A single timed caption entry. Timestamps use `HH:MM:SS.mmm`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionCue {
    pub start: String,
    pub end: String,
    pub text: String,
}

impl CaptionCue {
    pub fn new(start: impl Into<String>, end: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            text: text.into(),
        }
    }

    /// Build a cue from millisecond offsets.
    pub fn from_millis(start_ms: u64, end_ms: u64, text: impl Into<String>) -> Self {
        Self::new(format_timestamp(start_ms), format_timestamp(end_ms), text)
    }
}

fn default_format() -> String {
    "vtt".to_string()
}

/// Reference to a caption file plus, once materialized, its cues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionTrack {
    pub src: String,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub cues: Vec<CaptionCue>,
}

impl CaptionTrack {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            format: default_format(),
            language: None,
            label: None,
            cues: Vec::new(),
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_cues(mut self, cues: Vec<CaptionCue>) -> Self {
        self.cues = cues;
        self
    }

    /// Format is `vtt`, compared case-insensitively.
    pub fn is_vtt(&self) -> bool {
        self.format.eq_ignore_ascii_case("vtt")
    }
}

/// Format a millisecond offset as `HH:MM:SS.mmm`.
///
/// Hours are not wrapped, so offsets past 99 hours widen the field.
pub fn format_timestamp(ms: u64) -> String {
    let millis = ms % 1000;
    let total_seconds = ms / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}
