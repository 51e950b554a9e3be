/*
 * chunk.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde::{Deserialize, Serialize};

/// A toggleable boolean inline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleFlag {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Highlight,
}

impl StyleFlag {
    pub const ALL: [StyleFlag; 5] = [
        StyleFlag::Bold,
        StyleFlag::Italic,
        StyleFlag::Underline,
        StyleFlag::Strikethrough,
        StyleFlag::Highlight,
    ];
}

/// A user mention carried by a chunk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentionToken {
    pub user_id: String,
    pub display_name: String,
}

impl MentionToken {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
        }
    }
}

/// An inline emoji carried by a chunk.
///
/// `shortcode` is the textual form (e.g. `:smile:`), `url` points at the
/// image used when emoji are rendered as pictures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmojiToken {
    pub shortcode: String,
    pub name: String,
    pub url: String,
}

impl EmojiToken {
    pub fn new(
        shortcode: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            shortcode: shortcode.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// An inline span of styled text.
///
/// Plain text is the case where every flag is false and every optional
/// field is absent. Two chunks are style-equal when everything except the
/// text matches; see [`TextChunk::style_eq`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextChunk {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub highlight: bool,
    pub color: Option<String>,
    pub font_size: Option<u32>,
    pub link: Option<String>,
    pub mention: Option<MentionToken>,
    pub emoji: Option<EmojiToken>,
}

pub type Chunks = Vec<TextChunk>;

impl TextChunk {
    /// An unstyled chunk.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A chunk with the given boolean styles switched on.
    pub fn styled(text: impl Into<String>, flags: &[StyleFlag]) -> Self {
        flags
            .iter()
            .fold(Self::plain(text), |chunk, &flag| chunk.with_flag(flag, true))
    }

    pub fn flag(&self, flag: StyleFlag) -> bool {
        match flag {
            StyleFlag::Bold => self.bold,
            StyleFlag::Italic => self.italic,
            StyleFlag::Underline => self.underline,
            StyleFlag::Strikethrough => self.strikethrough,
            StyleFlag::Highlight => self.highlight,
        }
    }

    pub fn with_flag(mut self, flag: StyleFlag, value: bool) -> Self {
        match flag {
            StyleFlag::Bold => self.bold = value,
            StyleFlag::Italic => self.italic = value,
            StyleFlag::Underline => self.underline = value,
            StyleFlag::Strikethrough => self.strikethrough = value,
            StyleFlag::Highlight => self.highlight = value,
        }
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_mention(mut self, mention: MentionToken) -> Self {
        self.mention = Some(mention);
        self
    }

    pub fn with_emoji(mut self, emoji: EmojiToken) -> Self {
        self.emoji = Some(emoji);
        self
    }

    /// True when at least one flag or optional field is set.
    pub fn has_style(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.strikethrough
            || self.highlight
            || self.color.is_some()
            || self.font_size.is_some()
            || self.link.is_some()
            || self.mention.is_some()
            || self.emoji.is_some()
    }

    pub fn is_plain(&self) -> bool {
        !self.has_style()
    }

    /// Every flag and optional field matches; text is ignored.
    pub fn style_eq(&self, other: &TextChunk) -> bool {
        self.bold == other.bold
            && self.italic == other.italic
            && self.underline == other.underline
            && self.strikethrough == other.strikethrough
            && self.highlight == other.highlight
            && self.color == other.color
            && self.font_size == other.font_size
            && self.link == other.link
            && self.mention == other.mention
            && self.emoji == other.emoji
    }

    /// Empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Concatenated text of a chunk sequence, ignoring all formatting.
pub fn plain_text(chunks: &[TextChunk]) -> String {
    chunks.iter().map(|c| c.text.as_str()).collect()
}
