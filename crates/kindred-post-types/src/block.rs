/*
 * block.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::alignment::Alignment;
use crate::caption::CaptionTrack;
use crate::chunk::{TextChunk, plain_text};
use crate::id::BlockId;
use crate::list::ListBlock;
use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A top-level content unit of a post.
///
/// Serialized as an internally tagged object: `{"type": "Paragraph", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EditorBlock {
    Paragraph(Paragraph),
    Image(Image),
    Video(Video),
    Quote(Quote),
    CodeBlock(CodeBlock),
    Divider(Divider),
    Poll(Poll),
    Heading(Heading),
    ListBlock(ListBlock),
    Table(Table),
    Embed(Embed),
}

/// Fieldless discriminant of [`EditorBlock`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph,
    Image,
    Video,
    Quote,
    CodeBlock,
    Divider,
    Poll,
    Heading,
    List,
    Table,
    Embed,
}

impl BlockKind {
    pub const ALL: [BlockKind; 11] = [
        BlockKind::Paragraph,
        BlockKind::Image,
        BlockKind::Video,
        BlockKind::Quote,
        BlockKind::CodeBlock,
        BlockKind::Divider,
        BlockKind::Poll,
        BlockKind::Heading,
        BlockKind::List,
        BlockKind::Table,
        BlockKind::Embed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Image => "image",
            BlockKind::Video => "video",
            BlockKind::Quote => "quote",
            BlockKind::CodeBlock => "code_block",
            BlockKind::Divider => "divider",
            BlockKind::Poll => "poll",
            BlockKind::Heading => "heading",
            BlockKind::List => "list",
            BlockKind::Table => "table",
            BlockKind::Embed => "embed",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmbedService {
    Youtube,
    Vimeo,
    Twitter,
    Instagram,
    Tiktok,
    Spotify,
    #[default]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub id: BlockId,
    #[serde(default)]
    pub chunks: Vec<TextChunk>,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Paragraph {
    pub fn new(chunks: Vec<TextChunk>) -> Self {
        Self {
            id: BlockId::new(),
            chunks,
            alignment: Alignment::Auto,
        }
    }

    /// A single unstyled chunk.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![TextChunk::plain(text)])
    }

    pub fn with_chunks(mut self, chunks: Vec<TextChunk>) -> Self {
        self.chunks = chunks;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// No chunks, or only chunks with blank text.
    pub fn is_blank(&self) -> bool {
        self.chunks.iter().all(TextChunk::is_blank)
    }

    pub fn plain_text(&self) -> String {
        plain_text(&self.chunks)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub id: BlockId,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            url: url.into(),
            alt_text: None,
            alignment: Alignment::Auto,
        }
    }

    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub id: BlockId,
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub track: Option<CaptionTrack>,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Video {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            url: url.into(),
            caption: None,
            track: None,
            alignment: Alignment::Auto,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_track(mut self, track: CaptionTrack) -> Self {
        self.track = Some(track);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub id: BlockId,
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Quote {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            text: text.into(),
            author: None,
            alignment: Alignment::Auto,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub id: BlockId,
    pub code: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub alignment: Alignment,
}

impl CodeBlock {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            code: code.into(),
            language: None,
            alignment: Alignment::Auto,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Horizontal rule. `length_percent` is relative to the container width,
/// `thickness` is in pixels, `color` falls back to the theme when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Divider {
    #[serde(default)]
    pub id: BlockId,
    #[serde(default = "default_length_percent")]
    pub length_percent: u32,
    #[serde(default = "default_thickness")]
    pub thickness: u32,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub alignment: Alignment,
}

fn default_length_percent() -> u32 {
    100
}

fn default_thickness() -> u32 {
    1
}

impl Divider {
    pub fn new() -> Self {
        Self {
            id: BlockId::new(),
            length_percent: default_length_percent(),
            thickness: default_thickness(),
            color: None,
            alignment: Alignment::Auto,
        }
    }

    pub fn with_length_percent(mut self, length_percent: u32) -> Self {
        self.length_percent = length_percent;
        self
    }

    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    #[serde(default)]
    pub id: BlockId,
    pub question: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub allows_multiple_answers: bool,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Poll {
    pub fn new(question: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            id: BlockId::new(),
            question: question.into(),
            options,
            allows_multiple_answers: false,
            alignment: Alignment::Auto,
        }
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    pub fn with_allows_multiple_answers(mut self, allows: bool) -> Self {
        self.allows_multiple_answers = allows;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Section title. `level` is expected in `1..=6`; out-of-range levels are
/// representable and reported by validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    #[serde(default)]
    pub id: BlockId,
    pub level: u8,
    pub text: String,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            level,
            text: text.into(),
            alignment: Alignment::Auto,
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Embed {
    #[serde(default)]
    pub id: BlockId,
    pub url: String,
    #[serde(default)]
    pub service: EmbedService,
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub alignment: Alignment,
}

impl Embed {
    pub fn new(url: impl Into<String>, service: EmbedService) -> Self {
        Self {
            id: BlockId::new(),
            url: url.into(),
            service,
            aspect_ratio: None,
            caption: None,
            alignment: Alignment::Auto,
        }
    }

    pub fn with_aspect_ratio(mut self, ratio: f64) -> Self {
        self.aspect_ratio = Some(ratio);
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

macro_rules! block_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for EditorBlock {
                fn from(block: $variant) -> Self {
                    EditorBlock::$variant(block)
                }
            }
        )*
    };
}

block_from!(
    Paragraph, Image, Video, Quote, CodeBlock, Divider, Poll, Heading, ListBlock, Table, Embed,
);

impl EditorBlock {
    pub fn id(&self) -> BlockId {
        match self {
            EditorBlock::Paragraph(b) => b.id,
            EditorBlock::Image(b) => b.id,
            EditorBlock::Video(b) => b.id,
            EditorBlock::Quote(b) => b.id,
            EditorBlock::CodeBlock(b) => b.id,
            EditorBlock::Divider(b) => b.id,
            EditorBlock::Poll(b) => b.id,
            EditorBlock::Heading(b) => b.id,
            EditorBlock::ListBlock(b) => b.id,
            EditorBlock::Table(b) => b.id,
            EditorBlock::Embed(b) => b.id,
        }
    }

    pub fn alignment(&self) -> Alignment {
        match self {
            EditorBlock::Paragraph(b) => b.alignment,
            EditorBlock::Image(b) => b.alignment,
            EditorBlock::Video(b) => b.alignment,
            EditorBlock::Quote(b) => b.alignment,
            EditorBlock::CodeBlock(b) => b.alignment,
            EditorBlock::Divider(b) => b.alignment,
            EditorBlock::Poll(b) => b.alignment,
            EditorBlock::Heading(b) => b.alignment,
            EditorBlock::ListBlock(b) => b.alignment,
            EditorBlock::Table(b) => b.alignment,
            EditorBlock::Embed(b) => b.alignment,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            EditorBlock::Paragraph(_) => BlockKind::Paragraph,
            EditorBlock::Image(_) => BlockKind::Image,
            EditorBlock::Video(_) => BlockKind::Video,
            EditorBlock::Quote(_) => BlockKind::Quote,
            EditorBlock::CodeBlock(_) => BlockKind::CodeBlock,
            EditorBlock::Divider(_) => BlockKind::Divider,
            EditorBlock::Poll(_) => BlockKind::Poll,
            EditorBlock::Heading(_) => BlockKind::Heading,
            EditorBlock::ListBlock(_) => BlockKind::List,
            EditorBlock::Table(_) => BlockKind::Table,
            EditorBlock::Embed(_) => BlockKind::Embed,
        }
    }

    /// Same block with a new alignment; the identifier is kept.
    pub fn with_alignment(self, alignment: Alignment) -> Self {
        match self {
            EditorBlock::Paragraph(b) => b.with_alignment(alignment).into(),
            EditorBlock::Image(b) => b.with_alignment(alignment).into(),
            EditorBlock::Video(b) => b.with_alignment(alignment).into(),
            EditorBlock::Quote(b) => b.with_alignment(alignment).into(),
            EditorBlock::CodeBlock(b) => b.with_alignment(alignment).into(),
            EditorBlock::Divider(b) => b.with_alignment(alignment).into(),
            EditorBlock::Poll(b) => b.with_alignment(alignment).into(),
            EditorBlock::Heading(b) => b.with_alignment(alignment).into(),
            EditorBlock::ListBlock(b) => b.with_alignment(alignment).into(),
            EditorBlock::Table(b) => b.with_alignment(alignment).into(),
            EditorBlock::Embed(b) => b.with_alignment(alignment).into(),
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            EditorBlock::Paragraph(p) => Some(p),
            _ => None,
        }
    }
}

/// Only two paragraphs can be merged.
pub fn is_mergeable(a: &EditorBlock, b: &EditorBlock) -> bool {
    matches!((a, b), (EditorBlock::Paragraph(_), EditorBlock::Paragraph(_)))
}
