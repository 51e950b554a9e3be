/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Post document type definitions for the Kindred editor.
 *
 * This crate provides pure data type definitions for a block-structured
 * rich-text post: the block variants, inline styled chunks, lists, tables,
 * caption tracks and the document container. All values are immutable in
 * spirit: updates go through `with_*` builders that return a new value.
 * The JSON boundary lives in [`codec`].
 */

pub mod alignment;
pub mod block;
pub mod caption;
pub mod chunk;
pub mod codec;
pub mod document;
pub mod id;
pub mod list;
pub mod table;

// Re-export commonly used types at the crate root
pub use alignment::Alignment;
pub use block::{
    BlockKind, CodeBlock, Divider, EditorBlock, Embed, EmbedService, Heading, Image, Paragraph,
    Poll, Quote, Video, is_mergeable,
};
pub use caption::{CaptionCue, CaptionTrack, format_timestamp};
pub use chunk::{Chunks, EmojiToken, MentionToken, StyleFlag, TextChunk, plain_text};
pub use codec::{CodecError, decode, decode_from_reader, encode, encode_compact, encode_to_writer};
pub use document::{Metadata, PostDocument};
pub use id::BlockId;
pub use list::{ListBlock, ListItem, ListType};
pub use table::{Table, TableCell, TableRow};
