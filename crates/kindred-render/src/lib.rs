/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Presentation layer for Kindred posts.
//!
//! A [`PostDocument`](kindred_post_types::PostDocument) is first lowered to a
//! format-agnostic [`RenderTree`], which the HTML writer then serializes.
//! Caption tracks are exported separately as WebVTT.

pub mod emoji;
pub mod html;
pub mod tree;
pub mod vtt;

pub use emoji::{KnownEmoji, all_emoji, lookup_emoji};
pub use html::{HtmlExportConfig, export_document_html, export_html};
pub use tree::{
    RenderBlock, RenderCell, RenderElement, RenderListItem, RenderTree, heading_font_size, render,
};
pub use vtt::{WebVttBuilder, to_vtt};
