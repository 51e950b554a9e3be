/*
 * html.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::emoji::lookup_emoji;
use crate::tree::{RenderBlock, RenderCell, RenderElement, RenderListItem, RenderTree, render};
use kindred_post_types::{Alignment, CaptionTrack, ListType, PostDocument, TextChunk};
use serde::{Deserialize, Serialize};
use std::io::Write;

// =============================================================================
// Configuration and Context
// =============================================================================

/// Options for HTML export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlExportConfig {
    /// Add `target="_blank"` to links
    pub open_links_in_new_tab: bool,
    /// Emit `style` attributes for font size, color, highlight and alignment
    pub include_inline_styles: bool,
    /// Render emoji as their shortcode instead of an `<img>`
    pub emoji_as_text: bool,
    /// Added to every heading level; the result is clamped to 1..=6
    pub heading_level_offset: i32,
    /// Emit a `<track>` for videos carrying a WebVTT caption track
    pub render_closed_captions: bool,
    /// Render polls as a plain list rather than a disabled form
    pub poll_as_list: bool,
}

impl Default for HtmlExportConfig {
    fn default() -> Self {
        Self {
            open_links_in_new_tab: true,
            include_inline_styles: true,
            emoji_as_text: true,
            heading_level_offset: 0,
            render_closed_captions: false,
            poll_as_list: true,
        }
    }
}

/// Writer plus configuration, threaded through every write function.
struct HtmlWriterContext<'cfg, W: Write> {
    writer: W,
    config: &'cfg HtmlExportConfig,
}

impl<W: Write> Write for HtmlWriterContext<'_, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

impl<'cfg, W: Write> HtmlWriterContext<'cfg, W> {
    fn new(writer: W, config: &'cfg HtmlExportConfig) -> Self {
        Self { writer, config }
    }

    fn inline_styles(&self) -> bool {
        self.config.include_inline_styles
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Escape text content.
fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Escape a double-quoted attribute value.
fn escape_attr(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn heading_tag_level(level: u8, offset: i32) -> i32 {
    i32::from(level).saturating_add(offset).clamp(1, 6)
}

/// ` style="text-align:..."` for non-auto alignment.
fn write_alignment<W: Write>(
    alignment: Alignment,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> std::io::Result<()> {
    if !ctx.inline_styles() {
        return Ok(());
    }
    if let Some(value) = alignment.css_value() {
        write!(ctx, " style=\"text-align:{}\"", value)?;
    }
    Ok(())
}

// =============================================================================
// Inline writing
// =============================================================================

/// Write one chunk. Nesting from the inside out is `s`, `u`, `em`,
/// `strong`, then the link. A mention replaces the formatted text, an emoji
/// is appended after it, and a style span encloses everything.
fn write_inline<W: Write>(
    chunk: &TextChunk,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> std::io::Result<()> {
    let mut styles = Vec::new();
    if ctx.inline_styles() {
        if let Some(size) = chunk.font_size {
            styles.push(format!("font-size:{}px", size));
        }
        if let Some(color) = &chunk.color {
            styles.push(format!("color:{}", escape_attr(color)));
        }
        if chunk.highlight {
            styles.push("background-color:yellow".to_string());
        }
    }
    if !styles.is_empty() {
        write!(ctx, "<span style=\"{}\">", styles.join(";"))?;
    }

    match &chunk.mention {
        Some(mention) => {
            write!(
                ctx,
                "<span class=\"mention\">@{}</span>",
                escape_html(&mention.display_name)
            )?;
        }
        None => write_formatted_text(chunk, ctx)?,
    }

    if let Some(emoji) = &chunk.emoji {
        let url = if emoji.url.trim().is_empty() {
            lookup_emoji(&emoji.shortcode).map(|known| known.url)
        } else {
            Some(emoji.url.as_str())
        };
        match url {
            Some(url) if !ctx.config.emoji_as_text => write!(
                ctx,
                " <img class=\"emoji\" src=\"{}\" alt=\"{}\" />",
                escape_attr(url),
                escape_attr(&emoji.shortcode)
            )?,
            _ => write!(ctx, " {}", escape_html(&emoji.shortcode))?,
        }
    }

    if !styles.is_empty() {
        write!(ctx, "</span>")?;
    }
    Ok(())
}

fn write_formatted_text<W: Write>(
    chunk: &TextChunk,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> std::io::Result<()> {
    if let Some(link) = &chunk.link {
        write!(ctx, "<a href=\"{}\"", escape_attr(link))?;
        if ctx.config.open_links_in_new_tab {
            write!(ctx, " target=\"_blank\"")?;
        }
        write!(ctx, ">")?;
    }

    let tags = [
        (chunk.bold, "strong"),
        (chunk.italic, "em"),
        (chunk.underline, "u"),
        (chunk.strikethrough, "s"),
    ];
    for (_, tag) in tags.iter().filter(|(on, _)| *on) {
        write!(ctx, "<{}>", tag)?;
    }
    write!(ctx, "{}", escape_html(&chunk.text))?;
    for (_, tag) in tags.iter().rev().filter(|(on, _)| *on) {
        write!(ctx, "</{}>", tag)?;
    }

    if chunk.link.is_some() {
        write!(ctx, "</a>")?;
    }
    Ok(())
}

fn write_inlines<W: Write>(
    chunks: &[TextChunk],
    ctx: &mut HtmlWriterContext<'_, W>,
) -> std::io::Result<()> {
    for chunk in chunks {
        write_inline(chunk, ctx)?;
    }
    Ok(())
}

// =============================================================================
// Block writing
// =============================================================================

fn write_block<W: Write>(
    block: &RenderBlock,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> std::io::Result<()> {
    match &block.element {
        RenderElement::Paragraph { inlines } => {
            write!(ctx, "<p")?;
            write_alignment(block.alignment, ctx)?;
            write!(ctx, ">")?;
            write_inlines(inlines, ctx)?;
            writeln!(ctx, "</p>")?;
        }
        RenderElement::Heading { level, text, .. } => {
            let level = heading_tag_level(*level, ctx.config.heading_level_offset);
            write!(ctx, "<h{}", level)?;
            write_alignment(block.alignment, ctx)?;
            writeln!(ctx, ">{}</h{}>", escape_html(text), level)?;
        }
        RenderElement::Quote { text, author } => {
            write!(ctx, "<blockquote>{}", escape_html(text))?;
            if let Some(author) = author {
                write!(ctx, "<footer>&mdash; {}</footer>", escape_html(author))?;
            }
            writeln!(ctx, "</blockquote>")?;
        }
        RenderElement::Image { url, alt_text } => {
            write!(ctx, "<img src=\"{}\"", escape_attr(url))?;
            if let Some(alt) = alt_text {
                write!(ctx, " alt=\"{}\"", escape_attr(alt))?;
            }
            writeln!(ctx, " />")?;
        }
        RenderElement::Video {
            url,
            caption,
            track,
        } => {
            write!(ctx, "<figure><video controls src=\"{}\">", escape_attr(url))?;
            if let Some(track) = track {
                write_caption_track(track, ctx)?;
            }
            write!(ctx, "</video>")?;
            if let Some(caption) = caption.as_deref().filter(|c| !c.trim().is_empty()) {
                write!(ctx, "<figcaption>{}</figcaption>", escape_html(caption))?;
            }
            writeln!(ctx, "</figure>")?;
        }
        RenderElement::Code { code, language } => {
            write!(ctx, "<pre><code")?;
            if let Some(language) = language {
                write!(ctx, " class=\"language-{}\"", escape_attr(language))?;
            }
            writeln!(ctx, ">{}</code></pre>", escape_html(code))?;
        }
        RenderElement::Divider {
            length_percent,
            thickness,
            color,
        } => {
            write!(ctx, "<hr")?;
            if ctx.inline_styles() {
                write!(
                    ctx,
                    " style=\"width:{}%; height:{}px;",
                    length_percent, thickness
                )?;
                if let Some(color) = color {
                    write!(ctx, " background-color:{};", escape_attr(color))?;
                }
                write!(ctx, "\"")?;
            }
            writeln!(ctx, " />")?;
        }
        RenderElement::Poll {
            question,
            options,
            allows_multiple,
        } => write_poll(question, options, *allows_multiple, ctx)?,
        RenderElement::List { list_type, items } => {
            write_list(*list_type, items, ctx)?;
            writeln!(ctx)?;
        }
        RenderElement::Table { rows, has_header } => {
            write!(ctx, "<table>")?;
            for (index, row) in rows.iter().enumerate() {
                write_table_row(row, ctx, *has_header && index == 0)?;
            }
            writeln!(ctx, "</table>")?;
        }
        RenderElement::Embed {
            url,
            aspect_ratio,
            caption,
            ..
        } => {
            write!(ctx, "<div class=\"embed\"")?;
            if ctx.inline_styles() {
                if let Some(ratio) = aspect_ratio.filter(|r| *r > 0.0) {
                    write!(ctx, " style=\"aspect-ratio:{}\"", ratio)?;
                }
            }
            write!(
                ctx,
                "><iframe src=\"{}\" frameborder=\"0\" allowfullscreen></iframe>",
                escape_attr(url)
            )?;
            if let Some(caption) = caption.as_deref().filter(|c| !c.trim().is_empty()) {
                write!(ctx, "<p class=\"embed-caption\">{}</p>", escape_html(caption))?;
            }
            writeln!(ctx, "</div>")?;
        }
    }
    Ok(())
}

fn write_caption_track<W: Write>(
    track: &CaptionTrack,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> std::io::Result<()> {
    if !ctx.config.render_closed_captions || !track.is_vtt() || track.src.trim().is_empty() {
        return Ok(());
    }
    write!(
        ctx,
        "<track kind=\"captions\" src=\"{}\"",
        escape_attr(&track.src)
    )?;
    if let Some(language) = &track.language {
        write!(ctx, " srclang=\"{}\"", escape_attr(language))?;
    }
    write!(
        ctx,
        " label=\"{}\" default />",
        escape_attr(track.label.as_deref().unwrap_or("captions"))
    )?;
    Ok(())
}

fn write_poll<W: Write>(
    question: &str,
    options: &[String],
    allows_multiple: bool,
    ctx: &mut HtmlWriterContext<'_, W>,
) -> std::io::Result<()> {
    write!(
        ctx,
        "<div class=\"poll\"><strong>{}</strong>",
        escape_html(question)
    )?;
    if ctx.config.poll_as_list {
        write!(ctx, "<ul>")?;
        for option in options {
            write!(ctx, "<li>{}</li>", escape_html(option))?;
        }
        write!(ctx, "</ul>")?;
    } else {
        let input = if allows_multiple { "checkbox" } else { "radio" };
        write!(ctx, "<form>")?;
        for option in options {
            write!(
                ctx,
                "<label><input type=\"{}\" name=\"poll\" disabled /> {}</label>",
                input,
                escape_html(option)
            )?;
        }
        write!(ctx, "</form>")?;
    }
    writeln!(ctx, "</div>")?;
    Ok(())
}

/// Nested items reuse the parent's list tag.
fn write_list<W: Write>(
    list_type: ListType,
    items: &[RenderListItem],
    ctx: &mut HtmlWriterContext<'_, W>,
) -> std::io::Result<()> {
    match list_type {
        ListType::Unordered => write!(ctx, "<ul>")?,
        ListType::Ordered => write!(ctx, "<ol>")?,
        ListType::Checklist => write!(ctx, "<ul class=\"checklist\">")?,
    }
    for item in items {
        write!(ctx, "<li>")?;
        if list_type == ListType::Checklist {
            write!(ctx, "<input type=\"checkbox\" disabled")?;
            if item.checked == Some(true) {
                write!(ctx, " checked")?;
            }
            write!(ctx, " /> ")?;
        }
        write_inlines(&item.inlines, ctx)?;
        if !item.children.is_empty() {
            write_list(list_type, &item.children, ctx)?;
        }
        write!(ctx, "</li>")?;
    }
    match list_type {
        ListType::Ordered => write!(ctx, "</ol>")?,
        ListType::Unordered | ListType::Checklist => write!(ctx, "</ul>")?,
    }
    Ok(())
}

fn write_table_row<W: Write>(
    row: &[RenderCell],
    ctx: &mut HtmlWriterContext<'_, W>,
    is_header: bool,
) -> std::io::Result<()> {
    write!(ctx, "<tr>")?;
    for cell in row {
        let tag = if is_header { "th" } else { "td" };
        write!(ctx, "<{}", tag)?;
        if cell.col_span > 1 {
            write!(ctx, " colspan=\"{}\"", cell.col_span)?;
        }
        if cell.row_span > 1 {
            write!(ctx, " rowspan=\"{}\"", cell.row_span)?;
        }
        write!(ctx, ">")?;
        write_inlines(&cell.inlines, ctx)?;
        write!(ctx, "</{}>", tag)?;
    }
    write!(ctx, "</tr>")?;
    Ok(())
}

// =============================================================================
// Public API
// =============================================================================

/// Write a render tree as HTML, one fragment per line.
pub fn write<W: Write>(
    tree: &RenderTree,
    writer: W,
    config: &HtmlExportConfig,
) -> std::io::Result<()> {
    let mut ctx = HtmlWriterContext::new(writer, config);
    for block in &tree.elements {
        write_block(block, &mut ctx)?;
    }
    ctx.flush()
}

/// Render a render tree to an HTML string.
pub fn export_html(tree: &RenderTree, config: &HtmlExportConfig) -> String {
    let mut buf = Vec::new();
    if let Err(err) = write(tree, &mut buf, config) {
        tracing::warn!(error = %err, "html export stopped early");
    }
    tracing::debug!(blocks = tree.len(), bytes = buf.len(), "exported html");
    String::from_utf8_lossy(&buf).into_owned()
}

/// Convenience wrapper: render the document, then export it.
pub fn export_document_html(document: &PostDocument, config: &HtmlExportConfig) -> String {
    export_html(&render(document), config)
}
