/*
 * html_export.rs
 * Copyright (c) 2025 Posit, PBC
 */

use insta::assert_snapshot;
use kindred_post_types::{
    CaptionCue, CaptionTrack, CodeBlock, Divider, EditorBlock, Embed, EmbedService, Image,
    ListBlock, ListItem, ListType, Paragraph, Poll, PostDocument, Quote, StyleFlag, Table,
    TableCell, TableRow, TextChunk, Video,
};
use kindred_render::{HtmlExportConfig, export_document_html, render, to_vtt};

fn html(block: impl Into<EditorBlock>, config: &HtmlExportConfig) -> String {
    export_document_html(&PostDocument::new(vec![block.into()]), config)
        .trim_end()
        .to_string()
}

fn defaults() -> HtmlExportConfig {
    HtmlExportConfig::default()
}

fn unstyled() -> HtmlExportConfig {
    HtmlExportConfig {
        include_inline_styles: false,
        ..HtmlExportConfig::default()
    }
}

#[test]
fn quote_with_author() {
    let quote = Quote::new("Less <is> more").with_author("Mies");
    assert_snapshot!(
        html(quote, &defaults()),
        @"<blockquote>Less &lt;is&gt; more<footer>&mdash; Mies</footer></blockquote>"
    );
}

#[test]
fn image_alt_is_optional() {
    assert_snapshot!(html(Image::new("a.png"), &defaults()), @r#"<img src="a.png" />"#);
    assert_snapshot!(
        html(Image::new("a.png").with_alt_text("A \"cat\""), &defaults()),
        @r#"<img src="a.png" alt="A &quot;cat&quot;" />"#
    );
}

#[test]
fn video_track_needs_flag_and_vtt_source() {
    let track = CaptionTrack::new("subs.vtt")
        .with_language("en")
        .with_cues(vec![CaptionCue::new("00:00:01.000", "00:00:02.000", "Hi")]);
    let video = Video::new("v.mp4").with_caption("Launch").with_track(track.clone());

    assert_snapshot!(
        html(video.clone(), &defaults()),
        @r#"<figure><video controls src="v.mp4"></video><figcaption>Launch</figcaption></figure>"#
    );

    let captions = HtmlExportConfig {
        render_closed_captions: true,
        ..defaults()
    };
    assert_snapshot!(
        html(video.clone(), &captions),
        @r#"<figure><video controls src="v.mp4"><track kind="captions" src="subs.vtt" srclang="en" label="captions" default /></video><figcaption>Launch</figcaption></figure>"#
    );

    let srt = video.clone().with_track(track.clone().with_format("srt"));
    assert!(!html(srt, &captions).contains("<track"));

    let blank = video.with_track(CaptionTrack::new("  ").with_label("English"));
    assert!(!html(blank, &captions).contains("<track"));
}

#[test]
fn code_block_language_class() {
    assert_snapshot!(
        html(CodeBlock::new("a < b && c").with_language("rust"), &defaults()),
        @r#"<pre><code class="language-rust">a &lt; b &amp;&amp; c</code></pre>"#
    );
}

#[test]
fn divider_style_follows_config() {
    let divider = Divider::new()
        .with_length_percent(80)
        .with_thickness(2)
        .with_color("#ccc");
    assert_snapshot!(
        html(divider.clone(), &defaults()),
        @r#"<hr style="width:80%; height:2px; background-color:#ccc;" />"#
    );
    assert_snapshot!(html(divider, &unstyled()), @"<hr />");
}

#[test]
fn poll_as_list_or_form() {
    let poll = Poll::new("Lunch?", vec!["Pizza".into(), "Soup & bread".into()]);
    assert_snapshot!(
        html(poll.clone(), &defaults()),
        @r#"<div class="poll"><strong>Lunch?</strong><ul><li>Pizza</li><li>Soup &amp; bread</li></ul></div>"#
    );

    let form = HtmlExportConfig {
        poll_as_list: false,
        ..defaults()
    };
    assert_snapshot!(
        html(poll.clone(), &form),
        @r#"<div class="poll"><strong>Lunch?</strong><form><label><input type="radio" name="poll" disabled /> Pizza</label><label><input type="radio" name="poll" disabled /> Soup &amp; bread</label></form></div>"#
    );
    assert!(html(poll.with_allows_multiple_answers(true), &form).contains("type=\"checkbox\""));
}

#[test]
fn nested_checklist() {
    let list = ListBlock::new(
        vec![
            ListItem::text("ship").with_checked(true).with_sub_items(vec![ListItem::text("tag")]),
            ListItem::text("announce"),
        ],
        ListType::Checklist,
    );
    assert_snapshot!(
        html(list, &defaults()),
        @r#"<ul class="checklist"><li><input type="checkbox" disabled checked /> ship<ul class="checklist"><li><input type="checkbox" disabled /> tag</li></ul></li><li><input type="checkbox" disabled /> announce</li></ul>"#
    );
}

#[test]
fn ordered_list() {
    let list = ListBlock::new(
        vec![ListItem::text("one"), ListItem::text("two")],
        ListType::Ordered,
    );
    assert_snapshot!(html(list, &defaults()), @"<ol><li>one</li><li>two</li></ol>");
}

#[test]
fn table_header_and_spans() {
    let table = Table::new(vec![
        TableRow::new(vec![TableCell::text("Name"), TableCell::text("Score")]),
        TableRow::new(vec![TableCell::text("Total").with_col_span(2)]),
    ]);
    assert_snapshot!(
        html(table.clone(), &defaults()),
        @r#"<table><tr><th>Name</th><th>Score</th></tr><tr><td colspan="2">Total</td></tr></table>"#
    );
    assert!(!html(table.with_header(false), &defaults()).contains("<th>"));
}

#[test]
fn embed_with_ratio_and_caption() {
    let embed = Embed::new("https://youtu.be/x", EmbedService::Youtube)
        .with_aspect_ratio(1.5)
        .with_caption("Demo");
    assert_snapshot!(
        html(embed.clone(), &defaults()),
        @r#"<div class="embed" style="aspect-ratio:1.5"><iframe src="https://youtu.be/x" frameborder="0" allowfullscreen></iframe><p class="embed-caption">Demo</p></div>"#
    );
    assert!(!html(embed.with_aspect_ratio(-1.0), &defaults()).contains("aspect-ratio"));
}

#[test]
fn whole_document_keeps_block_order() {
    let doc = PostDocument::new(vec![
        kindred_post_types::Heading::new(1, "Release notes").into(),
        Paragraph::new(vec![
            TextChunk::plain("Now with "),
            TextChunk::styled("tables", &[StyleFlag::Bold]),
            TextChunk::plain("."),
        ])
        .into(),
        Divider::new().into(),
    ]);
    assert_snapshot!(export_document_html(&doc, &unstyled()).trim_end(), @r"
    <h1>Release notes</h1>
    <p>Now with <strong>tables</strong>.</p>
    <hr />
    ");
}

#[test]
fn render_tree_and_vtt_agree_on_cues() {
    let track = CaptionTrack::new("subs.vtt").with_cues(vec![
        CaptionCue::from_millis(1_000, 4_000, " Hi "),
        CaptionCue::from_millis(4_000, 6_500, "Bye"),
    ]);
    let doc = PostDocument::new(vec![Video::new("v.mp4").with_track(track).into()]);
    let tree = render(&doc);
    let kindred_render::RenderElement::Video {
        track: Some(track), ..
    } = &tree.elements[0].element
    else {
        panic!("expected a video with a track");
    };
    assert_snapshot!(to_vtt(track).trim_end(), @r"
    WEBVTT

    00:00:01.000 --> 00:00:04.000
    Hi

    00:00:04.000 --> 00:00:06.500
    Bye
    ");
}
