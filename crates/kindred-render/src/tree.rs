/*
 * tree.rs
 * Copyright (c) 2025 Posit, PBC
 */

use kindred_post_types::{
    Alignment, CaptionTrack, EditorBlock, EmbedService, ListItem, ListType, PostDocument,
    TableRow, TextChunk,
};
use serde::Serialize;

/// Format-neutral view of a post, one element per block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderTree {
    pub elements: Vec<RenderBlock>,
}

impl RenderTree {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderBlock {
    pub alignment: Alignment,
    pub element: RenderElement,
}

/// Inline content is carried as styled chunks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderElement {
    Paragraph {
        inlines: Vec<TextChunk>,
    },
    Heading {
        level: u8,
        text: String,
        font_size_hint: u32,
    },
    Quote {
        text: String,
        author: Option<String>,
    },
    Image {
        url: String,
        alt_text: Option<String>,
    },
    Video {
        url: String,
        caption: Option<String>,
        track: Option<CaptionTrack>,
    },
    Code {
        code: String,
        language: Option<String>,
    },
    Divider {
        length_percent: u32,
        thickness: u32,
        color: Option<String>,
    },
    Poll {
        question: String,
        options: Vec<String>,
        allows_multiple: bool,
    },
    List {
        list_type: ListType,
        items: Vec<RenderListItem>,
    },
    Table {
        rows: Vec<Vec<RenderCell>>,
        has_header: bool,
    },
    Embed {
        url: String,
        service: EmbedService,
        aspect_ratio: Option<f64>,
        caption: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderListItem {
    pub inlines: Vec<TextChunk>,
    pub checked: Option<bool>,
    pub children: Vec<RenderListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderCell {
    pub inlines: Vec<TextChunk>,
    pub col_span: u32,
    pub row_span: u32,
}

/// Font size hint in pixels for a heading level.
pub fn heading_font_size(level: u8) -> u32 {
    match level {
        1 => 32,
        2 => 28,
        3 => 24,
        4 => 20,
        5 => 18,
        _ => 16,
    }
}

/// Lower a document into a render tree, preserving block order.
pub fn render(document: &PostDocument) -> RenderTree {
    let elements: Vec<RenderBlock> = document
        .blocks
        .iter()
        .map(|block| RenderBlock {
            alignment: block.alignment(),
            element: render_block(block),
        })
        .collect();
    tracing::debug!(elements = elements.len(), "rendered document");
    RenderTree { elements }
}

fn render_block(block: &EditorBlock) -> RenderElement {
    match block {
        EditorBlock::Paragraph(p) => RenderElement::Paragraph {
            inlines: p.chunks.clone(),
        },
        EditorBlock::Heading(h) => RenderElement::Heading {
            level: h.level,
            text: h.text.clone(),
            font_size_hint: heading_font_size(h.level),
        },
        EditorBlock::Quote(q) => RenderElement::Quote {
            text: q.text.clone(),
            author: q.author.clone(),
        },
        EditorBlock::Image(img) => RenderElement::Image {
            url: img.url.clone(),
            alt_text: img.alt_text.clone(),
        },
        EditorBlock::Video(v) => RenderElement::Video {
            url: v.url.clone(),
            caption: v.caption.clone(),
            track: v.track.clone(),
        },
        EditorBlock::CodeBlock(c) => RenderElement::Code {
            code: c.code.clone(),
            language: c.language.clone(),
        },
        EditorBlock::Divider(d) => RenderElement::Divider {
            length_percent: d.length_percent,
            thickness: d.thickness,
            color: d.color.clone(),
        },
        EditorBlock::Poll(p) => RenderElement::Poll {
            question: p.question.clone(),
            options: p.options.clone(),
            allows_multiple: p.allows_multiple_answers,
        },
        EditorBlock::ListBlock(list) => RenderElement::List {
            list_type: list.list_type,
            items: render_items(&list.items),
        },
        EditorBlock::Table(table) => RenderElement::Table {
            rows: table.rows.iter().map(render_row).collect(),
            has_header: table.has_header,
        },
        EditorBlock::Embed(e) => RenderElement::Embed {
            url: e.url.clone(),
            service: e.service,
            aspect_ratio: e.aspect_ratio,
            caption: e.caption.clone(),
        },
    }
}

fn render_items(items: &[ListItem]) -> Vec<RenderListItem> {
    items
        .iter()
        .map(|item| RenderListItem {
            inlines: item.chunks.clone(),
            checked: item.checked,
            children: render_items(&item.sub_items),
        })
        .collect()
}

fn render_row(row: &TableRow) -> Vec<RenderCell> {
    row.cells
        .iter()
        .map(|cell| RenderCell {
            inlines: cell.chunks.clone(),
            col_span: cell.col_span,
            row_span: cell.row_span,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_post_types::{Heading, ListBlock, Paragraph, Table, TableCell};

    #[test]
    fn test_heading_font_sizes() {
        let sizes: Vec<u32> = (1..=7).map(heading_font_size).collect();
        assert_eq!(sizes, vec![32, 28, 24, 20, 18, 16, 16]);
        assert_eq!(heading_font_size(0), 16);
    }

    #[test]
    fn test_preserves_order_and_alignment() {
        let doc = PostDocument::new(vec![
            Heading::new(2, "Title").into(),
            Paragraph::text("body").with_alignment(Alignment::Center).into(),
        ]);
        let tree = render(&doc);
        assert_eq!(tree.len(), 2);
        assert_eq!(
            tree.elements[0].element,
            RenderElement::Heading {
                level: 2,
                text: "Title".into(),
                font_size_hint: 28,
            }
        );
        assert_eq!(tree.elements[1].alignment, Alignment::Center);
    }

    #[test]
    fn test_nested_list_items_become_children() {
        let doc = PostDocument::new(vec![
            ListBlock::new(
                vec![
                    ListItem::text("a").with_sub_items(vec![ListItem::text("a.1")]),
                    ListItem::text("b").with_checked(true),
                ],
                ListType::Checklist,
            )
            .into(),
        ]);
        let tree = render(&doc);
        let RenderElement::List { list_type, items } = &tree.elements[0].element else {
            panic!("expected a list");
        };
        assert_eq!(*list_type, ListType::Checklist);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].children.len(), 1);
        assert_eq!(items[0].children[0].inlines[0].text, "a.1");
        assert_eq!(items[1].checked, Some(true));
    }

    #[test]
    fn test_table_cells_keep_spans() {
        let doc = PostDocument::new(vec![
            Table::new(vec![TableRow::new(vec![
                TableCell::text("wide").with_col_span(2),
            ])])
            .into(),
        ]);
        let tree = render(&doc);
        let RenderElement::Table { rows, has_header } = &tree.elements[0].element else {
            panic!("expected a table");
        };
        assert!(*has_header);
        assert_eq!(rows[0][0].col_span, 2);
        assert_eq!(rows[0][0].row_span, 1);
    }
}
