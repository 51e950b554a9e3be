/*
 * codec.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! JSON boundary for [`PostDocument`].
//!
//! Encoding writes every field, defaults included. Decoding tolerates
//! unknown keys, fills documented defaults for missing optional fields and
//! fails on anything structurally wrong. Non-finite numbers have no JSON
//! form, so documents carrying them are refused on encode.

use crate::block::EditorBlock;
use crate::document::PostDocument;
use std::io::{Read, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("block {block_index}: aspect ratio {value} is not a finite number")]
    NonFiniteAspectRatio { block_index: usize, value: f64 },
}

pub type Result<T> = std::result::Result<T, CodecError>;

fn check_encodable(document: &PostDocument) -> Result<()> {
    for (block_index, block) in document.blocks.iter().enumerate() {
        if let EditorBlock::Embed(embed) = block {
            if let Some(value) = embed.aspect_ratio.filter(|r| !r.is_finite()) {
                return Err(CodecError::NonFiniteAspectRatio { block_index, value });
            }
        }
    }
    Ok(())
}

/// Pretty-printed JSON.
pub fn encode(document: &PostDocument) -> Result<String> {
    check_encodable(document)?;
    Ok(serde_json::to_string_pretty(document)?)
}

/// Single-line JSON.
pub fn encode_compact(document: &PostDocument) -> Result<String> {
    check_encodable(document)?;
    Ok(serde_json::to_string(document)?)
}

pub fn encode_to_writer<W: Write>(document: &PostDocument, mut writer: W) -> Result<()> {
    check_encodable(document)?;
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush()?;
    Ok(())
}

pub fn decode(json: &str) -> Result<PostDocument> {
    let document: PostDocument = serde_json::from_str(json)?;
    tracing::debug!(blocks = document.blocks.len(), "decoded post document");
    Ok(document)
}

pub fn decode_from_reader<R: Read>(reader: R) -> Result<PostDocument> {
    let document: PostDocument = serde_json::from_reader(reader)?;
    tracing::debug!(blocks = document.blocks.len(), "decoded post document");
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Embed, EmbedService, Heading, Paragraph};

    #[test]
    fn test_empty_document_round_trip() {
        let doc = PostDocument::default();
        let json = encode(&doc).unwrap();
        assert_eq!(decode(&json).unwrap(), doc);
    }

    #[test]
    fn test_encode_includes_defaults() {
        let doc = PostDocument::new(vec![Paragraph::text("hi").into()]);
        let json = encode_compact(&doc).unwrap();
        assert!(json.contains("\"metadata\":{}"));
        assert!(json.contains("\"bold\":false"));
        assert!(json.contains("\"color\":null"));
        assert!(json.contains("\"alignment\":\"AUTO\""));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "blocks": [{"type": "Heading", "level": 1, "text": "T", "future": 1}],
            "metadata": {},
            "version": 3
        }"#;
        let doc = decode(json).unwrap();
        assert_eq!(doc.blocks.len(), 1);
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let err = decode(r#"{"blocks":"not an array"}"#).unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }

    #[test]
    fn test_unknown_block_type_is_an_error() {
        assert!(decode(r#"{"blocks":[{"type":"Carousel"}]}"#).is_err());
    }

    #[test]
    fn test_non_finite_aspect_ratio_is_refused() {
        for value in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let doc = PostDocument::new(vec![
                Paragraph::text("intro").into(),
                Embed::new("https://v", EmbedService::Vimeo)
                    .with_aspect_ratio(value)
                    .into(),
            ]);
            let err = encode(&doc).unwrap_err();
            assert!(matches!(
                err,
                CodecError::NonFiniteAspectRatio { block_index: 1, .. }
            ));
            assert!(encode_compact(&doc).is_err());
            assert!(encode_to_writer(&doc, Vec::new()).is_err());
        }
    }

    #[test]
    fn test_aspect_ratio_survives_exactly() {
        let ratio = 9.081_443_360_835_975;
        let doc = PostDocument::new(vec![
            Embed::new("https://v", EmbedService::Youtube)
                .with_aspect_ratio(ratio)
                .into(),
        ]);
        let back = decode(&encode(&doc).unwrap()).unwrap();
        let EditorBlock::Embed(embed) = &back.blocks[0] else {
            panic!("expected an embed");
        };
        assert_eq!(embed.aspect_ratio.map(f64::to_bits), Some(ratio.to_bits()));
    }

    #[test]
    fn test_writer_and_reader_round_trip() {
        let doc = PostDocument::new(vec![Heading::new(3, "Section").into()])
            .with_metadata("tags", "rust");
        let mut buf = Vec::new();
        encode_to_writer(&doc, &mut buf).unwrap();
        let back = decode_from_reader(buf.as_slice()).unwrap();
        assert_eq!(back, doc);
    }
}
