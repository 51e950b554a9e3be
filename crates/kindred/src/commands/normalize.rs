/*
 * normalize.rs
 * Copyright (c) 2025 Posit, PBC
 */

use anyhow::{Context, Result};
use kindred_editor::{NormalizationConfig, normalize_document};
use kindred_post_types::PostDocument;

/// Normalize a document and encode the result.
pub fn execute(document: &PostDocument, config: &NormalizationConfig) -> Result<String> {
    let normalized = normalize_document(document, config);
    tracing::info!(
        before = document.len(),
        after = normalized.len(),
        "normalized document"
    );
    let mut json = kindred_post_types::encode(&normalized).context("Failed to encode document")?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_post_types::{Paragraph, TextChunk};

    #[test]
    fn test_output_decodes_to_normalized_document() {
        let doc = PostDocument::new(vec![
            Paragraph::new(vec![TextChunk::plain("a"), TextChunk::plain("b")]).into(),
            Paragraph::text("   ").into(),
        ]);
        let out = execute(&doc, &NormalizationConfig::default()).unwrap();
        let back = kindred_post_types::decode(&out).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.blocks[0].as_paragraph().unwrap().chunks.len(), 1);
    }
}
