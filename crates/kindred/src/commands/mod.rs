/*
 * mod.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Subcommand implementations.
//!
//! Each command reads one or two JSON post documents, delegates to the
//! library crates and returns the text to print on stdout.

use std::path::Path;

use anyhow::{Context, Result};
use kindred_post_types::PostDocument;
use serde::Serialize;

pub mod analysis;
pub mod export;
pub mod normalize;
pub mod validate;

/// Read and decode a post document.
pub fn read_document(path: &Path) -> Result<PostDocument> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    let document = kindred_post_types::decode(&source)
        .with_context(|| format!("Failed to decode document: {}", path.display()))?;
    tracing::debug!(path = %path.display(), blocks = document.len(), "read document");
    Ok(document)
}

/// Pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    json.push('\n');
    Ok(json)
}
