/*
 * config.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! `kindred.toml` loading.
//!
//! ```toml
//! [normalization]
//! allow_empty_paragraphs = true
//!
//! [validation]
//! max_images = 4
//! disallowed_block_kinds = ["embed"]
//!
//! [html]
//! heading_level_offset = 1
//! ```
//!
//! Every table and key is optional.

use std::path::Path;

use anyhow::{Context, Result};
use kindred_editor::{NormalizationConfig, ValidationConfig};
use kindred_render::HtmlExportConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindredConfig {
    pub normalization: NormalizationConfig,
    pub validation: ValidationConfig,
    pub html: HtmlExportConfig,
}

impl KindredConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Invalid kindred configuration")
    }

    /// Read the file at `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&source)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
