/*
 * validate.rs
 * Copyright (c) 2025 Posit, PBC
 */

use anyhow::Result;
use kindred_editor::{ValidationConfig, ValidationFinding, validate};
use kindred_post_types::PostDocument;

use super::to_json;

/// Outcome of `kindred validate`.
pub struct ValidateOutput {
    pub findings: Vec<ValidationFinding>,
    pub json: String,
}

impl ValidateOutput {
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }
}

pub fn execute(document: &PostDocument, config: &ValidationConfig) -> Result<ValidateOutput> {
    let findings = validate(document, config);
    for finding in &findings {
        tracing::info!(code = ?finding.code, index = ?finding.block_index, "{}", finding.message);
    }
    let json = to_json(&findings)?;
    Ok(ValidateOutput { findings, json })
}
