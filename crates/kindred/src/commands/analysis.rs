/*
 * analysis.rs
 * Copyright (c) 2025 Posit, PBC
 */

use anyhow::Result;
use kindred_analysis::{analyze, collect_mentions, diff, summarize};
use kindred_post_types::PostDocument;
use serde::Serialize;

use super::to_json;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeReport {
    #[serde(flatten)]
    metrics: kindred_analysis::PostMetrics,
    mentions: Vec<String>,
}

/// Metrics plus the de-duplicated mention list.
pub fn analyze_document(document: &PostDocument) -> Result<String> {
    let report = AnalyzeReport {
        metrics: analyze(document),
        mentions: collect_mentions(document),
    };
    tracing::info!(
        words = report.metrics.total_words,
        blocks = report.metrics.block_count,
        "analyzed document"
    );
    to_json(&report)
}

pub fn diff_documents(old: &PostDocument, new: &PostDocument) -> Result<String> {
    let summary = diff(old, new);
    tracing::info!(changed = summary.has_significant_changes, "diffed documents");
    to_json(&summary)
}

pub fn summary(document: &PostDocument, title: Option<&str>) -> Result<String> {
    to_json(&summarize(document, title))
}
