/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Read-only analysis of Kindred posts.
//!
//! Nothing here mutates a document:
//!
//! - [`analyze`] - word, character and media counts in a single pass
//! - [`diff`] - index-aligned structural comparison of two documents
//! - [`summarize`] - preview snippet and first media for feeds
//! - [`extract_mention_usernames`] / [`collect_mentions`] - `@handle` discovery
//!
//! # Example
//!
//! ```rust,ignore
//! use kindred_analysis::{analyze, diff};
//!
//! let metrics = analyze(&draft);
//! println!("{} words", metrics.total_words);
//!
//! let changes = diff(&published, &draft);
//! if changes.has_significant_changes {
//!     println!("modified: {:?}", changes.modified_blocks);
//! }
//! ```

mod diff;
mod mentions;
mod metrics;
mod summary;

pub use diff::{PostChangeSummary, diff};
pub use mentions::{collect_mentions, extract_mention_usernames};
pub use metrics::{PostMetrics, analyze};
pub use summary::{PostSummary, SNIPPET_LENGTH, summarize};
