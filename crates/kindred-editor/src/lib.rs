/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Editing engine for Kindred posts.
 *
 * Pure mutation operations over block sequences, a bounded undo/redo
 * history with an editing session on top, editor commands, the
 * normalization pass that canonicalizes raw input, the publishing
 * validator, and the asynchronous caption-generation seam.
 */

pub mod captions;
pub mod command;
pub mod history;
pub mod normalize;
pub mod ops;
pub mod session;
pub mod validate;

pub use captions::{CaptionError, CaptionGenerator, NoOpCaptionGenerator, attach_captions};
pub use command::{
    EditorCommand, InsertBlock, MergeParagraphs, MoveBlock, NormalizeDocument, RemoveBlock,
    ReplaceBlock, SplitParagraph, ToggleChunkStyle,
};
pub use history::{DEFAULT_MAX_DEPTH, UndoStack};
pub use normalize::{NormalizationConfig, normalize_block, normalize_chunks, normalize_document};
pub use session::EditorSession;
pub use validate::{FindingCode, ValidationConfig, ValidationFinding, is_valid, validate};
