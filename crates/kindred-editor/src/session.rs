/*
 * session.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::command::{EditorCommand, InsertBlock, MoveBlock, RemoveBlock, ReplaceBlock};
use crate::history::{DEFAULT_MAX_DEPTH, UndoStack};
use kindred_post_types::{EditorBlock, PostDocument};
use once_cell::sync::Lazy;

static EMPTY_DOCUMENT: Lazy<PostDocument> = Lazy::new(PostDocument::default);

/// Single-owner editing session over a post.
///
/// The initial document is recorded at construction, so undo can always
/// return to it. Edits that leave the document structurally unchanged are
/// not recorded.
#[derive(Debug, Clone)]
pub struct EditorSession {
    history: UndoStack<PostDocument>,
}

impl EditorSession {
    pub fn new(initial: PostDocument) -> Self {
        Self::with_max_depth(initial, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(initial: PostDocument, max_depth: usize) -> Self {
        let mut history = UndoStack::with_max_depth(max_depth);
        history.push(initial);
        Self { history }
    }

    pub fn document(&self) -> &PostDocument {
        self.history.current().unwrap_or(&EMPTY_DOCUMENT)
    }

    /// Record `document` as the new current state. Returns whether a
    /// snapshot was taken.
    pub fn update(&mut self, document: PostDocument) -> bool {
        let recorded = self.history.push_distinct(document);
        tracing::debug!(
            recorded,
            undo_depth = self.history.undo_depth(),
            "session update"
        );
        recorded
    }

    pub fn execute(&mut self, command: &dyn EditorCommand) -> &PostDocument {
        let next = command.apply(self.document());
        tracing::debug!(command = %command.description(), "execute");
        self.update(next);
        self.document()
    }

    pub fn insert_block(&mut self, block: impl Into<EditorBlock>, at: usize) -> &PostDocument {
        self.execute(&InsertBlock::new(block, at))
    }

    pub fn remove_block(&mut self, at: usize) -> &PostDocument {
        self.execute(&RemoveBlock { index: at })
    }

    pub fn replace_block(&mut self, at: usize, block: impl Into<EditorBlock>) -> &PostDocument {
        self.execute(&ReplaceBlock::new(at, block))
    }

    pub fn move_block(&mut self, from: usize, to: usize) -> &PostDocument {
        self.execute(&MoveBlock { from, to })
    }

    pub fn undo(&mut self) -> Option<&PostDocument> {
        self.history.undo()
    }

    pub fn redo(&mut self) -> Option<&PostDocument> {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(PostDocument::default())
    }
}
