/*
 * history.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Bounded undo/redo history over whole snapshots.

use std::collections::VecDeque;

pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Two stacks and a current slot.
///
/// `push` moves the current value onto the undo stack and clears redo, so
/// redo is only available directly after an undo. When the undo stack grows
/// past `max_depth`, the oldest entry is evicted.
#[derive(Debug, Clone)]
pub struct UndoStack<T> {
    undo: VecDeque<T>,
    redo: Vec<T>,
    current: Option<T>,
    max_depth: usize,
}

impl<T> Default for UndoStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UndoStack<T> {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            current: None,
            max_depth,
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn push(&mut self, state: T) {
        if let Some(previous) = self.current.take() {
            self.undo.push_back(previous);
            while self.undo.len() > self.max_depth {
                self.undo.pop_front();
            }
        }
        self.redo.clear();
        self.current = Some(state);
    }

    pub fn undo(&mut self) -> Option<&T> {
        let previous = self.undo.pop_back()?;
        if let Some(current) = self.current.replace(previous) {
            self.redo.push(current);
        }
        self.current.as_ref()
    }

    pub fn redo(&mut self) -> Option<&T> {
        let next = self.redo.pop()?;
        if let Some(current) = self.current.replace(next) {
            self.undo.push_back(current);
        }
        self.current.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl<T: PartialEq> UndoStack<T> {
    /// Push unless `state` equals the current value. Returns whether a
    /// snapshot was recorded.
    pub fn push_distinct(&mut self, state: T) -> bool {
        if self.current.as_ref() == Some(&state) {
            return false;
        }
        self.push(state);
        true
    }
}
