use core_text::{Buffer, Position};
use std::collections::VecDeque;
use tracing::trace;

use crate::Viewport;

/// Default number of snapshots retained in undo history.
pub const UNDO_HISTORY_MAX: usize = 500;

/// A full-state snapshot for undo/redo (coarse deep clone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSnapshot {
    pub buffer: Buffer,
    pub cursor: Position,
    pub offset_row: usize,
    pub offset_col: usize,
}

impl EditSnapshot {
    pub fn capture(buffer: &Buffer, cursor: Position, viewport: &Viewport) -> Self {
        Self {
            buffer: buffer.clone(),
            cursor,
            offset_row: viewport.offset_row,
            offset_col: viewport.offset_col,
        }
    }

    /// Swap this snapshot into the live state, returning the state it replaced.
    fn swap_into(
        self,
        buffer: &mut Buffer,
        cursor: &mut Position,
        viewport: &mut Viewport,
    ) -> EditSnapshot {
        EditSnapshot {
            buffer: std::mem::replace(buffer, self.buffer),
            cursor: std::mem::replace(cursor, self.cursor),
            offset_row: std::mem::replace(&mut viewport.offset_row, self.offset_row),
            offset_col: std::mem::replace(&mut viewport.offset_col, self.offset_col),
        }
    }
}

/// Two bounded snapshot stacks. Both evict their oldest entry when full.
#[derive(Debug)]
pub struct UndoEngine {
    undo_stack: VecDeque<EditSnapshot>,
    redo_stack: VecDeque<EditSnapshot>,
    capacity: usize,
}

impl Default for UndoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoEngine {
    pub fn new() -> Self {
        Self::with_capacity(UNDO_HISTORY_MAX)
    }

    /// Capacity 0 is coerced to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Record the pre-edit state of a mutating command. A new edit invalidates
    /// the redo history.
    pub fn push_snapshot(&mut self, buffer: &Buffer, cursor: Position, viewport: &Viewport) {
        let snap = EditSnapshot::capture(buffer, cursor, viewport);
        push_bounded(&mut self.undo_stack, snap, self.capacity);
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), lines = buffer.line_count(), "push_snapshot");
        if !self.redo_stack.is_empty() {
            self.redo_stack.clear();
            trace!(target: "state.undo", "redo_stack_cleared_on_new_edit");
        }
    }

    /// Restore the newest undo snapshot. Returns false (state untouched) when the
    /// undo history is empty.
    pub fn undo(
        &mut self,
        buffer: &mut Buffer,
        cursor: &mut Position,
        viewport: &mut Viewport,
    ) -> bool {
        let Some(last) = self.undo_stack.pop_back() else {
            trace!(target: "state.undo", "undo_empty");
            return false;
        };
        let current = last.swap_into(buffer, cursor, viewport);
        push_bounded(&mut self.redo_stack, current, self.capacity);
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "undo_pop");
        true
    }

    /// Re-apply the newest redo snapshot. The live state is pushed onto the undo
    /// stack first so the redo itself can be undone; redo history is kept.
    pub fn redo(
        &mut self,
        buffer: &mut Buffer,
        cursor: &mut Position,
        viewport: &mut Viewport,
    ) -> bool {
        let Some(next) = self.redo_stack.pop_back() else {
            trace!(target: "state.undo", "redo_empty");
            return false;
        };
        let current = next.swap_into(buffer, cursor, viewport);
        push_bounded(&mut self.undo_stack, current, self.capacity);
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "redo_pop");
        true
    }
}

fn push_bounded(stack: &mut VecDeque<EditSnapshot>, snap: EditSnapshot, capacity: usize) {
    stack.push_back(snap);
    while stack.len() > capacity {
        stack.pop_front();
        trace!(target: "state.undo", capacity, "stack_trimmed");
    }
}
