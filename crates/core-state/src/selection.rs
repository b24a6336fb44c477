//! Anchor-based selection.
//!
//! The anchor is fixed when selection begins; the live cursor is the other end.
//! Spans are half-open `[start, end)` after ordering, so a span whose endpoints
//! coincide selects nothing.

use core_text::{Buffer, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    pub start: Position,
    pub end: Position,
}

impl SelectionSpan {
    /// Construct a span normalizing ordering so that start <= end.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True if the cell at `(row, col)` falls inside the span.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        let p = Position::new(row, col);
        p >= self.start && p < self.end
    }
}

#[derive(Debug, Default, Clone)]
pub struct SelectionModel {
    anchor: Option<Position>,
}

impl SelectionModel {
    pub fn begin(&mut self, at: Position) {
        self.anchor = Some(at);
    }

    pub fn clear(&mut self) {
        self.anchor = None;
    }

    pub fn anchor(&self) -> Option<Position> {
        self.anchor
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// The ordered span between the anchor and `cursor`, if a selection is active.
    pub fn span(&self, cursor: Position) -> Option<SelectionSpan> {
        self.anchor.map(|a| SelectionSpan::new(a, cursor))
    }

    /// Selected text joined with `\n`; `None` when inactive or empty.
    pub fn copy_text(&self, buffer: &Buffer, cursor: Position) -> Option<String> {
        let span = self.span(cursor).filter(|s| !s.is_empty())?;
        Some(buffer.slice(span.start, span.end))
    }

    /// Remove the selected range and return where the cursor should land (the
    /// span start). `None` when inactive or empty; the buffer is untouched then.
    pub fn delete(&self, buffer: &mut Buffer, cursor: Position) -> Option<Position> {
        let span = self.span(cursor).filter(|s| !s.is_empty())?;
        Some(buffer.delete_range(span.start, span.end))
    }
}
