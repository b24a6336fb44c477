//! Scroll offsets keeping the cursor visible.
//!
//! `rows`/`cols` describe the text area only (gutter and status line are
//! excluded by the caller). Both are kept at least 1 so the follow rules always
//! have a non-empty window to place the cursor in.

use core_text::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset_row: usize,
    pub offset_col: usize,
    rows: usize,
    cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(24, 80)
    }
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_row: 0,
            offset_col: 0,
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Update the visible text area. Offsets are left for the next `follow`.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
    }

    /// True if `row` lies in `[offset_row, offset_row + rows)`.
    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.offset_row && row < self.offset_row + self.rows
    }

    /// Adjust offsets minimally so `cursor` is inside the window. `cells` gives
    /// the screen cells taken by a column of the cursor row, so the horizontal
    /// window is measured in display width. Returns true if either offset changed.
    pub fn follow<F>(&mut self, cursor: Position, mut cells: F) -> bool
    where
        F: FnMut(usize) -> usize,
    {
        let before = (self.offset_row, self.offset_col);
        if cursor.row < self.offset_row {
            self.offset_row = cursor.row;
        }
        if cursor.row >= self.offset_row + self.rows {
            self.offset_row = cursor.row + 1 - self.rows;
        }
        if cursor.col < self.offset_col {
            self.offset_col = cursor.col;
        }
        let mut used: usize = (self.offset_col..=cursor.col).map(&mut cells).sum();
        while used > self.cols && self.offset_col < cursor.col {
            used -= cells(self.offset_col);
            self.offset_col += 1;
        }
        before != (self.offset_row, self.offset_col)
    }

    /// Put `row` in the middle of the window without scrolling past the last
    /// screenful of a `line_count`-line buffer.
    pub fn center_on(&mut self, row: usize, line_count: usize) {
        let max_offset = line_count.saturating_sub(self.rows);
        self.offset_row = row.saturating_sub(self.rows / 2).min(max_offset);
    }

    /// Explicit "go to line N" (1-based). `n` is clamped to `[1, line_count]`; the
    /// returned value is the 0-based target row.
    pub fn jump_to_line(&mut self, n: usize, line_count: usize) -> usize {
        let line_count = line_count.max(1);
        let row = n.clamp(1, line_count) - 1;
        self.center_on(row, line_count);
        row
    }
}
