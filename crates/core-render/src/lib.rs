//! Frame assembly and terminal emission.
//!
//! A frame is a grid of cells built from `EditorState` in one pass
//! (`paint::build_frame`) and flushed through `writer::Writer`. Every render
//! repaints the whole screen.
//!
//! Invariants:
//! - Leader: width >= 1. Continuation: width == 0, never printed.
//! - Continuations immediately follow their leader horizontally.
//! - Style flags applied to a span mark leader + continuations.

use bitflags::bitflags;
use std::io::Write;

pub mod paint;
pub mod status;
pub mod writer;

pub use paint::{Layout, build_frame};
pub use status::{StatusContext, StatusSegment, build_status};
pub use writer::Writer;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        const CURSOR       = 0b0000_0001; // software cursor, reverse video
        const SELECTED     = 0b0000_0010;
        const MATCHED      = 0b0000_0100; // search highlight
        const GUTTER       = 0b0000_1000;
        const CURRENT_LINE = 0b0001_0000; // gutter number of the cursor row
        const FILLER       = 0b0010_0000; // `~` past end of buffer
        const STATUS       = 0b0100_0000;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    /// Visual width in terminal columns. `0` designates a continuation cell.
    pub width: u8,
    pub flags: CellFlags,
}

impl Cell {
    #[inline]
    pub fn leader(ch: char, width: u16, flags: CellFlags) -> Self {
        Self {
            ch,
            width: width.clamp(1, 2) as u8,
            flags,
        }
    }
    #[inline]
    pub fn continuation(flags: CellFlags) -> Self {
        Self {
            ch: ' ',
            width: 0,
            flags,
        }
    }
    #[inline]
    pub fn is_leader(&self) -> bool {
        self.width > 0
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            width: 1,
            flags: CellFlags::empty(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Set a glyph at (x,y) and populate continuation cells for its width.
    /// A glyph that would straddle the right edge is replaced by a blank.
    pub fn set_char(&mut self, x: u16, y: u16, ch: char, width: u16, flags: CellFlags) {
        if x >= self.width || y >= self.height {
            return;
        }
        let w = width.max(1);
        if x + w > self.width {
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = Cell::leader(' ', 1, flags);
            }
            return;
        }
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell::leader(ch, w, flags);
        }
        for dx in 1..w {
            if let Some(c_idx) = self.index(x + dx, y) {
                self.cells[c_idx] = Cell::continuation(flags);
            }
        }
    }

    /// Write `text` left to right starting at `x`; returns the column after the last glyph.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, flags: CellFlags) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            let w = paint::char_width(ch);
            if col >= self.width {
                break;
            }
            self.set_char(col, y, ch, w, flags);
            col = col.saturating_add(w);
        }
        col
    }

    /// Apply additional flags over a span of cells.
    pub fn apply_flags_span(&mut self, x: u16, y: u16, span_width: u16, flags: CellFlags) {
        let span = span_width.min(self.width.saturating_sub(x));
        for dx in 0..span {
            if let Some(idx) = self.index(x + dx, y) {
                self.cells[idx].flags |= flags;
            }
        }
    }

    /// Iterate leader cells of a row, yielding (char, width, flags, start_x).
    pub fn row_leaders(&self, y: u16) -> impl Iterator<Item = (char, u16, CellFlags, u16)> + '_ {
        let width = self.width;
        let start = y as usize * width as usize;
        let mut x = 0u16;
        std::iter::from_fn(move || {
            while x < width {
                let cell = &self.cells[start + x as usize];
                if cell.is_leader() {
                    let w = cell.width as u16;
                    let out = (cell.ch, w, cell.flags, x);
                    x = x.saturating_add(w);
                    return Some(out);
                }
                x += 1;
            }
            None
        })
    }

    /// Row text with trailing blanks removed (tests and diagnostics).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let s: String = self.row_leaders(y).map(|(c, _, _, _)| c).collect();
        s.trim_end().to_string()
    }
}

/// Build a frame for `state` and write it to `out`, clipped to `visible_cols`.
pub fn render<W: Write>(
    state: &core_state::EditorState,
    layout: &Layout,
    visible_cols: u16,
    out: &mut W,
) -> anyhow::Result<()> {
    let frame = build_frame(state, layout);
    let mut w = Writer::new();
    w.emit_frame(&frame, visible_cols);
    w.flush_to(out)?;
    tracing::trace!(target: "render", width = frame.width, height = frame.height, "frame");
    Ok(())
}
