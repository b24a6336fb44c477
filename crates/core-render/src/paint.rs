//! Paint `EditorState` into a `Frame`: gutter, visible text, highlights,
//! software cursor and the status line on the last row.

use crate::{CellFlags, Frame, status::StatusContext};
use core_state::{EditorState, Mode};
use core_text::width;

pub use core_text::width::char_width;

/// Placeholder for code points with no printable width of their own.
const PLACEHOLDER: char = '\u{00B7}';

/// Screen geometry for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u16,
    pub height: u16,
    pub gutter_width: u16,
}

impl Layout {
    pub fn new(width: u16, height: u16, gutter_width: u16) -> Self {
        Self {
            width,
            height: height.max(2),
            gutter_width: gutter_width.min(width.saturating_sub(1)),
        }
    }

    /// Rows available for text (everything but the status line).
    pub fn text_rows(&self) -> u16 {
        self.height - 1
    }

    pub fn text_cols(&self) -> u16 {
        self.width - self.gutter_width
    }
}

fn glyph(ch: char) -> char {
    if width::is_printable(ch) {
        ch
    } else {
        PLACEHOLDER
    }
}

pub fn build_frame(state: &EditorState, layout: &Layout) -> Frame {
    let mut frame = Frame::new(layout.width, layout.height);
    for y in 0..layout.text_rows() {
        let row = state.viewport.offset_row + y as usize;
        paint_gutter(&mut frame, layout, state, y, row);
        if row < state.buffer().line_count() {
            paint_line(&mut frame, layout, state, y, row);
        } else {
            frame.set_char(layout.gutter_width, y, '~', 1, CellFlags::FILLER);
        }
    }
    paint_status(&mut frame, layout, state);
    frame
}

fn paint_gutter(frame: &mut Frame, layout: &Layout, state: &EditorState, y: u16, row: usize) {
    let gw = layout.gutter_width;
    if gw == 0 {
        return;
    }
    let mut flags = CellFlags::GUTTER;
    if row == state.cursor.row {
        flags |= CellFlags::CURRENT_LINE;
    }
    let digits = usize::from(gw - 1);
    if digits > 0 && row < state.buffer().line_count() {
        let number = (row + 1).to_string();
        let shown = &number[number.len().saturating_sub(digits)..];
        let x = (digits - shown.len()) as u16;
        frame.put_str(x, y, shown, flags);
    }
    frame.set_char(gw - 1, y, '│', 1, flags);
}

fn paint_line(frame: &mut Frame, layout: &Layout, state: &EditorState, y: u16, row: usize) {
    let Some(line) = state.buffer().line(row) else {
        return;
    };
    let selection = if state.mode == Mode::Visual {
        state.selection_span()
    } else {
        None
    };
    let row_matches: Vec<_> = if state.search.is_highlighting() {
        state
            .search
            .matches()
            .iter()
            .filter(|m| m.row == row)
            .collect()
    } else {
        Vec::new()
    };
    let tab = state.tab_width.max(1) as u16;
    let cursor = state.cursor;

    let mut x = layout.gutter_width;
    for (col, &ch) in line.iter().enumerate().skip(state.viewport.offset_col) {
        if x >= layout.width {
            return;
        }
        let mut flags = CellFlags::empty();
        if selection.is_some_and(|s| s.contains(row, col)) {
            flags |= CellFlags::SELECTED;
        }
        if row_matches.iter().any(|m| m.contains(row, col)) {
            flags |= CellFlags::MATCHED;
        }
        if cursor.row == row && cursor.col == col {
            flags |= CellFlags::CURSOR;
        }
        if ch == '\t' {
            let visual = x - layout.gutter_width;
            let n = tab - (visual % tab);
            for i in 0..n {
                let f = if i == 0 { flags } else { flags - CellFlags::CURSOR };
                frame.set_char(x + i, y, ' ', 1, f);
            }
            x = x.saturating_add(n);
        } else {
            let w = char_width(ch);
            frame.set_char(x, y, glyph(ch), w, flags);
            x = x.saturating_add(w);
        }
    }
    if cursor.row == row && cursor.col >= line.len() && cursor.col >= state.viewport.offset_col {
        frame.set_char(x, y, ' ', 1, CellFlags::CURSOR);
    }
}

fn paint_status(frame: &mut Frame, layout: &Layout, state: &EditorState) {
    let y = layout.height - 1;
    let ctx = StatusContext::from_state(state);
    let text = crate::status::build_status(&ctx, usize::from(layout.width));
    frame.apply_flags_span(0, y, layout.width, CellFlags::STATUS);
    frame.put_str(0, y, &text, CellFlags::STATUS);
}
