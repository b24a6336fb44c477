//! Cursor motion helpers.
//!
//! These operate purely on a `Buffer` + `Position` pair and are free of editor
//! state. Every function leaves the position clamped into the buffer.

use crate::{Buffer, Position};

/// Move left one code point, wrapping to the end of the previous line.
pub fn left(buf: &Buffer, pos: &mut Position) {
    *pos = buf.clamp(*pos);
    if pos.col > 0 {
        pos.col -= 1;
    } else if pos.row > 0 {
        pos.row -= 1;
        pos.col = buf.line_len(pos.row);
    }
}

/// Move right one code point, wrapping to the start of the next line.
pub fn right(buf: &Buffer, pos: &mut Position) {
    *pos = buf.clamp(*pos);
    if pos.col < buf.line_len(pos.row) {
        pos.col += 1;
    } else if pos.row + 1 < buf.line_count() {
        pos.row += 1;
        pos.col = 0;
    }
}

pub fn line_start(_buf: &Buffer, pos: &mut Position) {
    pos.col = 0;
}

pub fn line_end(buf: &Buffer, pos: &mut Position) {
    *pos = buf.clamp(*pos);
    pos.col = buf.line_len(pos.row);
}

/// Move up `n` rows (saturating at the first row); the column is clamped to the
/// target line.
pub fn up(buf: &Buffer, pos: &mut Position, n: usize) {
    pos.row = pos.row.saturating_sub(n);
    *pos = buf.clamp(*pos);
}

/// Move down `n` rows (saturating at the last row); the column is clamped to the
/// target line.
pub fn down(buf: &Buffer, pos: &mut Position, n: usize) {
    pos.row = pos.row.saturating_add(n).min(buf.line_count() - 1);
    *pos = buf.clamp(*pos);
}
