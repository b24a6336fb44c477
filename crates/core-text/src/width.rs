//! Display width of code points.
//!
//! All width decisions flow through this module so the viewport and the
//! renderer agree on how many terminal cells a column occupies.
//!
//! Zero-width and control code points take one cell (they are shown as a
//! placeholder), keeping screen columns one-to-one with buffer columns.

use unicode_width::UnicodeWidthChar;

/// Terminal cells for `ch` outside of tab expansion: 1 or 2.
pub fn char_width(ch: char) -> u16 {
    match ch.width() {
        Some(w) if w > 0 => w as u16,
        _ => 1,
    }
}

/// Upper bound on the cells `ch` can occupy on screen. A tab expands to at
/// most `tab_width` cells depending on its tab stop.
pub fn max_cells(ch: char, tab_width: usize) -> usize {
    if ch == '\t' {
        tab_width.max(1)
    } else {
        usize::from(char_width(ch))
    }
}

/// True when `ch` has a printable width of its own.
pub fn is_printable(ch: char) -> bool {
    matches!(ch.width(), Some(w) if w > 0)
}
