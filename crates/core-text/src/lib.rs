//! Line-oriented text buffer.
//!
//! Each line is stored as a vector of Unicode scalar values so that cursor
//! columns are code point indices and multi-byte characters round-trip
//! exactly. The buffer never holds zero lines: an empty document is a single
//! empty line.

pub mod codec;
mod error;
pub mod motion;
pub mod search;
pub mod width;

pub use error::TextError;
pub use search::{MatchSpan, find_all};

/// A position inside a buffer expressed as (row index, code point column).
///
/// Field order makes the derived `Ord` lexicographic on `(row, col)`, which is
/// the ordering selections normalize by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
    pub const fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
    pub fn clamp_to<F>(&mut self, line_count: usize, mut line_len_fn: F)
    where
        F: FnMut(usize) -> usize,
    {
        if line_count == 0 {
            self.row = 0;
            self.col = 0;
            return;
        }
        if self.row >= line_count {
            self.row = line_count - 1;
        }
        let max_len = line_len_fn(self.row);
        if self.col > max_len {
            self.col = max_len;
        }
    }
}

/// Ordered sequence of lines, each an ordered sequence of code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Vec<char>>,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Empty buffer (one line, zero code points).
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
        }
    }

    /// Build from owned lines. An empty iterator yields one empty line.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines: Vec<Vec<char>> = lines
            .into_iter()
            .map(|l| l.as_ref().chars().collect())
            .collect();
        if lines.is_empty() {
            lines.push(Vec::new());
        }
        Self { lines }
    }

    /// Split `content` on every `\n`. `"a\nb"` is two lines, `"a\n"` is `["a", ""]`.
    pub fn from_text(content: &str) -> Self {
        Self::from_lines(content.split('\n'))
    }

    /// Total number of lines (always >= 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&[char]> {
        self.lines.get(row).map(Vec::as_slice)
    }

    /// Owned UTF-8 copy of a line, without any separator.
    pub fn line_string(&self, row: usize) -> Option<String> {
        self.line(row).map(|l| l.iter().collect())
    }

    /// Length of a line in code points; 0 for rows past the end.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, Vec::len)
    }

    pub fn lines(&self) -> impl Iterator<Item = &[char]> {
        self.lines.iter().map(Vec::as_slice)
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.iter().collect()).collect()
    }

    /// Total code points across all lines (separators excluded).
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// Last valid cursor position.
    pub fn end_position(&self) -> Position {
        let row = self.lines.len() - 1;
        Position::new(row, self.lines[row].len())
    }

    /// Clamp `pos` into the valid cursor range.
    pub fn clamp(&self, mut pos: Position) -> Position {
        pos.clamp_to(self.lines.len(), |row| self.line_len(row));
        pos
    }

    /// Insert `ch` at `pos`, shifting the rest of the line right. Advances `pos.col` by one.
    pub fn insert_char(&mut self, pos: &mut Position, ch: char) {
        *pos = self.clamp(*pos);
        self.lines[pos.row].insert(pos.col, ch);
        pos.col += 1;
    }

    /// Backspace. Removes the code point before `pos` or joins the line onto the
    /// previous one when `pos.col == 0`. Returns false for the no-op at `(0, 0)`.
    pub fn delete_before(&mut self, pos: &mut Position) -> bool {
        *pos = self.clamp(*pos);
        if pos.col > 0 {
            pos.col -= 1;
            self.lines[pos.row].remove(pos.col);
            return true;
        }
        if pos.row == 0 {
            return false;
        }
        let tail = self.lines.remove(pos.row);
        pos.row -= 1;
        let prev = &mut self.lines[pos.row];
        pos.col = prev.len();
        prev.extend(tail);
        true
    }

    /// Forward delete. Removes the code point at `pos` or joins the next line when
    /// `pos` is at end of line. The position is left untouched. Returns false for the
    /// no-op at the absolute end of the buffer.
    pub fn delete_after(&mut self, pos: Position) -> bool {
        let pos = self.clamp(pos);
        if pos.col < self.lines[pos.row].len() {
            self.lines[pos.row].remove(pos.col);
            return true;
        }
        if pos.row + 1 >= self.lines.len() {
            return false;
        }
        let next = self.lines.remove(pos.row + 1);
        self.lines[pos.row].extend(next);
        true
    }

    /// Split the line at `pos`; the right half becomes the next line and `pos`
    /// moves to its start.
    pub fn split_line(&mut self, pos: &mut Position) {
        *pos = self.clamp(*pos);
        let right = self.lines[pos.row].split_off(pos.col);
        self.lines.insert(pos.row + 1, right);
        pos.row += 1;
        pos.col = 0;
    }

    /// Insert whole lines so the first lands at index `row` (clamped to `line_count`).
    pub fn insert_lines<I, S>(&mut self, row: usize, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let at = row.min(self.lines.len());
        let new: Vec<Vec<char>> = lines
            .into_iter()
            .map(|l| l.as_ref().chars().collect())
            .collect();
        let inserted = new.len();
        for (offset, line) in new.into_iter().enumerate() {
            self.lines.insert(at + offset, line);
        }
        inserted
    }

    /// Remove a whole line and return its text. Removing the only line leaves a
    /// single empty line behind.
    pub fn remove_line(&mut self, row: usize) -> Option<String> {
        if row >= self.lines.len() {
            return None;
        }
        let removed: String = if self.lines.len() == 1 {
            std::mem::take(&mut self.lines[0]).into_iter().collect()
        } else {
            self.lines.remove(row).into_iter().collect()
        };
        Some(removed)
    }

    /// Text between two positions (order-insensitive), fragments joined with `\n`
    /// and no trailing separator.
    pub fn slice(&self, a: Position, b: Position) -> String {
        let (start, end) = ordered(self.clamp(a), self.clamp(b));
        let mut out = String::new();
        for row in start.row..=end.row {
            let line = &self.lines[row];
            let from = if row == start.row { start.col } else { 0 };
            let to = if row == end.row { end.col } else { line.len() };
            out.extend(&line[from..to]);
            if row < end.row {
                out.push('\n');
            }
        }
        out
    }

    /// Remove the text between two positions (order-insensitive). The boundary rows
    /// are spliced into one line and interior rows dropped. Returns the start
    /// position, which is where the cursor belongs afterwards.
    pub fn delete_range(&mut self, a: Position, b: Position) -> Position {
        let (start, end) = ordered(self.clamp(a), self.clamp(b));
        if start == end {
            return start;
        }
        if start.row == end.row {
            self.lines[start.row].drain(start.col..end.col);
            return start;
        }
        let tail = self.lines[end.row].split_off(end.col);
        self.lines.drain(start.row + 1..=end.row);
        let head = &mut self.lines[start.row];
        head.truncate(start.col);
        head.extend(tail);
        start
    }
}

fn ordered(a: Position, b: Position) -> (Position, Position) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(b: &Buffer) -> Vec<String> {
        b.to_strings()
    }

    #[test]
    fn empty_buffer_has_one_line() {
        let b = Buffer::new();
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.line_len(0), 0);
        let b = Buffer::from_lines(Vec::<String>::new());
        assert_eq!(b.line_count(), 1);
    }

    #[test]
    fn from_text_keeps_trailing_empty_line() {
        assert_eq!(lines(&Buffer::from_text("a\nb")), vec!["a", "b"]);
        assert_eq!(lines(&Buffer::from_text("a\n")), vec!["a", ""]);
    }

    #[test]
    fn insert_char_middle_multibyte() {
        let mut b = Buffer::from_text("hé");
        let mut pos = Position::new(0, 1);
        b.insert_char(&mut pos, '🦀');
        assert_eq!(lines(&b), vec!["h🦀é"]);
        assert_eq!(pos, Position::new(0, 2));
        assert_eq!(b.line_len(0), 3);
    }

    #[test]
    fn delete_before_simple() {
        let mut b = Buffer::from_text("abc");
        let mut pos = Position::new(0, 2);
        assert!(b.delete_before(&mut pos));
        assert_eq!(lines(&b), vec!["ac"]);
        assert_eq!(pos, Position::new(0, 1));
    }

    #[test]
    fn delete_before_joins_lines() {
        let mut b = Buffer::from_text("ab\ncd");
        let mut pos = Position::new(1, 0);
        assert!(b.delete_before(&mut pos));
        assert_eq!(lines(&b), vec!["abcd"]);
        assert_eq!(pos, Position::new(0, 2));
    }

    #[test]
    fn delete_before_origin_is_noop() {
        let mut b = Buffer::from_text("ab\ncd");
        let mut pos = Position::origin();
        assert!(!b.delete_before(&mut pos));
        assert_eq!(lines(&b), vec!["ab", "cd"]);
        assert_eq!(pos, Position::origin());
    }

    #[test]
    fn delete_after_joins_next_line() {
        let mut b = Buffer::from_text("ab\ncd");
        assert!(b.delete_after(Position::new(0, 2)));
        assert_eq!(lines(&b), vec!["abcd"]);
    }

    #[test]
    fn delete_after_at_end_is_noop() {
        let mut b = Buffer::from_text("ab\ncd");
        assert!(!b.delete_after(Position::new(1, 2)));
        assert_eq!(lines(&b), vec!["ab", "cd"]);
    }

    #[test]
    fn split_line_moves_to_next_row() {
        let mut b = Buffer::from_text("hello");
        let mut pos = Position::new(0, 2);
        b.split_line(&mut pos);
        assert_eq!(lines(&b), vec!["he", "llo"]);
        assert_eq!(pos, Position::new(1, 0));
    }

    #[test]
    fn split_at_end_creates_empty_line() {
        let mut b = Buffer::from_text("x");
        let mut pos = Position::new(0, 1);
        b.split_line(&mut pos);
        assert_eq!(lines(&b), vec!["x", ""]);
    }

    #[test]
    fn remove_only_line_leaves_empty_line() {
        let mut b = Buffer::from_text("solo");
        assert_eq!(b.remove_line(0).as_deref(), Some("solo"));
        assert_eq!(lines(&b), vec![""]);
        assert_eq!(b.remove_line(3), None);
    }

    #[test]
    fn slice_multi_line_without_trailing_separator() {
        let b = Buffer::from_text("hello\nworld");
        assert_eq!(b.slice(Position::new(0, 1), Position::new(1, 2)), "ello\nwo");
        // Order-insensitive.
        assert_eq!(b.slice(Position::new(1, 2), Position::new(0, 1)), "ello\nwo");
    }

    #[test]
    fn slice_interior_rows_whole() {
        let b = Buffer::from_text("ab\ncd\nef");
        assert_eq!(b.slice(Position::new(0, 1), Position::new(2, 1)), "b\ncd\ne");
    }

    #[test]
    fn delete_range_splices_boundaries() {
        let mut b = Buffer::from_text("hello\nworld");
        let at = b.delete_range(Position::new(1, 2), Position::new(0, 1));
        assert_eq!(lines(&b), vec!["hrld"]);
        assert_eq!(at, Position::new(0, 1));
    }

    #[test]
    fn delete_range_drops_interior_rows() {
        let mut b = Buffer::from_text("ab\ncd\nef\ngh");
        b.delete_range(Position::new(0, 1), Position::new(2, 1));
        assert_eq!(lines(&b), vec!["af", "gh"]);
    }

    #[test]
    fn clamp_pulls_position_in_bounds() {
        let b = Buffer::from_text("ab\nc");
        assert_eq!(b.clamp(Position::new(9, 9)), Position::new(1, 1));
        assert_eq!(b.clamp(Position::new(0, 7)), Position::new(0, 2));
    }

    #[test]
    fn insert_lines_clamps_row() {
        let mut b = Buffer::from_text("a");
        assert_eq!(b.insert_lines(10, ["x", "y"]), 2);
        assert_eq!(lines(&b), vec!["a", "x", "y"]);
    }
}
