//! Case-insensitive substring scan over a `Buffer`.
//!
//! Matching folds each code point independently (see [`fold`]) so that match
//! columns index the original line one-to-one. Occurrences are reported
//! left-to-right and never overlap: the scan resumes at the end of the previous
//! match.

use crate::{Buffer, Position};

/// One search hit: `[start_col, end_col)` on `row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchSpan {
    pub row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl MatchSpan {
    pub const fn new(row: usize, start_col: usize, end_col: usize) -> Self {
        Self {
            row,
            start_col,
            end_col,
        }
    }

    pub const fn start(&self) -> Position {
        Position::new(self.row, self.start_col)
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.start_col && col < self.end_col
    }
}

/// Lowercase a single code point when its lowercase form is also a single code
/// point; otherwise keep it unchanged.
pub fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Non-overlapping matches of `needle` (already folded) within one line.
pub fn find_in_line(row: usize, line: &[char], needle: &[char]) -> Vec<MatchSpan> {
    let mut out = Vec::new();
    if needle.is_empty() || needle.len() > line.len() {
        return out;
    }
    let mut col = 0;
    while col + needle.len() <= line.len() {
        let hit = line[col..col + needle.len()]
            .iter()
            .zip(needle)
            .all(|(h, n)| fold(*h) == *n);
        if hit {
            out.push(MatchSpan::new(row, col, col + needle.len()));
            col += needle.len();
        } else {
            col += 1;
        }
    }
    out
}

/// All matches of `query` in row-major, then column order. Empty query → no matches.
pub fn find_all(buffer: &Buffer, query: &str) -> Vec<MatchSpan> {
    let needle: Vec<char> = query.chars().map(fold).collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let matches: Vec<MatchSpan> = buffer
        .lines()
        .enumerate()
        .flat_map(|(row, line)| find_in_line(row, line, &needle))
        .collect();
    tracing::trace!(target: "search", query_len = needle.len(), matches = matches.len(), "scan");
    matches
}
