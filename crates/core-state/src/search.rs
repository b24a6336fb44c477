//! Search session: the active query, its match list and the cyclic cursor.
//!
//! The match list is tied to the buffer revision it was computed from. When
//! the buffer changes underneath an active session the list is discarded and
//! recomputed in full before the next navigation step.

use core_text::{Buffer, MatchSpan, Position, find_all};
use tracing::trace;

#[derive(Debug, Default, Clone)]
pub struct SearchSession {
    query: String,
    matches: Vec<MatchSpan>,
    index: usize,
    scanned_revision: Option<u64>,
}

impl SearchSession {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[MatchSpan] {
        &self.matches
    }

    /// Index of the match the next `advance` will land on.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Highlights are shown only while there is a non-empty query.
    pub fn is_highlighting(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.matches.iter().any(|m| m.contains(row, col))
    }

    /// Replace the query and rescan; the cyclic index restarts at the first match.
    pub fn set_query(&mut self, query: &str, buffer: &Buffer, revision: u64) {
        self.query.clear();
        self.query.push_str(query);
        self.rescan(buffer, revision);
        self.index = 0;
    }

    pub fn push_char(&mut self, ch: char, buffer: &Buffer, revision: u64) {
        self.query.push(ch);
        self.rescan(buffer, revision);
        self.index = 0;
    }

    /// Remove the last query character. Returns false if the query was already empty.
    pub fn backspace(&mut self, buffer: &Buffer, revision: u64) -> bool {
        if self.query.pop().is_none() {
            return false;
        }
        self.rescan(buffer, revision);
        self.index = 0;
        true
    }

    /// Drop the query, matches and highlighting.
    pub fn clear(&mut self) {
        self.query.clear();
        self.matches.clear();
        self.index = 0;
        self.scanned_revision = None;
    }

    /// Rescan if the buffer changed since the last scan. After a rescan the index
    /// points at the first match at or after `cursor` (wrapping to 0). Returns
    /// true if a rescan happened.
    pub fn refresh(&mut self, buffer: &Buffer, revision: u64, cursor: Position) -> bool {
        if self.scanned_revision == Some(revision) {
            return false;
        }
        self.rescan(buffer, revision);
        self.index = self
            .matches
            .iter()
            .position(|m| m.start() >= cursor)
            .unwrap_or(0);
        trace!(target: "search", index = self.index, "rescan_on_edit");
        true
    }

    /// Return the match at the cyclic index and step past it, wrapping after the last.
    pub fn advance(&mut self) -> Option<MatchSpan> {
        if self.matches.is_empty() {
            return None;
        }
        let idx = self.index % self.matches.len();
        self.index = (idx + 1) % self.matches.len();
        Some(self.matches[idx])
    }

    /// First match whose row lies in `[first_row, first_row + rows)`.
    pub fn first_in_rows(&self, first_row: usize, rows: usize) -> Option<MatchSpan> {
        self.matches
            .iter()
            .copied()
            .find(|m| m.row >= first_row && m.row < first_row + rows)
    }

    fn rescan(&mut self, buffer: &Buffer, revision: u64) {
        self.matches = find_all(buffer, &self.query);
        self.scanned_revision = Some(revision);
    }
}
