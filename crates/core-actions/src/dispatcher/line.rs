//! Clipboard-backed commands: whole-line copy/cut/paste, open-below, and
//! Visual-mode selection copy/delete.
//!
//! Copies always land in the internal copy buffer; the system clipboard write
//! is best effort. Paste prefers the system clipboard and falls back to the
//! copy buffer when the read fails or yields nothing.

use super::DispatchResult;
use crate::{Clipboard, LineCommand};
use core_state::{EditorState, Mode};
use core_text::Position;

pub(crate) fn handle_line(
    cmd: LineCommand,
    state: &mut EditorState,
    clipboard: &mut dyn Clipboard,
) -> DispatchResult {
    let row = state.cursor.row;
    match cmd {
        LineCommand::Copy => {
            let text = state.buffer().line_string(row).unwrap_or_default();
            store_copy(state, clipboard, text);
        }
        LineCommand::Cut => {
            let buf = state.buffer();
            if buf.line_count() == 1 && buf.line_len(0) == 0 {
                return DispatchResult::clean();
            }
            state.push_snapshot();
            let text = state.buffer_mut().remove_line(row).unwrap_or_default();
            store_copy(state, clipboard, text);
            state.mark_modified();
        }
        LineCommand::PasteAbove | LineCommand::PasteBelow => {
            let text = paste_source(state, clipboard);
            let lines: Vec<&str> = text.lines().collect();
            if lines.is_empty() {
                return DispatchResult::clean();
            }
            state.push_snapshot();
            let at = if cmd == LineCommand::PasteAbove {
                row
            } else {
                row + 1
            };
            let inserted = state.buffer_mut().insert_lines(at, lines);
            state.cursor = if cmd == LineCommand::PasteAbove {
                Position::new(row + inserted, 0)
            } else {
                Position::new(at, 0)
            };
            state.mark_modified();
        }
        LineCommand::OpenBelow => {
            state.push_snapshot();
            let (buf, cursor) = state.buffer_and_cursor_mut();
            cursor.col = buf.line_len(cursor.row);
            buf.split_line(cursor);
            state.mode = Mode::Insert;
            state.mark_modified();
        }
    }
    tracing::trace!(target: "actions.dispatch", ?cmd, row, to_row = state.cursor.row, "line_command");
    DispatchResult::dirty()
}

/// Copy the Visual selection and return to Normal mode.
pub(crate) fn copy_selection(
    state: &mut EditorState,
    clipboard: &mut dyn Clipboard,
) -> DispatchResult {
    if let Some(text) = state.selection.copy_text(state.buffer(), state.cursor) {
        tracing::trace!(target: "actions.dispatch", chars = text.chars().count(), "copy_selection");
        store_copy(state, clipboard, text);
    }
    state.selection.clear();
    state.mode = Mode::Normal;
    DispatchResult::dirty()
}

/// Delete the Visual selection; the cursor lands on the span start.
pub(crate) fn delete_selection(state: &mut EditorState) -> DispatchResult {
    let selection = std::mem::take(&mut state.selection);
    state.mode = Mode::Normal;
    let cursor = state.cursor;
    if selection.span(cursor).is_some_and(|s| !s.is_empty()) {
        state.push_snapshot();
        if let Some(at) = selection.delete(state.buffer_mut(), cursor) {
            state.cursor = at;
        }
        state.mark_modified();
    }
    DispatchResult::dirty()
}

fn store_copy(state: &mut EditorState, clipboard: &mut dyn Clipboard, text: String) {
    if let Err(e) = clipboard.write(&text) {
        tracing::debug!(target: "actions.clipboard", error = %e, "write_failed_copy_buffer_only");
    }
    state.copy_buffer = text;
}

fn paste_source(state: &EditorState, clipboard: &mut dyn Clipboard) -> String {
    match clipboard.read() {
        Ok(text) if !text.is_empty() => text,
        Ok(_) => state.copy_buffer.clone(),
        Err(e) => {
            tracing::debug!(target: "actions.clipboard", error = %e, "read_failed_fallback");
            state.copy_buffer.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryClipboard, NullClipboard};
    use core_text::Buffer;
    use pretty_assertions::assert_eq;

    fn st(lines: &[&str], row: usize) -> EditorState {
        let mut s = EditorState::new(Buffer::from_lines(lines));
        s.cursor = Position::new(row, 1);
        s
    }

    #[test]
    fn copy_line_reaches_both_buffers() {
        let mut s = st(&["one", "two"], 1);
        let mut cb = MemoryClipboard::new();
        handle_line(LineCommand::Copy, &mut s, &mut cb);
        assert_eq!(cb.contents(), Some("two"));
        assert_eq!(s.copy_buffer, "two");
        assert_eq!(s.undo_depth(), 0);
    }

    #[test]
    fn clipboard_failure_keeps_copy_buffer() {
        let mut s = st(&["one", "two"], 0);
        handle_line(LineCommand::Copy, &mut s, &mut NullClipboard);
        assert_eq!(s.copy_buffer, "one");
        s.cursor = Position::new(1, 0);
        handle_line(LineCommand::PasteBelow, &mut s, &mut NullClipboard);
        assert_eq!(s.buffer().to_strings(), vec!["one", "two", "one"]);
        assert_eq!(s.cursor, Position::new(2, 0));
    }

    #[test]
    fn cut_only_line_leaves_empty_line() {
        let mut s = st(&["solo"], 0);
        handle_line(LineCommand::Cut, &mut s, &mut MemoryClipboard::new());
        assert_eq!(s.buffer().to_strings(), vec![""]);
        assert_eq!(s.copy_buffer, "solo");
    }

    #[test]
    fn cut_of_lone_empty_line_is_noop() {
        let mut s = st(&[""], 0);
        s.copy_buffer = "kept".to_string();
        let r = handle_line(LineCommand::Cut, &mut s, &mut MemoryClipboard::new());
        assert!(!r.dirty);
        assert_eq!(s.undo_depth(), 0);
        assert!(!s.is_dirty());
        assert_eq!(s.copy_buffer, "kept");
    }

    #[test]
    fn paste_above_keeps_original_line_under_cursor() {
        let mut s = st(&["a", "b"], 1);
        let mut cb = MemoryClipboard::with_text("x\ny\n");
        handle_line(LineCommand::PasteAbove, &mut s, &mut cb);
        assert_eq!(s.buffer().to_strings(), vec!["a", "x", "y", "b"]);
        assert_eq!(s.cursor, Position::new(3, 0));
    }

    #[test]
    fn paste_nothing_is_noop() {
        let mut s = st(&["a"], 0);
        let r = handle_line(LineCommand::PasteBelow, &mut s, &mut NullClipboard);
        assert!(!r.dirty);
        assert_eq!(s.undo_depth(), 0);
    }

    #[test]
    fn open_below_enters_insert() {
        let mut s = st(&["abc", "d"], 0);
        handle_line(LineCommand::OpenBelow, &mut s, &mut NullClipboard);
        assert_eq!(s.buffer().to_strings(), vec!["abc", "", "d"]);
        assert_eq!(s.cursor, Position::new(1, 0));
        assert_eq!(s.mode, Mode::Insert);
    }

    #[test]
    fn selection_copy_and_delete() {
        let mut s = st(&["hello", "world"], 0);
        s.selection.begin(Position::new(0, 1));
        s.cursor = Position::new(1, 2);
        s.mode = Mode::Visual;
        let mut cb = MemoryClipboard::new();
        copy_selection(&mut s, &mut cb);
        assert_eq!(cb.contents(), Some("ello\nwo"));
        assert_eq!(s.mode, Mode::Normal);

        s.selection.begin(Position::new(0, 1));
        s.mode = Mode::Visual;
        delete_selection(&mut s);
        assert_eq!(s.buffer().to_strings(), vec!["hrld"]);
        assert_eq!(s.cursor, Position::new(0, 1));
        assert!(!s.selection.is_active());
    }
}
