//! Insert-mode text edits.
//!
//! Each key is one undoable command. Backspace at the buffer origin and
//! Delete at the buffer end are no-ops and take no snapshot.

use super::DispatchResult;
use crate::EditKind;
use core_state::{EditorState, Mode};

pub(crate) fn handle_edit(kind: EditKind, state: &mut EditorState) -> DispatchResult {
    if !matches!(state.mode, Mode::Insert) {
        return DispatchResult::clean();
    }
    let before = state.cursor;
    let op = match kind {
        EditKind::InsertChar(ch) => {
            state.push_snapshot();
            let (buf, cursor) = state.buffer_and_cursor_mut();
            buf.insert_char(cursor, ch);
            "insert_char"
        }
        EditKind::InsertTab => {
            let width = state.tab_width.max(1);
            state.push_snapshot();
            let (buf, cursor) = state.buffer_and_cursor_mut();
            for _ in 0..width {
                buf.insert_char(cursor, ' ');
            }
            "insert_tab"
        }
        EditKind::Newline => {
            state.push_snapshot();
            let (buf, cursor) = state.buffer_and_cursor_mut();
            buf.split_line(cursor);
            "split_line"
        }
        EditKind::Backspace => {
            if before.row == 0 && before.col == 0 {
                return DispatchResult::clean();
            }
            state.push_snapshot();
            let (buf, cursor) = state.buffer_and_cursor_mut();
            buf.delete_before(cursor);
            "delete_before"
        }
        EditKind::DeleteForward => {
            if before >= state.buffer().end_position() {
                return DispatchResult::clean();
            }
            state.push_snapshot();
            state.buffer_mut().delete_after(before);
            "delete_after"
        }
    };
    state.mark_modified();
    tracing::trace!(
        target: "actions.dispatch",
        op,
        row = before.row,
        col = before.col,
        to_row = state.cursor.row,
        to_col = state.cursor.col,
        "edit"
    );
    DispatchResult::dirty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::{Buffer, Position};
    use pretty_assertions::assert_eq;

    fn insert_state(lines: &[&str], cursor: Position) -> EditorState {
        let mut st = EditorState::new(Buffer::from_lines(lines));
        st.mode = Mode::Insert;
        st.cursor = cursor;
        st
    }

    #[test]
    fn backspace_at_origin_is_noop() {
        let mut st = insert_state(&["abc"], Position::origin());
        let r = handle_edit(EditKind::Backspace, &mut st);
        assert!(!r.dirty);
        assert_eq!(st.buffer().to_strings(), vec!["abc"]);
        assert_eq!(st.undo_depth(), 0);
    }

    #[test]
    fn delete_at_buffer_end_is_noop() {
        let mut st = insert_state(&["a", "bc"], Position::new(1, 2));
        handle_edit(EditKind::DeleteForward, &mut st);
        assert_eq!(st.buffer().to_strings(), vec!["a", "bc"]);
        assert!(!st.is_dirty());
    }

    #[test]
    fn backspace_joins_lines() {
        let mut st = insert_state(&["ab", "cd"], Position::new(1, 0));
        handle_edit(EditKind::Backspace, &mut st);
        assert_eq!(st.buffer().to_strings(), vec!["abcd"]);
        assert_eq!(st.cursor, Position::new(0, 2));
    }

    #[test]
    fn delete_forward_joins_next_line() {
        let mut st = insert_state(&["ab", "cd"], Position::new(0, 2));
        handle_edit(EditKind::DeleteForward, &mut st);
        assert_eq!(st.buffer().to_strings(), vec!["abcd"]);
        assert_eq!(st.cursor, Position::new(0, 2));
    }

    #[test]
    fn tab_is_single_undo_step() {
        let mut st = insert_state(&["x"], Position::origin());
        st.tab_width = 4;
        handle_edit(EditKind::InsertTab, &mut st);
        assert_eq!(st.buffer().to_strings(), vec!["    x"]);
        assert_eq!(st.cursor.col, 4);
        assert_eq!(st.undo_depth(), 1);
    }

    #[test]
    fn multibyte_insert_counts_code_points() {
        let mut st = insert_state(&["日本"], Position::new(0, 1));
        handle_edit(EditKind::InsertChar('🦀'), &mut st);
        assert_eq!(st.buffer().to_strings(), vec!["日🦀本"]);
        assert_eq!(st.cursor, Position::new(0, 2));
    }
}
