//! Dispatcher applying `Action` to mutable editor state.
//!
//! Sub-modules by concern:
//! * `motion`  - cursor movement
//! * `mode`    - Normal/Insert/Visual transitions
//! * `edit`    - Insert-mode text mutation
//! * `line`    - whole-line copy/cut/paste and open-below, selection copy/delete
//! * `undo`    - undo / redo
//! * `search`  - incremental search prompt and match navigation
//! * `jump`    - line-number prompt and top/bottom jumps
//! * `command` - save and quit
//!
//! Every mutating handler pushes an undo snapshot immediately before it
//! touches the buffer and skips the snapshot when the command would be a
//! no-op. After any handler returns, the cursor is clamped into the buffer
//! and the viewport follows it.

use crate::{Action, Clipboard};
use core_state::EditorState;

mod command;
mod edit;
mod jump;
mod line;
mod mode;
mod motion;
mod search;
mod undo;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

/// Apply an action to editor state. Returns `DispatchResult` describing whether
/// a render is needed (`dirty`) or the editor should exit (`quit`).
pub fn dispatch(
    action: Action,
    state: &mut EditorState,
    clipboard: &mut dyn Clipboard,
) -> DispatchResult {
    tracing::trace!(target: "actions.dispatch", ?action, mode = ?state.mode, "dispatch");
    let result = match action {
        Action::Motion(kind) => motion::handle_motion(kind, state),
        Action::Edit(kind) => edit::handle_edit(kind, state),
        Action::ModeChange(mc) => mode::handle_mode_change(mc, state),
        Action::Line(cmd) => line::handle_line(cmd, state, clipboard),
        Action::CopySelection => line::copy_selection(state, clipboard),
        Action::DeleteSelection => line::delete_selection(state),
        Action::Undo => undo::handle_undo(state),
        Action::Redo => undo::handle_redo(state),
        Action::Search(input) => search::handle_search(input, state),
        Action::Jump(input) => jump::handle_jump(input, state),
        Action::Save => command::handle_save(state),
        Action::Quit(input) => command::handle_quit(input, state),
    };
    state.clamp_cursor();
    state.follow_cursor();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EditKind, MemoryClipboard, ModeChange, MotionKind};
    use core_state::{EditStatus, Mode};
    use core_text::{Buffer, Position};
    use pretty_assertions::assert_eq;

    fn run(state: &mut EditorState, actions: &[Action]) {
        let mut cb = MemoryClipboard::new();
        for a in actions {
            dispatch(*a, state, &mut cb);
        }
    }

    #[test]
    fn insert_then_undo_restores_everything() {
        let mut st = EditorState::new(Buffer::from_text("abc"));
        run(
            &mut st,
            &[
                Action::ModeChange(ModeChange::EnterInsert),
                Action::Edit(EditKind::InsertChar('x')),
                Action::Edit(EditKind::Newline),
            ],
        );
        assert_eq!(st.buffer().to_strings(), vec!["x", "abc"]);
        assert_eq!(st.cursor, Position::new(1, 0));
        assert_eq!(st.status, EditStatus::Modified);
        run(&mut st, &[Action::Undo, Action::Undo]);
        assert_eq!(st.buffer().to_strings(), vec!["abc"]);
        assert_eq!(st.cursor, Position::origin());
        // Undo does not leave Insert mode.
        assert_eq!(st.mode, Mode::Insert);
    }

    #[test]
    fn edits_ignored_outside_insert() {
        let mut st = EditorState::new(Buffer::from_text("abc"));
        let r = dispatch(
            Action::Edit(EditKind::InsertChar('z')),
            &mut st,
            &mut MemoryClipboard::new(),
        );
        assert!(!r.dirty);
        assert_eq!(st.buffer().to_strings(), vec!["abc"]);
        assert_eq!(st.undo_depth(), 0);
    }

    #[test]
    fn viewport_follows_after_motion() {
        let lines: Vec<String> = (0..50).map(|i| i.to_string()).collect();
        let mut st = EditorState::new(Buffer::from_lines(&lines));
        st.viewport.resize(10, 20);
        for _ in 0..15 {
            run(&mut st, &[Action::Motion(MotionKind::Down)]);
        }
        assert_eq!(st.cursor.row, 15);
        assert_eq!(st.viewport.offset_row, 6);
    }
}
