//! Undo / Redo handling.
//!
//! An empty history is not an error: the state is untouched and the status
//! line reports it, so both paths repaint.

use super::DispatchResult;
use core_state::EditorState;

pub(crate) fn handle_undo(state: &mut EditorState) -> DispatchResult {
    let restored = state.undo();
    tracing::trace!(target: "actions.dispatch", op = "undo", restored, depth = state.undo_depth(), "undo");
    DispatchResult::dirty()
}

pub(crate) fn handle_redo(state: &mut EditorState) -> DispatchResult {
    let restored = state.redo();
    tracing::trace!(target: "actions.dispatch", op = "redo", restored, depth = state.redo_depth(), "redo");
    DispatchResult::dirty()
}
