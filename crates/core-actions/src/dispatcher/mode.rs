//! Mode transitions (Normal <-> Insert, Normal <-> Visual).

use super::DispatchResult;
use crate::ModeChange;
use core_state::{EditorState, Mode};

pub(crate) fn handle_mode_change(mc: ModeChange, state: &mut EditorState) -> DispatchResult {
    match mc {
        ModeChange::EnterInsert => state.mode = Mode::Insert,
        ModeChange::LeaveInsert => state.mode = Mode::Normal,
        ModeChange::EnterVisual => {
            // Anchor is frozen here; motions only move the cursor end.
            state.selection.begin(state.cursor);
            state.mode = Mode::Visual;
        }
        ModeChange::LeaveVisual => {
            state.selection.clear();
            state.mode = Mode::Normal;
        }
    }
    tracing::trace!(target: "actions.dispatch", ?mc, mode = ?state.mode, "mode_change");
    DispatchResult::dirty()
}
