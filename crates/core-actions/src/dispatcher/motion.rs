//! Motion sub-dispatch (cursor movement).
//!
//! Delegates to `core_text::motion`; the primitives clamp, so the cursor is
//! always valid afterwards. In Visual mode only the cursor end moves; the
//! selection anchor stays where Visual mode was entered.

use super::DispatchResult;
use crate::MotionKind;
use core_state::EditorState;
use core_text::motion;

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState) -> DispatchResult {
    let before = state.cursor;
    let page = state.page_step();
    let buf = state.buffer();
    let mut pos = before;
    match kind {
        MotionKind::Left => motion::left(buf, &mut pos),
        MotionKind::Right => motion::right(buf, &mut pos),
        MotionKind::Up => motion::up(buf, &mut pos, 1),
        MotionKind::Down => motion::down(buf, &mut pos, 1),
        MotionKind::LineStart => motion::line_start(buf, &mut pos),
        MotionKind::LineEnd => motion::line_end(buf, &mut pos),
        MotionKind::PageUp => motion::up(buf, &mut pos, page),
        MotionKind::PageDown => motion::down(buf, &mut pos, page),
    }
    state.cursor = pos;
    tracing::trace!(
        target: "actions.dispatch",
        ?kind,
        row = before.row,
        col = before.col,
        to_row = pos.row,
        to_col = pos.col,
        "motion"
    );
    if pos == before {
        DispatchResult::clean()
    } else {
        DispatchResult::dirty()
    }
}
