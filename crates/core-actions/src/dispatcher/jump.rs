//! Line-number prompt (`g`) and top/bottom jumps.
//!
//! The target is clamped to `[1, line_count]` and centered on screen. An
//! empty prompt is a no-op.

use super::DispatchResult;
use crate::JumpInput;
use core_state::{EditorState, Mode};
use core_text::Position;

pub(crate) fn handle_jump(input: JumpInput, state: &mut EditorState) -> DispatchResult {
    match input {
        JumpInput::Start => {
            state.prompt.clear();
            state.mode = Mode::JumpPrompt;
        }
        JumpInput::Digit(d) => state.prompt.push_char(d),
        JumpInput::Backspace => state.prompt.backspace(),
        JumpInput::Cancel => {
            state.prompt.clear();
            state.mode = Mode::Normal;
        }
        JumpInput::Execute => {
            let text = state.prompt.take();
            state.mode = Mode::Normal;
            if !text.is_empty() {
                // Digits only, so parsing fails only on overflow.
                let n = text.parse::<usize>().unwrap_or(usize::MAX);
                jump_to(state, n);
            }
        }
        JumpInput::Top => jump_to(state, 1),
        JumpInput::Bottom => {
            let last = state.buffer().line_count();
            jump_to(state, last);
        }
    }
    DispatchResult::dirty()
}

fn jump_to(state: &mut EditorState, n: usize) {
    let lines = state.buffer().line_count();
    let row = state.viewport.jump_to_line(n, lines);
    state.cursor = Position::new(row, 0);
    tracing::trace!(target: "actions.dispatch", n, row, offset_row = state.viewport.offset_row, "jump");
}
