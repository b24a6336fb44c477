//! Incremental search prompt.
//!
//! Every query change rescans the whole buffer. If none of the new matches is
//! on screen, the cursor moves to the first match. Enter steps cyclically
//! through the list, rescanning first when the buffer changed since the last
//! scan. Landing on a match recenters the viewport only when its row is
//! off-screen.

use super::DispatchResult;
use crate::SearchInput;
use core_state::{EditorState, Mode};
use core_text::MatchSpan;

pub(crate) fn handle_search(input: SearchInput, state: &mut EditorState) -> DispatchResult {
    match input {
        SearchInput::Start => {
            state.search.clear();
            state.mode = Mode::Search;
        }
        SearchInput::Char(ch) => {
            let (search, buffer, revision) = state.search_parts();
            search.push_char(ch, buffer, revision);
            reveal_if_hidden(state);
        }
        SearchInput::Backspace => {
            let (search, buffer, revision) = state.search_parts();
            if search.backspace(buffer, revision) {
                reveal_if_hidden(state);
            }
        }
        SearchInput::Next => {
            let cursor = state.cursor;
            let (search, buffer, revision) = state.search_parts();
            search.refresh(buffer, revision, cursor);
            if let Some(m) = search.advance() {
                goto_match(state, m);
            }
        }
        SearchInput::Cancel => {
            state.search.clear();
            state.mode = Mode::Normal;
        }
    }
    tracing::trace!(
        target: "actions.dispatch",
        ?input,
        matches = state.search.matches().len(),
        index = state.search.index(),
        "search"
    );
    DispatchResult::dirty()
}

fn reveal_if_hidden(state: &mut EditorState) {
    if !state.search.is_highlighting() {
        return;
    }
    let vp = state.viewport;
    if state.search.first_in_rows(vp.offset_row, vp.rows()).is_some() {
        return;
    }
    if let Some(&m) = state.search.matches().first() {
        goto_match(state, m);
    }
}

fn goto_match(state: &mut EditorState, m: MatchSpan) {
    state.cursor = m.start();
    if !state.viewport.contains_row(m.row) {
        let lines = state.buffer().line_count();
        state.viewport.center_on(m.row, lines);
    }
}
