//! Save and quit.
//!
//! A failed write is reported in the status line and never ends the session.

use super::DispatchResult;
use crate::QuitInput;
use crate::io_ops::{self, WriteFileResult};
use core_state::{EditStatus, EditorState, Mode};

pub(crate) fn handle_save(state: &mut EditorState) -> DispatchResult {
    save(state);
    DispatchResult::dirty()
}

pub(crate) fn handle_quit(input: QuitInput, state: &mut EditorState) -> DispatchResult {
    match input {
        QuitInput::Request if state.is_dirty() => {
            state.mode = Mode::QuitConfirm;
            DispatchResult::dirty()
        }
        QuitInput::Request | QuitInput::Discard => DispatchResult::quit(),
        QuitInput::SaveAndQuit => {
            if save(state) {
                DispatchResult::quit()
            } else {
                state.mode = Mode::Normal;
                DispatchResult::dirty()
            }
        }
        QuitInput::Cancel => {
            state.mode = Mode::Normal;
            DispatchResult::dirty()
        }
    }
}

fn save(state: &mut EditorState) -> bool {
    match io_ops::write_file(state) {
        WriteFileResult::Success { .. } => true,
        WriteFileResult::NoFilename | WriteFileResult::Error => {
            state.status = EditStatus::WriteFailed;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Buffer;

    #[test]
    fn clean_buffer_quits_immediately() {
        let mut st = EditorState::new(Buffer::new());
        assert!(handle_quit(QuitInput::Request, &mut st).quit);
    }

    #[test]
    fn dirty_buffer_asks_first() {
        let mut st = EditorState::new(Buffer::new());
        st.mark_modified();
        let r = handle_quit(QuitInput::Request, &mut st);
        assert!(!r.quit);
        assert_eq!(st.mode, Mode::QuitConfirm);
        assert!(!handle_quit(QuitInput::Cancel, &mut st).quit);
        assert_eq!(st.mode, Mode::Normal);
        assert!(handle_quit(QuitInput::Discard, &mut st).quit);
    }

    #[test]
    fn save_and_quit_stays_open_on_failure() {
        let mut st = EditorState::new(Buffer::new());
        st.mark_modified();
        st.mode = Mode::QuitConfirm;
        let r = handle_quit(QuitInput::SaveAndQuit, &mut st);
        assert!(!r.quit);
        assert_eq!(st.status, EditStatus::WriteFailed);
        assert_eq!(st.mode, Mode::Normal);
    }

    #[test]
    fn save_and_quit_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q.txt");
        let mut st = EditorState::new(Buffer::from_text("bye"));
        st.file_name = Some(path.clone());
        st.mark_modified();
        assert!(handle_quit(QuitInput::SaveAndQuit, &mut st).quit);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "bye\n");
    }
}
