//! Commands and the edit controller.
//!
//! Input flows `KeyEvent -> KeyTranslator -> Action -> dispatch`. The
//! translator is a pure per-mode table; `dispatch` is the single entry point
//! that sequences snapshot, mutation and clamp for every command.

pub mod clipboard;
pub mod dispatcher;
pub mod io_ops;
mod key_translator;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, NullClipboard};
pub use dispatcher::{DispatchResult, dispatch};
pub use key_translator::KeyTranslator;

/// Cursor movements. Left/Right wrap across line boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

/// Text mutations available in Insert mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    /// Insert `tab_width` spaces as one undoable command.
    InsertTab,
    Newline,
    Backspace,
    DeleteForward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    EnterInsert,
    LeaveInsert,
    EnterVisual,
    LeaveVisual,
}

/// Whole-line clipboard commands (Normal mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCommand {
    Copy,
    Cut,
    /// Insert clipboard lines at the cursor row.
    PasteAbove,
    /// Insert clipboard lines after the cursor row.
    PasteBelow,
    /// Split at end of line and enter Insert.
    OpenBelow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchInput {
    Start,
    Char(char),
    Backspace,
    /// Jump to the next match, wrapping after the last.
    Next,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpInput {
    Start,
    Digit(char),
    Backspace,
    Execute,
    Cancel,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitInput {
    /// Quit, asking for confirmation when there are unsaved edits.
    Request,
    SaveAndQuit,
    Discard,
    Cancel,
}

/// Tagged command enumeration consumed by [`dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    ModeChange(ModeChange),
    Line(LineCommand),
    CopySelection,
    DeleteSelection,
    Undo,
    Redo,
    Search(SearchInput),
    Jump(JumpInput),
    Save,
    Quit(QuitInput),
}

impl Action {
    /// True for commands that take an undo snapshot before running.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Action::Edit(_)
                | Action::DeleteSelection
                | Action::Line(
                    LineCommand::Cut
                        | LineCommand::PasteAbove
                        | LineCommand::PasteBelow
                        | LineCommand::OpenBelow
                )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutating_classification() {
        assert!(Action::Edit(EditKind::InsertChar('a')).is_mutating());
        assert!(Action::Line(LineCommand::Cut).is_mutating());
        assert!(Action::DeleteSelection.is_mutating());
        assert!(!Action::Line(LineCommand::Copy).is_mutating());
        assert!(!Action::Undo.is_mutating());
        assert!(!Action::Motion(MotionKind::Up).is_mutating());
    }
}
