//! Editor state: buffer, cursor, mode, viewport, selection, search session and
//! undo history.
//!
//! Every field the edit controller touches lives here so one command can run
//! "snapshot, mutate, clamp" against a single owner. Buffer mutation goes
//! through [`EditorState::buffer_mut`], which bumps a revision counter; the
//! search session compares revisions to decide when its match list is stale.
//!
//! Undo snapshots capture the buffer, the cursor and the scroll offsets. Mode,
//! selection anchor and search query are not part of a snapshot, so undoing
//! an edit never re-enters Insert or Visual mode.

use std::path::PathBuf;

use core_text::{Buffer, Position, width};
use tracing::trace;

pub mod search;
pub mod selection;
pub mod undo;
pub mod viewport;

pub use search::SearchSession;
pub use selection::{SelectionModel, SelectionSpan};
pub use undo::{EditSnapshot, UNDO_HISTORY_MAX, UndoEngine};
pub use viewport::Viewport;

/// Current editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and single-key commands.
    #[default]
    Normal,
    /// Printable keys insert text at the cursor.
    Insert,
    /// Anchor fixed at entry; motions move the other end.
    Visual,
    /// Incremental search prompt.
    Search,
    /// Line-number prompt for the centering jump.
    JumpPrompt,
    /// Unsaved changes on quit; waiting for y/n.
    QuitConfirm,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Visual => "VISUAL",
            Mode::Search => "SEARCH",
            Mode::JumpPrompt => "JUMP",
            Mode::QuitConfirm => "QUIT",
        }
    }
}

/// Outcome of the most recent status-affecting command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditStatus {
    #[default]
    Clean,
    Modified,
    /// Undo requested with an empty history.
    OldestChange,
    /// Redo requested with an empty history.
    NewestChange,
    Saved {
        bytes: usize,
    },
    WriteFailed,
}

impl EditStatus {
    pub fn describe(self) -> String {
        match self {
            EditStatus::Clean => String::new(),
            EditStatus::Modified => "modified".to_string(),
            EditStatus::OldestChange => "oldest change".to_string(),
            EditStatus::NewestChange => "newest change".to_string(),
            EditStatus::Saved { bytes } => format!("saved {bytes} bytes"),
            EditStatus::WriteFailed => "write failed".to_string(),
        }
    }
}

/// Single-line prompt input (jump target digits).
#[derive(Debug, Default, Clone)]
pub struct PromptLine {
    buf: String,
}

impl PromptLine {
    pub fn buffer(&self) -> &str {
        &self.buf
    }
    pub fn clear(&mut self) {
        self.buf.clear();
    }
    pub fn push_char(&mut self, ch: char) {
        self.buf.push(ch);
    }
    pub fn backspace(&mut self) {
        self.buf.pop();
    }
    /// Return the accumulated text and reset the prompt.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

/// Top-level editor state container.
pub struct EditorState {
    buffer: Buffer,
    pub cursor: Position,
    pub viewport: Viewport,
    pub mode: Mode,
    pub selection: SelectionModel,
    pub search: SearchSession,
    pub prompt: PromptLine,
    undo: UndoEngine,
    /// Internal copy buffer; fallback when the system clipboard is unavailable.
    pub copy_buffer: String,
    pub file_name: Option<PathBuf>,
    pub status: EditStatus,
    dirty: bool,
    /// Spaces inserted by one Tab key.
    pub tab_width: usize,
    /// PageUp/PageDown move `visible rows / page_divisor` rows.
    pub page_divisor: usize,
    revision: u64,
}

impl EditorState {
    pub fn new(buffer: Buffer) -> Self {
        Self::with_undo_capacity(buffer, UNDO_HISTORY_MAX)
    }

    pub fn with_undo_capacity(buffer: Buffer, capacity: usize) -> Self {
        Self {
            buffer,
            cursor: Position::origin(),
            viewport: Viewport::default(),
            mode: Mode::Normal,
            selection: SelectionModel::default(),
            search: SearchSession::default(),
            prompt: PromptLine::default(),
            undo: UndoEngine::with_capacity(capacity),
            copy_buffer: String::new(),
            file_name: None,
            status: EditStatus::Clean,
            dirty: false,
            tab_width: 1,
            page_divisor: 4,
            revision: 0,
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Mutable buffer access. Every call counts as a content change.
    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.revision = self.revision.wrapping_add(1);
        &mut self.buffer
    }

    /// Split borrow for edits that move the cursor while mutating the buffer.
    pub fn buffer_and_cursor_mut(&mut self) -> (&mut Buffer, &mut Position) {
        self.revision = self.revision.wrapping_add(1);
        (&mut self.buffer, &mut self.cursor)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Split borrow for search updates that scan the buffer.
    pub fn search_parts(&mut self) -> (&mut SearchSession, &Buffer, u64) {
        (&mut self.search, &self.buffer, self.revision)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_modified(&mut self) {
        self.dirty = true;
        self.status = EditStatus::Modified;
    }

    pub fn mark_saved(&mut self, bytes: usize) {
        self.dirty = false;
        self.status = EditStatus::Saved { bytes };
    }

    /// Capture the pre-edit state of a mutating command.
    pub fn push_snapshot(&mut self) {
        self.undo
            .push_snapshot(&self.buffer, self.cursor, &self.viewport);
    }

    /// Restore the newest undo snapshot. An empty history leaves the state
    /// untouched and sets [`EditStatus::OldestChange`].
    pub fn undo(&mut self) -> bool {
        let restored = self
            .undo
            .undo(&mut self.buffer, &mut self.cursor, &mut self.viewport);
        self.after_history_step(restored, EditStatus::OldestChange);
        restored
    }

    /// Re-apply the newest redo snapshot; empty history sets
    /// [`EditStatus::NewestChange`].
    pub fn redo(&mut self) -> bool {
        let restored = self
            .undo
            .redo(&mut self.buffer, &mut self.cursor, &mut self.viewport);
        self.after_history_step(restored, EditStatus::NewestChange);
        restored
    }

    fn after_history_step(&mut self, restored: bool, exhausted: EditStatus) {
        if restored {
            self.revision = self.revision.wrapping_add(1);
            self.mark_modified();
        } else {
            self.status = exhausted;
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.undo_depth()
    }
    pub fn redo_depth(&self) -> usize {
        self.undo.redo_depth()
    }
    pub fn undo_capacity(&self) -> usize {
        self.undo.capacity()
    }

    /// Clamp the cursor into the buffer.
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.buffer.clamp(self.cursor);
    }

    /// Scroll so the cursor is visible. Returns true if the offsets changed.
    pub fn follow_cursor(&mut self) -> bool {
        let line = self.buffer.line(self.cursor.row).unwrap_or(&[]);
        let tab = self.tab_width;
        let changed = self.viewport.follow(self.cursor, |col| {
            line.get(col).map_or(1, |&ch| width::max_cells(ch, tab))
        });
        if changed {
            trace!(
                target: "state.viewport",
                offset_row = self.viewport.offset_row,
                offset_col = self.viewport.offset_col,
                "follow"
            );
        }
        changed
    }

    /// Ordered selection span between the anchor and the cursor.
    pub fn selection_span(&self) -> Option<SelectionSpan> {
        self.selection.span(self.cursor)
    }

    /// Rows moved by one PageUp/PageDown.
    pub fn page_step(&self) -> usize {
        (self.viewport.rows() / self.page_divisor.max(1)).max(1)
    }
}
