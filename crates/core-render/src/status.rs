//! Status line composition.
//!
//! Two stages:
//! 1. `compose_status` produces an ordered vector of `StatusSegment` items.
//! 2. `format_status` renders them into one string exactly `width` columns wide:
//!    left-aligned segments, padding, then right-aligned segments.
//!
//! Left side: `MODE [prompt] name N lines [status] [Copy] [Undo]`.
//! Right side: `P% Ln X, Col Y`.
//! When the line is too narrow the left side is truncated first.

use core_state::{EditStatus, EditorState, Mode};
use std::fmt::Write as _;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Everything needed to render a status line.
pub struct StatusContext<'a> {
    pub mode: Mode,
    pub file_name: Option<&'a Path>,
    pub line_count: usize,
    pub row: usize, // 0-based
    pub col: usize, // 0-based code point column
    pub status: EditStatus,
    pub has_copy: bool,
    pub has_undo: bool,
    /// Search query or jump digits, depending on `mode`.
    pub prompt: &'a str,
}

impl<'a> StatusContext<'a> {
    pub fn from_state(state: &'a EditorState) -> Self {
        let prompt = match state.mode {
            Mode::Search => state.search.query(),
            _ => state.prompt.buffer(),
        };
        Self {
            mode: state.mode,
            file_name: state.file_name.as_deref(),
            line_count: state.buffer().line_count(),
            row: state.cursor.row,
            col: state.cursor.col,
            status: state.status,
            has_copy: !state.copy_buffer.is_empty(),
            has_undo: state.undo_depth() > 0,
            prompt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    Mode(&'static str),
    SearchPrompt(&'a str),
    JumpPrompt(&'a str),
    QuitPrompt,
    FileName(std::borrow::Cow<'a, str>),
    Lines(usize),
    Status(EditStatus),
    CopyIndicator,
    UndoIndicator,
    /// Right-aligned from here on.
    Spacer,
    Percent(usize),
    Position { line_1: usize, col_1: usize },
}

pub fn compose_status<'a>(ctx: &'a StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let mut out = Vec::with_capacity(10);
    out.push(StatusSegment::Mode(ctx.mode.label()));
    match ctx.mode {
        Mode::Search => out.push(StatusSegment::SearchPrompt(ctx.prompt)),
        Mode::JumpPrompt => out.push(StatusSegment::JumpPrompt(ctx.prompt)),
        Mode::QuitConfirm => out.push(StatusSegment::QuitPrompt),
        _ => {}
    }
    let name = ctx
        .file_name
        .and_then(|p| p.file_name())
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| "[No Name]".into());
    out.push(StatusSegment::FileName(name));
    out.push(StatusSegment::Lines(ctx.line_count));
    if ctx.status != EditStatus::Clean {
        out.push(StatusSegment::Status(ctx.status));
    }
    if ctx.has_copy {
        out.push(StatusSegment::CopyIndicator);
    }
    if ctx.has_undo {
        out.push(StatusSegment::UndoIndicator);
    }
    out.push(StatusSegment::Spacer);
    let percent = (ctx.row + 1) * 100 / ctx.line_count.max(1);
    out.push(StatusSegment::Percent(percent.min(100)));
    out.push(StatusSegment::Position {
        line_1: ctx.row + 1,
        col_1: ctx.col + 1,
    });
    out
}

fn segment_text(seg: &StatusSegment<'_>) -> String {
    match seg {
        StatusSegment::Mode(m) => format!(" {m} "),
        StatusSegment::SearchPrompt(q) => format!("/{q} "),
        StatusSegment::JumpPrompt(d) => format!("line: {d} "),
        StatusSegment::QuitPrompt => "save changes? (y/n) ".to_string(),
        StatusSegment::FileName(n) => n.to_string(),
        StatusSegment::Lines(1) => " 1 line".to_string(),
        StatusSegment::Lines(n) => format!(" {n} lines"),
        StatusSegment::Status(s) => format!(" {}", s.describe()),
        StatusSegment::CopyIndicator => " [Copy]".to_string(),
        StatusSegment::UndoIndicator => " [Undo]".to_string(),
        StatusSegment::Spacer => String::new(),
        StatusSegment::Percent(p) => format!("{p}% "),
        StatusSegment::Position { line_1, col_1 } => format!("Ln {line_1}, Col {col_1} "),
    }
}

/// Render segments into a string of exactly `width` display columns.
pub fn format_status(segments: &[StatusSegment<'_>], width: usize) -> String {
    let split = segments
        .iter()
        .position(|s| matches!(s, StatusSegment::Spacer))
        .unwrap_or(segments.len());
    let left: String = segments[..split].iter().map(segment_text).collect();
    let right: String = segments[split..].iter().map(segment_text).collect();

    let right_w = right.width();
    if right_w >= width {
        return truncate_to(&right, width);
    }
    let left = truncate_to(&left, width - right_w);
    let mut s = String::with_capacity(width + 8);
    s.push_str(&left);
    let pad = width - right_w - left.width();
    let _ = write!(s, "{:pad$}{right}", "");
    s
}

/// Longest prefix of `text` that fits in `width` columns.
fn truncate_to(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = usize::from(crate::paint::char_width(ch));
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

pub fn build_status(ctx: &StatusContext, width: usize) -> String {
    format_status(&compose_status(ctx), width)
}
