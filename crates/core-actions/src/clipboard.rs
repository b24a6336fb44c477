//! Clipboard seam.
//!
//! The controller only sees this trait. Failures are never fatal: a failed
//! read falls back to the internal copy buffer and a failed write leaves the
//! copy buffer as the only copy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,
    #[error("clipboard access failed: {0}")]
    Access(String),
}

pub trait Clipboard {
    fn read(&mut self) -> Result<String, ClipboardError>;
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Process-local clipboard.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn read(&mut self) -> Result<String, ClipboardError> {
        self.text.clone().ok_or(ClipboardError::Unavailable)
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that always fails; used when no system clipboard can be opened.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullClipboard;

impl Clipboard for NullClipboard {
    fn read(&mut self) -> Result<String, ClipboardError> {
        Err(ClipboardError::Unavailable)
    }

    fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
