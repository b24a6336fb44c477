//! System clipboard adapter.
//!
//! `arboard` can fail to open in headless sessions or unusual terminals; in
//! that case the editor runs with `NullClipboard` and the internal copy
//! buffer carries copy/paste on its own.

use core_actions::{Clipboard, ClipboardError, NullClipboard};
use tracing::info;

pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl Clipboard for SystemClipboard {
    fn read(&mut self) -> Result<String, ClipboardError> {
        self.inner
            .get_text()
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }

    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }
}

/// Open the system clipboard, falling back to a clipboard that always fails.
pub fn open() -> Box<dyn Clipboard> {
    match arboard::Clipboard::new() {
        Ok(inner) => {
            info!(target: "runtime.clipboard", "system_clipboard");
            Box::new(SystemClipboard { inner })
        }
        Err(e) => {
            info!(target: "runtime.clipboard", error = %e, "system_clipboard_unavailable");
            Box::new(NullClipboard)
        }
    }
}
