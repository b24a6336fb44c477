#![allow(dead_code)] // Shared across many integration tests; each test binary uses a subset of helpers.

use core_actions::{KeyTranslator, MemoryClipboard, dispatch};
use core_events::{KeyCode, KeyEvent};
use core_state::EditorState;
use core_text::Buffer;

/// Editor state driven end to end through the key translator.
pub struct Harness {
    pub state: EditorState,
    pub clipboard: MemoryClipboard,
    translator: KeyTranslator,
    pub quit: bool,
}

impl Harness {
    pub fn new(lines: &[&str]) -> Self {
        Self::with_state(EditorState::new(Buffer::from_lines(lines)))
    }

    pub fn with_state(mut state: EditorState) -> Self {
        state.viewport.resize(10, 40);
        Self {
            state,
            clipboard: MemoryClipboard::new(),
            translator: KeyTranslator::new(),
            quit: false,
        }
    }

    pub fn key(&mut self, key: impl Into<KeyEvent>) -> &mut Self {
        let key = key.into();
        if let Some(action) = self.translator.translate(self.state.mode, &key) {
            let res = dispatch(action, &mut self.state, &mut self.clipboard);
            self.quit |= res.quit;
        }
        self
    }

    /// Feed every character of `text` as a plain key press.
    pub fn type_str(&mut self, text: &str) -> &mut Self {
        for ch in text.chars() {
            self.key(ch);
        }
        self
    }

    pub fn esc(&mut self) -> &mut Self {
        self.key(KeyCode::Esc)
    }

    pub fn lines(&self) -> Vec<String> {
        self.state.buffer().to_strings()
    }
}
