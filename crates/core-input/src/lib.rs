//! Terminal input: crossterm events mapped onto `core_events::InputEvent`.
//!
//! The editor loop is synchronous, so `read_event` blocks until the terminal
//! produces something the editor understands. Key releases, mouse and focus
//! events are skipped without returning.

use anyhow::Result;
use core_events::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    self, Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKind,
    KeyModifiers as CMods,
};

/// Block until the next mappable input event.
pub fn read_event() -> Result<InputEvent> {
    loop {
        let raw = event::read()?;
        if let Some(ev) = map_event(raw) {
            return Ok(ev);
        }
    }
}

/// Translate one crossterm event. `None` for events the editor ignores.
pub fn map_event(raw: CEvent) -> Option<InputEvent> {
    match raw {
        CEvent::Key(key) => map_key(key).map(InputEvent::Key),
        CEvent::Resize(w, h) => Some(InputEvent::Resize(w, h)),
        _ => None,
    }
}

pub fn map_key(key: CKeyEvent) -> Option<KeyEvent> {
    if key.kind == CKind::Release {
        return None;
    }
    let code = match key.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::Home => KeyCode::Home,
        CKeyCode::End => KeyCode::End,
        CKeyCode::PageUp => KeyCode::PageUp,
        CKeyCode::PageDown => KeyCode::PageDown,
        other => {
            tracing::trace!(target: "input", ?other, "unmapped_key");
            return None;
        }
    };
    Some(KeyEvent::new(code, map_mods(key.modifiers)))
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: CKeyCode, mods: CMods) -> CEvent {
        CEvent::Key(CKeyEvent::new(code, mods))
    }

    #[test]
    fn maps_printable_and_ctrl() {
        assert_eq!(
            map_event(press(CKeyCode::Char('x'), CMods::NONE)),
            Some(InputEvent::Key(KeyEvent::from('x')))
        );
        assert_eq!(
            map_event(press(CKeyCode::Char('s'), CMods::CONTROL)),
            Some(InputEvent::Key(KeyEvent::ctrl('s')))
        );
    }

    #[test]
    fn shifted_letter_keeps_shift_bit() {
        let ev = map_event(press(CKeyCode::Char('P'), CMods::SHIFT));
        let Some(InputEvent::Key(k)) = ev else {
            panic!("expected key");
        };
        assert_eq!(k.code, KeyCode::Char('P'));
        assert!(k.mods.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn navigation_keys() {
        for (raw, code) in [
            (CKeyCode::PageUp, KeyCode::PageUp),
            (CKeyCode::PageDown, KeyCode::PageDown),
            (CKeyCode::Home, KeyCode::Home),
            (CKeyCode::End, KeyCode::End),
            (CKeyCode::Delete, KeyCode::Delete),
        ] {
            assert_eq!(
                map_event(press(raw, CMods::NONE)),
                Some(InputEvent::Key(KeyEvent::plain(code)))
            );
        }
    }

    #[test]
    fn release_and_unknown_keys_are_skipped() {
        let release = CKeyEvent {
            code: CKeyCode::Char('a'),
            modifiers: CMods::NONE,
            kind: CKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_event(CEvent::Key(release)), None);
        assert_eq!(map_event(press(CKeyCode::F(5), CMods::NONE)), None);
        assert_eq!(map_event(CEvent::FocusGained), None);
    }

    #[test]
    fn resize_passes_through() {
        assert_eq!(
            map_event(CEvent::Resize(120, 48)),
            Some(InputEvent::Resize(120, 48))
        );
    }
}
