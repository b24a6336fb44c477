//! KeyTranslator: key -> Action table, one arm per mode.
//!
//! Ctrl-S saves from every mode except the prompts. Keys with no meaning in
//! the current mode translate to `None` and are dropped by the caller.

use crate::{
    Action, EditKind, JumpInput, LineCommand, ModeChange, MotionKind, QuitInput, SearchInput,
};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_state::Mode;

#[derive(Debug, Default, Clone, Copy)]
pub struct KeyTranslator;

impl KeyTranslator {
    pub fn new() -> Self {
        Self
    }

    pub fn translate(&self, mode: Mode, key: &KeyEvent) -> Option<Action> {
        let action = match mode {
            Mode::Normal => normal(key),
            Mode::Insert => insert(key),
            Mode::Visual => visual(key),
            Mode::Search => search(key),
            Mode::JumpPrompt => jump(key),
            Mode::QuitConfirm => quit_confirm(key),
        };
        tracing::trace!(target: "input.translate", ?mode, key = %key.code, mapped = action.is_some(), "translate");
        action
    }
}

fn is_save(key: &KeyEvent) -> bool {
    key.is_ctrl('s')
}

/// Navigation keys shared by Normal and Visual (vi letters included).
fn motion(key: &KeyEvent) -> Option<MotionKind> {
    if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
        return None;
    }
    Some(match key.code {
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => MotionKind::Left,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Delete => MotionKind::Right,
        KeyCode::Char('k') | KeyCode::Up => MotionKind::Up,
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Enter => MotionKind::Down,
        other => arrow_motion(other)?,
    })
}

/// Dedicated navigation keys (no letters); valid in Insert mode too.
fn arrow_motion(code: KeyCode) -> Option<MotionKind> {
    Some(match code {
        KeyCode::Left => MotionKind::Left,
        KeyCode::Right => MotionKind::Right,
        KeyCode::Up => MotionKind::Up,
        KeyCode::Down => MotionKind::Down,
        KeyCode::Home => MotionKind::LineStart,
        KeyCode::End => MotionKind::LineEnd,
        KeyCode::PageUp => MotionKind::PageUp,
        KeyCode::PageDown => MotionKind::PageDown,
        _ => return None,
    })
}

fn normal(key: &KeyEvent) -> Option<Action> {
    if is_save(key) {
        return Some(Action::Save);
    }
    if key.is_ctrl('r') {
        return Some(Action::Redo);
    }
    if let Some(m) = motion(key) {
        return Some(Action::Motion(m));
    }
    if key.mods.contains(KeyModifiers::CTRL) {
        return None;
    }
    let KeyCode::Char(c) = key.code else {
        return None;
    };
    Some(match c {
        'q' => Action::Quit(QuitInput::Request),
        'i' => Action::ModeChange(ModeChange::EnterInsert),
        'v' => Action::ModeChange(ModeChange::EnterVisual),
        'w' => Action::Save,
        'y' => Action::Line(LineCommand::Copy),
        'd' => Action::Line(LineCommand::Cut),
        'P' => Action::Line(LineCommand::PasteAbove),
        'p' => Action::Line(LineCommand::PasteBelow),
        'o' => Action::Line(LineCommand::OpenBelow),
        'u' => Action::Undo,
        '/' => Action::Search(SearchInput::Start),
        'g' => Action::Jump(JumpInput::Start),
        't' => Action::Jump(JumpInput::Top),
        'b' => Action::Jump(JumpInput::Bottom),
        _ => return None,
    })
}

fn insert(key: &KeyEvent) -> Option<Action> {
    if is_save(key) {
        return Some(Action::Save);
    }
    if let Some(m) = arrow_motion(key.code) {
        return Some(Action::Motion(m));
    }
    let edit = match key.code {
        KeyCode::Esc => return Some(Action::ModeChange(ModeChange::LeaveInsert)),
        KeyCode::Char(_) if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) => {
            return None;
        }
        KeyCode::Char(c) => EditKind::InsertChar(c),
        KeyCode::Tab => EditKind::InsertTab,
        KeyCode::Enter => EditKind::Newline,
        KeyCode::Backspace => EditKind::Backspace,
        KeyCode::Delete => EditKind::DeleteForward,
        _ => return None,
    };
    Some(Action::Edit(edit))
}

fn visual(key: &KeyEvent) -> Option<Action> {
    if is_save(key) {
        return Some(Action::Save);
    }
    if key.code == KeyCode::Esc {
        return Some(Action::ModeChange(ModeChange::LeaveVisual));
    }
    if let Some(m) = motion(key) {
        return Some(Action::Motion(m));
    }
    match key.code {
        KeyCode::Char('y') => Some(Action::CopySelection),
        KeyCode::Char('d') | KeyCode::Char('x') => Some(Action::DeleteSelection),
        _ => None,
    }
}

fn search(key: &KeyEvent) -> Option<Action> {
    let input = match key.code {
        KeyCode::Esc => SearchInput::Cancel,
        KeyCode::Enter => SearchInput::Next,
        KeyCode::Backspace => SearchInput::Backspace,
        KeyCode::Char(_) if key.mods.contains(KeyModifiers::CTRL) => return None,
        KeyCode::Char(c) => SearchInput::Char(c),
        _ => return None,
    };
    Some(Action::Search(input))
}

fn jump(key: &KeyEvent) -> Option<Action> {
    let input = match key.code {
        KeyCode::Esc => JumpInput::Cancel,
        KeyCode::Enter => JumpInput::Execute,
        KeyCode::Backspace => JumpInput::Backspace,
        KeyCode::Char(c) if c.is_ascii_digit() => JumpInput::Digit(c),
        _ => return None,
    };
    Some(Action::Jump(input))
}

fn quit_confirm(key: &KeyEvent) -> Option<Action> {
    let input = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => QuitInput::SaveAndQuit,
        KeyCode::Char('n') | KeyCode::Char('N') => QuitInput::Discard,
        KeyCode::Esc => QuitInput::Cancel,
        _ => return None,
    };
    Some(Action::Quit(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(mode: Mode, key: impl Into<KeyEvent>) -> Option<Action> {
        KeyTranslator::new().translate(mode, &key.into())
    }

    #[test]
    fn normal_command_characters() {
        assert_eq!(t(Mode::Normal, 'i'), Some(Action::ModeChange(ModeChange::EnterInsert)));
        assert_eq!(t(Mode::Normal, 'u'), Some(Action::Undo));
        assert_eq!(t(Mode::Normal, 'p'), Some(Action::Line(LineCommand::PasteBelow)));
        assert_eq!(t(Mode::Normal, 'P'), Some(Action::Line(LineCommand::PasteAbove)));
        assert_eq!(t(Mode::Normal, 'Z'), None);
        assert_eq!(t(Mode::Normal, KeyEvent::ctrl('r')), Some(Action::Redo));
    }

    #[test]
    fn normal_navigation_aliases() {
        assert_eq!(t(Mode::Normal, 'h'), Some(Action::Motion(MotionKind::Left)));
        assert_eq!(t(Mode::Normal, KeyCode::Enter), Some(Action::Motion(MotionKind::Down)));
        assert_eq!(t(Mode::Normal, KeyCode::Backspace), Some(Action::Motion(MotionKind::Left)));
        assert_eq!(t(Mode::Normal, KeyCode::Delete), Some(Action::Motion(MotionKind::Right)));
        assert_eq!(t(Mode::Normal, KeyCode::PageDown), Some(Action::Motion(MotionKind::PageDown)));
    }

    #[test]
    fn insert_mode_letters_are_text() {
        assert_eq!(t(Mode::Insert, 'h'), Some(Action::Edit(EditKind::InsertChar('h'))));
        assert_eq!(t(Mode::Insert, ' '), Some(Action::Edit(EditKind::InsertChar(' '))));
        assert_eq!(t(Mode::Insert, KeyCode::Tab), Some(Action::Edit(EditKind::InsertTab)));
        assert_eq!(t(Mode::Insert, KeyCode::Enter), Some(Action::Edit(EditKind::Newline)));
        assert_eq!(t(Mode::Insert, KeyCode::Home), Some(Action::Motion(MotionKind::LineStart)));
        assert_eq!(t(Mode::Insert, KeyCode::Esc), Some(Action::ModeChange(ModeChange::LeaveInsert)));
        assert_eq!(t(Mode::Insert, KeyEvent::ctrl('x')), None);
    }

    #[test]
    fn save_binding_everywhere_but_prompts() {
        let save = KeyEvent::ctrl('s');
        for mode in [Mode::Normal, Mode::Insert, Mode::Visual] {
            assert_eq!(t(mode, save), Some(Action::Save), "{mode:?}");
        }
        assert_eq!(t(Mode::Search, save), None);
        assert_eq!(t(Mode::JumpPrompt, save), None);
    }

    #[test]
    fn visual_operators() {
        assert_eq!(t(Mode::Visual, 'y'), Some(Action::CopySelection));
        assert_eq!(t(Mode::Visual, 'x'), Some(Action::DeleteSelection));
        assert_eq!(t(Mode::Visual, 'j'), Some(Action::Motion(MotionKind::Down)));
        assert_eq!(t(Mode::Visual, 'i'), None);
    }

    #[test]
    fn prompts() {
        assert_eq!(t(Mode::Search, 'q'), Some(Action::Search(SearchInput::Char('q'))));
        assert_eq!(t(Mode::Search, KeyCode::Enter), Some(Action::Search(SearchInput::Next)));
        assert_eq!(t(Mode::JumpPrompt, '7'), Some(Action::Jump(JumpInput::Digit('7'))));
        assert_eq!(t(Mode::JumpPrompt, 'x'), None);
        assert_eq!(t(Mode::QuitConfirm, 'y'), Some(Action::Quit(QuitInput::SaveAndQuit)));
        assert_eq!(t(Mode::QuitConfirm, KeyCode::Esc), Some(Action::Quit(QuitInput::Cancel)));
    }
}
