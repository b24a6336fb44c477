mod common;

use common::Harness;
use core_actions::io_ops::open_file;
use core_events::KeyEvent;
use core_state::{EditStatus, EditorState};
use pretty_assertions::assert_eq;

#[test]
fn edit_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "ünïcode\r\n\nlast line").unwrap();

    let mut state = EditorState::new(open_file(&path).unwrap());
    state.file_name = Some(path.clone());
    let mut h = Harness::with_state(state);
    h.key('j').key('i').type_str("🦀 middle").esc();
    assert!(h.state.is_dirty());
    h.key(KeyEvent::ctrl('s'));

    assert!(!h.state.is_dirty());
    assert!(matches!(h.state.status, EditStatus::Saved { .. }));
    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(on_disk, "ünïcode\n🦀 middle\nlast line\n");
    assert_eq!(open_file(&path).unwrap().to_strings(), h.lines());
}

#[test]
fn write_key_saves_and_quit_then_exits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut state = EditorState::new(open_file(&path).unwrap());
    state.file_name = Some(path.clone());
    let mut h = Harness::with_state(state);
    h.key('i').type_str("x").esc().key('w');
    assert_eq!(h.state.status, EditStatus::Saved { bytes: 2 });
    h.key('q');
    assert!(h.quit);
}

#[test]
fn confirm_yes_saves_before_quitting() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("confirm.txt");
    let mut state = EditorState::new(open_file(&path).unwrap());
    state.file_name = Some(path.clone());
    let mut h = Harness::with_state(state);
    h.key('i').type_str("keep").esc().key('q').key('y');
    assert!(h.quit);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep\n");
}
