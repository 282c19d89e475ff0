use super::*;

use crate::state::inventory::SectionKey;
use crate::util::storage::MemoryStore;

#[test]
fn section_label_without_section() {
    assert_eq!(section_label(&MappingState::default()), "No section");
}

#[test]
fn section_label_names_vessel_and_section() {
    let mut state = MappingState::default();
    let crop = deckplan::camera::Rect::new(0.0, 0.0, 100.0, 100.0);
    let _ = state.open_section(&MemoryStore::new(), SectionKey::new("MV Coral Bay", "Engine Room"), crop);
    assert_eq!(section_label(&state), "MV Coral Bay · Engine Room");
}

#[test]
fn entry_count_label_pluralizes() {
    assert_eq!(entry_count_label(0), "0 entries");
    assert_eq!(entry_count_label(1), "1 entry");
    assert_eq!(entry_count_label(7), "7 entries");
}

#[test]
fn tool_label_names_each_tool() {
    assert_eq!(tool_label(Tool::Pan), "Pan");
    assert_eq!(tool_label(Tool::PlacePin), "Place pin");
}

#[test]
fn camera_label_shows_zoom_and_offset() {
    let state = MappingState::default();
    assert!(camera_label(&state).starts_with("100% @ "));
}

#[test]
fn sync_class_reflects_load_state() {
    assert!(sync_class(true).ends_with("--connected"));
    assert!(sync_class(false).ends_with("--disconnected"));
}
