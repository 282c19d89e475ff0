use super::*;

use crate::state::registry::Registry;

fn selected(id: &str) -> MaterialsState {
    let mut state = MaterialsState::from_registry(&Registry::mock());
    state.select(id);
    state
}

#[test]
fn nothing_selected_shows_empty_body() {
    let state = MaterialsState::from_registry(&Registry::mock());
    assert_eq!(panel_body(false, state), PanelBody::Empty);
}

#[test]
fn selection_shows_record() {
    let state = selected("MAT-002");
    let body = panel_body(false, state);
    assert!(matches!(body, PanelBody::Read(ref m) if m.id == "MAT-002"));
}

#[test]
fn editing_shows_draft_with_its_changes() {
    let mut state = selected("MAT-002");
    state.begin_edit();
    if let Some(draft) = state.draft.as_mut() {
        draft.material.name = "Renamed".to_owned();
    }
    match panel_body(true, state) {
        PanelBody::Edit(draft) => assert_eq!(draft.material.name, "Renamed"),
        other => panic!("expected edit body, got {other:?}"),
    }
}

#[test]
fn stale_edit_flag_falls_back_to_record() {
    let state = selected("MAT-002");
    assert!(matches!(panel_body(true, state), PanelBody::Read(_)));
}
