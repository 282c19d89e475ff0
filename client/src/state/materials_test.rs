use super::*;

fn state_with_selection() -> MaterialsState {
    let mut state = MaterialsState::from_registry(&Registry::mock());
    state.select("MAT-002");
    state
}

fn edit(state: &mut MaterialsState, f: impl FnOnce(&mut MaterialDraft)) {
    state.begin_edit();
    let draft = state.draft.as_mut().unwrap_or_else(|| panic!("no draft"));
    f(draft);
}

#[test]
fn select_and_close() {
    let mut state = state_with_selection();
    assert_eq!(state.selected_material().map(|m| m.name.as_str()), Some("Transformer oil"));
    state.close();
    assert!(state.selected_material().is_none());
}

#[test]
fn begin_edit_requires_selection() {
    let mut state = MaterialsState::from_registry(&Registry::mock());
    state.begin_edit();
    assert!(!state.is_editing());
}

#[test]
fn save_replaces_record() {
    let mut state = state_with_selection();
    edit(&mut state, |d| {
        d.material.name = " Transformer oil (drained) ".to_owned();
        d.completion = "80".to_owned();
    });
    state.save_edit().unwrap_or_else(|e| panic!("{e}"));
    let m = state.selected_material().unwrap_or_else(|| panic!("selected"));
    assert_eq!(m.name, "Transformer oil (drained)");
    assert_eq!(m.completion, 80);
    assert!(!state.is_editing());
}

#[test]
fn cancel_discards_changes() {
    let mut state = state_with_selection();
    edit(&mut state, |d| d.material.name = "Changed".to_owned());
    state.cancel_edit();
    assert_eq!(state.selected_material().map(|m| m.name.as_str()), Some("Transformer oil"));
}

#[test]
fn empty_name_is_rejected_and_draft_kept() {
    let mut state = state_with_selection();
    edit(&mut state, |d| d.material.name = "  ".to_owned());
    assert!(matches!(state.save_edit(), Err(AppError::MissingField("Name"))));
    assert!(state.is_editing());
}

#[test]
fn completion_must_be_in_range() {
    for (raw, expected) in [("101", 101), ("-1", -1), ("1000", 1000)] {
        let mut state = state_with_selection();
        edit(&mut state, |d| d.completion = raw.to_owned());
        match state.save_edit() {
            Err(AppError::CompletionOutOfRange(v)) => assert_eq!(v, expected),
            other => panic!("{raw}: {other:?}"),
        }
    }
}

#[test]
fn completion_must_be_numeric() {
    let mut state = state_with_selection();
    edit(&mut state, |d| d.completion = "most".to_owned());
    assert!(matches!(state.save_edit(), Err(AppError::MissingField("Completion"))));
}

#[test]
fn selecting_another_row_drops_draft() {
    let mut state = state_with_selection();
    edit(&mut state, |d| d.material.name = "Changed".to_owned());
    state.select("MAT-003");
    assert!(!state.is_editing());
    assert_eq!(
        state.materials.iter().find(|m| m.id == "MAT-002").map(|m| m.name.as_str()),
        Some("Transformer oil")
    );
}
