use super::*;

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_collapsed);
    assert!(state.search.is_empty());
    assert_eq!(state.theme(), "light");
}

#[test]
fn toggles_flip() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    state.toggle_vessels();
    assert!(state.sidebar_collapsed);
    assert!(state.vessels_expanded);
    state.toggle_sidebar();
    assert!(!state.sidebar_collapsed);
}

#[test]
fn search_set_and_clear() {
    let mut state = UiState::default();
    state.set_search("asbestos");
    assert_eq!(state.search, "asbestos");
    state.clear_search();
    assert!(state.search.is_empty());
}

#[test]
fn dark_theme_label() {
    let state = UiState { dark_mode: true, ..UiState::default() };
    assert_eq!(state.theme(), "dark");
}
