//! Local UI chrome state (sidebar, search, dark mode).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`materials`, `mapping`)
//! so the navigation shell can evolve independently of the pages.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Navigation shell state, provided as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
    /// Top-bar search text, applied by the materials view.
    pub search: String,
    /// Vessel list in the sidebar is expanded.
    pub vessels_expanded: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_vessels(&mut self) {
        self.vessels_expanded = !self.vessels_expanded;
    }

    pub fn set_search(&mut self, text: &str) {
        text.clone_into(&mut self.search);
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Theme attribute value for the current mode.
    pub fn theme(&self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }
}
