//! Bottom status bar of the mapping view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the active section, entry count, tool and camera so users can tell
//! where they are and whether the stored list has been loaded.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;

use deckplan::input::Tool;

use crate::state::mapping::MappingState;

/// Status bar under the deck plan.
#[component]
pub fn StatusBar(state: RwSignal<MappingState>) -> impl IntoView {
    let section = move || state.with(section_label);
    let entries = move || state.with(|s| entry_count_label(s.inventory.entries.len()));
    let tool = move || state.with(|s| tool_label(s.engine.tool));
    let camera = move || state.with(camera_label);
    let dot_class = move || state.with(|s| sync_class(s.inventory.is_synced()));

    view! {
        <div class="status-bar">
            <span class=dot_class></span>
            <span class="status-bar__item">{section}</span>
            <span class="status-bar__item">{entries}</span>
            <span class="status-bar__item">{tool}</span>
            <span class="status-bar__item status-bar__item--mono">{camera}</span>
        </div>
    }
}

fn section_label(state: &MappingState) -> String {
    state
        .inventory
        .current()
        .map_or_else(|| "No section".to_owned(), |k| format!("{} · {}", k.vessel, k.section))
}

fn entry_count_label(count: usize) -> String {
    match count {
        1 => "1 entry".to_owned(),
        n => format!("{n} entries"),
    }
}

fn tool_label(tool: Tool) -> &'static str {
    match tool {
        Tool::Pan => "Pan",
        Tool::PlacePin => "Place pin",
    }
}

fn camera_label(state: &MappingState) -> String {
    let cam = &state.engine.camera;
    format!("{}% @ {:.0}, {:.0}", cam.zoom_pct, cam.offset_x, cam.offset_y)
}

fn sync_class(synced: bool) -> &'static str {
    if synced {
        "status-bar__dot status-bar__dot--connected"
    } else {
        "status-bar__dot status-bar__dot--disconnected"
    }
}
