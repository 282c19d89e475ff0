//! Collapsible navigation sidebar: pages and the vessel list.
//!
//! ARCHITECTURE
//! ============
//! Reads the registry for the vessel list and `UiState` for collapse and
//! expansion flags. Links are plain anchors; the router intercepts them.

use leptos::prelude::*;

use crate::app::SharedRegistry;
use crate::state::ui::UiState;
use crate::util::query::{materials_href, vessel_href};

#[component]
pub fn Sidebar() -> impl IntoView {
    let registry = expect_context::<SharedRegistry>();
    let ui = expect_context::<RwSignal<UiState>>();

    let collapsed = move || ui.get().sidebar_collapsed;
    let vessels_open = move || ui.get().vessels_expanded;

    let vessel_links = registry
        .vessels
        .iter()
        .map(|v| {
            let href = vessel_href(&v.name);
            let status_class = format!("sidebar__status sidebar__status--{}", v.status.label().to_lowercase());
            view! {
                <li>
                    <a class="sidebar__vessel" href=href>
                        <span class=status_class></span>
                        <span class="sidebar__label">{v.name.clone()}</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar" class:sidebar--collapsed=collapsed>
            <div class="sidebar__brand">
                <span class="sidebar__logo">"IHM"</span>
                <Show when=move || !collapsed()>
                    <span class="sidebar__title">"Hazmat Dashboard"</span>
                </Show>
                <button
                    class="sidebar__collapse"
                    title="Toggle sidebar"
                    aria-label="Toggle sidebar"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    {move || if collapsed() { "»" } else { "«" }}
                </button>
            </div>
            <ul class="sidebar__nav">
                <li>
                    <a class="sidebar__link" href="/">
                        <span class="sidebar__label">"Dashboard"</span>
                    </a>
                </li>
                <li>
                    <a class="sidebar__link" href=materials_href(None)>
                        <span class="sidebar__label">"Materials"</span>
                    </a>
                </li>
                <li>
                    <button class="sidebar__link sidebar__link--group" on:click=move |_| ui.update(UiState::toggle_vessels)>
                        <span class="sidebar__label">"Vessels"</span>
                        <span class="sidebar__chevron">{move || if vessels_open() { "▾" } else { "▸" }}</span>
                    </button>
                    <ul class="sidebar__vessels" class:sidebar__vessels--open=vessels_open>
                        {vessel_links}
                    </ul>
                </li>
            </ul>
        </nav>
    }
}
