//! Top bar: global material search and the dark-mode toggle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::query::{MATERIALS_PATH, materials_href};
use crate::util::storage::LocalStore;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let location = use_location();

    // Submitting a search from another page opens the materials view.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if location.pathname.get_untracked() != MATERIALS_PATH {
            navigate(&materials_href(None), NavigateOptions::default());
        }
    };

    let on_toggle_dark = move |_| {
        let next = dark_mode::toggle(&LocalStore, ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <header class="header">
            <form class="header__search" role="search" on:submit=on_submit>
                <input
                    class="header__search-input"
                    type="search"
                    placeholder="Search materials by name or ID"
                    prop:value=move || ui.get().search
                    on:input=move |ev| ui.update(|u| u.set_search(&event_target_value(&ev)))
                />
                <Show when=move || !ui.get().search.is_empty()>
                    <button
                        class="header__search-clear"
                        type="button"
                        aria-label="Clear search"
                        on:click=move |_| ui.update(UiState::clear_search)
                    >
                        "✕"
                    </button>
                </Show>
            </form>
            <button
                class="header__theme"
                title="Toggle dark mode"
                aria-label="Toggle dark mode"
                on:click=on_toggle_dark
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
