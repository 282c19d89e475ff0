//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::pages::{
    dashboard::DashboardPage, deck_plan::DeckPlanPage, materials::MaterialsPage, vessel::VesselPage,
};
use crate::state::materials::MaterialsState;
use crate::state::registry::Registry;
use crate::state::transfer::TransferPayload;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::storage::LocalStore;

/// Read-only registry shared by every page.
pub type SharedRegistry = Arc<Registry>;

/// Bumped whenever stored data changes (this tab or another). Views that read
/// storage track it to reload.
#[derive(Clone, Copy, Debug)]
pub struct StorageRevision(pub RwSignal<u64>);

/// Entry handed from a transfer's source view to its destination view.
#[derive(Clone, Copy, Debug)]
pub struct PendingTransfer(pub RwSignal<Option<TransferPayload>>);

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let registry: SharedRegistry = Arc::new(Registry::mock());
    let ui = RwSignal::new(UiState { dark_mode: dark_mode::read_preference(&LocalStore), ..UiState::default() });
    let materials = RwSignal::new(MaterialsState::from_registry(&registry));
    let revision = StorageRevision(RwSignal::new(0));
    let transfer = PendingTransfer(RwSignal::new(None));

    provide_context(registry);
    provide_context(ui);
    provide_context(materials);
    provide_context(revision);
    provide_context(transfer);

    Effect::new(move || dark_mode::apply(ui.get().dark_mode));

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener_untyped(crate::util::storage::STORAGE_CHANGED_EVENT, move |_| {
            revision.0.update(|r| *r += 1);
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Title text="IHM Dashboard"/>

        <Router>
            <div class="app" class:app--collapsed=move || ui.get().sidebar_collapsed>
                <Sidebar/>
                <div class="app__main">
                    <Header/>
                    <main class="app__content">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=DashboardPage/>
                            <Route path=StaticSegment("materials") view=MaterialsPage/>
                            <Route path=(StaticSegment("vessels"), ParamSegment("name")) view=VesselPage/>
                            <Route path=StaticSegment("deck-plan") view=DeckPlanPage/>
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
