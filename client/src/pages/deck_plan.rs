//! Deck-plan mapping page: one deck section of one vessel as a pin surface.
//!
//! ARCHITECTURE
//! ============
//! The page is the route-level coordinator between the URL and
//! `MappingState`. Every change of the query parameters reopens the section:
//! the crop is resolved, the stored inventory loaded, and then either a
//! material is focused or add mode is switched on.
//!
//! SYSTEM CONTEXT
//! ==============
//! A transfer arrives through the `PendingTransfer` context. When its target
//! matches this section the payload is taken and, after a short delay, the
//! user is prompted and the add form prefilled. Storage changes from any view
//! bump `StorageRevision`, which reloads the current list.
//!
//! TRADE-OFFS
//! ==========
//! Route changes do not remount this component, so section switches reuse the
//! same state signal. The host size is re-measured on each open and, debounced,
//! on window resize; both reset the camera to 100 % with the crop centred.

use deckplan::camera::{Rect, Size};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::{PendingTransfer, SharedRegistry, StorageRevision};
use crate::components::add_material_form::AddMaterialForm;
use crate::components::entry_list::EntryList;
use crate::components::plan_host::PlanHost;
use crate::components::status_bar::StatusBar;
use crate::components::transfer_dialog::TransferDialog;
use crate::state::inventory::load_sections;
use crate::state::mapping::MappingState;
use crate::state::transfer::TransferPayload;
use crate::util::alert;
use crate::util::query::{DeckPlanParams, vessel_href};
use crate::util::storage::LocalStore;

#[cfg(feature = "csr")]
use crate::util::plan_viewport::sync_viewport;
#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

/// Delay before prompting about an arriving transfer, so the plan is drawn first.
pub const TRANSFER_PROMPT_DELAY_MS: u32 = 300;
/// Quiet period after the last window resize before re-measuring the host.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Crop used when neither the URL nor the sections store knows the section.
const FALLBACK_CROP: Rect = Rect { x: 0.0, y: 0.0, width: 1.0, height: 1.0 };

#[cfg(feature = "csr")]
fn schedule_arrival(state: RwSignal<MappingState>, payload: TransferPayload) {
    Timeout::new(TRANSFER_PROMPT_DELAY_MS, move || {
        alert::show(&payload.arrival_message());
        // The page may be gone by now.
        if state.try_update(|s| s.receive_transfer(&payload)).is_none() {
            log::warn!("transfer: {} arrived after leaving the page", payload.entry.id);
        }
    })
    .forget();
}

#[cfg(not(feature = "csr"))]
fn schedule_arrival(state: RwSignal<MappingState>, payload: TransferPayload) {
    state.update(|s| s.receive_transfer(&payload));
}

/// Deck-plan mapping page.
#[component]
pub fn DeckPlanPage() -> impl IntoView {
    let registry = expect_context::<SharedRegistry>();
    let revision = expect_context::<StorageRevision>();
    let pending = expect_context::<PendingTransfer>();
    let query = use_query_map();
    let navigate = use_navigate();

    let state = RwSignal::new(MappingState::default());
    let host_ref = NodeRef::<leptos::html::Div>::new();

    let params = Memo::new(move |_| {
        query.with(|q| DeckPlanParams::from_lookup(|k| q.get(k)))
    });
    let vessel = {
        let registry = registry.clone();
        Memo::new(move |_| registry.vessel(&params.read().vessel).cloned())
    };

    // Reopen the section whenever the URL changes.
    Effect::new(move || {
        let p = params.get();
        let vessel = vessel.get();
        let sections = load_sections(&LocalStore, &registry, &p.vessel).unwrap_or_else(|err| {
            alert::report(&err.into());
            Vec::new()
        });
        let crop = p.resolve_crop(&sections, vessel.as_ref()).unwrap_or(FALLBACK_CROP);
        let key = p.section_key();

        #[cfg(feature = "csr")]
        sync_viewport(state, host_ref);

        let mut opened = Ok(());
        state.update(|s| {
            s.sections = sections;
            opened = s.open_section(&LocalStore, key.clone(), crop);
        });
        match opened {
            Ok(()) => log::info!("mapping: opened {} / {}", key.vessel, key.section),
            Err(err) => alert::report(&err.into()),
        }

        if let Some(id) = p.material.as_deref() {
            let mut found = false;
            state.update(|s| found = s.focus_material(id));
            if !found {
                log::warn!("mapping: entry {id} not in {}", key.section);
            }
        } else if p.add_mode {
            state.update(MappingState::enter_add_mode);
        }

        if let Some(payload) = pending.0.get_untracked().filter(|t| t.is_for(&key)) {
            pending.0.set(None);
            schedule_arrival(state, payload);
        }
    });

    // Reload when stored data changes after the section was opened.
    Effect::new(move |seen: Option<u64>| {
        let current = revision.0.get();
        if seen.is_some_and(|prev| prev != current) {
            let mut reloaded = Ok(());
            state.update(|s| reloaded = s.reload(&LocalStore));
            if let Err(err) = reloaded {
                alert::report(&err.into());
            }
        }
        current
    });

    #[cfg(feature = "csr")]
    {
        let resize_timer = StoredValue::new_local(None::<Timeout>);
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            // Replacing the timer drops, and so cancels, the previous one.
            let timer = Timeout::new(RESIZE_DEBOUNCE_MS, move || sync_viewport(state, host_ref));
            resize_timer.set_value(Some(timer));
        });
        on_cleanup(move || handle.remove());
    }

    let plan = Signal::derive(move || params.read().resolve_plan(vessel.read().as_ref()));
    let plan_size = Signal::derive(move || {
        vessel
            .read()
            .as_ref()
            .map_or_else(|| state.with(|s| s.engine.crop.size()), |v| Size::new(v.plan_width, v.plan_height))
    });

    let section_options = move || {
        let current = params.read().section.clone();
        state.with(|s| {
            s.sections
                .iter()
                .map(|section| {
                    let selected = section.name == current;
                    view! { <option value=section.name.clone() selected=selected>{section.name.clone()}</option> }
                })
                .collect_view()
        })
    };

    let on_section_change = move |ev: leptos::ev::Event| {
        let name = event_target_value(&ev);
        let Some(v) = vessel.get_untracked() else {
            return;
        };
        let target = state.with_untracked(|s| s.sections.iter().find(|sec| sec.name == name).cloned());
        if let Some(section) = target {
            navigate(&DeckPlanParams::for_section(&v, &section).href(), Default::default());
        }
    };

    let title = move || {
        let p = params.read();
        if p.section.is_empty() { p.vessel.clone() } else { format!("{} · {}", p.vessel, p.section) }
    };

    view! {
        <div class="deck-plan-page">
            <div class="deck-plan-page__toolbar">
                <a class="deck-plan-page__back" href=move || vessel_href(&params.read().vessel)>"← Vessel"</a>
                <h1 class="page-title">{title}</h1>
                <select class="deck-plan-page__sections" on:change=on_section_change>
                    {section_options}
                </select>
                <Show
                    when=move || state.with(MappingState::is_adding)
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" on:click=move |_| state.update(MappingState::enter_add_mode)>
                                "Add material"
                            </button>
                        }
                    }
                >
                    <button class="btn" on:click=move |_| state.update(MappingState::cancel_add)>"Cancel placement"</button>
                </Show>
            </div>
            <div class="deck-plan-page__body">
                <PlanHost state=state host_ref=host_ref plan=plan plan_size=plan_size/>
                <Show when=move || state.with(MappingState::is_adding) fallback=move || view! { <EntryList state=state/> }>
                    <AddMaterialForm state=state/>
                </Show>
            </div>
            <StatusBar state=state/>
            <Show when=move || state.with(|s| s.transfer_open)>
                <TransferDialog state=state vessel=vessel/>
            </Show>
        </div>
    }
}
