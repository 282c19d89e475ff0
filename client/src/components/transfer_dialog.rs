//! Transfer dialog: pick a destination section for the selected entry.
//!
//! Confirming removes the entry from the current section right away, parks it
//! in the `PendingTransfer` context and navigates to the destination view,
//! which asks the user to place it again.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::PendingTransfer;
use crate::state::mapping::MappingState;
use crate::state::registry::Vessel;
use crate::state::transfer::{begin_transfer, destinations};
use crate::util::alert;
use crate::util::storage::LocalStore;

#[component]
pub fn TransferDialog(state: RwSignal<MappingState>, #[prop(into)] vessel: Signal<Option<Vessel>>) -> impl IntoView {
    let pending = expect_context::<PendingTransfer>();
    let navigate = use_navigate();

    let on_confirm = move |_| {
        let Some(vessel) = vessel.get_untracked() else {
            return;
        };
        let outcome = state.with_untracked(|s| {
            let (Some(source), Some(entry_id)) = (s.inventory.current(), s.selected.as_deref()) else {
                return None;
            };
            Some(begin_transfer(
                &LocalStore,
                &vessel,
                &s.sections,
                source,
                entry_id,
                s.transfer_destination.as_deref(),
            ))
        });
        match outcome {
            Some(Ok((payload, params))) => {
                state.update(|s| {
                    s.close_transfer();
                    s.selected = None;
                });
                pending.0.set(Some(payload));
                navigate(&params.href(), Default::default());
            }
            Some(Err(err)) => alert::report(&err),
            None => state.update(MappingState::close_transfer),
        }
    };

    let options = move || {
        state.with(|s| {
            let current = s.inventory.current().map(|k| k.section.clone()).unwrap_or_default();
            destinations(&s.sections, &current)
                .into_iter()
                .map(|section| view! { <option value=section.name.clone()>{section.name.clone()}</option> })
                .collect_view()
        })
    };

    let entry_name = move || state.with(|s| s.selected_entry().map(|e| e.name.clone()).unwrap_or_default());

    view! {
        <div class="dialog-backdrop" on:click=move |_| state.update(MappingState::close_transfer)>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Transfer material"</h2>
                <p class="dialog__body">{move || format!("Move \"{}\" to another deck section.", entry_name())}</p>
                <label class="form-field">
                    "Destination"
                    <select
                        prop:value=move || state.with(|s| s.transfer_destination.clone().unwrap_or_default())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.transfer_destination = Some(value).filter(|v| !v.is_empty()));
                        }
                    >
                        <option value="">"Select a section…"</option>
                        {options}
                    </select>
                </label>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=on_confirm>"Transfer"</button>
                    <button class="btn" on:click=move |_| state.update(MappingState::close_transfer)>"Cancel"</button>
                </div>
            </div>
        </div>
    }
}
