//! Entries stored for the current deck section, plus the selected entry's card.

use leptos::prelude::*;

use crate::state::inventory::MaterialEntry;
use crate::state::mapping::MappingState;

fn detail_card(entry: MaterialEntry, state: RwSignal<MappingState>) -> impl IntoView {
    let location = [entry.compartment.as_str(), entry.equipment.as_str(), entry.component.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" / ");
    let documents = entry.documents.iter().map(|d| d.name.clone()).collect::<Vec<_>>().join(", ");
    let pin = entry.pin.map(|p| format!("{:.0}, {:.0}", p.x, p.y)).unwrap_or_default();
    view! {
        <div class="entry-card">
            <div class="entry-card__title">{entry.name.clone()}</div>
            <dl class="entry-card__facts">
                <dt>"IHM part"</dt><dd>{entry.ihm_part.label()}</dd>
                <dt>"HM status"</dt><dd>{entry.hm_status.label()}</dd>
                <dt>"Hazardous materials"</dt><dd>{entry.hazardous_materials.join(", ")}</dd>
                <dt>"Location"</dt><dd>{location}</dd>
                <dt>"Material"</dt><dd>{entry.material.clone()}</dd>
                <dt>"Quantity"</dt><dd>{format!("{} {}", entry.quantity, entry.unit)}</dd>
                <dt>"Documents"</dt><dd>{documents}</dd>
                <dt>"Pin"</dt><dd>{pin}</dd>
            </dl>
            <div class="entry-card__actions">
                <button class="btn" on:click=move |_| state.update(MappingState::open_transfer)>"Transfer"</button>
                <button class="btn" on:click=move |_| state.update(|s| s.selected = None)>"Close"</button>
            </div>
        </div>
    }
}

#[component]
pub fn EntryList(state: RwSignal<MappingState>) -> impl IntoView {
    let rows = move || {
        state.with(|s| {
            if s.inventory.entries.is_empty() {
                return view! { <li class="entry-list__empty">"No materials mapped in this section."</li> }.into_any();
            }
            s.inventory
                .entries
                .iter()
                .map(|entry| {
                    let id = entry.id.clone();
                    let selected = s.selected.as_deref() == Some(entry.id.as_str());
                    view! {
                        <li
                            class="entry-list__item"
                            class:entry-list__item--selected=selected
                            on:click=move |_| {
                                state.update(|s| {
                                    s.focus_material(&id);
                                });
                            }
                        >
                            <span class="entry-list__name">{entry.name.clone()}</span>
                            <span class="entry-list__meta">{entry.hm_status.label()}</span>
                        </li>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    let card = move || state.with(|s| s.selected_entry().cloned()).map(|entry| detail_card(entry, state));

    view! {
        <aside class="entry-list">
            <div class="entry-list__head">
                <span class="entry-list__title">"Section inventory"</span>
                <span class="entry-list__count">{move || state.with(|s| s.inventory.entries.len())}</span>
            </div>
            <ul class="entry-list__items">{rows}</ul>
            {card}
        </aside>
    }
}
