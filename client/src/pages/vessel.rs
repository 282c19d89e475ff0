//! Vessel page: metadata and the deck sections used as mapping surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections come from `vessel_sections_<vessel>`, seeded from the registry on
//! the first visit. Each row links into the mapping view for that section and
//! shows how many entries are stored there; counts refresh whenever storage
//! changes.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::{SharedRegistry, StorageRevision};
use crate::state::inventory::{SectionKey, load_sections, stored_entry_count};
use crate::state::registry::{DeckSection, Vessel};
use crate::util::alert;
use crate::util::query::{DeckPlanParams, decode_param, materials_href};
use crate::util::storage::LocalStore;

/// Sections with their stored entry counts.
fn section_rows(registry: &crate::state::registry::Registry, vessel: &Vessel) -> Vec<(DeckSection, usize)> {
    let sections = match load_sections(&LocalStore, registry, &vessel.name) {
        Ok(sections) => sections,
        Err(err) => {
            alert::report(&err.into());
            return Vec::new();
        }
    };
    sections
        .into_iter()
        .map(|s| {
            let key = SectionKey::new(vessel.name.clone(), s.name.clone());
            let count = stored_entry_count(&LocalStore, &key).unwrap_or_else(|err| {
                log::warn!("vessel: {err}");
                0
            });
            (s, count)
        })
        .collect()
}

#[component]
pub fn VesselPage() -> impl IntoView {
    let registry = expect_context::<SharedRegistry>();
    let revision = expect_context::<StorageRevision>();
    let params = use_params_map();

    let vessel = {
        let registry = registry.clone();
        move || {
            let name = params.read().get("name").map(|n| decode_param(&n)).unwrap_or_default();
            registry.vessel(&name).cloned()
        }
    };

    view! {
        <div class="vessel-page">
            {move || {
                let Some(v) = vessel() else {
                    return view! { <p class="vessel-page__missing">"Unknown vessel."</p> }.into_any();
                };
                let registry = registry.clone();
                let rows_vessel = v.clone();
                let rows = move || {
                    revision.0.track();
                    section_rows(&registry, &rows_vessel)
                        .into_iter()
                        .map(|(section, count)| {
                            let href = DeckPlanParams::for_section(&rows_vessel, &section).href();
                            let crop = section.crop.to_param();
                            view! {
                                <tr>
                                    <td><a href=href>{section.name}</a></td>
                                    <td class="vessel-page__mono">{crop}</td>
                                    <td>{count}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                };
                let status_class = format!("status-badge status-badge--{}", v.status.label().to_lowercase());
                view! {
                    <h1 class="page-title">{v.name.clone()}</h1>
                    <span class=status_class>{v.status.label()}</span>
                    <dl class="vessel-page__facts">
                        <dt>"IMO"</dt><dd>{v.imo.clone()}</dd>
                        <dt>"Type"</dt><dd>{v.vessel_type.clone()}</dd>
                        <dt>"Gross tonnage"</dt><dd>{v.gross_tonnage}</dd>
                        <dt>"Flag"</dt><dd>{v.flag.clone()}</dd>
                        <dt>"Class society"</dt><dd>{v.class_society.clone()}</dd>
                        <dt>"SOC reference"</dt><dd>{v.soc_reference.clone()}</dd>
                        <dt>"SOC expiry"</dt><dd>{v.soc_expiry.clone()}</dd>
                    </dl>
                    <a class="vessel-page__materials" href=materials_href(Some(&v.name))>"View materials"</a>
                    <h2 class="section-title">"Deck sections"</h2>
                    <table class="data-table">
                        <thead>
                            <tr><th>"Section"</th><th>"Crop"</th><th>"Entries"</th></tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                }
                    .into_any()
            }}
        </div>
    }
}
