//! Materials record view: filtered registry table, detail panel, and the
//! vessel-wide inventory mapped on deck plans.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filters live in a page-local signal; the header search box feeds the
//! `search` criterion and the optional `vessel` query parameter scopes the
//! table. The mapped-inventory list reads `vessel_inventory_<vessel>` straight
//! from storage and refreshes on every storage change.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::{SharedRegistry, StorageRevision};
use crate::components::filter_panel::FilterPanel;
use crate::components::material_detail_panel::MaterialDetailPanel;
use crate::components::material_table::MaterialTable;
use crate::state::filters::MaterialFilter;
use crate::state::inventory::{VesselInventoryRecord, load_sections, load_vessel_records};
use crate::state::materials::MaterialsState;
use crate::state::registry::Material;
use crate::state::ui::UiState;
use crate::util::alert;
use crate::util::query::DeckPlanParams;
use crate::util::storage::LocalStore;

#[component]
pub fn MaterialsPage() -> impl IntoView {
    let registry = expect_context::<SharedRegistry>();
    let materials = expect_context::<RwSignal<MaterialsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let revision = expect_context::<StorageRevision>();
    let query = use_query_map();

    let filter = RwSignal::new(MaterialFilter::default());

    let vessel_param = move || {
        query
            .read()
            .get("vessel")
            .filter(|v| !v.is_empty())
    };

    Effect::new(move || {
        let search = ui.get().search;
        let vessel = vessel_param();
        filter.update(|f| {
            f.search = search;
            f.vessel = vessel;
        });
    });

    let rows = Signal::derive(move || {
        let current = filter.get();
        materials.with(|s| current.apply(&s.materials).into_iter().cloned().collect::<Vec<Material>>())
    });

    let heading = move || match vessel_param() {
        Some(v) => format!("Materials · {v}"),
        None => "Materials".to_owned(),
    };

    let mapped = move || {
        revision.0.track();
        let Some(vessel_name) = vessel_param() else {
            return ().into_any();
        };
        let records = match load_vessel_records(&LocalStore, &vessel_name) {
            Ok(records) => records,
            Err(err) => {
                alert::report(&err.into());
                Vec::new()
            }
        };
        let vessel = registry.vessel(&vessel_name).cloned();
        let sections = load_sections(&LocalStore, &registry, &vessel_name).unwrap_or_else(|err| {
            log::warn!("materials: {err}");
            Vec::new()
        });
        let record_row = move |record: VesselInventoryRecord| {
            let link = vessel.as_ref().and_then(|v| {
                sections
                    .iter()
                    .find(|s| s.name == record.section)
                    .map(|s| DeckPlanParams::for_section(v, s).with_material(record.id.clone()).href())
            });
            view! {
                <tr>
                    <td>{record.name.clone()}</td>
                    <td>{record.ihm_part.label()}</td>
                    <td>{record.hm_status.label()}</td>
                    <td>{record.hazardous_materials.join(", ")}</td>
                    <td>{format!("{} {}", record.quantity, record.unit)}</td>
                    <td>
                        {match link {
                            Some(href) => view! { <a href=href>{record.section.clone()}</a> }.into_any(),
                            None => record.section.clone().into_any(),
                        }}
                    </td>
                </tr>
            }
        };
        view! {
            <h2 class="section-title">"Mapped on deck plans"</h2>
            {if records.is_empty() {
                view! { <p class="materials-page__empty">"Nothing mapped for this vessel yet."</p> }.into_any()
            } else {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"IHM part"</th>
                                <th>"HM status"</th>
                                <th>"Hazardous materials"</th>
                                <th>"Quantity"</th>
                                <th>"Section"</th>
                            </tr>
                        </thead>
                        <tbody>{records.into_iter().map(record_row).collect_view()}</tbody>
                    </table>
                }
                    .into_any()
            }}
        }
            .into_any()
    };

    view! {
        <div class="materials-page">
            <h1 class="page-title">{heading}</h1>
            <div class="materials-page__layout">
                <FilterPanel filter=filter/>
                <div class="materials-page__table">
                    <p class="materials-page__count">{move || format!("{} materials", rows.get().len())}</p>
                    <MaterialTable rows=rows/>
                    {mapped}
                </div>
                <MaterialDetailPanel/>
            </div>
        </div>
    }
}
