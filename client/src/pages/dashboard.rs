//! Dashboard page: fleet statistics and one card per vessel.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Numbers come from the static registry plus the
//! in-memory materials list, so edits made in the materials view show up here
//! until the next reload.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::app::SharedRegistry;
use crate::components::vessel_card::VesselCard;
use crate::state::materials::MaterialsState;
use crate::state::registry::Material;

/// Count and average completion of `vessel`'s materials.
fn vessel_progress(materials: &[Material], vessel: &str) -> (usize, f64) {
    let completions = materials
        .iter()
        .filter(|m| m.vessel == vessel)
        .map(|m| f64::from(m.completion))
        .collect::<Vec<_>>();
    if completions.is_empty() {
        return (0, 0.0);
    }
    let count = completions.len();
    let sum: f64 = completions.iter().sum();
    (count, sum / f64::from(u32::try_from(count).unwrap_or(u32::MAX)))
}

/// Dashboard page: stat tiles on top, vessel cards below.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let registry = expect_context::<SharedRegistry>();
    let materials = expect_context::<RwSignal<MaterialsState>>();

    let stats = {
        let registry = registry.clone();
        move || {
            let mut live = (*registry).clone();
            live.materials = materials.get().materials;
            live.stats()
        }
    };

    let cards = move || {
        let current = materials.get().materials;
        registry
            .vessels
            .iter()
            .map(|v| {
                let (count, average) = vessel_progress(&current, &v.name);
                view! { <VesselCard vessel=v.clone() material_count=count average_completion=average/> }
            })
            .collect_view()
    };

    view! {
        <div class="dashboard-page">
            <h1 class="page-title">"Fleet overview"</h1>
            <section class="dashboard-page__stats">
                {move || {
                    let s = stats();
                    view! {
                        <div class="stat-tile">
                            <span class="stat-tile__value">{s.total_vessels}</span>
                            <span class="stat-tile__label">"Vessels"</span>
                        </div>
                        <div class="stat-tile stat-tile--ok">
                            <span class="stat-tile__value">{s.compliant_vessels}</span>
                            <span class="stat-tile__label">"Compliant"</span>
                        </div>
                        <div class="stat-tile stat-tile--warn">
                            <span class="stat-tile__value">{s.warning_vessels}</span>
                            <span class="stat-tile__label">"SOC expiring"</span>
                        </div>
                        <div class="stat-tile stat-tile--bad">
                            <span class="stat-tile__value">{s.expired_vessels}</span>
                            <span class="stat-tile__label">"SOC expired"</span>
                        </div>
                        <div class="stat-tile">
                            <span class="stat-tile__value">{s.hazard_materials}</span>
                            <span class="stat-tile__label">{format!("Hazardous of {}", s.total_materials)}</span>
                        </div>
                        <div class="stat-tile">
                            <span class="stat-tile__value">{s.pending_materials}</span>
                            <span class="stat-tile__label">"Awaiting compliance"</span>
                        </div>
                        <div class="stat-tile">
                            <span class="stat-tile__value">{format!("{:.0}%", s.average_completion)}</span>
                            <span class="stat-tile__label">"Average completion"</span>
                        </div>
                    }
                }}
            </section>
            <section class="dashboard-page__vessels">{cards}</section>
        </div>
    }
}
