//! Vessel summary card on the dashboard.
//!
//! DESIGN
//! ======
//! Shows just enough to pick a vessel (identity, SOC status and material
//! progress) and links to the vessel page for everything else.

use leptos::prelude::*;

use crate::state::registry::Vessel;
use crate::util::query::{materials_href, vessel_href};

/// A clickable card representing a vessel.
#[component]
pub fn VesselCard(vessel: Vessel, material_count: usize, average_completion: f64) -> impl IntoView {
    let href = vessel_href(&vessel.name);
    let materials = materials_href(Some(&vessel.name));
    let status = vessel.status.label();
    let status_class = format!("vessel-card__status vessel-card__status--{}", status.to_lowercase());
    let progress_style = format!("width:{average_completion:.0}%;");

    view! {
        <article class="vessel-card">
            <a class="vessel-card__link" href=href>
                <span class="vessel-card__name">{vessel.name.clone()}</span>
                <span class="vessel-card__meta">{format!("IMO {} · {}", vessel.imo, vessel.vessel_type)}</span>
            </a>
            <span class=status_class>{status}</span>
            <dl class="vessel-card__facts">
                <dt>"Flag"</dt>
                <dd>{vessel.flag.clone()}</dd>
                <dt>"SOC expiry"</dt>
                <dd>{vessel.soc_expiry.clone()}</dd>
            </dl>
            <div class="vessel-card__progress" title="Average material completion">
                <span class="vessel-card__progress-bar" style=progress_style></span>
            </div>
            <a class="vessel-card__materials" href=materials>{format!("{material_count} materials")}</a>
        </article>
    }
}
