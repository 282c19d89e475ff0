//! Materials table. Rows come pre-filtered; clicking one selects it.

use leptos::prelude::*;

use crate::state::materials::MaterialsState;
use crate::state::registry::Material;

#[component]
pub fn MaterialTable(#[prop(into)] rows: Signal<Vec<Material>>) -> impl IntoView {
    let materials = expect_context::<RwSignal<MaterialsState>>();

    view! {
        <table class="data-table material-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Vessel"</th>
                    <th>"IHM part"</th>
                    <th>"Risk"</th>
                    <th>"Compliance"</th>
                    <th>"Completion"</th>
                    <th>"Threshold"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let selected = materials.get().selected;
                    let current = rows.get();
                    if current.is_empty() {
                        return view! {
                            <tr>
                                <td class="data-table__empty" colspan="8">"No materials match the current filters."</td>
                            </tr>
                        }
                            .into_any();
                    }
                    current
                        .into_iter()
                        .map(|m| {
                            let is_selected = selected.as_deref() == Some(m.id.as_str());
                            let id = m.id.clone();
                            let risk_class = format!("pill pill--{}", m.risk.label().to_lowercase());
                            view! {
                                <tr
                                    class="material-table__row"
                                    class:material-table__row--selected=is_selected
                                    on:click=move |_| materials.update(|s| s.select(&id))
                                >
                                    <td class="data-table__mono">{m.id.clone()}</td>
                                    <td>{m.name.clone()}</td>
                                    <td>{m.vessel.clone()}</td>
                                    <td>{m.ihm_part.label()}</td>
                                    <td><span class=risk_class>{m.risk.label()}</span></td>
                                    <td>{m.compliance.label()}</td>
                                    <td>{format!("{}%", m.completion)}</td>
                                    <td title=m.threshold_message.clone()>{m.threshold_value}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}
