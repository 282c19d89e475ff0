//! Side panel for the selected material: details, linked purchase order and
//! the edit form.
//!
//! DESIGN
//! ======
//! The panel renders either the record or its draft. All edit rules live in
//! `MaterialsState`; this component only routes input into the draft and
//! reports validation errors.

#[cfg(test)]
#[path = "material_detail_panel_test.rs"]
mod material_detail_panel_test;

use leptos::prelude::*;

use crate::app::SharedRegistry;
use crate::state::materials::{MaterialDraft, MaterialsState};
use crate::state::registry::{ComplianceStatus, IhmPart, Material, RiskCategory};
use crate::util::alert;

/// What the panel body shows.
#[derive(Clone, Debug, PartialEq)]
enum PanelBody {
    Edit(MaterialDraft),
    Read(Material),
    Empty,
}

fn panel_body(editing: bool, state: MaterialsState) -> PanelBody {
    let selected = state.selected_material().cloned();
    match (editing, state.draft, selected) {
        (true, Some(draft), _) => PanelBody::Edit(draft),
        (_, _, Some(m)) => PanelBody::Read(m),
        _ => PanelBody::Empty,
    }
}

fn update_draft(materials: RwSignal<MaterialsState>, f: impl FnOnce(&mut MaterialDraft)) {
    materials.update(|s| {
        if let Some(draft) = s.draft.as_mut() {
            f(draft);
        }
    });
}

#[component]
pub fn MaterialDetailPanel() -> impl IntoView {
    let registry = expect_context::<SharedRegistry>();
    let materials = expect_context::<RwSignal<MaterialsState>>();

    let on_save = move |_| {
        let mut result = Ok(());
        materials.update(|s| result = s.save_edit());
        if let Err(err) = result {
            alert::report(&err);
        }
    };

    let read_view = move |m: Material| {
        let po = m.po_id.as_deref().and_then(|id| registry.purchase_order(id)).cloned();
        let tags = m.tags.join(", ");
        view! {
            <dl class="detail-panel__facts">
                <dt>"Vessel"</dt><dd>{m.vessel.clone()}</dd>
                <dt>"IHM part"</dt><dd>{m.ihm_part.label()}</dd>
                <dt>"Risk"</dt><dd>{m.risk.label()}</dd>
                <dt>"Compliance"</dt><dd>{m.compliance.label()}</dd>
                <dt>"Completion"</dt><dd>{format!("{}%", m.completion)}</dd>
                <dt>"Threshold"</dt><dd>{format!("{} ({})", m.threshold_value, m.threshold_message)}</dd>
                <dt>"Tags"</dt><dd>{tags}</dd>
                <dt>"Zone"</dt><dd>{m.zone.clone().unwrap_or_else(|| "n/a".to_owned())}</dd>
            </dl>
            {po.map(|po| {
                view! {
                    <section class="detail-panel__po">
                        <h3 class="detail-panel__subtitle">{format!("Purchase order {}", po.id)}</h3>
                        <p>{po.description}</p>
                        <p class="detail-panel__muted">{format!("{} · ordered {} · {:?}", po.supplier, po.order_date, po.status)}</p>
                    </section>
                }
            })}
            <div class="detail-panel__actions">
                <button class="btn btn--primary" on:click=move |_| materials.update(MaterialsState::begin_edit)>"Edit"</button>
            </div>
        }
            .into_any()
    };

    let edit_view = move |draft: MaterialDraft| {
        let part_options = IhmPart::ALL
            .into_iter()
            .map(|p| view! { <option value=p.label() selected=p == draft.material.ihm_part>{p.label()}</option> })
            .collect_view();
        let risk_options = RiskCategory::ALL
            .into_iter()
            .map(|r| view! { <option value=r.label() selected=r == draft.material.risk>{r.label()}</option> })
            .collect_view();
        let compliance_options = ComplianceStatus::ALL
            .into_iter()
            .map(|c| view! { <option value=c.label() selected=c == draft.material.compliance>{c.label()}</option> })
            .collect_view();
        view! {
            <form class="detail-panel__form" on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <label class="form-field">
                    "Name"
                    <input
                        prop:value=draft.material.name.clone()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update_draft(materials, |d| d.material.name = value);
                        }
                    />
                </label>
                <label class="form-field">
                    "IHM part"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        update_draft(materials, |d| {
                            if let Some(part) = IhmPart::from_label(&value) {
                                d.material.ihm_part = part;
                            }
                        });
                    }>{part_options}</select>
                </label>
                <label class="form-field">
                    "Risk"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        update_draft(materials, |d| {
                            if let Some(risk) = RiskCategory::ALL.into_iter().find(|r| r.label() == value) {
                                d.material.risk = risk;
                            }
                        });
                    }>{risk_options}</select>
                </label>
                <label class="form-field">
                    "Compliance"
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        update_draft(materials, |d| {
                            if let Some(status) = ComplianceStatus::ALL.into_iter().find(|c| c.label() == value) {
                                d.material.compliance = status;
                            }
                        });
                    }>{compliance_options}</select>
                </label>
                <label class="form-field">
                    "Completion (%)"
                    <input
                        inputmode="numeric"
                        prop:value=draft.completion.clone()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update_draft(materials, |d| d.completion = value);
                        }
                    />
                </label>
                <label class="form-field">
                    "Threshold message"
                    <input
                        prop:value=draft.material.threshold_message.clone()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update_draft(materials, |d| d.material.threshold_message = value);
                        }
                    />
                </label>
                <div class="detail-panel__actions">
                    <button class="btn btn--primary" type="button" on:click=on_save>"Save"</button>
                    <button class="btn" type="button" on:click=move |_| materials.update(MaterialsState::cancel_edit)>
                        "Cancel"
                    </button>
                </div>
            </form>
        }
            .into_any()
    };

    view! {
        <Show when=move || materials.get().selected_material().is_some()>
            <aside class="detail-panel">
                <div class="detail-panel__head">
                    <span class="detail-panel__title">
                        {move || materials.get().selected_material().map(|m| format!("{} · {}", m.id, m.name))}
                    </span>
                    <button class="detail-panel__close" aria-label="Close" on:click=move |_| materials.update(MaterialsState::close)>
                        "✕"
                    </button>
                </div>
                {
                    let read_view = read_view.clone();
                    move || {
                        // Tracks edit mode only; inputs own their text while editing.
                        let editing = materials.with(MaterialsState::is_editing);
                        match panel_body(editing, materials.get_untracked()) {
                            PanelBody::Edit(draft) => edit_view(draft),
                            PanelBody::Read(m) => read_view(m),
                            PanelBody::Empty => ().into_any(),
                        }
                    }
                }
            </aside>
        </Show>
    }
}
