//! Add-material form shown while the placement tool is on.
//!
//! Inputs write straight into `MappingState::form`. Save runs the single
//! validation gate in `MappingState::submit`; any error is shown as a blocking
//! alert and leaves the form, pin and inventory untouched.

use leptos::prelude::*;

use crate::state::inventory::HmStatus;
use crate::state::mapping::MappingState;
use crate::state::material_form::MaterialForm;
use crate::state::registry::{HAZARDOUS_MATERIALS, IhmPart};
use crate::util::alert;
use crate::util::storage::LocalStore;

type Getter = fn(&MaterialForm) -> &String;
type Setter = fn(&mut MaterialForm, String);

fn text_field(state: RwSignal<MappingState>, label: &'static str, get: Getter, set: Setter) -> impl IntoView {
    view! {
        <label class="form-field">
            {label}
            <input
                prop:value=move || state.with(|s| get(&s.form).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| set(&mut s.form, value));
                }
            />
        </label>
    }
}

#[component]
pub fn AddMaterialForm(state: RwSignal<MappingState>) -> impl IntoView {
    let new_document = RwSignal::new(String::new());

    let on_save = move |_| {
        let mut result = Ok(String::new());
        state.update(|s| result = s.submit(&LocalStore));
        match result {
            Ok(id) => log::info!("mapping: saved entry {id}"),
            Err(err) => alert::report(&err),
        }
    };

    let on_add_document = move |_| {
        let name = new_document.get_untracked();
        state.update(|s| s.form.add_document(&name));
        new_document.set(String::new());
    };

    let part_options = IhmPart::ALL
        .into_iter()
        .map(|p| view! { <option value=p.label()>{p.label()}</option> })
        .collect_view();

    let status_options = HmStatus::ALL
        .into_iter()
        .map(|h| view! { <option value=h.label()>{h.label()}</option> })
        .collect_view();

    let hazard_checks = HAZARDOUS_MATERIALS
        .iter()
        .map(|&tag| {
            view! {
                <label class="add-form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.form.has_hazard(tag))
                        on:change=move |_| state.update(|s| s.form.toggle_hazard(tag))
                    />
                    {tag}
                </label>
            }
        })
        .collect_view();

    let documents = move || {
        state.with(|s| {
            s.form
                .documents
                .iter()
                .enumerate()
                .map(|(index, doc)| {
                    view! {
                        <li class="add-form__document">
                            <span>{doc.name.clone()}</span>
                            <button
                                type="button"
                                class="add-form__remove"
                                aria-label="Remove document"
                                on:click=move |_| state.update(|s| s.form.remove_document(index))
                            >
                                "✕"
                            </button>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    let pin_hint = move || {
        state.with(|s| match s.engine.pending_pin {
            Some(p) => format!("Pin at {:.0}, {:.0}", p.x, p.y),
            None => "Click the plan to place a pin.".to_owned(),
        })
    };

    view! {
        <form class="add-form" on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()>
            <div class="add-form__head">
                <span class="add-form__title">"Add material"</span>
                <span class="add-form__hint">{pin_hint}</span>
            </div>

            {text_field(state, "Material Name", |f| &f.name, |f, v| f.name = v)}

            <label class="form-field">
                "IHM Part"
                <select
                    prop:value=move || state.with(|s| s.form.ihm_part.map(IhmPart::label).unwrap_or_default())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.form.ihm_part = IhmPart::from_label(&value));
                    }
                >
                    <option value="">"Select…"</option>
                    {part_options}
                </select>
            </label>

            <fieldset class="add-form__group">
                <legend>"Hazardous materials"</legend>
                {hazard_checks}
            </fieldset>

            {text_field(state, "Compartment", |f| &f.compartment, |f, v| f.compartment = v)}
            {text_field(state, "Equipment", |f| &f.equipment, |f, v| f.equipment = v)}
            {text_field(state, "Component", |f| &f.component, |f, v| f.component = v)}
            {text_field(state, "Material", |f| &f.material, |f, v| f.material = v)}
            <div class="add-form__row">
                {text_field(state, "Quantity", |f| &f.quantity, |f, v| f.quantity = v)}
                {text_field(state, "Unit", |f| &f.unit, |f, v| f.unit = v)}
            </div>

            <label class="form-field">
                "HM Status"
                <select
                    prop:value=move || state.with(|s| s.form.hm_status.label())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        if let Some(status) = HmStatus::from_label(&value) {
                            state.update(|s| s.form.hm_status = status);
                        }
                    }
                >
                    {status_options}
                </select>
            </label>

            <fieldset class="add-form__group">
                <legend>"Documents"</legend>
                <ul class="add-form__documents">{documents}</ul>
                <div class="add-form__row">
                    <input
                        placeholder="Document name"
                        prop:value=move || new_document.get()
                        on:input=move |ev| new_document.set(event_target_value(&ev))
                    />
                    <button type="button" class="btn" on:click=on_add_document>"Attach"</button>
                </div>
            </fieldset>

            <div class="add-form__actions">
                <button type="button" class="btn btn--primary" on:click=on_save>"Save"</button>
                <button type="button" class="btn" on:click=move |_| state.update(MappingState::cancel_add)>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
