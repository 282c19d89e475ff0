//! Filter controls for the materials table.
//!
//! Every control writes straight into the shared `MaterialFilter` signal; the
//! table recomputes from it. Threshold bounds are kept as raw text locally and
//! parsed on each keystroke so partial input never blocks typing.

use leptos::prelude::*;

use crate::app::SharedRegistry;
use crate::state::filters::{MaterialFilter, parse_bound};
use crate::state::registry::{ComplianceStatus, IhmPart, RiskCategory};

#[component]
pub fn FilterPanel(filter: RwSignal<MaterialFilter>) -> impl IntoView {
    let registry = expect_context::<SharedRegistry>();
    let min_text = RwSignal::new(String::new());
    let max_text = RwSignal::new(String::new());

    let tag_options = registry
        .all_tags()
        .into_iter()
        .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
        .collect_view();

    let risk_options = RiskCategory::ALL
        .into_iter()
        .map(|r| view! { <option value=r.label()>{r.label()}</option> })
        .collect_view();

    let compliance_options = ComplianceStatus::ALL
        .into_iter()
        .map(|c| view! { <option value=c.label()>{c.label()}</option> })
        .collect_view();

    let part_checks = IhmPart::ALL
        .into_iter()
        .map(|part| {
            view! {
                <label class="filter-panel__check">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.get().ihm_parts.contains(&part)
                        on:change=move |_| filter.update(|f| f.toggle_part(part))
                    />
                    {part.label()}
                </label>
            }
        })
        .collect_view();

    let zone_checks = registry
        .all_zones()
        .into_iter()
        .map(|zone| {
            let checked_zone = zone.clone();
            let toggled_zone = zone.clone();
            view! {
                <label class="filter-panel__check">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.get().zones.contains(&checked_zone)
                        on:change=move |_| filter.update(|f| f.toggle_zone(&toggled_zone))
                    />
                    {zone}
                </label>
            }
        })
        .collect_view();

    let on_clear = move |_| {
        min_text.set(String::new());
        max_text.set(String::new());
        filter.update(MaterialFilter::clear);
    };

    view! {
        <aside class="filter-panel">
            <div class="filter-panel__head">
                <span class="filter-panel__title">"Filters"</span>
                <Show when=move || { filter.get().active_count() > 0 }>
                    <span class="filter-panel__badge">{move || filter.get().active_count()}</span>
                </Show>
                <button class="filter-panel__clear" on:click=on_clear>"Clear"</button>
            </div>

            <label class="filter-panel__field">
                "Tag"
                <select
                    prop:value=move || filter.get().tag.unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.tag = Some(value).filter(|v| !v.is_empty()));
                    }
                >
                    <option value="">"Any"</option>
                    {tag_options}
                </select>
            </label>

            <label class="filter-panel__field">
                "Risk level"
                <select
                    prop:value=move || filter.get().risk.map(RiskCategory::label).unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.risk = RiskCategory::ALL.into_iter().find(|r| r.label() == value));
                    }
                >
                    <option value="">"Any"</option>
                    {risk_options}
                </select>
            </label>

            <label class="filter-panel__field">
                "Compliance"
                <select
                    prop:value=move || filter.get().compliance.map(ComplianceStatus::label).unwrap_or_default()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| {
                            f.compliance = ComplianceStatus::ALL.into_iter().find(|c| c.label() == value);
                        });
                    }
                >
                    <option value="">"Any"</option>
                    {compliance_options}
                </select>
            </label>

            <div class="filter-panel__field">
                "Threshold"
                <div class="filter-panel__range">
                    <input
                        inputmode="decimal"
                        placeholder="min"
                        prop:value=move || min_text.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.threshold_min = parse_bound(&value));
                            min_text.set(value);
                        }
                    />
                    <input
                        inputmode="decimal"
                        placeholder="max"
                        prop:value=move || max_text.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.threshold_max = parse_bound(&value));
                            max_text.set(value);
                        }
                    />
                </div>
            </div>

            <fieldset class="filter-panel__group">
                <legend>"IHM part"</legend>
                {part_checks}
            </fieldset>

            <fieldset class="filter-panel__group">
                <legend>"Zone"</legend>
                {zone_checks}
            </fieldset>
        </aside>
    }
}
