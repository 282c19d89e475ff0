//! Bridge between browser pointer events and the pure `deckplan::EngineCore`.
//!
//! ARCHITECTURE
//! ============
//! The host div is the engine's screen space. Pointer and wheel handlers turn
//! DOM events into engine calls inside one `state.update`, then apply the
//! returned actions to `MappingState`. Rendering is declarative: the crop
//! window, plan image and pins are absolutely positioned from the camera.
//!
//! Without the `csr` feature the handlers are no-ops so the component still
//! compiles natively.

use deckplan::camera::Size;
use leptos::prelude::*;

use crate::state::mapping::MappingState;
use crate::util::plan_viewport::{crop_window_style, pin_style, plan_image_style, zoom_label};

#[cfg(feature = "csr")]
use crate::util::plan_input::{map_button, pointer_point};
#[cfg(feature = "csr")]
use deckplan::input::{InputState, WheelDelta};

/// Deck-plan surface with zoom controls.
#[component]
pub fn PlanHost(
    state: RwSignal<MappingState>,
    host_ref: NodeRef<leptos::html::Div>,
    #[prop(into)] plan: Signal<String>,
    #[prop(into)] plan_size: Signal<Size>,
) -> impl IntoView {
    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                let Some(host) = host_ref.get_untracked() else {
                    return;
                };
                let _ = host.set_pointer_capture(ev.pointer_id());
                let point = pointer_point(&ev, &host);
                let button = map_button(ev.button());
                state.update(|s| {
                    let actions = s.engine.on_pointer_down(point, button);
                    s.apply(actions);
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(host) = host_ref.get_untracked() else {
                    return;
                };
                if !state.with_untracked(|s| matches!(s.engine.input, InputState::Panning { .. })) {
                    return;
                }
                let point = pointer_point(&ev, &host);
                state.update(|s| {
                    let actions = s.engine.on_pointer_move(point);
                    s.apply(actions);
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let Some(host) = host_ref.get_untracked() else {
                    return;
                };
                let _ = host.release_pointer_capture(ev.pointer_id());
                let point = pointer_point(&ev, &host);
                let button = map_button(ev.button());
                state.update(|s| {
                    let actions = s.engine.on_pointer_up(point, button);
                    s.apply(actions);
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "csr")]
        {
            move |_ev: leptos::ev::PointerEvent| {
                if state.with_untracked(|s| matches!(s.engine.input, InputState::Panning { .. })) {
                    state.update(|s| {
                        let actions = s.engine.on_pointer_leave();
                        s.apply(actions);
                    });
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
                state.update(|s| {
                    let actions = s.engine.on_wheel(delta);
                    s.apply(actions);
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let on_zoom_in = move |_| {
        state.update(|s| {
            let actions = s.engine.zoom_in().into_iter().collect();
            s.apply(actions);
        });
    };
    let on_zoom_out = move |_| {
        state.update(|s| {
            let actions = s.engine.zoom_out().into_iter().collect();
            s.apply(actions);
        });
    };
    let on_reset = move |_| {
        state.update(|s| {
            let action = s.engine.reset_view();
            s.apply(vec![action]);
        });
    };

    let pins = move || {
        state.with(|s| {
            s.inventory
                .entries
                .iter()
                .filter_map(|entry| entry.pin.map(|at| (entry.id.clone(), entry.name.clone(), at)))
                .map(|(id, name, at)| {
                    let selected = s.selected.as_deref() == Some(id.as_str());
                    let style = pin_style(&s.engine, at);
                    view! {
                        <div class="plan-pin" class:plan-pin--selected=selected style=style title=name></div>
                    }
                })
                .collect_view()
        })
    };

    let pending_pin = move || {
        state.with(|s| {
            s.engine.pending_pin.map(|at| {
                let style = pin_style(&s.engine, at);
                view! { <div class="plan-pin plan-pin--pending" style=style></div> }
            })
        })
    };

    view! {
        <div class="plan-host">
            <div
                class="plan-host__surface"
                class:plan-host__surface--placing=move || state.with(MappingState::is_adding)
                node_ref=host_ref
                style=move || format!("cursor:{};", state.with(|s| s.cursor))
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
                on:wheel=on_wheel
            >
                <div class="plan-host__crop" style=move || state.with(|s| crop_window_style(&s.engine))>
                    <img
                        class="plan-host__image"
                        src=move || plan.get()
                        alt="Deck plan"
                        draggable="false"
                        style=move || state.with(|s| plan_image_style(&s.engine, plan_size.get()))
                    />
                </div>
                {pins}
                {pending_pin}
            </div>
            <div class="plan-host__controls">
                <button class="plan-host__button" title="Zoom out" on:click=on_zoom_out>"−"</button>
                <span class="plan-host__zoom">{move || state.with(|s| zoom_label(&s.engine))}</span>
                <button class="plan-host__button" title="Zoom in" on:click=on_zoom_in>"+"</button>
                <button class="plan-host__button" title="Reset view" on:click=on_reset>"Reset"</button>
            </div>
        </div>
    }
}
