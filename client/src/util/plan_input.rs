//! Pointer and wheel event mapping for the deck-plan host element.
//!
//! Events are converted to viewport points relative to the host's top-left,
//! which is the screen space `deckplan::engine::EngineCore` works in. Using
//! `client_x - rect.left` rather than `offset_x` keeps points stable when the
//! event target is a pin or the plan image inside the host.

#[cfg(test)]
#[path = "plan_input_test.rs"]
mod plan_input_test;

use deckplan::camera::Point;
use deckplan::input::Button;

/// DOM `MouseEvent.button` to an engine button.
pub fn map_button(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

/// Client coordinates to a point relative to an element whose top-left is at
/// `(left, top)` in client space.
pub fn relative_point(client_x: i32, client_y: i32, left: f64, top: f64) -> Point {
    Point::new(f64::from(client_x) - left, f64::from(client_y) - top)
}

#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent, host: &web_sys::HtmlDivElement) -> Point {
    let rect = host.get_bounding_client_rect();
    relative_point(ev.client_x(), ev.client_y(), rect.left(), rect.top())
}

/// Host element's CSS size, at least 1x1.
#[cfg(feature = "csr")]
pub fn host_size(host: &web_sys::HtmlDivElement) -> (f64, f64) {
    (f64::from(host.client_width()).max(1.0), f64::from(host.client_height()).max(1.0))
}
