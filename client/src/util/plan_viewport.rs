//! Deck-plan layout: CSS for the crop window, plan image and pins.
//!
//! The plan is drawn with plain positioned elements. A crop window sits at the
//! camera offset with the crop's displayed size and clips the full plan image,
//! which is shifted by the crop origin. Pins are positioned in host space from
//! [`EngineCore::plan_to_screen`], so they stay on their plan point under any
//! pan or zoom.

#[cfg(test)]
#[path = "plan_viewport_test.rs"]
mod plan_viewport_test;

use deckplan::camera::{Point, Size};
use deckplan::engine::EngineCore;

#[cfg(feature = "csr")]
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::mapping::MappingState;

/// Crop window: positioned at the camera offset, sized to the displayed crop.
pub fn crop_window_style(engine: &EngineCore) -> String {
    let shown = engine.camera.displayed_size(&engine.crop);
    format!(
        "left:{:.2}px;top:{:.2}px;width:{:.2}px;height:{:.2}px;",
        engine.camera.offset_x, engine.camera.offset_y, shown.width, shown.height
    )
}

/// Full plan image inside the crop window, shifted so the crop origin is at
/// the window's top-left.
pub fn plan_image_style(engine: &EngineCore, plan: Size) -> String {
    let scale = engine.camera.scale();
    format!(
        "left:{:.2}px;top:{:.2}px;width:{:.2}px;height:{:.2}px;",
        -engine.crop.x * scale,
        -engine.crop.y * scale,
        plan.width * scale,
        plan.height * scale
    )
}

/// Pin marker anchored at its plan point.
pub fn pin_style(engine: &EngineCore, at: Point) -> String {
    let screen = engine.plan_to_screen(at);
    format!("left:{:.2}px;top:{:.2}px;", screen.x, screen.y)
}

pub fn zoom_label(engine: &EngineCore) -> String {
    format!("{}%", engine.camera.zoom_pct)
}

/// Push the host element's current size into the engine, recentring the crop.
#[cfg(feature = "csr")]
pub fn sync_viewport(state: RwSignal<MappingState>, host_ref: NodeRef<leptos::html::Div>) {
    let Some(host) = host_ref.get_untracked() else {
        return;
    };
    let (width, height) = crate::util::plan_input::host_size(&host);
    state.update(|s| {
        s.engine.set_viewport(width, height);
    });
}
