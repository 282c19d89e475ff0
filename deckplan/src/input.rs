//! Input model: placement tools, mouse buttons, wheel deltas and the gesture state.
//!
//! `Tool` captures what a press on the plan means. `InputState` tracks the
//! gesture between pointer-down and pointer-up so the engine can compute
//! frame-to-frame pan deltas and tell a click from a drag.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Which tool is active on the mapping surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// No placement tool: drag pans, click selects a pin.
    #[default]
    Pan,
    /// Pin placement: click inside the crop area records a pending pin.
    PlacePin,
}

impl Tool {
    /// Whether pointer drags move the view under this tool.
    #[must_use]
    pub fn pans(self) -> bool {
        matches!(self, Self::Pan)
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Gesture tracked between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging the view with the pan tool.
    Panning {
        /// Screen position where the press started; used to detect clicks.
        start_screen: Point,
        /// Screen position of the previous pointer event.
        last_screen: Point,
        /// Set once the pointer leaves the click slop.
        moved: bool,
    },
}
