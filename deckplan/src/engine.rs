//! Mapping engine: the pointer and wheel state machine behind the deck plan.
//!
//! ARCHITECTURE
//! ============
//! [`EngineCore`] owns the camera, the active crop, the placed pins and the
//! current gesture. The host forwards pointer, wheel and resize events and
//! gets back [`Action`]s to apply; the engine never touches the DOM.
//!
//! DESIGN
//! ======
//! A primary press starts a gesture. Under the pan tool, movement beyond the
//! click slop turns it into a pan. A release within the slop is a click: it
//! selects the nearest pin under the pan tool, or records a pending pin under
//! the placement tool when it lands inside the crop.

use crate::camera::{Camera, Point, Rect, Size};
use crate::consts::{CLICK_SLOP_PX, PIN_HIT_RADIUS_PX, WHEEL_ZOOM_STEP_PCT, ZOOM_STEP_PCT};
use crate::hit::{PlacedPin, pin_at};
use crate::input::{Button, InputState, Tool, WheelDelta};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Camera offset or zoom changed; the host should restyle the plan.
    ViewChanged,
    /// A pending pin was recorded at this absolute plan point.
    PinPlaced(Point),
    /// The user clicked a placed pin.
    PinSelected(String),
    /// The user clicked empty plan with the pan tool.
    SelectionCleared,
    /// Cursor hint for the host element.
    SetCursor(&'static str),
}

/// Core mapping state: camera, active crop, tool and gesture.
///
/// Holds no browser handles so it can live inside a reactive signal and be
/// tested natively.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineCore {
    pub camera: Camera,
    pub crop: Rect,
    pub viewport: Size,
    pub tool: Tool,
    pub input: InputState,
    pub pending_pin: Option<Point>,
    pub pins: Vec<PlacedPin>,
}

impl EngineCore {
    /// New engine showing `crop`. The viewport is empty until [`EngineCore::set_viewport`].
    #[must_use]
    pub fn new(crop: Rect) -> Self {
        Self {
            camera: Camera::default(),
            crop,
            viewport: Size::default(),
            tool: Tool::default(),
            input: InputState::default(),
            pending_pin: None,
            pins: Vec::new(),
        }
    }

    // --- Layout ---

    /// Update viewport dimensions. Resets zoom and recentres the crop.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Action {
        self.viewport = Size::new(width.max(1.0), height.max(1.0));
        self.reset_view()
    }

    /// Switch to another deck section's crop. Drops any pending pin.
    pub fn set_crop(&mut self, crop: Rect) -> Action {
        self.crop = crop;
        self.pending_pin = None;
        self.input = InputState::Idle;
        self.reset_view()
    }

    /// Back to 100 % with the crop centred.
    pub fn reset_view(&mut self) -> Action {
        self.camera.center_crop(self.viewport, &self.crop);
        Action::ViewChanged
    }

    /// Replace the saved pins used for hit-testing.
    pub fn set_pins(&mut self, pins: Vec<PlacedPin>) {
        self.pins = pins;
    }

    /// Centre the view on a saved pin without changing zoom.
    pub fn focus(&mut self, plan: Point) -> Action {
        self.camera.center_on(plan, self.viewport, &self.crop);
        Action::ViewChanged
    }

    // --- Tool ---

    /// Set the active tool. Leaving pin placement abandons any drag in progress.
    pub fn set_tool(&mut self, tool: Tool) -> Action {
        self.tool = tool;
        self.input = InputState::Idle;
        Action::SetCursor(cursor_for(tool))
    }

    /// Forget the pending pin (form submitted or cancelled).
    pub fn clear_pending_pin(&mut self) {
        self.pending_pin = None;
    }

    // --- Zoom ---

    /// Screen point at the centre of the viewport.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width * 0.5, self.viewport.height * 0.5)
    }

    /// Set zoom to `pct` (clamped), keeping the viewport centre fixed.
    pub fn set_zoom(&mut self, pct: i64) -> Option<Action> {
        let center = self.viewport_center();
        self.camera.zoom_about(pct, center).then_some(Action::ViewChanged)
    }

    pub fn zoom_in(&mut self) -> Option<Action> {
        self.set_zoom(i64::from(self.camera.zoom_pct) + i64::from(ZOOM_STEP_PCT))
    }

    pub fn zoom_out(&mut self) -> Option<Action> {
        self.set_zoom(i64::from(self.camera.zoom_pct) - i64::from(ZOOM_STEP_PCT))
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        match self.tool {
            Tool::PlacePin => {
                let local = self.camera.screen_to_local(screen);
                if !self.camera.local_in_crop(local, &self.crop) {
                    return Vec::new();
                }
                let plan = self.camera.local_to_plan(local, &self.crop);
                self.pending_pin = Some(plan);
                vec![Action::PinPlaced(plan)]
            }
            Tool::Pan => {
                self.input = InputState::Panning { start_screen: screen, last_screen: screen, moved: false };
                vec![Action::SetCursor("grabbing")]
            }
        }
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        let InputState::Panning { start_screen, last_screen, moved } = self.input else {
            return Vec::new();
        };
        if !self.tool.pans() {
            self.input = InputState::Idle;
            return Vec::new();
        }
        self.camera.pan_by(screen.x - last_screen.x, screen.y - last_screen.y);
        self.input = InputState::Panning {
            start_screen,
            last_screen: screen,
            moved: moved || start_screen.distance(screen) > CLICK_SLOP_PX,
        };
        vec![Action::ViewChanged]
    }

    pub fn on_pointer_up(&mut self, screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let InputState::Panning { start_screen, moved, .. } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        let mut actions = vec![Action::SetCursor(cursor_for(self.tool))];
        if moved || start_screen.distance(screen) > CLICK_SLOP_PX {
            return actions;
        }
        match pin_at(screen, &self.pins, &self.camera, &self.crop, PIN_HIT_RADIUS_PX) {
            Some(pin) => actions.push(Action::PinSelected(pin.id.clone())),
            None => actions.push(Action::SelectionCleared),
        }
        actions
    }

    /// Pointer left the surface: end any pan without treating it as a click.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if matches!(self.input, InputState::Idle) {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor(cursor_for(self.tool))]
    }

    /// Wheel up zooms in, wheel down zooms out, about the viewport centre.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        if delta.dy.abs() < f64::EPSILON {
            return Vec::new();
        }
        let step = i64::from(WHEEL_ZOOM_STEP_PCT);
        let requested = if delta.dy < 0.0 {
            i64::from(self.camera.zoom_pct) + step
        } else {
            i64::from(self.camera.zoom_pct) - step
        };
        self.set_zoom(requested).into_iter().collect()
    }

    // --- Queries ---

    /// Screen position of a plan point under the current camera.
    #[must_use]
    pub fn plan_to_screen(&self, plan: Point) -> Point {
        self.camera.plan_to_screen(plan, &self.crop)
    }
}

fn cursor_for(tool: Tool) -> &'static str {
    match tool {
        Tool::Pan => "grab",
        Tool::PlacePin => "crosshair",
    }
}
