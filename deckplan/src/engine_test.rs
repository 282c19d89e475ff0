#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn crop() -> Rect {
    Rect::new(1000.0, 500.0, 400.0, 200.0)
}

/// 800x400 viewport with the 400x200 crop centred at (200, 100).
fn engine() -> EngineCore {
    let mut core = EngineCore::new(crop());
    core.set_viewport(800.0, 400.0);
    core
}

fn wheel(dy: f64) -> WheelDelta {
    WheelDelta { dx: 0.0, dy }
}

// =============================================================
// Layout
// =============================================================

#[test]
fn set_viewport_centres_crop_at_default_zoom() {
    let core = engine();
    assert_eq!(core.camera.zoom_pct, 100);
    assert!(approx_eq(core.camera.offset_x, 200.0));
    assert!(approx_eq(core.camera.offset_y, 100.0));
}

#[test]
fn resize_resets_zoom_and_offset() {
    let mut core = engine();
    core.zoom_in();
    core.on_pointer_down(pt(10.0, 10.0), Button::Primary);
    core.on_pointer_move(pt(60.0, 30.0));
    core.on_pointer_up(pt(60.0, 30.0), Button::Primary);
    assert_eq!(core.set_viewport(1000.0, 600.0), Action::ViewChanged);
    assert_eq!(core.camera.zoom_pct, 100);
    assert!(approx_eq(core.camera.offset_x, 300.0));
    assert!(approx_eq(core.camera.offset_y, 200.0));
}

#[test]
fn set_crop_recentres_and_drops_pending_pin() {
    let mut core = engine();
    core.set_tool(Tool::PlacePin);
    core.on_pointer_down(pt(250.0, 150.0), Button::Primary);
    assert!(core.pending_pin.is_some());
    core.set_crop(Rect::new(0.0, 0.0, 200.0, 100.0));
    assert!(core.pending_pin.is_none());
    assert!(approx_eq(core.camera.offset_x, 300.0));
    assert!(approx_eq(core.camera.offset_y, 150.0));
}

#[test]
fn focus_centres_plan_point() {
    let mut core = engine();
    core.set_zoom(300);
    core.focus(pt(1100.0, 550.0));
    let screen = core.plan_to_screen(pt(1100.0, 550.0));
    assert!(approx_eq(screen.x, 400.0));
    assert!(approx_eq(screen.y, 200.0));
    assert_eq!(core.camera.zoom_pct, 300);
}

// =============================================================
// Zoom
// =============================================================

#[test]
fn zoom_in_and_out_step_by_ten() {
    let mut core = engine();
    assert_eq!(core.zoom_in(), Some(Action::ViewChanged));
    assert_eq!(core.camera.zoom_pct, 110);
    core.zoom_out();
    core.zoom_out();
    assert_eq!(core.camera.zoom_pct, 90);
}

#[test]
fn zoom_stays_within_limits() {
    let mut core = engine();
    core.set_zoom(5);
    assert_eq!(core.camera.zoom_pct, 10);
    assert_eq!(core.zoom_out(), None);
    core.set_zoom(10_000);
    assert_eq!(core.camera.zoom_pct, 800);
    assert_eq!(core.zoom_in(), None);
}

#[test]
fn zoom_preserves_plan_point_at_viewport_centre() {
    let mut core = engine();
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    core.on_pointer_move(pt(137.0, 81.0));
    core.on_pointer_up(pt(137.0, 81.0), Button::Primary);
    let center = core.viewport_center();
    for pct in [150, 800, 10, 333, 100] {
        let before = core.camera.screen_to_plan(center, &core.crop);
        core.set_zoom(pct);
        let after = core.camera.screen_to_plan(center, &core.crop);
        assert!(approx_eq(before.x, after.x) && approx_eq(before.y, after.y), "zoom {pct}");
    }
}

#[test]
fn wheel_zooms_in_on_scroll_up_and_out_on_scroll_down() {
    let mut core = engine();
    assert_eq!(core.on_wheel(wheel(-120.0)), vec![Action::ViewChanged]);
    assert_eq!(core.camera.zoom_pct, 110);
    core.on_wheel(wheel(53.0));
    core.on_wheel(wheel(53.0));
    assert_eq!(core.camera.zoom_pct, 90);
    assert!(core.on_wheel(wheel(0.0)).is_empty());
}

// =============================================================
// Panning
// =============================================================

#[test]
fn drag_with_pan_tool_moves_offset_by_frame_deltas() {
    let mut core = engine();
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    assert_eq!(core.on_pointer_move(pt(110.0, 95.0)), vec![Action::ViewChanged]);
    core.on_pointer_move(pt(130.0, 90.0));
    assert!(approx_eq(core.camera.offset_x, 230.0));
    assert!(approx_eq(core.camera.offset_y, 90.0));
    core.on_pointer_up(pt(130.0, 90.0), Button::Primary);
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn move_without_press_does_nothing() {
    let mut core = engine();
    assert!(core.on_pointer_move(pt(500.0, 500.0)).is_empty());
    assert!(approx_eq(core.camera.offset_x, 200.0));
}

#[test]
fn pan_is_disabled_while_placing_pins() {
    let mut core = engine();
    core.set_tool(Tool::PlacePin);
    core.on_pointer_down(pt(250.0, 150.0), Button::Primary);
    assert!(core.on_pointer_move(pt(400.0, 300.0)).is_empty());
    assert!(approx_eq(core.camera.offset_x, 200.0));
    assert!(approx_eq(core.camera.offset_y, 100.0));
}

#[test]
fn secondary_button_is_ignored() {
    let mut core = engine();
    assert!(core.on_pointer_down(pt(100.0, 100.0), Button::Secondary).is_empty());
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn pointer_leave_ends_pan_without_click() {
    let mut core = engine();
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    assert_eq!(core.on_pointer_leave(), vec![Action::SetCursor("grab")]);
    assert!(core.on_pointer_up(pt(100.0, 100.0), Button::Primary).is_empty());
}

// =============================================================
// Pin placement
// =============================================================

#[test]
fn click_in_crop_places_pending_pin_in_plan_space() {
    let mut core = engine();
    core.set_tool(Tool::PlacePin);
    // screen (260, 140) -> local (60, 40) -> plan (1060, 540)
    let actions = core.on_pointer_down(pt(260.0, 140.0), Button::Primary);
    assert_eq!(actions, vec![Action::PinPlaced(pt(1060.0, 540.0))]);
    assert_eq!(core.pending_pin, Some(pt(1060.0, 540.0)));
}

#[test]
fn pin_placement_accounts_for_zoom() {
    let mut core = engine();
    core.set_zoom(200);
    core.set_tool(Tool::PlacePin);
    let screen = pt(300.0, 200.0);
    let local = core.camera.screen_to_local(screen);
    core.on_pointer_down(screen, Button::Primary);
    let pin = core.pending_pin.unwrap_or(pt(f64::NAN, f64::NAN));
    assert!(approx_eq(pin.x, local.x / 2.0 + 1000.0));
    assert!(approx_eq(pin.y, local.y / 2.0 + 500.0));
}

#[test]
fn click_outside_crop_places_nothing() {
    let mut core = engine();
    core.set_tool(Tool::PlacePin);
    assert!(core.on_pointer_down(pt(150.0, 150.0), Button::Primary).is_empty());
    assert!(core.on_pointer_down(pt(250.0, 350.0), Button::Primary).is_empty());
    assert!(core.pending_pin.is_none());
}

#[test]
fn later_click_replaces_pending_pin() {
    let mut core = engine();
    core.set_tool(Tool::PlacePin);
    core.on_pointer_down(pt(210.0, 110.0), Button::Primary);
    core.on_pointer_down(pt(220.0, 120.0), Button::Primary);
    assert_eq!(core.pending_pin, Some(pt(1020.0, 520.0)));
    core.clear_pending_pin();
    assert!(core.pending_pin.is_none());
}

#[test]
fn set_tool_reports_cursor() {
    let mut core = engine();
    assert_eq!(core.set_tool(Tool::PlacePin), Action::SetCursor("crosshair"));
    assert_eq!(core.set_tool(Tool::Pan), Action::SetCursor("grab"));
}

// =============================================================
// Pin selection
// =============================================================

#[test]
fn click_on_pin_selects_it() {
    let mut core = engine();
    core.set_pins(vec![PlacedPin { id: "entry-1".to_owned(), at: pt(1100.0, 550.0) }]);
    // plan (1100, 550) -> screen (300, 150)
    core.on_pointer_down(pt(302.0, 151.0), Button::Primary);
    let actions = core.on_pointer_up(pt(302.0, 151.0), Button::Primary);
    assert!(actions.contains(&Action::PinSelected("entry-1".to_owned())));
}

#[test]
fn click_on_empty_plan_clears_selection() {
    let mut core = engine();
    core.set_pins(vec![PlacedPin { id: "entry-1".to_owned(), at: pt(1100.0, 550.0) }]);
    core.on_pointer_down(pt(500.0, 300.0), Button::Primary);
    let actions = core.on_pointer_up(pt(500.0, 300.0), Button::Primary);
    assert!(actions.contains(&Action::SelectionCleared));
}

#[test]
fn drag_over_pin_does_not_select() {
    let mut core = engine();
    core.set_pins(vec![PlacedPin { id: "entry-1".to_owned(), at: pt(1100.0, 550.0) }]);
    core.on_pointer_down(pt(280.0, 150.0), Button::Primary);
    core.on_pointer_move(pt(300.0, 150.0));
    let actions = core.on_pointer_up(pt(300.0, 150.0), Button::Primary);
    assert!(!actions.iter().any(|a| matches!(a, Action::PinSelected(_) | Action::SelectionCleared)));
}
