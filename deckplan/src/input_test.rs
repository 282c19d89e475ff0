use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_pan() {
    assert_eq!(Tool::default(), Tool::Pan);
}

#[test]
fn only_pan_tool_pans() {
    assert!(Tool::Pan.pans());
    assert!(!Tool::PlacePin.pans());
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_variants_distinct() {
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Middle, Button::Secondary);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(matches!(InputState::default(), InputState::Idle));
}

#[test]
fn input_state_panning_carries_positions() {
    let state = InputState::Panning {
        start_screen: Point::new(1.0, 2.0),
        last_screen: Point::new(3.0, 4.0),
        moved: true,
    };
    let InputState::Panning { start_screen, last_screen, moved } = state else {
        panic!("expected panning");
    };
    assert_eq!(start_screen, Point::new(1.0, 2.0));
    assert_eq!(last_screen, Point::new(3.0, 4.0));
    assert!(moved);
}
