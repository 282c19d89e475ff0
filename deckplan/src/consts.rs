//! Shared numeric constants for the deck-plan crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Lowest zoom level, in percent.
pub const ZOOM_MIN_PCT: u32 = 10;

/// Highest zoom level, in percent.
pub const ZOOM_MAX_PCT: u32 = 800;

/// Zoom level a freshly loaded or resized view starts at.
pub const ZOOM_DEFAULT_PCT: u32 = 100;

/// Step applied by the zoom-in / zoom-out buttons.
pub const ZOOM_STEP_PCT: u32 = 10;

/// Step applied per wheel notch.
pub const WHEEL_ZOOM_STEP_PCT: u32 = 10;

// ── Pointer ─────────────────────────────────────────────────────

/// Pointer travel in screen pixels under which a press/release counts as a click.
pub const CLICK_SLOP_PX: f64 = 3.0;

/// Screen-space radius in pixels within which a click selects a placed pin.
pub const PIN_HIT_RADIUS_PX: f64 = 12.0;
