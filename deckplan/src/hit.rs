#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point, Rect};

/// A pin already saved on the plan, keyed by its material entry id.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPin {
    pub id: String,
    pub at: Point,
}

/// Return the pin closest to `screen` within `radius_px` screen pixels.
///
/// Distances are measured in screen space so the clickable area of a pin
/// does not shrink or grow with zoom.
#[must_use]
pub fn pin_at<'a>(
    screen: Point,
    pins: &'a [PlacedPin],
    camera: &Camera,
    crop: &Rect,
    radius_px: f64,
) -> Option<&'a PlacedPin> {
    pins.iter()
        .map(|pin| (pin, camera.plan_to_screen(pin.at, crop).distance(screen)))
        .filter(|(_, dist)| *dist <= radius_px)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(pin, _)| pin)
}
