#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ZOOM_DEFAULT_PCT, ZOOM_MAX_PCT, ZOOM_MIN_PCT};

/// A point in plan, crop-local, or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rectangle in absolute plan pixels. A deck section is one of these cut out
/// of the full general-arrangement image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether `p` lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Parse the `x,y,w,h` form used in navigation parameters.
    ///
    /// Returns `None` unless there are exactly four finite numbers and both
    /// dimensions are positive.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let Ok(parts) = raw
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
        else {
            return None;
        };
        let [x, y, width, height] = parts.as_slice() else {
            return None;
        };
        if !(x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite()) {
            return None;
        }
        if *width <= 0.0 || *height <= 0.0 {
            return None;
        }
        Some(Self::new(*x, *y, *width, *height))
    }

    /// Inverse of [`Rect::parse`].
    #[must_use]
    pub fn to_param(&self) -> String {
        format!("{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

/// Clamp an arbitrary zoom request into the supported percent range.
#[must_use]
pub fn clamp_zoom(pct: i64) -> u32 {
    let clamped = pct.clamp(i64::from(ZOOM_MIN_PCT), i64::from(ZOOM_MAX_PCT));
    u32::try_from(clamped).unwrap_or(ZOOM_DEFAULT_PCT)
}

/// Pan/zoom camera over the crop area of the active deck section.
///
/// `offset_x` / `offset_y` place the top-left of the crop area in viewport CSS
/// pixels. `zoom_pct` is an integer percentage (100 = one plan pixel per CSS
/// pixel).
///
/// ```text
/// screen = offset + (plan - crop.origin) * zoom_pct / 100
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom_pct: u32,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, zoom_pct: ZOOM_DEFAULT_PCT }
    }
}

impl Camera {
    /// Zoom as a scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        f64::from(self.zoom_pct) / 100.0
    }

    /// Viewport point relative to the crop area's top-left.
    #[must_use]
    pub fn screen_to_local(&self, screen: Point) -> Point {
        Point::new(screen.x - self.offset_x, screen.y - self.offset_y)
    }

    /// Crop-local viewport point to absolute plan pixels.
    #[must_use]
    pub fn local_to_plan(&self, local: Point, crop: &Rect) -> Point {
        let scale = self.scale();
        Point::new(local.x / scale + crop.x, local.y / scale + crop.y)
    }

    /// Viewport point to absolute plan pixels.
    #[must_use]
    pub fn screen_to_plan(&self, screen: Point, crop: &Rect) -> Point {
        self.local_to_plan(self.screen_to_local(screen), crop)
    }

    /// Absolute plan pixels to a viewport point.
    #[must_use]
    pub fn plan_to_screen(&self, plan: Point, crop: &Rect) -> Point {
        let scale = self.scale();
        Point::new(
            (plan.x - crop.x) * scale + self.offset_x,
            (plan.y - crop.y) * scale + self.offset_y,
        )
    }

    /// On-screen size of the crop area at the current zoom.
    #[must_use]
    pub fn displayed_size(&self, crop: &Rect) -> Size {
        let scale = self.scale();
        Size::new(crop.width * scale, crop.height * scale)
    }

    /// Whether a crop-local point falls on the displayed crop area.
    #[must_use]
    pub fn local_in_crop(&self, local: Point, crop: &Rect) -> bool {
        let shown = self.displayed_size(crop);
        local.x >= 0.0 && local.y >= 0.0 && local.x <= shown.width && local.y <= shown.height
    }

    /// Shift the crop area by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Change zoom while keeping the plan point under `center` fixed.
    ///
    /// `offset' = center - (center - offset) * (new / old)`. Returns whether
    /// the zoom actually changed after clamping.
    pub fn zoom_about(&mut self, requested_pct: i64, center: Point) -> bool {
        let next = clamp_zoom(requested_pct);
        if next == self.zoom_pct {
            return false;
        }
        let ratio = f64::from(next) / f64::from(self.zoom_pct);
        self.offset_x = center.x - (center.x - self.offset_x) * ratio;
        self.offset_y = center.y - (center.y - self.offset_y) * ratio;
        self.zoom_pct = next;
        true
    }

    /// Reset to the default zoom and centre the crop area in `viewport`.
    pub fn center_crop(&mut self, viewport: Size, crop: &Rect) {
        self.zoom_pct = ZOOM_DEFAULT_PCT;
        let shown = self.displayed_size(crop);
        self.offset_x = (viewport.width - shown.width) * 0.5;
        self.offset_y = (viewport.height - shown.height) * 0.5;
    }

    /// Pan so that `plan` sits at the centre of `viewport`, keeping zoom.
    pub fn center_on(&mut self, plan: Point, viewport: Size, crop: &Rect) {
        let scale = self.scale();
        self.offset_x = viewport.width * 0.5 - (plan.x - crop.x) * scale;
        self.offset_y = viewport.height * 0.5 - (plan.y - crop.y) * scale;
    }
}
