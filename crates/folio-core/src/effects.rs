//! Geometry for the small visual effects: navbar shading, touch parallax and
//! button ripples.

use std::time::Duration;

/// How long the loading overlay stays up after startup.
pub const LOADER_DELAY: Duration = Duration::from_millis(1000);

/// Scroll offset past which the navbar gets its "scrolled" style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Touch travel needed before the hero starts to shift.
pub const PARALLAX_THRESHOLD: f64 = 50.0;
pub const PARALLAX_FACTOR: f64 = 0.1;

pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

pub fn navbar_scrolled(offset_y: f64) -> bool {
    offset_y > NAVBAR_SCROLL_THRESHOLD
}

/// Tracks a vertical touch gesture for the hero parallax.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchParallax {
    start_y: f64,
}

impl TouchParallax {
    pub fn start(&mut self, y: f64) {
        self.start_y = y;
    }

    /// Vertical translation in pixels, once the gesture is long enough.
    pub fn track(&self, y: f64) -> Option<f64> {
        let diff = self.start_y - y;
        (diff.abs() > PARALLAX_THRESHOLD).then(|| diff * PARALLAX_FACTOR)
    }
}

/// A click ripple positioned inside its button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// `x`/`y` are the click position relative to the button's top-left.
    pub fn from_click(width: f64, height: f64, x: f64, y: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            left: x - size / 2.0,
            top: y - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}
