//! Before/after comparison slider model.
//!
//! The divider position is a percentage of the container width. Pointer
//! coordinates outside the container clamp to the nearest edge; they are
//! never rejected.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

/// Divider position a freshly mounted slider starts at.
pub const INITIAL_POSITION: f64 = 50.0;

/// Horizontal extent of the slider container in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Bounds spanning `[left, right]`.
    #[must_use]
    pub fn from_edges(left: f64, right: f64) -> Self {
        Self { left, width: right - left }
    }
}

/// Map a pointer X coordinate to a clamped percentage of `bounds`.
///
/// Returns `None` while the container has no width (not laid out yet).
#[must_use]
pub fn position_from_pointer(client_x: f64, bounds: Bounds) -> Option<f64> {
    if bounds.width.is_nan() || bounds.width <= 0.0 || !client_x.is_finite() {
        return None;
    }
    let percent = (client_x - bounds.left) / bounds.width * 100.0;
    Some(percent.clamp(0.0, 100.0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonSlider {
    position: f64,
    dragging: bool,
}

impl Default for ComparisonSlider {
    fn default() -> Self {
        Self { position: INITIAL_POSITION, dragging: false }
    }
}

impl ComparisonSlider {
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Track a pointer move. Ignored unless a drag is in progress.
    pub fn pointer_move(&mut self, client_x: f64, bounds: Bounds) -> f64 {
        if self.dragging {
            self.set_from_pointer(client_x, bounds);
        }
        self.position
    }

    /// Move the divider directly to the pointer, as on pointer-down.
    pub fn set_from_pointer(&mut self, client_x: f64, bounds: Bounds) -> f64 {
        if let Some(position) = position_from_pointer(client_x, bounds) {
            self.position = position;
        }
        self.position
    }

    /// Stop tracking. The divider stays where it was released.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Width of the clipped image's inner box as a percentage of the clip box,
    /// so the overlay image keeps the container's full width while clipped.
    #[must_use]
    pub fn overlay_inner_width(&self) -> f64 {
        if self.position <= 0.0 {
            100.0
        } else {
            100.0 / (self.position / 100.0)
        }
    }
}
