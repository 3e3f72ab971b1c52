//! Browser pointer helpers for drag gestures.

use crate::state::slider::Bounds;

/// Horizontal client coordinate of a mouse event.
pub fn mouse_client_x(ev: &web_sys::MouseEvent) -> f64 {
    f64::from(ev.client_x())
}

/// Horizontal client coordinate of the first active touch, if any.
pub fn touch_client_x(ev: &web_sys::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|touch| f64::from(touch.client_x()))
}

/// Current horizontal extent of `el` in client coordinates.
pub fn element_bounds(el: &web_sys::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds::from_edges(rect.left(), rect.right())
}
