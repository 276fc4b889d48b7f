//! DOM event to scene-geometry helpers.
//!
//! Everything here converts browser values into `scene::surface` types; the
//! tracker never sees a DOM object.

#[cfg(test)]
#[path = "dom_input_test.rs"]
mod dom_input_test;

use scene::surface::{Point, Rect};

/// Client point from integer event coordinates.
#[must_use]
pub fn client_point(client_x: i32, client_y: i32) -> Point {
    Point::new(f64::from(client_x), f64::from(client_y))
}

/// Scene rect from the four `DOMRect` edges.
#[must_use]
pub fn rect_from_edges(left: f64, top: f64, width: f64, height: f64) -> Rect {
    Rect::new(left, top, width.max(0.0), height.max(0.0))
}

#[cfg(feature = "csr")]
pub fn element_rect(element: &web_sys::Element) -> Rect {
    let r = element.get_bounding_client_rect();
    rect_from_edges(r.left(), r.top(), r.width(), r.height())
}

/// Bounding rect of the element the listener is attached to.
#[cfg(feature = "csr")]
pub fn current_target_rect(ev: &web_sys::Event) -> Option<Rect> {
    use wasm_bindgen::JsCast;

    let target = ev.current_target()?;
    target.dyn_ref::<web_sys::Element>().map(element_rect)
}

#[cfg(feature = "csr")]
pub fn pointer_point(ev: &web_sys::PointerEvent) -> Point {
    client_point(ev.client_x(), ev.client_y())
}

#[cfg(feature = "csr")]
pub fn drag_point(ev: &web_sys::DragEvent) -> Point {
    client_point(ev.client_x(), ev.client_y())
}

/// Client point of the first active touch, if any.
#[cfg(feature = "csr")]
pub fn first_touch_point(ev: &web_sys::TouchEvent) -> Option<Point> {
    ev.touches().get(0).map(|t| client_point(t.client_x(), t.client_y()))
}
