use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, MouseEvent};

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

/// Pointer position relative to the board's top-left corner, so zone
/// geometry is independent of page scroll and board placement.
pub fn board_coords(e: &MouseEvent, board: &HtmlElement) -> (f64, f64) {
    let rect = board.get_bounding_client_rect();
    (
        e.client_x() as f64 - rect.left(),
        e.client_y() as f64 - rect.top(),
    )
}

/// Closest ancestor of the event target matching `selector`, if any.
pub fn closest_from_target(e: &Event, selector: &str) -> Option<Element> {
    let el = e.target()?.dyn_into::<Element>().ok()?;
    el.closest(selector).ok().flatten()
}

/// Parse the numeric value of a `data-*` attribute.
pub fn id_attr(el: &Element, attr: &str) -> Option<u32> {
    el.get_attribute(attr)?.parse().ok()
}
