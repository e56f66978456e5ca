//! Small DOM helpers shared by the host behaviors.

use page_contract::markup;
use wasm_bindgen::{closure::Closure, JsCast};

/// Returns every element matching `selector`, in document order.
pub(super) fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Returns the first element matching `selector`.
pub(super) fn query_one(document: &web_sys::Document, selector: &str) -> Option<web_sys::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Records `token` on `element` and reports whether it was not bound before.
pub(super) fn bind_once(element: &web_sys::Element, token: &str) -> bool {
    let marker = element.get_attribute(markup::ENHANCED_MARKER_ATTR);
    if markup::marker_contains(marker.as_deref(), token) {
        return false;
    }
    element
        .set_attribute(
            markup::ENHANCED_MARKER_ATTR,
            &markup::marker_with(marker.as_deref(), token),
        )
        .is_ok()
}

/// Installs a page-lifetime click listener on `target`.
pub(super) fn on_click(
    target: &web_sys::EventTarget,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> bool {
    let listener = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handler));
    let installed = target
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .is_ok();
    listener.forget();
    installed
}

/// Runs `callback` once after `delay_ms`.
pub(super) fn set_timeout(delay_ms: u32, callback: impl FnOnce() + 'static) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let callback = Closure::once_into_js(callback);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            i32::try_from(delay_ms).unwrap_or(i32::MAX),
        )
        .is_ok()
}

/// Returns the element an event was dispatched to.
pub(super) fn event_target_element(event: &web_sys::Event) -> Option<web_sys::Element> {
    event.target()?.dyn_into::<web_sys::Element>().ok()
}
