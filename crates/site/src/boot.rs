//! Document-readiness gate for the page enhancer.

/// Event fired once the document markup is fully parsed.
pub const READY_EVENT: &str = "DOMContentLoaded";

/// Returns whether a `document.readyState` value means parsing is still in progress.
pub fn document_is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Runs the enhancer now if the markup is parsed, otherwise on [`READY_EVENT`].
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub(crate) fn enhance_when_ready() {
    use leptos::logging;
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        logging::warn!("page enhancer skipped: document unavailable");
        return;
    };

    if !document_is_loading(&document.ready_state()) {
        enhance(&document);
        return;
    }

    let target = document.clone();
    let on_ready = Closure::once_into_js(move || enhance(&target));
    if let Err(err) =
        document.add_event_listener_with_callback(READY_EVENT, on_ready.unchecked_ref())
    {
        logging::warn!("page enhancer could not wait for {READY_EVENT}: {err:?}");
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn enhance(document: &web_sys::Document) {
    let config = page_runtime::load_page_config(document);
    let services = page_runtime::PageServices::from_host(&config);
    leptos::logging::log!(
        "page enhancer starting ({} host)",
        page_host_web::host_strategy_name()
    );
    page_runtime::enhance_document(document, &config, &services);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_loading_state_defers_setup() {
        assert!(document_is_loading("loading"));
        assert!(!document_is_loading("interactive"));
        assert!(!document_is_loading("complete"));
    }
}
