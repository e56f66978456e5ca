use leptos::logging;
use page_host_web::{activate_widget, WidgetKind};

use super::dom::query_all;

/// Activates tooltips and popovers on flagged elements.
pub(super) fn activate_widgets(document: &web_sys::Document) -> usize {
    let mut activated = 0;
    for kind in WidgetKind::ALL {
        for element in query_all(document, kind.selector()) {
            match activate_widget(kind, &element) {
                Ok(()) => activated += 1,
                Err(err) => {
                    // Library missing or broken: remaining elements would fail the same way.
                    logging::warn!("{} activation skipped: {err}", kind.label());
                    break;
                }
            }
        }
    }
    activated
}
