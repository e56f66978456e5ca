use page_contract::markup;
use wasm_bindgen::JsCast;

use super::{
    dom::{bind_once, on_click, query_one},
    HostRuntime,
};
use crate::reducer::{PageAction, PageEffect};

const BINDING: &str = "nav-auto-close";

/// Collapses the open mobile menu when the user clicks outside it.
pub(super) fn bind_nav_auto_close(document: &web_sys::Document, runtime: &HostRuntime) -> bool {
    let (Some(toggler), Some(collapse)) = (
        query_one(document, markup::NAV_TOGGLER_SELECTOR),
        query_one(document, markup::NAV_COLLAPSE_SELECTOR),
    ) else {
        return false;
    };
    let Some(root) = document.document_element() else {
        return false;
    };
    if !bind_once(&root, BINDING) {
        return false;
    }

    let runtime = runtime.clone();
    on_click(document, move |event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        let action = PageAction::DocumentClicked {
            collapse_open: collapse
                .class_list()
                .contains(markup::NAV_COLLAPSE_OPEN_CLASS),
            within_collapse: collapse.contains(target.as_ref()),
            within_toggler: toggler.contains(target.as_ref()),
        };
        runtime.dispatch(action, |effect| {
            if effect == PageEffect::ToggleNavCollapse {
                if let Some(toggler) = toggler.dyn_ref::<web_sys::HtmlElement>() {
                    toggler.click();
                }
            }
        });
    })
}
