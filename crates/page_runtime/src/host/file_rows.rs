use page_contract::markup;

use super::{
    dom::{bind_once, event_target_element, on_click, query_all},
    HostRuntime,
};
use crate::{
    delegation::ClickTarget,
    reducer::{PageAction, PageEffect},
};

const BINDING: &str = "file-row";

/// Installs the delegated click listener on every file row.
pub(super) fn bind_file_rows(document: &web_sys::Document, runtime: &HostRuntime) -> usize {
    let mut bound = 0;
    for row in query_all(document, markup::FILE_ROW_SELECTOR) {
        if !bind_once(&row, BINDING) {
            continue;
        }
        let runtime = runtime.clone();
        let row_for_click = row.clone();
        let installed = on_click(&row, move |event| {
            let target = event_target_element(&event)
                .map(|element| ClickTarget::from_element(&element))
                .unwrap_or_default();
            let action = PageAction::FileRowClicked {
                row_url: row_for_click.get_attribute(markup::FILE_ROW_URL_ATTR),
                target,
            };
            runtime.dispatch(action, |effect| {
                if effect == PageEffect::StopPropagation {
                    event.stop_propagation();
                }
            });
        });
        if installed {
            bound += 1;
        }
    }
    bound
}
