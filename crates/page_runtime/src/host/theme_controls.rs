use leptos::logging;
use page_contract::{markup, Theme};

use super::{
    dom::{bind_once, on_click, query_all},
    HostRuntime,
};
use crate::reducer::{PageAction, PageEffect};

const BINDING: &str = "theme";

/// Installs optimistic theme switching on every theme control.
///
/// The document attribute changes synchronously inside the click handler; the server request is
/// spawned and never awaited.
pub(super) fn bind_theme_controls(document: &web_sys::Document, runtime: &HostRuntime) -> usize {
    let mut bound = 0;
    for control in query_all(document, markup::THEME_CONTROL_SELECTOR) {
        if !bind_once(&control, BINDING) {
            continue;
        }
        let runtime = runtime.clone();
        let control_for_click = control.clone();
        let document = document.clone();
        let installed = on_click(&control, move |event| {
            event.prevent_default();
            let theme_id = control_for_click
                .get_attribute(markup::THEME_CONTROL_ATTR)
                .unwrap_or_default();
            runtime.dispatch(PageAction::ThemeControlClicked { theme_id }, |effect| {
                if let PageEffect::ApplyTheme(theme) = effect {
                    apply_document_theme(&document, &theme);
                }
            });
        });
        if installed {
            bound += 1;
        }
    }
    bound
}

fn apply_document_theme(document: &web_sys::Document, theme: &Theme) {
    let Some(root) = document.document_element() else {
        logging::warn!("theme `{theme}` not applied: document element unavailable");
        return;
    };
    if let Err(err) = root.set_attribute(markup::DOCUMENT_THEME_ATTR, theme.id()) {
        logging::warn!("theme `{theme}` not applied: {err:?}");
    }
}
