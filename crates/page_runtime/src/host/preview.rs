use page_contract::markup;

use super::dom::query_one;

/// Starts the preview fade-in transition when a preview is on the page.
pub(super) fn fade_in_preview(document: &web_sys::Document) -> bool {
    query_one(document, markup::PREVIEW_CONTAINER_SELECTOR)
        .is_some_and(|preview| {
            preview
                .class_list()
                .add_1(markup::PREVIEW_FADE_IN_CLASS)
                .is_ok()
        })
}
