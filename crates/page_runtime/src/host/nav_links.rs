use page_contract::markup;

use super::dom::query_all;
use crate::nav::is_active_nav_link;

/// Adds the active class to nav links matching the current path.
pub(super) fn mark_active_nav_links(document: &web_sys::Document) -> usize {
    let Some(current_path) = document
        .location()
        .and_then(|location| location.pathname().ok())
    else {
        return 0;
    };

    query_all(document, markup::NAV_LINK_SELECTOR)
        .into_iter()
        .filter(|link| {
            let href = link.get_attribute("href");
            is_active_nav_link(&current_path, href.as_deref())
        })
        .filter(|link| link.class_list().add_1(markup::NAV_ACTIVE_CLASS).is_ok())
        .count()
}
