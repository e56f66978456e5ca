use page_contract::markup;

use super::dom::query_all;
use crate::tables::needs_responsive_wrapper;

/// Wraps every bare table in a horizontally scrollable container.
pub(super) fn wrap_tables(document: &web_sys::Document) -> usize {
    query_all(document, markup::TABLE_SELECTOR)
        .into_iter()
        .filter(|table| wrap_table(document, table))
        .count()
}

fn wrap_table(document: &web_sys::Document, table: &web_sys::Element) -> bool {
    let Some(parent) = table.parent_element() else {
        return false;
    };
    if !needs_responsive_wrapper(Some(parent.class_name().as_str())) {
        return false;
    }
    let Ok(wrapper) = document.create_element("div") else {
        return false;
    };
    if wrapper
        .class_list()
        .add_1(markup::TABLE_RESPONSIVE_CLASS)
        .is_err()
    {
        return false;
    }
    let table_node: &web_sys::Node = table;
    parent.insert_before(&wrapper, Some(table_node)).is_ok()
        && wrapper.append_child(table_node).is_ok()
}
