//! Responsive table wrapping rules.

use page_contract::markup::{class_list_contains, TABLE_RESPONSIVE_CLASS};

/// Returns whether a table needs a responsive wrapper given its parent element's class list.
///
/// Tables without a parent element are left alone.
pub fn needs_responsive_wrapper(parent_class_list: Option<&str>) -> bool {
    parent_class_list.is_some_and(|classes| !class_list_contains(classes, TABLE_RESPONSIVE_CLASS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_tables_need_a_wrapper() {
        assert!(needs_responsive_wrapper(Some("")));
        assert!(needs_responsive_wrapper(Some("card-body")));
        assert!(needs_responsive_wrapper(Some("table-responsive-sm")));
    }

    #[test]
    fn wrapped_and_detached_tables_are_skipped() {
        assert!(!needs_responsive_wrapper(Some("table-responsive")));
        assert!(!needs_responsive_wrapper(Some("mb-3 table-responsive")));
        assert!(!needs_responsive_wrapper(None));
    }
}
