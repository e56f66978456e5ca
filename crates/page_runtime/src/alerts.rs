//! Alert auto-dismissal rules.

use page_contract::markup::{class_list_contains, ALERT_PERMANENT_CLASS};

/// Returns whether an alert with `class_list` closes automatically.
pub fn is_auto_dismissible(class_list: &str) -> bool {
    !class_list_contains(class_list, ALERT_PERMANENT_CLASS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permanent_alerts_are_kept() {
        assert!(is_auto_dismissible("alert alert-success alert-dismissible"));
        assert!(!is_auto_dismissible("alert alert-warning alert-permanent"));
    }
}
