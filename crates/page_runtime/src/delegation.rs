//! Click delegation for file rows.
//!
//! A file row owns a single click listener. Clicks that land on a nested anchor or button (or
//! directly inside one) belong to that control, not to the row.

use page_contract::markup::INTERACTIVE_CONTROL_TAGS;

/// Tag names describing where a click landed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickTarget {
    /// Tag name of the event target.
    pub tag_name: String,
    /// Tag name of the event target's parent element, if any.
    pub parent_tag_name: Option<String>,
}

impl ClickTarget {
    /// Builds a click target from tag names.
    pub fn new(tag_name: impl Into<String>, parent_tag_name: Option<&str>) -> Self {
        Self {
            tag_name: tag_name.into(),
            parent_tag_name: parent_tag_name.map(str::to_string),
        }
    }

    /// Reads tag names from a DOM element.
    pub fn from_element(element: &web_sys::Element) -> Self {
        Self {
            tag_name: element.tag_name(),
            parent_tag_name: element.parent_element().map(|parent| parent.tag_name()),
        }
    }
}

/// Returns whether `tag_name` names an interactive control.
pub fn is_interactive_tag(tag_name: &str) -> bool {
    INTERACTIVE_CONTROL_TAGS
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(tag_name))
}

/// Returns whether a click on `target` should be left to a nested control.
pub fn click_hits_nested_control(target: &ClickTarget) -> bool {
    is_interactive_tag(&target.tag_name)
        || target
            .parent_tag_name
            .as_deref()
            .is_some_and(is_interactive_tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_and_buttons_are_nested_controls() {
        assert!(click_hits_nested_control(&ClickTarget::new("A", Some("TD"))));
        assert!(click_hits_nested_control(&ClickTarget::new("BUTTON", Some("DIV"))));
    }

    #[test]
    fn children_of_controls_are_nested_controls() {
        assert!(click_hits_nested_control(&ClickTarget::new("I", Some("BUTTON"))));
        assert!(click_hits_nested_control(&ClickTarget::new("SPAN", Some("A"))));
    }

    #[test]
    fn plain_row_content_is_not_a_nested_control() {
        assert!(!click_hits_nested_control(&ClickTarget::new("TD", Some("TR"))));
        assert!(!click_hits_nested_control(&ClickTarget::new("DIV", None)));
    }

    #[test]
    fn only_the_immediate_parent_is_inspected() {
        // <button><span><i/></span></button>: the icon's parent is the span.
        assert!(!click_hits_nested_control(&ClickTarget::new("I", Some("SPAN"))));
    }

    #[test]
    fn tag_comparison_ignores_case() {
        assert!(is_interactive_tag("a"));
        assert!(is_interactive_tag("Button"));
        assert!(!is_interactive_tag("abbr"));
    }
}
