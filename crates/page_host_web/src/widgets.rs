//! Bootstrap widget activation for marked elements.

use page_contract::markup;

use crate::bridge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Interactive widget kinds the page opts elements into.
pub enum WidgetKind {
    /// Hover/focus tooltip.
    Tooltip,
    /// Click popover.
    Popover,
}

impl WidgetKind {
    /// All widget kinds, in activation order.
    pub const ALL: [Self; 2] = [Self::Tooltip, Self::Popover];

    /// Selector for elements flagged for this widget.
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Tooltip => markup::TOOLTIP_SELECTOR,
            Self::Popover => markup::POPOVER_SELECTOR,
        }
    }

    /// Human-readable widget name for log messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tooltip => "tooltip",
            Self::Popover => "popover",
        }
    }
}

/// Instantiates (or reuses) the widget of `kind` on `element`.
///
/// # Errors
///
/// Returns an error when the widget library is not loaded or rejects the element.
pub fn activate_widget(kind: WidgetKind, element: &web_sys::Element) -> Result<(), String> {
    match kind {
        WidgetKind::Tooltip => bridge::activate_tooltip(element),
        WidgetKind::Popover => bridge::activate_popover(element),
    }
}

/// Closes a dismissible alert through the widget library.
///
/// # Errors
///
/// Returns an error when the widget library is not loaded.
pub fn close_alert(element: &web_sys::Element) -> Result<(), String> {
    bridge::close_alert(element)
}
