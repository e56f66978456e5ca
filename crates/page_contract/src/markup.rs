//! DOM markup contract consumed by the page enhancer.
//!
//! The server templates opt elements into each behavior with the selectors, attributes, and class
//! names below. The enhancer never produces this markup; it only reads it.

/// Elements that receive a Bootstrap tooltip.
pub const TOOLTIP_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
/// Elements that receive a Bootstrap popover.
pub const POPOVER_SELECTOR: &str = r#"[data-bs-toggle="popover"]"#;

/// Base alert selector.
pub const ALERT_SELECTOR: &str = ".alert";
/// Marker class that exempts an alert from auto-dismissal.
pub const ALERT_PERMANENT_CLASS: &str = "alert-permanent";
/// Alerts eligible for auto-dismissal.
pub const DISMISSIBLE_ALERT_SELECTOR: &str = ".alert:not(.alert-permanent)";

/// Navigation links considered for active marking.
pub const NAV_LINK_SELECTOR: &str = ".navbar-nav .nav-link";
/// Class added to active navigation links.
pub const NAV_ACTIVE_CLASS: &str = "active";

/// File rows in the browser listing.
pub const FILE_ROW_SELECTOR: &str = ".file-item";
/// Attribute carrying a file row's navigation target.
pub const FILE_ROW_URL_ATTR: &str = "data-url";

/// Theme selector controls.
pub const THEME_CONTROL_SELECTOR: &str = "[data-theme]";
/// Attribute carrying a theme control's theme identifier.
pub const THEME_CONTROL_ATTR: &str = "data-theme";
/// Document element attribute that Bootstrap reads the active color mode from.
pub const DOCUMENT_THEME_ATTR: &str = "data-bs-theme";

/// Copy-to-clipboard controls.
pub const COPY_CONTROL_SELECTOR: &str = ".copy-btn";
/// Attribute carrying a copy control's payload.
pub const COPY_PAYLOAD_ATTR: &str = "data-copy";

/// Mobile navigation toggle button.
pub const NAV_TOGGLER_SELECTOR: &str = ".navbar-toggler";
/// Collapsible mobile navigation menu.
pub const NAV_COLLAPSE_SELECTOR: &str = ".navbar-collapse";
/// Class Bootstrap sets on an expanded collapse.
pub const NAV_COLLAPSE_OPEN_CLASS: &str = "show";

/// File preview container.
pub const PREVIEW_CONTAINER_SELECTOR: &str = ".preview-container";
/// Class that triggers the preview fade-in transition.
pub const PREVIEW_FADE_IN_CLASS: &str = "fade-in";

/// Tables considered for responsive wrapping.
pub const TABLE_SELECTOR: &str = "table";
/// Class of the horizontally scrollable table wrapper.
pub const TABLE_RESPONSIVE_CLASS: &str = "table-responsive";

/// Attribute the enhancer uses to record which behaviors are bound to an element.
pub const ENHANCED_MARKER_ATTR: &str = "data-page-enhanced";
/// Inline JSON script element that may override enhancer configuration.
pub const CONFIG_SCRIPT_ID: &str = "page-enhancer-config";

/// Tag names treated as interactive controls nested inside a file row.
pub const INTERACTIVE_CONTROL_TAGS: [&str; 2] = ["A", "BUTTON"];

/// Returns whether a whitespace-separated class list contains `class_name`.
pub fn class_list_contains(class_list: &str, class_name: &str) -> bool {
    class_list
        .split_ascii_whitespace()
        .any(|token| token == class_name)
}

/// Returns whether a `data-page-enhanced` value already records `token`.
pub fn marker_contains(marker: Option<&str>, token: &str) -> bool {
    marker.is_some_and(|value| class_list_contains(value, token))
}

/// Appends `token` to a `data-page-enhanced` value.
pub fn marker_with(marker: Option<&str>, token: &str) -> String {
    match marker.map(str::trim) {
        Some(existing) if !existing.is_empty() => format!("{existing} {token}"),
        _ => token.to_string(),
    }
}
