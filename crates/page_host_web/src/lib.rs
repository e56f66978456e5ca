//! Browser (`wasm32`) implementations of [`page_contract`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for theme preference requests,
//! clipboard writes, page navigation, and the Bootstrap widget library.
//!
//! Widget calls go through `bridge/`, which routes to a `wasm32` JS interop module or a non-wasm
//! fallback shim.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod clipboard;
pub mod navigation;
pub mod theme_preference;
pub mod widgets;

pub use adapters::{
    clipboard_service, host_strategy_name, navigation_service, selected_host_strategy,
    theme_preference_service, ClipboardServiceAdapter, HostStrategy, NavigationServiceAdapter,
    ThemePreferenceServiceAdapter,
};
pub use clipboard::WebClipboardService;
pub use navigation::WebNavigationService;
pub use theme_preference::WebThemePreferenceService;
pub use widgets::{activate_widget, close_alert, WidgetKind};
