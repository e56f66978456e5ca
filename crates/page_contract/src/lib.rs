//! Typed page contracts shared by the enhancer runtime and browser adapters.
//!
//! This crate is the target-independent boundary for the page enhancer. It exposes the markup
//! contract rendered by the server templates, the [`Theme`] model, and the host service traits
//! whose browser implementations live in `page_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod markup;
pub mod navigation;
pub mod theme;

pub use clipboard::{ClipboardService, MemoryClipboardService, NoopClipboardService};
pub use navigation::{MemoryNavigationService, NavigationService, NoopNavigationService};
pub use theme::{
    theme_preference_url, MemoryThemePreferenceService, NoopThemePreferenceService, Theme,
    ThemePreferenceFuture, ThemePreferenceService, DEFAULT_THEME_ENDPOINT,
};
