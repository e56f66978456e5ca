use page_contract::{
    ClipboardService, NavigationService, NoopClipboardService, NoopNavigationService,
    NoopThemePreferenceService, Theme, ThemePreferenceFuture, ThemePreferenceService,
};

use crate::{WebClipboardService, WebNavigationService, WebThemePreferenceService};

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `page_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters from `page_host_web`.
    Browser,
    /// No-op adapters for headless builds that render pages without a browser.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Adapter enum that erases the concrete theme preference backend.
#[derive(Debug, Clone)]
pub enum ThemePreferenceServiceAdapter {
    /// Browser-backed HTTP request.
    Browser(WebThemePreferenceService),
    /// No-op fallback.
    Stub(NoopThemePreferenceService),
}

impl ThemePreferenceService for ThemePreferenceServiceAdapter {
    fn persist_theme<'a>(&'a self, theme: Theme) -> ThemePreferenceFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.persist_theme(theme),
            Self::Stub(service) => service.persist_theme(theme),
        }
    }
}

/// Adapter enum that erases the concrete clipboard backend.
#[derive(Debug, Clone, Copy)]
pub enum ClipboardServiceAdapter {
    /// Browser-backed legacy copy command.
    Browser(WebClipboardService),
    /// No-op fallback.
    Stub(NoopClipboardService),
}

impl ClipboardService for ClipboardServiceAdapter {
    fn write_text(&self, text: &str) -> Result<(), String> {
        match self {
            Self::Browser(service) => service.write_text(text),
            Self::Stub(service) => service.write_text(text),
        }
    }
}

/// Adapter enum that erases the concrete navigation backend.
#[derive(Debug, Clone, Copy)]
pub enum NavigationServiceAdapter {
    /// Browser-backed `location.href` assignment.
    Browser(WebNavigationService),
    /// No-op fallback.
    Stub(NoopNavigationService),
}

impl NavigationService for NavigationServiceAdapter {
    fn navigate(&self, url: &str) -> Result<(), String> {
        match self {
            Self::Browser(service) => service.navigate(url),
            Self::Stub(service) => service.navigate(url),
        }
    }
}

/// Builds the theme preference adapter for the compile-time selected host strategy.
pub fn theme_preference_service(endpoint: &str) -> ThemePreferenceServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            ThemePreferenceServiceAdapter::Browser(WebThemePreferenceService::new(endpoint))
        }
        HostStrategy::Stub => ThemePreferenceServiceAdapter::Stub(NoopThemePreferenceService),
    }
}

/// Builds the clipboard adapter for the compile-time selected host strategy.
pub fn clipboard_service() -> ClipboardServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ClipboardServiceAdapter::Browser(WebClipboardService),
        HostStrategy::Stub => ClipboardServiceAdapter::Stub(NoopClipboardService),
    }
}

/// Builds the navigation adapter for the compile-time selected host strategy.
pub fn navigation_service() -> NavigationServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => NavigationServiceAdapter::Browser(WebNavigationService),
        HostStrategy::Stub => NavigationServiceAdapter::Stub(NoopNavigationService),
    }
}
