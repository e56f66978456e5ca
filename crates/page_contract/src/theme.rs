//! Color theme model and the server-side theme preference contract.

use std::{cell::RefCell, fmt, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Default endpoint prefix for persisting a theme preference.
pub const DEFAULT_THEME_ENDPOINT: &str = "/auth/theme/";

/// Color mode selected by a theme control.
///
/// `light` and `dark` are the modes the server templates ship; any other identifier is carried
/// through unchanged so the document and the server see exactly what the control declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    /// Light color mode.
    Light,
    /// Dark color mode.
    Dark,
    /// Any other identifier, such as `auto`.
    Custom(String),
}

impl Theme {
    /// Stable identifier used in markup, the document attribute, and the request path.
    pub fn id(&self) -> &str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Custom(id) => id,
        }
    }

    /// Parses a theme identifier from a `data-theme` attribute value.
    ///
    /// Returns `None` only for blank values.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "" => None,
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            other => Some(Self::Custom(other.to_string())),
        }
    }
}

impl From<String> for Theme {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or(Self::Custom(raw))
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.id().to_string()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Builds the preference request path for `theme` under `endpoint`.
///
/// Exactly one `/` separates the endpoint prefix from the theme identifier.
pub fn theme_preference_url(endpoint: &str, theme: &Theme) -> String {
    format!("{}/{}", endpoint.trim_end_matches('/'), theme.id())
}

/// Object-safe boxed future used by [`ThemePreferenceService`].
pub type ThemePreferenceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that mirrors the selected theme to the server.
pub trait ThemePreferenceService {
    /// Sends the preference request. The response body is never inspected.
    fn persist_theme<'a>(&'a self, theme: Theme) -> ThemePreferenceFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op theme preference service for unsupported targets.
pub struct NoopThemePreferenceService;

impl ThemePreferenceService for NoopThemePreferenceService {
    fn persist_theme<'a>(&'a self, _theme: Theme) -> ThemePreferenceFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory theme preference service that records every request it receives.
pub struct MemoryThemePreferenceService {
    requests: Rc<RefCell<Vec<Theme>>>,
    failure: Option<String>,
}

impl MemoryThemePreferenceService {
    /// Creates a recorder whose requests all fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            requests: Rc::default(),
            failure: Some(message.into()),
        }
    }

    /// Returns the themes requested so far, in order.
    pub fn requests(&self) -> Vec<Theme> {
        self.requests.borrow().clone()
    }
}

impl ThemePreferenceService for MemoryThemePreferenceService {
    fn persist_theme<'a>(&'a self, theme: Theme) -> ThemePreferenceFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(theme);
            match &self.failure {
                Some(message) => Err(message.clone()),
                None => Ok(()),
            }
        })
    }
}
