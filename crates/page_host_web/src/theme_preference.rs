//! Theme preference adapter that mirrors the selected theme to the server.

use page_contract::{
    theme_preference_url, Theme, ThemePreferenceFuture, ThemePreferenceService,
    DEFAULT_THEME_ENDPOINT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Browser theme preference adapter issuing `GET {endpoint}{theme}` requests.
pub struct WebThemePreferenceService {
    endpoint: String,
}

impl WebThemePreferenceService {
    /// Creates an adapter that sends requests under `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint prefix requests are sent under.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for WebThemePreferenceService {
    fn default() -> Self {
        Self::new(DEFAULT_THEME_ENDPOINT)
    }
}

impl ThemePreferenceService for WebThemePreferenceService {
    fn persist_theme<'a>(&'a self, theme: Theme) -> ThemePreferenceFuture<'a, Result<(), String>> {
        let url = theme_preference_url(&self.endpoint, &theme);
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                // The server answers with a redirect; the response is never inspected.
                return gloo_net::http::Request::get(&url)
                    .header("Content-Type", "application/json")
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|err| format!("theme preference request to `{url}` failed: {err}"));
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                Err(format!(
                    "theme preference request to `{url}` requires a wasm32 browser target"
                ))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn default_adapter_targets_auth_theme_endpoint() {
        assert_eq!(WebThemePreferenceService::default().endpoint(), "/auth/theme/");
    }

    #[test]
    fn native_requests_report_the_target_url() {
        let service = WebThemePreferenceService::new("/prefs/theme");
        let err = block_on(service.persist_theme(Theme::Dark)).expect_err("native target");
        assert!(err.contains("/prefs/theme/dark"), "{err}");
    }

    #[test]
    fn custom_themes_are_requested_verbatim() {
        let service = WebThemePreferenceService::default();
        let err = block_on(service.persist_theme(Theme::Custom("auto".to_string())))
            .expect_err("native target");
        assert!(err.contains("/auth/theme/auto"), "{err}");
    }
}
