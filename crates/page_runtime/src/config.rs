//! Enhancer configuration with defaults matching the server templates.

use page_contract::DEFAULT_THEME_ENDPOINT;
use serde::{Deserialize, Serialize};

/// Delay before non-permanent alerts are closed.
pub const DEFAULT_ALERT_DISMISS_DELAY_MS: u32 = 5_000;
/// How long a copy control shows its confirmation label.
pub const DEFAULT_COPY_FEEDBACK_MS: u32 = 2_000;
/// Confirmation label shown on a copy control after a successful click.
pub const DEFAULT_COPIED_LABEL_HTML: &str = r#"<i class="bi bi-check"></i> Copied!"#;

/// Runtime configuration, optionally overridden by an inline JSON script on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Endpoint prefix for theme preference requests.
    pub theme_endpoint: String,
    /// Delay before dismissible alerts close.
    pub alert_dismiss_delay_ms: u32,
    /// Duration of the copy confirmation label.
    pub copy_feedback_ms: u32,
    /// Markup of the copy confirmation label.
    pub copied_label_html: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_endpoint: DEFAULT_THEME_ENDPOINT.to_string(),
            alert_dismiss_delay_ms: DEFAULT_ALERT_DISMISS_DELAY_MS,
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            copied_label_html: DEFAULT_COPIED_LABEL_HTML.to_string(),
        }
    }
}

/// Parses a JSON config override. Blank input yields the defaults.
///
/// # Errors
///
/// Returns an error when `raw` is not valid JSON for [`PageConfig`].
pub fn parse_page_config(raw: &str) -> Result<PageConfig, String> {
    if raw.trim().is_empty() {
        return Ok(PageConfig::default());
    }
    serde_json::from_str(raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_override_uses_defaults() {
        let config = parse_page_config("  \n").expect("config");
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.theme_endpoint, "/auth/theme/");
        assert_eq!(config.alert_dismiss_delay_ms, 5_000);
        assert_eq!(config.copy_feedback_ms, 2_000);
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config =
            parse_page_config(r#"{"theme_endpoint":"/nas/auth/theme/","copy_feedback_ms":500}"#)
                .expect("config");
        assert_eq!(
            config,
            PageConfig {
                theme_endpoint: "/nas/auth/theme/".to_string(),
                copy_feedback_ms: 500,
                ..PageConfig::default()
            }
        );
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(parse_page_config("{\"alert_dismiss_delay_ms\": \"soon\"}").is_err());
        assert!(parse_page_config("not json").is_err());
    }
}
