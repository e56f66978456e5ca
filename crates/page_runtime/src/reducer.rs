//! Click-handling decisions for the enhanced page.
//!
//! Listeners translate DOM events into [`PageAction`]s; [`reduce_page`] decides which
//! [`PageEffect`]s follow. Effects that need a host service are run by
//! [`crate::effects::run_host_effect`]; the rest are applied by the DOM host that owns the event.

use page_contract::Theme;
use thiserror::Error;

use crate::{
    config::PageConfig,
    delegation::{click_hits_nested_control, ClickTarget},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// User interactions the enhancer reacts to.
pub enum PageAction {
    /// A click inside a file row.
    FileRowClicked {
        /// The row's `data-url`, if present.
        row_url: Option<String>,
        /// Where the click landed.
        target: ClickTarget,
    },
    /// A click on a theme selector control.
    ThemeControlClicked {
        /// The control's `data-theme` value.
        theme_id: String,
    },
    /// A click on a copy control.
    CopyControlClicked {
        /// The control's `data-copy` value, if present.
        payload: Option<String>,
        /// The control's label markup at click time.
        current_label: String,
        /// Label saved by an earlier click whose revert has not fired yet.
        pending_original: Option<String>,
    },
    /// A click anywhere in the document, relative to the mobile nav menu.
    DocumentClicked {
        /// Whether the collapsible menu is expanded.
        collapse_open: bool,
        /// Whether the click landed inside the menu.
        within_collapse: bool,
        /// Whether the click landed inside the toggle control.
        within_toggler: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_page`].
pub enum PageEffect {
    /// Stop the click from bubbling past the current listener.
    StopPropagation,
    /// Navigate the page to a URL.
    Navigate(String),
    /// Set the document's theme attribute.
    ApplyTheme(Theme),
    /// Mirror the theme to the server without waiting for the result.
    PersistTheme(Theme),
    /// Write text to the clipboard.
    CopyToClipboard(String),
    /// Replace the copy control's label with confirmation markup.
    ShowCopyFeedback {
        /// Confirmation markup.
        label_html: String,
    },
    /// Restore the copy control's label after a delay.
    RestoreLabelAfter {
        /// Label markup to restore.
        label_html: String,
        /// Delay before restoring.
        delay_ms: u32,
    },
    /// Click the mobile nav toggle so the menu collapses.
    ToggleNavCollapse,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions carrying invalid input.
pub enum ReducerError {
    /// The theme control's `data-theme` value is blank.
    #[error("theme control has a blank `data-theme` value")]
    BlankTheme,
}

/// Decides the effects of a [`PageAction`].
///
/// # Errors
///
/// Returns [`ReducerError::BlankTheme`] when a theme control carries no theme identifier.
pub fn reduce_page(
    config: &PageConfig,
    action: PageAction,
) -> Result<Vec<PageEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        PageAction::FileRowClicked { row_url, target } => {
            if click_hits_nested_control(&target) {
                effects.push(PageEffect::StopPropagation);
            } else if let Some(url) = row_url.filter(|url| !url.is_empty()) {
                effects.push(PageEffect::Navigate(url));
            }
        }
        PageAction::ThemeControlClicked { theme_id } => {
            let theme = Theme::parse(&theme_id).ok_or(ReducerError::BlankTheme)?;
            effects.push(PageEffect::ApplyTheme(theme.clone()));
            effects.push(PageEffect::PersistTheme(theme));
        }
        PageAction::CopyControlClicked {
            payload,
            current_label,
            pending_original,
        } => {
            if let Some(payload) = payload {
                effects.push(PageEffect::CopyToClipboard(payload));
                effects.push(PageEffect::ShowCopyFeedback {
                    label_html: config.copied_label_html.clone(),
                });
                effects.push(PageEffect::RestoreLabelAfter {
                    label_html: pending_original.unwrap_or(current_label),
                    delay_ms: config.copy_feedback_ms,
                });
            }
        }
        PageAction::DocumentClicked {
            collapse_open,
            within_collapse,
            within_toggler,
        } => {
            if collapse_open && !within_collapse && !within_toggler {
                effects.push(PageEffect::ToggleNavCollapse);
            }
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn reduce(action: PageAction) -> Vec<PageEffect> {
        reduce_page(&PageConfig::default(), action).expect("reduce")
    }

    fn row_click(url: Option<&str>, tag: &str, parent: Option<&str>) -> PageAction {
        PageAction::FileRowClicked {
            row_url: url.map(str::to_string),
            target: ClickTarget::new(tag, parent),
        }
    }

    #[test]
    fn row_click_outside_controls_navigates_to_row_url() {
        assert_eq!(
            reduce(row_click(Some("/files/doc.txt"), "TD", Some("TR"))),
            vec![PageEffect::Navigate("/files/doc.txt".to_string())]
        );
    }

    #[test]
    fn row_click_on_nested_control_only_stops_propagation() {
        for (tag, parent) in [("A", Some("TD")), ("BUTTON", Some("TD")), ("I", Some("BUTTON"))] {
            let effects = reduce(row_click(Some("/files/doc.txt"), tag, parent));
            assert_eq!(effects, vec![PageEffect::StopPropagation], "tag={tag}");
        }
    }

    #[test]
    fn row_without_url_does_nothing() {
        assert_eq!(reduce(row_click(None, "TD", Some("TR"))), Vec::<PageEffect>::new());
        assert_eq!(reduce(row_click(Some(""), "TD", Some("TR"))), Vec::<PageEffect>::new());
    }

    #[test]
    fn theme_click_applies_then_persists_once() {
        let effects = reduce(PageAction::ThemeControlClicked {
            theme_id: "dark".to_string(),
        });
        assert_eq!(
            effects,
            vec![
                PageEffect::ApplyTheme(Theme::Dark),
                PageEffect::PersistTheme(Theme::Dark),
            ]
        );
    }

    #[test]
    fn custom_theme_is_applied_and_persisted_verbatim() {
        let effects = reduce(PageAction::ThemeControlClicked {
            theme_id: "auto".to_string(),
        });
        let auto = Theme::Custom("auto".to_string());
        assert_eq!(
            effects,
            vec![
                PageEffect::ApplyTheme(auto.clone()),
                PageEffect::PersistTheme(auto),
            ]
        );
    }

    #[test]
    fn blank_theme_is_rejected() {
        let err = reduce_page(
            &PageConfig::default(),
            PageAction::ThemeControlClicked {
                theme_id: "  ".to_string(),
            },
        )
        .expect_err("blank theme");
        assert_eq!(err, ReducerError::BlankTheme);
    }

    #[test]
    fn copy_click_copies_and_schedules_label_revert() {
        let effects = reduce(PageAction::CopyControlClicked {
            payload: Some("hello".to_string()),
            current_label: "Copy link".to_string(),
            pending_original: None,
        });
        assert_eq!(
            effects,
            vec![
                PageEffect::CopyToClipboard("hello".to_string()),
                PageEffect::ShowCopyFeedback {
                    label_html: r#"<i class="bi bi-check"></i> Copied!"#.to_string(),
                },
                PageEffect::RestoreLabelAfter {
                    label_html: "Copy link".to_string(),
                    delay_ms: 2_000,
                },
            ]
        );
    }

    #[test]
    fn repeated_copy_click_restores_the_first_label() {
        let config = PageConfig::default();
        let effects = reduce_page(
            &config,
            PageAction::CopyControlClicked {
                payload: Some("hello".to_string()),
                current_label: config.copied_label_html.clone(),
                pending_original: Some("Copy link".to_string()),
            },
        )
        .expect("reduce");
        assert_eq!(
            effects.last(),
            Some(&PageEffect::RestoreLabelAfter {
                label_html: "Copy link".to_string(),
                delay_ms: 2_000,
            })
        );
    }

    #[test]
    fn copy_control_without_payload_does_nothing() {
        let effects = reduce(PageAction::CopyControlClicked {
            payload: None,
            current_label: "Copy".to_string(),
            pending_original: None,
        });
        assert_eq!(effects, Vec::<PageEffect>::new());
    }

    #[test]
    fn outside_click_closes_open_nav_only() {
        let click = |collapse_open, within_collapse, within_toggler| {
            reduce(PageAction::DocumentClicked {
                collapse_open,
                within_collapse,
                within_toggler,
            })
        };
        assert_eq!(click(true, false, false), vec![PageEffect::ToggleNavCollapse]);
        assert_eq!(click(true, true, false), Vec::<PageEffect>::new());
        assert_eq!(click(true, false, true), Vec::<PageEffect>::new());
        assert_eq!(click(false, false, false), Vec::<PageEffect>::new());
    }

    #[test]
    fn configured_feedback_duration_is_used() {
        let config = PageConfig {
            copy_feedback_ms: 750,
            ..PageConfig::default()
        };
        let effects = reduce_page(
            &config,
            PageAction::CopyControlClicked {
                payload: Some("x".to_string()),
                current_label: "Copy".to_string(),
                pending_original: None,
            },
        )
        .expect("reduce");
        assert!(effects.contains(&PageEffect::RestoreLabelAfter {
            label_html: "Copy".to_string(),
            delay_ms: 750,
        }));
    }
}
