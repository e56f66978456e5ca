//! Host-service execution for reducer effects.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use leptos::logging;
use page_contract::{ClipboardService, NavigationService, Theme, ThemePreferenceService};

use crate::{config::PageConfig, reducer::PageEffect};

/// Host services the enhancer calls into.
#[derive(Clone)]
pub struct PageServices {
    /// Theme preference persistence.
    pub theme_preference: Rc<dyn ThemePreferenceService>,
    /// Clipboard writes.
    pub clipboard: Rc<dyn ClipboardService>,
    /// Page navigation.
    pub navigation: Rc<dyn NavigationService>,
}

impl PageServices {
    /// Bundles explicit service implementations.
    pub fn new(
        theme_preference: Rc<dyn ThemePreferenceService>,
        clipboard: Rc<dyn ClipboardService>,
        navigation: Rc<dyn NavigationService>,
    ) -> Self {
        Self {
            theme_preference,
            clipboard,
            navigation,
        }
    }

    /// Builds the services for the compile-time selected host strategy.
    pub fn from_host(config: &PageConfig) -> Self {
        Self::new(
            Rc::new(page_host_web::theme_preference_service(
                &config.theme_endpoint,
            )),
            Rc::new(page_host_web::clipboard_service()),
            Rc::new(page_host_web::navigation_service()),
        )
    }
}

/// Result of running a [`PageEffect`] against host services.
pub enum HostEffectOutcome {
    /// The effect ran to completion.
    Completed,
    /// The effect continues as background work the caller must spawn and never await.
    Background(LocalBoxFuture<'static, ()>),
    /// The effect targets the DOM and must be applied by the caller.
    Document(PageEffect),
}

/// Runs service-backed effects and hands document effects back to the caller.
///
/// Service failures are logged and otherwise ignored.
pub fn run_host_effect(services: &PageServices, effect: PageEffect) -> HostEffectOutcome {
    match effect {
        PageEffect::Navigate(url) => {
            if let Err(err) = services.navigation.navigate(&url) {
                logging::warn!("file row navigation to `{url}` failed: {err}");
            }
            HostEffectOutcome::Completed
        }
        PageEffect::CopyToClipboard(text) => {
            if let Err(err) = services.clipboard.write_text(&text) {
                logging::warn!("clipboard copy failed: {err}");
            }
            HostEffectOutcome::Completed
        }
        PageEffect::PersistTheme(theme) => HostEffectOutcome::Background(persist_theme_task(
            services.theme_preference.clone(),
            theme,
        )),
        other => HostEffectOutcome::Document(other),
    }
}

/// Builds the fire-and-forget theme preference request.
///
/// Nothing observes the outcome: the theme is already applied and is not rolled back.
pub fn persist_theme_task(
    service: Rc<dyn ThemePreferenceService>,
    theme: Theme,
) -> LocalBoxFuture<'static, ()> {
    Box::pin(async move {
        if let Err(err) = service.persist_theme(theme.clone()).await {
            logging::warn!("theme preference `{theme}` was not saved: {err}");
        }
    })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use page_contract::{
        MemoryClipboardService, MemoryNavigationService, MemoryThemePreferenceService,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        delegation::ClickTarget,
        reducer::{reduce_page, PageAction},
    };

    struct Harness {
        theme: MemoryThemePreferenceService,
        clipboard: MemoryClipboardService,
        navigation: MemoryNavigationService,
        services: PageServices,
    }

    impl Harness {
        fn new(theme: MemoryThemePreferenceService) -> Self {
            let clipboard = MemoryClipboardService::default();
            let navigation = MemoryNavigationService::default();
            let services = PageServices::new(
                Rc::new(theme.clone()),
                Rc::new(clipboard.clone()),
                Rc::new(navigation.clone()),
            );
            Self {
                theme,
                clipboard,
                navigation,
                services,
            }
        }

        /// Runs an action the way the DOM host does, returning document effects.
        fn dispatch(&self, action: PageAction) -> Vec<PageEffect> {
            let effects = reduce_page(&PageConfig::default(), action).expect("reduce");
            let mut document_effects = Vec::new();
            for effect in effects {
                match run_host_effect(&self.services, effect) {
                    HostEffectOutcome::Completed => {}
                    HostEffectOutcome::Background(task) => block_on(task),
                    HostEffectOutcome::Document(effect) => document_effects.push(effect),
                }
            }
            document_effects
        }
    }

    #[test]
    fn row_click_navigates_through_navigation_service() {
        let harness = Harness::new(MemoryThemePreferenceService::default());
        let document_effects = harness.dispatch(PageAction::FileRowClicked {
            row_url: Some("/files/doc.txt".to_string()),
            target: ClickTarget::new("SPAN", Some("TD")),
        });
        assert_eq!(document_effects, Vec::<PageEffect>::new());
        assert_eq!(harness.navigation.visited(), vec!["/files/doc.txt".to_string()]);
    }

    #[test]
    fn nested_control_click_never_reaches_navigation() {
        let harness = Harness::new(MemoryThemePreferenceService::default());
        let document_effects = harness.dispatch(PageAction::FileRowClicked {
            row_url: Some("/files/doc.txt".to_string()),
            target: ClickTarget::new("A", Some("TD")),
        });
        assert_eq!(document_effects, vec![PageEffect::StopPropagation]);
        assert!(harness.navigation.visited().is_empty());
    }

    #[test]
    fn theme_is_applied_even_when_the_request_fails() {
        let harness = Harness::new(MemoryThemePreferenceService::failing("503"));
        let document_effects = harness.dispatch(PageAction::ThemeControlClicked {
            theme_id: "dark".to_string(),
        });
        assert_eq!(document_effects, vec![PageEffect::ApplyTheme(Theme::Dark)]);
        assert_eq!(harness.theme.requests(), vec![Theme::Dark]);
    }

    #[test]
    fn custom_theme_reaches_document_and_server_once() {
        let harness = Harness::new(MemoryThemePreferenceService::default());
        let document_effects = harness.dispatch(PageAction::ThemeControlClicked {
            theme_id: "auto".to_string(),
        });
        let auto = Theme::Custom("auto".to_string());
        assert_eq!(document_effects, vec![PageEffect::ApplyTheme(auto.clone())]);
        assert_eq!(harness.theme.requests(), vec![auto]);
    }

    #[test]
    fn persist_task_is_deferred_until_spawned() {
        let harness = Harness::new(MemoryThemePreferenceService::default());
        let outcome = run_host_effect(&harness.services, PageEffect::PersistTheme(Theme::Light));
        let HostEffectOutcome::Background(task) = outcome else {
            panic!("persist should run in the background");
        };
        assert!(harness.theme.requests().is_empty());
        block_on(task);
        assert_eq!(harness.theme.requests(), vec![Theme::Light]);
    }

    #[test]
    fn copy_click_writes_payload_to_clipboard() {
        let harness = Harness::new(MemoryThemePreferenceService::default());
        let document_effects = harness.dispatch(PageAction::CopyControlClicked {
            payload: Some("hello".to_string()),
            current_label: "Copy".to_string(),
            pending_original: None,
        });
        assert_eq!(harness.clipboard.contents(), Some("hello".to_string()));
        assert_eq!(
            document_effects.last(),
            Some(&PageEffect::RestoreLabelAfter {
                label_html: "Copy".to_string(),
                delay_ms: 2_000,
            })
        );
    }
}
