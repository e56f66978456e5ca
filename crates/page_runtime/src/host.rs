//! DOM host for the page enhancer (`wasm32` only).
//!
//! [`enhance_document`] runs every behavior against an explicit document. Each behavior is
//! independent: a missing element skips that behavior only. Listener-installing behaviors mark
//! the elements they bind, so running the pass again binds nothing new.

mod alerts;
mod copy_controls;
mod dom;
mod file_rows;
mod nav_collapse;
mod nav_links;
mod preview;
mod tables;
mod theme_controls;
mod widgets;

use std::rc::Rc;

use leptos::{logging, spawn_local};
use page_contract::markup;

use crate::{
    config::{parse_page_config, PageConfig},
    effects::{run_host_effect, HostEffectOutcome, PageServices},
    model::EnhancementReport,
    reducer::{reduce_page, PageAction, PageEffect},
};

/// Applies every page enhancement to `document` and logs what changed.
pub fn enhance_document(
    document: &web_sys::Document,
    config: &PageConfig,
    services: &PageServices,
) {
    let runtime = HostRuntime {
        config: Rc::new(config.clone()),
        services: services.clone(),
    };

    let report = EnhancementReport {
        widgets_activated: widgets::activate_widgets(document),
        alert_dismissal_scheduled: alerts::schedule_alert_dismissal(
            document,
            config.alert_dismiss_delay_ms,
        ),
        active_nav_links: nav_links::mark_active_nav_links(document),
        file_rows_bound: file_rows::bind_file_rows(document, &runtime),
        theme_controls_bound: theme_controls::bind_theme_controls(document, &runtime),
        nav_collapse_bound: nav_collapse::bind_nav_auto_close(document, &runtime),
        preview_faded_in: preview::fade_in_preview(document),
        copy_controls_bound: copy_controls::bind_copy_controls(document, &runtime),
        tables_wrapped: tables::wrap_tables(document),
    };
    logging::log!("{}", report.summary());
}

/// Reads the inline JSON config override, falling back to defaults.
pub fn load_page_config(document: &web_sys::Document) -> PageConfig {
    let Some(raw) = document
        .get_element_by_id(markup::CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
    else {
        return PageConfig::default();
    };
    parse_page_config(&raw).unwrap_or_else(|err| {
        logging::warn!("ignoring invalid page enhancer config: {err}");
        PageConfig::default()
    })
}

/// Shared state captured by installed listeners.
#[derive(Clone)]
struct HostRuntime {
    config: Rc<PageConfig>,
    services: PageServices,
}

impl HostRuntime {
    /// Reduces `action`, runs service effects, and passes document effects to `apply`.
    fn dispatch(&self, action: PageAction, mut apply: impl FnMut(PageEffect)) {
        let effects = match reduce_page(&self.config, action) {
            Ok(effects) => effects,
            Err(err) => {
                logging::warn!("page action ignored: {err}");
                return;
            }
        };
        for effect in effects {
            match run_host_effect(&self.services, effect) {
                HostEffectOutcome::Completed => {}
                HostEffectOutcome::Background(task) => spawn_local(task),
                HostEffectOutcome::Document(effect) => apply(effect),
            }
        }
    }
}
