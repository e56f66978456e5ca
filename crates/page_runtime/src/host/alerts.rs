use leptos::logging;
use page_contract::markup;

use super::dom::{query_all, set_timeout};
use crate::alerts::is_auto_dismissible;

/// Schedules the one-shot close of every non-permanent alert.
///
/// Alerts are collected when the timer fires, so alerts inserted after setup are included.
pub(super) fn schedule_alert_dismissal(document: &web_sys::Document, delay_ms: u32) -> bool {
    let document = document.clone();
    set_timeout(delay_ms, move || {
        for alert in query_all(&document, markup::DISMISSIBLE_ALERT_SELECTOR) {
            if !is_auto_dismissible(&alert.class_name()) {
                continue;
            }
            if let Err(err) = page_host_web::close_alert(&alert) {
                logging::warn!("alert auto-dismiss skipped: {err}");
                return;
            }
        }
    })
}
