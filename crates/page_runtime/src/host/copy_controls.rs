use std::{cell::RefCell, rc::Rc};

use page_contract::markup;

use super::{
    dom::{bind_once, on_click, query_all, set_timeout},
    HostRuntime,
};
use crate::{
    copy_feedback::CopyFeedbackState,
    reducer::{PageAction, PageEffect},
};

const BINDING: &str = "copy";

/// Installs copy-to-clipboard with a temporary confirmation label on every copy control.
pub(super) fn bind_copy_controls(document: &web_sys::Document, runtime: &HostRuntime) -> usize {
    let mut bound = 0;
    for control in query_all(document, markup::COPY_CONTROL_SELECTOR) {
        if !bind_once(&control, BINDING) {
            continue;
        }
        let feedback: Rc<RefCell<CopyFeedbackState>> = Rc::default();
        let runtime = runtime.clone();
        let control_for_click = control.clone();
        let installed = on_click(&control, move |_event| {
            let current_label = control_for_click.inner_html();
            let action = PageAction::CopyControlClicked {
                payload: control_for_click.get_attribute(markup::COPY_PAYLOAD_ATTR),
                current_label: current_label.clone(),
                pending_original: feedback.borrow().pending_original(),
            };
            runtime.dispatch(action, |effect| match effect {
                PageEffect::ShowCopyFeedback { label_html } => {
                    feedback.borrow_mut().begin(&current_label);
                    control_for_click.set_inner_html(&label_html);
                }
                PageEffect::RestoreLabelAfter {
                    label_html,
                    delay_ms,
                } => {
                    let generation = feedback.borrow().generation();
                    let control = control_for_click.clone();
                    let feedback = feedback.clone();
                    set_timeout(delay_ms, move || {
                        if feedback.borrow_mut().finish(generation) {
                            control.set_inner_html(&label_html);
                        }
                    });
                }
                _ => {}
            });
        });
        if installed {
            bound += 1;
        }
    }
    bound
}
