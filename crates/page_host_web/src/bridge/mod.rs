//! Bootstrap widget bridge for `page_host_web`.
//!
//! Callers pass DOM elements; the interop layer resolves the global widget library and reports
//! a missing library as an error string.

mod interop;

pub fn activate_tooltip(element: &web_sys::Element) -> Result<(), String> {
    interop::activate_tooltip(element)
}

pub fn activate_popover(element: &web_sys::Element) -> Result<(), String> {
    interop::activate_popover(element)
}

pub fn close_alert(element: &web_sys::Element) -> Result<(), String> {
    interop::close_alert(element)
}
