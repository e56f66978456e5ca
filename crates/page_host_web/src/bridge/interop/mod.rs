//! Shared transport interop for the widget bridge.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn activate_tooltip(element: &web_sys::Element) -> Result<(), String> {
    imp::activate_tooltip(element)
}

pub fn activate_popover(element: &web_sys::Element) -> Result<(), String> {
    imp::activate_popover(element)
}

pub fn close_alert(element: &web_sys::Element) -> Result<(), String> {
    imp::close_alert(element)
}
