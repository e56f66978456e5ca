mod boot;

pub use boot::{document_is_loading, READY_EVENT};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn start() {
    console_error_panic_hook::set_once();
    boot::enhance_when_ready();
}
