//! Page navigation adapter backed by `window.location`.

use page_contract::NavigationService;

#[derive(Debug, Clone, Copy, Default)]
/// Browser navigation adapter that assigns `location.href`.
pub struct WebNavigationService;

impl NavigationService for WebNavigationService {
    fn navigate(&self, url: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            window
                .location()
                .set_href(url)
                .map_err(|err| format!("navigation to `{url}` failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Err("navigation requires a wasm32 browser target".to_string())
        }
    }
}
