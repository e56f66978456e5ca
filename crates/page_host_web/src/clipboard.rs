//! Clipboard adapter using a transient input and the legacy copy command.

use page_contract::ClipboardService;

#[derive(Debug, Clone, Copy, Default)]
/// Browser clipboard adapter backed by `document.execCommand("copy")`.
pub struct WebClipboardService;

impl ClipboardService for WebClipboardService {
    fn write_text(&self, text: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| "document unavailable".to_string())?;
            let body = document
                .body()
                .ok_or_else(|| "document body unavailable".to_string())?;
            let input = document
                .create_element("input")
                .map_err(|err| format!("failed to create copy input: {err:?}"))?
                .dyn_into::<web_sys::HtmlInputElement>()
                .map_err(|_| "failed to cast copy input".to_string())?;
            input.set_value(text);
            let style = input.style();
            let _ = style.set_property("position", "fixed");
            let _ = style.set_property("left", "-9999px");
            body.append_child(&input)
                .map_err(|err| format!("failed to attach copy input: {err:?}"))?;

            input.select();
            let copied = document
                .dyn_ref::<web_sys::HtmlDocument>()
                .ok_or_else(|| "document does not support execCommand".to_string())
                .and_then(|html| {
                    html.exec_command("copy")
                        .map_err(|err| format!("copy command failed: {err:?}"))
                });
            input.remove();

            match copied? {
                true => Ok(()),
                false => Err("copy command was rejected by the browser".to_string()),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = text;
            Err("clipboard access requires a wasm32 browser target".to_string())
        }
    }
}
