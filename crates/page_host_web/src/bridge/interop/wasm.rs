use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = r#"
function widgetLibrary() {
  if (typeof bootstrap === 'undefined') {
    throw new Error('Bootstrap widget library is unavailable');
  }
  return bootstrap;
}

export function jsActivateTooltip(element) {
  widgetLibrary().Tooltip.getOrCreateInstance(element);
}

export function jsActivatePopover(element) {
  widgetLibrary().Popover.getOrCreateInstance(element);
}

export function jsCloseAlert(element) {
  widgetLibrary().Alert.getOrCreateInstance(element).close();
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = jsActivateTooltip)]
    fn js_activate_tooltip(element: &web_sys::Element) -> Result<(), JsValue>;
    #[wasm_bindgen(catch, js_name = jsActivatePopover)]
    fn js_activate_popover(element: &web_sys::Element) -> Result<(), JsValue>;
    #[wasm_bindgen(catch, js_name = jsCloseAlert)]
    fn js_close_alert(element: &web_sys::Element) -> Result<(), JsValue>;
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

pub fn activate_tooltip(element: &web_sys::Element) -> Result<(), String> {
    js_activate_tooltip(element).map_err(js_error_to_string)
}

pub fn activate_popover(element: &web_sys::Element) -> Result<(), String> {
    js_activate_popover(element).map_err(js_error_to_string)
}

pub fn close_alert(element: &web_sys::Element) -> Result<(), String> {
    js_close_alert(element).map_err(js_error_to_string)
}
