fn unsupported() -> String {
    "Bootstrap widgets are only available when compiled for wasm32".to_string()
}

pub fn activate_tooltip(_element: &web_sys::Element) -> Result<(), String> {
    Err(unsupported())
}

pub fn activate_popover(_element: &web_sys::Element) -> Result<(), String> {
    Err(unsupported())
}

pub fn close_alert(_element: &web_sys::Element) -> Result<(), String> {
    Err(unsupported())
}
