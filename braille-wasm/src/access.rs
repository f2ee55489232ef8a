use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

use braille_core::SharedSecretGate;

use crate::constants::DEFAULT_TEACHER_KEY;

/// Build the teacher access gate from host-page configuration. The host
/// overrides the secret by defining `window.__TEACHER_KEY`; without it a
/// development fallback applies.
pub fn configured_gate(window: &Window) -> SharedSecretGate {
    let secret = Reflect::get(window, &JsValue::from_str("__TEACHER_KEY"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| DEFAULT_TEACHER_KEY.to_string());
    SharedSecretGate::new(secret)
}
