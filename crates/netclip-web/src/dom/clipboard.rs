use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Clipboard;

/// Write `text` to the system clipboard via `navigator.clipboard`.
///
/// Resolves once the browser has accepted the write. Rejections (no
/// permission, unfocused document) come back as `Err`, and so does a missing
/// `navigator.clipboard`, which is what insecure (plain HTTP) pages get.
pub async fn write_text(text: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let navigator = window.navigator();

    // The generated binding assumes the property exists; look it up first
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("Clipboard API unavailable"));
    }
    let clipboard: Clipboard = clipboard.unchecked_into();

    let promise: js_sys::Promise = clipboard.write_text(text);
    JsFuture::from(promise).await.map(|_| ())
}
