//! Clipboard access through `navigator.clipboard`.

use wasm_bindgen_futures::JsFuture;

/// Copy `text` to the system clipboard.
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("Clipboard write failed: {:?}", e)))
}
