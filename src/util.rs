// Small helpers shared by the controllers and the app shell.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Returns a random element of a slice, or `None` when the slice is empty.
pub fn random_array_element<T>(items: &[T]) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let index = (js_sys::Math::random() * items.len() as f64).floor() as usize;
    items.get(index.min(items.len() - 1))
}
