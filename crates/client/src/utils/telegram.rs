//! Bridge to the host Telegram WebApp object. Everything degrades to a
//! no-op when the app runs in a plain browser tab.

use gloo::utils::window;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

fn web_app() -> Option<JsValue> {
    let telegram = Reflect::get(&window(), &JsValue::from_str("Telegram")).ok()?;
    if telegram.is_undefined() {
        return None;
    }
    let web_app = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    (!web_app.is_undefined()).then_some(web_app)
}

fn call0(target: &JsValue, name: &str) {
    if let Ok(f) = Reflect::get(target, &JsValue::from_str(name)) {
        if let Some(f) = f.dyn_ref::<Function>() {
            let _ = f.call0(target);
        }
    }
}

/// Raw `initData` string the backend authenticates with. `None` outside of
/// Telegram or when the host provided nothing.
pub fn init_data() -> Option<String> {
    let web_app = web_app()?;
    let init_data = Reflect::get(&web_app, &JsValue::from_str("initData")).ok()?;
    let init_data = init_data.as_string()?;
    (!init_data.is_empty()).then_some(init_data)
}

/// Tell the host we are ready and ask for the full viewport
pub fn init_web_app() {
    match web_app() {
        Some(web_app) => {
            call0(&web_app, "ready");
            call0(&web_app, "expand");
        }
        None => debug!("Telegram WebApp bridge not present"),
    }
}
