use console_error_panic_hook::set_once as set_panic_hook;
use leptos::{mount_to_body, view};
use wasm_bindgen::prelude::wasm_bindgen;

mod components;
use components::App;

pub mod api;
pub mod utils;

#[wasm_bindgen]
pub fn start_client() {
    set_panic_hook();
    utils::tracing::configure_tracing();
    utils::telegram::init_web_app();

    mount_to_body(move || view! { <App/> });
}
