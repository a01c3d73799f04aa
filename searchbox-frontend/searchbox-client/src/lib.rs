use leptos::prelude::*;
use searchbox_app::{config::SearchConfig, App, SearchServices};
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

fn read_config(config: JsValue) -> SearchConfig {
    if config.is_undefined() || config.is_null() {
        return SearchConfig::default();
    }
    serde_wasm_bindgen::from_value(config).unwrap_or_else(|e| {
        log::warn!("invalid search config, using defaults: {e}");
        SearchConfig::default()
    })
}

/// Called from the host page, e.g. `mount({ csrf_token: "..." })`.
#[wasm_bindgen]
pub fn mount(config: JsValue) {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("csr mode - mounting search");

    let services = SearchServices::browser(read_config(config));
    leptos::mount::mount_to_body(move || view! { <App services /> });
}
