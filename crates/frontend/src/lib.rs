pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod store;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::config::AppConfig;

#[wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(AppConfig::load().log_level);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
