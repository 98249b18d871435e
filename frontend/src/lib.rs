pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod utils;

use leptos::logging::log;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    log!("mounting site shell");
    leptos::mount_to_body(app::App);
}
