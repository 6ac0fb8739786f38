//! ChatWithYoutube Landing Page
//!
//! Single marketing page for the browser extension, rendered client-side with Leptos.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;
use utils::constants::LOG_LEVEL;
use utils::dom::hide_loading_screen;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic hook first so any later failure reaches the console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));
    log::info!("ChatWithYoutube landing page starting");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
    log::debug!("app mounted to body");
}
