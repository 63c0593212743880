//! Bad Credit Coin presale site
//!
//! Single-page Leptos frontend: presale countdown, payment instructions, and
//! an optional MetaMask connection shown in the header.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

const LOADING_ELEMENT_ID: &str = "leptos-loading";

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages go to the browser console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Presale site starting");

    if let Err(e) = lib_core::init_config() {
        log::error!("Falling back to default configuration: {}", e);
    }

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading element from `index.html`, if present.
pub(crate) fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available; loading screen left as is");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("Loading element already gone");
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Could not add 'hidden' class: {:?}", e);
        }
    }
    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::warn!("Could not hide loading element: {:?}", e);
    }
    log::debug!("Loading screen hidden");
}
