pub mod animation;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
#[cfg(feature = "ssr")]
pub mod config;
pub mod contact;
pub mod content;
pub mod count_up;
pub mod gallery;
pub mod loading;
pub mod logging;
pub mod scroll;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    logging::init_browser_logging();
    leptos::mount::hydrate_body(App);
}
