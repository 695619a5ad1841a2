//! # portal-ui
//!
//! WASM enhancement layer for the server-rendered report portal pages:
//! light/dark theme with persisted preference and OS scheme following,
//! form-validation UX, evidence upload preview, alert auto-dismiss, and
//! smooth in-page scrolling.
//!
//! Build with the `hydrate` feature for the browser. Without it only the
//! platform-independent logic is compiled, which is what the tests exercise.

pub mod config;
pub mod error;
#[cfg(feature = "hydrate")]
pub mod page;
pub mod state;
pub mod util;

/// WASM entry point, run once when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second module instance on the page keeps the first logger.
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {e}");
    }

    if let Err(e) = page::install() {
        log::error!("portal-ui not installed: {e}");
    }
}
