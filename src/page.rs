//! Page bootstrap: theme first, then the boundary listeners.
//!
//! The theme is applied as soon as the module starts so the page does not
//! render in the wrong color mode. Form, upload, alert, and anchor listeners
//! need the parsed document and are installed once it is ready. Each binding
//! fails on its own; one failure is logged and the rest still install.

use crate::config::PageConfig;
use crate::error::UiError;
use crate::util::{alerts, browser_theme, dom, file_preview, form_validation, smooth_scroll};

/// Install every page enhancement.
///
/// # Errors
///
/// Fails only when there is no window or document to enhance.
pub fn install() -> Result<(), UiError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let config = PageConfig::from_document(&document);

    if let Err(e) = browser_theme::install(&window, &document, &config) {
        log::warn!("theme controller not installed: {e}");
    }

    let ready_document = document.clone();
    dom::on_ready(&document, move || install_listeners(&window, &ready_document, &config))
}

fn install_listeners(window: &web_sys::Window, document: &web_sys::Document, config: &PageConfig) {
    match form_validation::install(document, &config.form_selector) {
        Ok(count) => log::debug!("validation bound to {count} form(s)"),
        Err(e) => log::warn!("form validation not installed: {e}"),
    }

    match file_preview::install(document, &config.file_input_id) {
        Ok(true) => log::debug!("upload preview bound to #{}", config.file_input_id),
        Ok(false) => {}
        Err(e) => log::warn!("upload preview not installed: {e}"),
    }

    match alerts::install(window, document, &config.alert_selector, config.alert_dismiss_ms) {
        Ok(count) => log::debug!("{count} alert(s) scheduled for dismissal"),
        Err(e) => log::warn!("alert auto-dismiss not installed: {e}"),
    }

    match smooth_scroll::install(document, &config.anchor_selector) {
        Ok(count) => log::debug!("smooth scroll bound to {count} anchor(s)"),
        Err(e) => log::warn!("smooth scroll not installed: {e}"),
    }
}
