//! Auto-dismiss for flash alert banners.
//!
//! Each alert present at install time gets a one-shot timer. Closing goes
//! through the page's Bootstrap `Alert` plugin so its fade transition and
//! `closed.bs.alert` events still fire; without Bootstrap the banner is
//! removed directly.

use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::UiError;
use crate::util::dom;

/// Visibility class the fallback path strips before removal.
const SHOW_CLASS: &str = "show";

/// Schedule dismissal of every element matching `selector` after `delay_ms`.
///
/// Returns the number of alerts scheduled.
///
/// # Errors
///
/// Fails when `selector` is invalid.
pub fn install(
    window: &web_sys::Window,
    document: &web_sys::Document,
    selector: &str,
    delay_ms: u32,
) -> Result<usize, UiError> {
    let alerts = dom::query_all(document, selector)?;
    for alert in &alerts {
        let alert = alert.clone();
        let window = window.clone();
        Timeout::new(delay_ms, move || {
            if let Err(e) = dismiss(&window, &alert) {
                log::warn!("alert dismiss failed: {e}");
            }
        })
        .forget();
    }
    Ok(alerts.len())
}

fn dismiss(window: &web_sys::Window, alert: &web_sys::Element) -> Result<(), UiError> {
    if close_with_bootstrap(window, alert)? {
        return Ok(());
    }
    alert.class_list().remove_1(SHOW_CLASS)?;
    alert.remove();
    Ok(())
}

/// `new bootstrap.Alert(alert).close()`. Returns `false` when Bootstrap's
/// alert plugin is not loaded.
fn close_with_bootstrap(window: &web_sys::Window, alert: &web_sys::Element) -> Result<bool, UiError> {
    let bootstrap = Reflect::get(window, &JsValue::from_str("bootstrap"))?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return Ok(false);
    }
    let Some(ctor) = Reflect::get(&bootstrap, &JsValue::from_str("Alert"))?
        .dyn_ref::<Function>()
        .cloned()
    else {
        return Ok(false);
    };
    let instance = Reflect::construct(&ctor, &Array::of1(alert))?;
    let close = Reflect::get(&instance, &JsValue::from_str("close"))?.dyn_into::<Function>()?;
    close.call0(&instance)?;
    Ok(true)
}
