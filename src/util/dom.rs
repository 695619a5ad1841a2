//! web-sys glue shared by the page listeners.
//!
//! Listeners installed here stay attached for the lifetime of the page, so
//! their closures are leaked with `forget` rather than stored.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::UiError;

pub fn window() -> Result<web_sys::Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document(window: &web_sys::Window) -> Result<web_sys::Document, UiError> {
    window.document().ok_or(UiError::NoDocument)
}

/// Elements matching `selector`, in document order.
pub fn query_all(document: &web_sys::Document, selector: &str) -> Result<Vec<web_sys::Element>, UiError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_ref::<web_sys::Element>().cloned())
        .collect())
}

/// Attach `handler` to `event` on `target` for the rest of the page lifetime.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Run `f` once the document has been parsed.
///
/// Runs immediately when parsing already finished (deferred module scripts),
/// otherwise on `DOMContentLoaded`.
pub fn on_ready<F>(document: &web_sys::Document, f: F) -> Result<(), UiError>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut pending = Some(f);
    listen(document, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    })
}
