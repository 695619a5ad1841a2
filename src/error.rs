//! Error type for the browser glue.
//!
//! Nothing here is surfaced to the user; the page bootstrap logs these and
//! keeps installing the remaining listeners.

/// Failures while wiring page behavior.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// `window` is not available (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,

    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,

    /// The document has no root `<html>` element.
    #[error("document has no root element")]
    NoRootElement,

    /// A DOM call threw a JavaScript exception.
    #[error("javascript error: {0}")]
    Js(String),

    /// Inline page configuration was not valid JSON for [`crate::config::PageConfig`].
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
