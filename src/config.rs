//! Page conventions the enhancement layer binds to.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server templates decide element ids, CSS-framework class names, and the
//! storage key. Defaults match the portal templates; a page may override any
//! subset through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="portal-ui-config">
//!   { "storage_key": "portal-theme", "alert_dismiss_ms": 8000 }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;

/// Id of the inline JSON element read by [`PageConfig::from_document`].
pub const CONFIG_ELEMENT_ID: &str = "portal-ui-config";

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-bs-theme";
pub const DEFAULT_ALERT_DISMISS_MS: u32 = 5000;
pub const DEFAULT_DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key holding the explicit theme preference.
    pub storage_key: String,
    /// Attribute on `<html>` the CSS framework reads the color mode from.
    pub theme_attribute: String,
    pub toggle_id: String,
    pub icon_id: String,
    pub file_input_id: String,
    pub form_selector: String,
    pub alert_selector: String,
    pub anchor_selector: String,
    pub alert_dismiss_ms: u32,
    pub dark_scheme_query: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            theme_attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            toggle_id: "themeToggle".to_owned(),
            icon_id: "themeIcon".to_owned(),
            file_input_id: "evidence".to_owned(),
            form_selector: ".needs-validation".to_owned(),
            alert_selector: ".alert:not(.alert-permanent)".to_owned(),
            anchor_selector: "a[href^=\"#\"]".to_owned(),
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
            dark_scheme_query: DEFAULT_DARK_SCHEME_QUERY.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the inline config block from the document, falling back to
    /// defaults when it is absent or malformed.
    #[cfg(feature = "hydrate")]
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }
}
