//! Browser bindings for the theme controller.
//!
//! [`LocalStore`] backs [`PreferenceStore`] with `localStorage`;
//! [`DocumentPresenter`] backs [`ThemePresenter`] with the `<html>` element
//! and the optional toggle icon. [`install`] applies the stored theme and
//! wires the toggle click and the OS scheme listener.

use std::rc::Rc;

use wasm_bindgen::JsCast;

use crate::config::PageConfig;
use crate::error::UiError;
use crate::state::theme::Theme;
use crate::util::dom;
use crate::util::theme_controller::{PreferenceStore, ThemeController, ThemePresenter};

pub type BrowserThemeController = ThemeController<LocalStore, DocumentPresenter>;

/// `localStorage`, or nothing when the browser has storage disabled.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open(window: &web_sys::Window) -> Self {
        match window.local_storage() {
            Ok(storage) => Self { storage },
            Err(e) => {
                log::warn!("localStorage unavailable: {e:?}");
                Self { storage: None }
            }
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read of {key} failed: {e:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            log::debug!("skipping {key} write: no localStorage");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("localStorage write of {key} failed: {e:?}");
        }
    }
}

/// Root element plus optional icon element.
pub struct DocumentPresenter {
    root: web_sys::Element,
    icon: Option<web_sys::Element>,
    attribute: String,
}

impl DocumentPresenter {
    pub fn new(root: web_sys::Element, icon: Option<web_sys::Element>, attribute: impl Into<String>) -> Self {
        Self { root, icon, attribute: attribute.into() }
    }
}

impl ThemePresenter for DocumentPresenter {
    fn set_theme_attribute(&self, theme: Theme) {
        if let Err(e) = self.root.set_attribute(&self.attribute, theme.as_str()) {
            log::warn!("setting {} failed: {e:?}", self.attribute);
        }
    }

    fn theme_attribute(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }

    fn set_icon_state(&self, theme: Theme) {
        let Some(icon) = self.icon.as_ref() else {
            return;
        };
        let classes = icon.class_list();
        if let Err(e) = classes
            .remove_1(theme.stale_icon_class())
            .and_then(|()| classes.add_1(theme.icon_class()))
        {
            log::warn!("updating theme icon failed: {e:?}");
        }
    }
}

/// Apply the stored theme and wire the toggle and system-scheme triggers.
///
/// # Errors
///
/// Fails when the document has no root element or a listener cannot be
/// attached. A missing toggle or icon element is not an error.
pub fn install(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &PageConfig,
) -> Result<Rc<BrowserThemeController>, UiError> {
    let root = document.document_element().ok_or(UiError::NoRootElement)?;
    let icon = document.get_element_by_id(&config.icon_id);
    let presenter = DocumentPresenter::new(root, icon, config.theme_attribute.as_str());
    let controller = Rc::new(ThemeController::new(
        LocalStore::open(window),
        presenter,
        config.storage_key.as_str(),
    ));

    let theme = controller.initialize();
    log::info!("theme initialized: {theme}");

    if let Some(toggle) = document.get_element_by_id(&config.toggle_id) {
        let ctl = Rc::clone(&controller);
        dom::listen(&toggle, "click", move |_| {
            ctl.toggle();
        })?;
    } else {
        log::debug!("no #{} on page; toggle not wired", config.toggle_id);
    }

    match window.match_media(&config.dark_scheme_query)? {
        Some(query) => {
            let ctl = Rc::clone(&controller);
            dom::listen(&query, "change", move |event| {
                if let Some(change) = event.dyn_ref::<web_sys::MediaQueryListEvent>() {
                    ctl.on_system_scheme_change(change.matches());
                }
            })?;
        }
        None => log::debug!("media query {} unsupported", config.dark_scheme_query),
    }

    Ok(controller)
}
