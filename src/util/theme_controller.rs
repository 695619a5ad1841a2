//! Theme preference controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps three things in step: the theme attribute on the document root, the
//! toggle icon glyph, and the persisted preference. Persistence and DOM access
//! are injected through [`PreferenceStore`] and [`ThemePresenter`] so the
//! controller runs the same against `localStorage` and against test doubles.
//!
//! TRIGGERS
//! ========
//! - page load: [`ThemeController::initialize`]
//! - toggle click: [`ThemeController::toggle`]
//! - OS scheme change: [`ThemeController::on_system_scheme_change`]

#[cfg(test)]
#[path = "theme_controller_test.rs"]
mod theme_controller_test;

use crate::state::theme::Theme;

/// Key-value persistence capability (`localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Presentation capability over the root element and the icon element.
pub trait ThemePresenter {
    /// Write the visible theme attribute on the document root.
    fn set_theme_attribute(&self, theme: Theme);
    /// Currently visible theme attribute, if any.
    fn theme_attribute(&self) -> Option<String>;
    /// Swap the icon glyph. Implementations skip this when no icon exists.
    fn set_icon_state(&self, theme: Theme);
}

/// Owns the theme value and its three triggers.
pub struct ThemeController<S, P> {
    store: S,
    presenter: P,
    storage_key: String,
}

impl<S: PreferenceStore, P: ThemePresenter> ThemeController<S, P> {
    pub fn new(store: S, presenter: P, storage_key: impl Into<String>) -> Self {
        Self { store, presenter, storage_key: storage_key.into() }
    }

    /// Stored preference, or light when nothing usable is stored.
    pub fn get_stored_preference(&self) -> Theme {
        self.stored_raw()
            .map_or(Theme::Light, |raw| Theme::from_stored(&raw))
    }

    /// Whether the user has made an explicit choice.
    pub fn has_stored_preference(&self) -> bool {
        self.stored_raw().is_some()
    }

    /// Apply `theme` to the root attribute and icon, then persist it.
    pub fn apply_theme(&self, theme: Theme) {
        self.presenter.set_theme_attribute(theme);
        self.presenter.set_icon_state(theme);
        self.store.set(&self.storage_key, theme.as_str());
        log::debug!("theme applied: {theme}");
    }

    pub fn initialize(&self) -> Theme {
        let theme = self.get_stored_preference();
        self.apply_theme(theme);
        theme
    }

    /// Invert the visible theme (not the stored one) and apply it.
    pub fn toggle(&self) -> Theme {
        let visible = self.presenter.theme_attribute();
        let next = Theme::toggled_from_attribute(visible.as_deref());
        self.apply_theme(next);
        next
    }

    /// Follow the OS scheme unless an explicit preference is stored.
    ///
    /// Returns `true` when the notification was applied.
    pub fn on_system_scheme_change(&self, prefers_dark: bool) -> bool {
        if self.has_stored_preference() {
            log::debug!("system scheme change ignored: explicit preference stored");
            return false;
        }
        self.apply_theme(Theme::from_system(prefers_dark));
        true
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn stored_raw(&self) -> Option<String> {
        self.store
            .get(&self.storage_key)
            .filter(|raw| !raw.is_empty())
    }
}
