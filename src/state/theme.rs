//! Theme value shared by the controller, the presenter, and persistence.
//!
//! DESIGN
//! ======
//! The page only ever shows one of two color modes. Everything that crosses
//! the browser boundary (stored preference, root attribute) is a string, so
//! decoding lives here and the rest of the crate works with [`Theme`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Font Awesome glyph shown while the light theme is active.
pub const LIGHT_ICON_CLASS: &str = "fa-moon";
/// Font Awesome glyph shown while the dark theme is active.
pub const DARK_ICON_CLASS: &str = "fa-sun";

/// Visual color mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage and to the root theme attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Decode a stored preference. Unknown values fall back to light.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Theme matching an OS-level `prefers-color-scheme: dark` result.
    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Theme the toggle should switch to, given the visible root attribute.
    ///
    /// Only an explicit `light` flips to dark; a missing or unexpected value
    /// resets to light.
    #[must_use]
    pub fn toggled_from_attribute(attribute: Option<&str>) -> Self {
        match attribute {
            Some("light") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph class the icon element should carry for this theme.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => LIGHT_ICON_CLASS,
            Self::Dark => DARK_ICON_CLASS,
        }
    }

    /// Glyph class that must be removed when this theme is shown.
    #[must_use]
    pub fn stale_icon_class(self) -> &'static str {
        self.inverted().icon_class()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
