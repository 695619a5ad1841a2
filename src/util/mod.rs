//! Page behaviors and the browser glue they sit on.
//!
//! SYSTEM CONTEXT
//! ==============
//! Decision logic (theme transitions, submit gating, help text, fragment
//! parsing) compiles everywhere so it can be tested natively. DOM wiring is
//! behind the `hydrate` feature.

#[cfg(feature = "hydrate")]
pub mod alerts;
#[cfg(feature = "hydrate")]
pub mod browser_theme;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod file_preview;
pub mod form_validation;
pub mod smooth_scroll;
pub mod theme_controller;
