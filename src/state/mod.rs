//! Typed page state.

pub mod theme;
