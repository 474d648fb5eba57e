#![forbid(unsafe_code)]

//! Style types and theme tokens for the pickers widgets.
//!
//! This crate provides:
//! - [`Style`] for cell styling with CSS-like merge/patch semantics
//! - colour helpers ([`fade`], [`blend_over`]) for translucent tokens
//! - [`PickersTheme`] and the process-wide theme handle
//! - fixed day-cell [`dimensions`]

pub mod color;
pub mod dimensions;
pub mod style;
pub mod theme;

pub use color::{blend_over, fade, parse_hex, to_hex};
pub use style::{Style, StyleFlags};
pub use theme::{
    Palette, PickersTheme, ThemeError, ThemePreset, Transitions, current_theme, set_theme,
};
