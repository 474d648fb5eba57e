#![forbid(unsafe_code)]

//! Month-grid demo for the pickers day cell.
//!
//! The grid plays the parent-picker role: it owns the displayed month, the
//! selected and focused dates, and rebuilds a `DayProps` for each of the 42
//! cells every frame.

pub mod ansi;
pub mod config;
pub mod grid;

pub use config::{DemoError, theme_from_setting};
pub use grid::MonthGrid;
