#![forbid(unsafe_code)]

//! Render primitives for the pickers widgets.
//!
//! This crate provides:
//! - [`Rect`] and [`Sides`] for widget geometry
//! - [`Cell`] and [`PackedRgba`] for a single terminal cell
//! - [`Buffer`], the grid of cells widgets paint into

pub mod buffer;
pub mod cell;
pub mod geometry;

pub use buffer::Buffer;
pub use cell::{Cell, CellContent, CellFlags, PackedRgba};
pub use geometry::{Rect, Sides};
