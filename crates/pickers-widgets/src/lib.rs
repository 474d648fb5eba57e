#![forbid(unsafe_code)]

//! Date-picker widgets.
//!
//! Widgets paint into a [`Buffer`] through [`Widget`] or
//! [`StatefulWidget`]. The [`day`] module holds the calendar day cell; the
//! [`adapter`] module is the date formatting seam.

pub mod a11y;
pub mod adapter;
pub mod day;

pub use a11y::{A11yNode, Role, TabIndex};
pub use adapter::{ChronoAdapter, DateAdapter, DateFormat};
pub use day::{
    ButtonAttrs, DayCell, DayCellState, DayElement, DayEvent, DayOutcome, DayPresentation,
    DayProps, FocusController, FocusWatch, Interaction, VisualState,
};

use pickers_render::buffer::Buffer;
use pickers_render::cell::{Cell, CellFlags};
use pickers_render::geometry::Rect;
use pickers_style::Style;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the buffer with mutable state.
    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State);
}

/// Helper to apply style to a cell.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.attrs |= CellFlags::from(attrs);
    }
}

/// Draw a text span into a buffer at the given position.
///
/// Returns the x position after the last drawn character.
/// Stops at `max_x` (exclusive). Wide graphemes that do not fit are
/// dropped; multi-codepoint graphemes keep their first char.
pub(crate) fn draw_text_span(
    buf: &mut Buffer,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    use unicode_segmentation::UnicodeSegmentation;
    use unicode_width::UnicodeWidthStr;

    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if usize::from(max_x - x) < w {
            break;
        }
        let Some(c) = grapheme.chars().next() else {
            continue;
        };

        let mut cell = Cell::from_char(c);
        if let Some(existing) = buf.get(x, y) {
            cell.bg = existing.bg;
        }
        apply_style(&mut cell, style);
        buf.set(x, y, cell);

        x = x.saturating_add(w as u16);
    }
    x
}
