#![forbid(unsafe_code)]

//! Row-major grid of [`Cell`]s.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height` for the lifetime of the buffer.
//! 2. Out-of-bounds reads return `None`; out-of-bounds writes are dropped.

use crate::cell::Cell;
use crate::geometry::Rect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill `area` (clipped to the buffer) with `cell`.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let area = area.intersection(&self.area());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Text of one row; empty cells read as spaces.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| {
                self.get(x, y)
                    .and_then(|c| c.content.as_char())
                    .unwrap_or(' ')
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut buf = Buffer::new(2, 2);
        buf.set(5, 5, Cell::from_char('x'));
        assert!(buf.get(5, 5).is_none());
        assert!(buf.get(1, 1).unwrap().is_empty());
    }

    #[test]
    fn fill_clips_to_buffer() {
        let mut buf = Buffer::new(3, 1);
        buf.fill(Rect::new(1, 0, 10, 10), Cell::from_char('#'));
        assert_eq!(buf.row_text(0), " ##");
    }

    #[test]
    fn row_text_reads_content() {
        let mut buf = Buffer::new(3, 1);
        buf.set(0, 0, Cell::from_char('a'));
        buf.set(2, 0, Cell::from_char('c'));
        assert_eq!(buf.row_text(0), "a c");
    }
}
