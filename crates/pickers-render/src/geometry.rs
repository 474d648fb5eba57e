#![forbid(unsafe_code)]

//! Rectangles and edge insets in terminal cell units.

/// A rectangle in cell coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge.
    #[must_use]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink the rectangle by `sides`. Never underflows; an inset larger
    /// than the rectangle yields an empty rectangle.
    #[must_use]
    pub fn inner(&self, sides: Sides) -> Rect {
        let horizontal = sides.left.saturating_add(sides.right);
        let vertical = sides.top.saturating_add(sides.bottom);
        Rect {
            x: self.x.saturating_add(sides.left),
            y: self.y.saturating_add(sides.top),
            width: self.width.saturating_sub(horizontal),
            height: self.height.saturating_sub(vertical),
        }
    }

    /// Intersection of two rectangles (empty when disjoint).
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return Rect::new(x, y, 0, 0);
        }
        Rect::new(x, y, right - x, bottom - y)
    }
}

/// Edge insets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    #[must_use]
    pub const fn all(n: u16) -> Self {
        Self {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }

    /// Inset only the left and right edges.
    #[must_use]
    pub const fn horizontal(n: u16) -> Self {
        Self {
            top: 0,
            right: n,
            bottom: 0,
            left: n,
        }
    }
}

impl From<u16> for Sides {
    fn from(n: u16) -> Self {
        Self::all(n)
    }
}
