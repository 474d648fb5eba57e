#![forbid(unsafe_code)]

//! [`Style`]: optional colours and attribute flags with cascading merge.
//!
//! Unset fields mean "inherit". [`Style::merge`] keeps `self`'s fields and
//! fills the gaps from a parent; [`Style::patch`] lets a later layer win,
//! which is how stylesheet layers are stacked.

use bitflags::bitflags;
use pickers_render::cell::{CellFlags, PackedRgba};

bitflags! {
    /// Text attribute flags carried by a [`Style`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u16 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE = 1 << 4;
    }
}

impl From<StyleFlags> for CellFlags {
    fn from(flags: StyleFlags) -> Self {
        CellFlags::from_bits_truncate(flags.bits() as u8)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
    pub attrs: Option<StyleFlags>,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn add_attrs(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(match self.attrs {
            Some(existing) => existing.union(flags),
            None => flags,
        });
        self
    }

    #[must_use]
    pub const fn bold(self) -> Self {
        self.add_attrs(StyleFlags::BOLD)
    }

    #[must_use]
    pub const fn underline(self) -> Self {
        self.add_attrs(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub const fn reverse(self) -> Self {
        self.add_attrs(StyleFlags::REVERSE)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Keep `self`'s fields, inheriting unset ones from `parent`.
    #[must_use]
    pub fn merge(&self, parent: &Style) -> Style {
        Style {
            fg: self.fg.or(parent.fg),
            bg: self.bg.or(parent.bg),
            attrs: match (self.attrs, parent.attrs) {
                (Some(a), Some(b)) => Some(a | b),
                (a, b) => a.or(b),
            },
        }
    }

    /// Apply `layer` on top of `self`: set fields in `layer` win.
    #[must_use]
    pub fn patch(&self, layer: &Style) -> Style {
        layer.merge(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: PackedRgba = PackedRgba::rgb(255, 0, 0);
    const BLUE: PackedRgba = PackedRgba::rgb(0, 0, 255);

    #[test]
    fn merge_keeps_own_fields() {
        let child = Style::new().fg(RED);
        let parent = Style::new().fg(BLUE).bg(BLUE);
        let merged = child.merge(&parent);
        assert_eq!(merged.fg, Some(RED));
        assert_eq!(merged.bg, Some(BLUE));
    }

    #[test]
    fn patch_lets_layer_win() {
        let base = Style::new().fg(RED).bg(RED);
        let layer = Style::new().bg(BLUE);
        let out = base.patch(&layer);
        assert_eq!(out.fg, Some(RED));
        assert_eq!(out.bg, Some(BLUE));
    }

    #[test]
    fn attrs_union_on_merge() {
        let a = Style::new().bold();
        let b = Style::new().underline();
        let attrs = a.merge(&b).attrs.unwrap();
        assert!(attrs.contains(StyleFlags::BOLD));
        assert!(attrs.contains(StyleFlags::UNDERLINE));
    }

    #[test]
    fn empty_style() {
        assert!(Style::default().is_empty());
        assert!(!Style::new().reverse().is_empty());
    }

    #[test]
    fn flags_convert_to_cell_flags() {
        let flags: CellFlags = (StyleFlags::BOLD | StyleFlags::REVERSE).into();
        assert!(flags.contains(CellFlags::BOLD));
        assert!(flags.contains(CellFlags::REVERSE));
        assert!(!flags.contains(CellFlags::DIM));
    }
}
