#![forbid(unsafe_code)]

//! A single terminal cell: content, colours and attribute flags.

use bitflags::bitflags;

/// RGBA colour packed into a `u32` as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    pub const TRANSPARENT: Self = Self(0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Same colour with a different alpha channel.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self((self.0 & 0xFFFF_FF00) | a as u32)
    }
}

impl Default for PackedRgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

bitflags! {
    /// Text attributes stored per cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const REVERSE = 1 << 4;
    }
}

/// What a cell displays. `Empty` means nothing has been written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CellContent {
    #[default]
    Empty,
    Char(char),
}

impl CellContent {
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        Self::Char(c)
    }

    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Char(c) => Some(*c),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub content: CellContent,
    pub fg: PackedRgba,
    pub bg: PackedRgba,
    pub attrs: CellFlags,
}

impl Cell {
    #[must_use]
    pub const fn new(content: CellContent) -> Self {
        Self {
            content,
            fg: PackedRgba::TRANSPARENT,
            bg: PackedRgba::TRANSPARENT,
            attrs: CellFlags::empty(),
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Self {
        Self::new(CellContent::from_char(c))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.content, CellContent::Empty)
    }
}
