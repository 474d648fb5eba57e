#![forbid(unsafe_code)]

//! Palette and transition tokens consumed by the pickers widgets.
//!
//! A process-wide theme lives behind an [`ArcSwap`] so widgets can read it
//! lock-free on every render while the host swaps it at runtime.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown preset name | Bad `PICKERS_THEME` value | [`ThemeError::UnknownPreset`] |
//! | Malformed JSON / colour | Bad theme file (`serde` feature) | [`ThemeError::Parse`] |

use std::str::FromStr;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

use arc_swap::ArcSwap;
use pickers_render::cell::PackedRgba;

use crate::color::blend_over;

/// Errors from theme configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The preset name is not one of `light` / `dark`.
    UnknownPreset(String),
    /// A theme document could not be parsed.
    Parse(String),
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPreset(name) => write!(f, "unknown theme preset: {name}"),
            Self::Parse(msg) => write!(f, "theme parse error: {msg}"),
        }
    }
}

impl std::error::Error for ThemeError {}

/// Colour tokens. Translucent tokens are composited over
/// `background_paper` with [`Palette::solid`] before painting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    #[cfg_attr(feature = "serde", serde(with = "hex_color"))]
    pub background_paper: PackedRgba,
    #[cfg_attr(feature = "serde", serde(with = "hex_color"))]
    pub text_primary: PackedRgba,
    #[cfg_attr(feature = "serde", serde(with = "hex_color"))]
    pub text_hint: PackedRgba,
    #[cfg_attr(feature = "serde", serde(with = "hex_color"))]
    pub action_active: PackedRgba,
    pub action_hover_opacity: f32,
    #[cfg_attr(feature = "serde", serde(with = "hex_color"))]
    pub primary_main: PackedRgba,
    #[cfg_attr(feature = "serde", serde(with = "hex_color"))]
    pub primary_dark: PackedRgba,
    #[cfg_attr(feature = "serde", serde(with = "hex_color"))]
    pub primary_contrast_text: PackedRgba,
}

impl Palette {
    #[must_use]
    pub fn light() -> Self {
        Self {
            background_paper: PackedRgba::WHITE,
            text_primary: PackedRgba::rgba(0, 0, 0, 222),
            text_hint: PackedRgba::rgba(0, 0, 0, 97),
            action_active: PackedRgba::rgba(0, 0, 0, 138),
            action_hover_opacity: 0.04,
            primary_main: PackedRgba::rgb(0x3f, 0x51, 0xb5),
            primary_dark: PackedRgba::rgb(0x30, 0x3f, 0x9f),
            primary_contrast_text: PackedRgba::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            background_paper: PackedRgba::rgb(0x42, 0x42, 0x42),
            text_primary: PackedRgba::WHITE,
            text_hint: PackedRgba::rgba(255, 255, 255, 128),
            action_active: PackedRgba::WHITE,
            action_hover_opacity: 0.08,
            primary_main: PackedRgba::rgb(0x3f, 0x51, 0xb5),
            primary_dark: PackedRgba::rgb(0x30, 0x3f, 0x9f),
            primary_contrast_text: PackedRgba::WHITE,
        }
    }

    /// `color` composited over the paper background.
    #[must_use]
    pub fn solid(&self, color: PackedRgba) -> PackedRgba {
        blend_over(color, self.background_paper)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transitions {
    pub short_ms: u16,
}

impl Transitions {
    #[must_use]
    pub fn short(&self) -> Duration {
        Duration::from_millis(u64::from(self.short_ms))
    }
}

impl Default for Transitions {
    fn default() -> Self {
        Self { short_ms: 250 }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickersTheme {
    pub palette: Palette,
    #[cfg_attr(feature = "serde", serde(default))]
    pub transitions: Transitions,
}

impl PickersTheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            palette: Palette::light(),
            transitions: Transitions::default(),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            palette: Palette::dark(),
            transitions: Transitions::default(),
        }
    }

    /// Parse a theme from JSON. Colours are hex strings (`"#3f51b5"`).
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(raw).map_err(|e| ThemeError::Parse(e.to_string()))
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, ThemeError> {
        serde_json::to_string_pretty(self).map_err(|e| ThemeError::Parse(e.to_string()))
    }
}

impl Default for PickersTheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Built-in theme presets, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreset {
    #[default]
    Light,
    Dark,
}

impl ThemePreset {
    #[must_use]
    pub fn theme(self) -> PickersTheme {
        match self {
            Self::Light => PickersTheme::light(),
            Self::Dark => PickersTheme::dark(),
        }
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownPreset(other.to_string())),
        }
    }
}

static GLOBAL_THEME: LazyLock<ArcSwap<PickersTheme>> =
    LazyLock::new(|| ArcSwap::from_pointee(PickersTheme::default()));

/// The process-wide theme.
#[must_use]
pub fn current_theme() -> Arc<PickersTheme> {
    GLOBAL_THEME.load_full()
}

/// Replace the process-wide theme. Renders that already loaded the old
/// theme finish with it.
pub fn set_theme(theme: PickersTheme) {
    tracing::debug!(
        paper = %crate::color::to_hex(theme.palette.background_paper),
        primary = %crate::color::to_hex(theme.palette.primary_main),
        "pickers theme replaced"
    );
    GLOBAL_THEME.store(Arc::new(theme));
}

#[cfg(feature = "serde")]
mod hex_color {
    use pickers_render::cell::PackedRgba;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &PackedRgba, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&crate::color::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<PackedRgba, D::Error> {
        let raw = String::deserialize(d)?;
        crate::color::parse_hex(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid colour: {raw}")))
    }
}
