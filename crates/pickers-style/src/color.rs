#![forbid(unsafe_code)]

//! Colour helpers: alpha fading, compositing and hex notation.
//!
//! Terminals have no alpha channel, so translucent theme colours are
//! composited over an opaque backdrop before they reach a cell.

use pickers_render::cell::PackedRgba;

/// Replace the alpha of `color` with `opacity` in `0.0..=1.0`.
///
/// Out-of-range opacities are clamped.
#[must_use]
pub fn fade(color: PackedRgba, opacity: f32) -> PackedRgba {
    let opacity = if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    };
    color.with_alpha((opacity * 255.0).round() as u8)
}

/// Composite `top` over the opaque `backdrop` (source-over).
///
/// The result is always fully opaque.
#[must_use]
pub fn blend_over(top: PackedRgba, backdrop: PackedRgba) -> PackedRgba {
    let a = u32::from(top.a());
    let inv = 255 - a;
    let mix = |t: u8, b: u8| ((u32::from(t) * a + u32::from(b) * inv + 127) / 255) as u8;
    PackedRgba::rgb(
        mix(top.r(), backdrop.r()),
        mix(top.g(), backdrop.g()),
        mix(top.b(), backdrop.b()),
    )
}

/// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
#[must_use]
pub fn to_hex(color: PackedRgba) -> String {
    if color.a() == 255 {
        format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
    } else {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            color.r(),
            color.g(),
            color.b(),
            color.a()
        )
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
#[must_use]
pub fn parse_hex(raw: &str) -> Option<PackedRgba> {
    let hex = raw.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|n| n * 17);
            Some(PackedRgba::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => Some(PackedRgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(PackedRgba::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_sets_alpha() {
        let c = fade(PackedRgba::rgb(0, 0, 0), 0.04);
        assert_eq!(c.a(), 10);
        assert_eq!((c.r(), c.g(), c.b()), (0, 0, 0));
    }

    #[test]
    fn fade_clamps() {
        assert_eq!(fade(PackedRgba::WHITE, 2.0).a(), 255);
        assert_eq!(fade(PackedRgba::WHITE, -1.0).a(), 0);
        assert_eq!(fade(PackedRgba::WHITE, f32::NAN).a(), 0);
    }

    #[test]
    fn blend_over_extremes() {
        let backdrop = PackedRgba::rgb(200, 100, 50);
        assert_eq!(blend_over(PackedRgba::TRANSPARENT, backdrop), backdrop);
        let opaque = PackedRgba::rgb(1, 2, 3);
        assert_eq!(blend_over(opaque, backdrop), opaque);
    }

    #[test]
    fn blend_over_half() {
        let top = PackedRgba::rgba(0, 0, 0, 128);
        let out = blend_over(top, PackedRgba::WHITE);
        assert_eq!(out.a(), 255);
        assert_eq!(out.r(), 127);
    }

    #[test]
    fn hex_roundtrip_forms() {
        assert_eq!(parse_hex("#1976d2"), Some(PackedRgba::rgb(0x19, 0x76, 0xd2)));
        assert_eq!(parse_hex("fff"), Some(PackedRgba::WHITE));
        assert_eq!(
            parse_hex("#0000008a"),
            Some(PackedRgba::rgba(0, 0, 0, 0x8a))
        );
        assert_eq!(to_hex(PackedRgba::rgb(0x19, 0x76, 0xd2)), "#1976d2");
        assert_eq!(to_hex(PackedRgba::rgba(0, 0, 0, 0x8a)), "#0000008a");
    }

    #[test]
    fn hex_rejects_garbage() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#gggggg"), None);
        assert_eq!(parse_hex("#ééé"), None);
    }
}
