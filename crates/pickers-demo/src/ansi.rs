#![forbid(unsafe_code)]

//! Dump a [`Buffer`] as 24-bit ANSI text.

use std::io::{self, Write};

use pickers_render::buffer::Buffer;
use pickers_render::cell::PackedRgba;

const RESET: &str = "\x1b[0m";

fn sgr(out: &mut impl Write, ground: u8, color: PackedRgba) -> io::Result<()> {
    if color.a() == 0 {
        // 39 / 49: terminal default colour
        return write!(out, "\x1b[{}9m", ground);
    }
    write!(
        out,
        "\x1b[{};2;{};{};{}m",
        ground * 10 + 8,
        color.r(),
        color.g(),
        color.b()
    )
}

/// Write every row of `buf`, emitting colour changes only when they occur.
pub fn write_buffer(buf: &Buffer, out: &mut impl Write) -> io::Result<()> {
    for y in 0..buf.height() {
        let mut current: Option<(PackedRgba, PackedRgba)> = None;
        for x in 0..buf.width() {
            let Some(cell) = buf.get(x, y) else {
                continue;
            };
            if current != Some((cell.fg, cell.bg)) {
                sgr(out, 3, cell.fg)?;
                sgr(out, 4, cell.bg)?;
                current = Some((cell.fg, cell.bg));
            }
            write!(out, "{}", cell.content.as_char().unwrap_or(' '))?;
        }
        writeln!(out, "{RESET}")?;
    }
    Ok(())
}
