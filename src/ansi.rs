// SPDX-License-Identifier: MIT
//
// ANSI escape sequences for painting swatches.
//
// Pure functions that write to any `impl Write`. Colors are always 24-bit:
// a palette is only worth looking at in true color.

use std::io::{self, Write};

use swatch_color::Color;

/// Set the foreground (text) color (SGR 38;2).
#[inline]
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (r, g, b) = color.to_rgb8();
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Set the background color (SGR 48;2).
#[inline]
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (r, g, b) = color.to_rgb8();
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Bold text (SGR 1).
#[inline]
pub fn bold(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[1m")
}

/// Reset all SGR attributes (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Clear the screen and home the cursor (ED 2 + CUP).
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J\x1b[H")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn fg_rgb() {
        let c = Color::rgb8(255, 128, 0);
        assert_eq!(emit(|w| fg(w, c)), "\x1b[38;2;255;128;0m");
    }

    #[test]
    fn bg_rgb() {
        let c = Color::rgb8(1, 2, 3);
        assert_eq!(emit(|w| bg(w, c)), "\x1b[48;2;1;2;3m");
    }

    /// Out-of-gamut channels clamp.
    #[test]
    fn bg_clamps() {
        let c = Color::srgb(1.4, -0.2, 0.5);
        assert_eq!(emit(|w| bg(w, c)), "\x1b[48;2;255;0;128m");
    }

    #[test]
    fn reset_and_bold() {
        assert_eq!(emit(|w| reset(w)), "\x1b[0m");
        assert_eq!(emit(|w| bold(w)), "\x1b[1m");
    }

    #[test]
    fn clear_sequence() {
        assert_eq!(emit(|w| clear_screen(w)), "\x1b[2J\x1b[H");
    }
}
