// SPDX-License-Identifier: MIT
//! Swatch label color.
//!
//! A label keeps its swatch's hue and saturation and only moves in HSL
//! lightness: dark swatches get a lighter label, everything else a darker
//! one. The threshold is WCAG relative luminance, not HSL lightness, so a
//! saturated yellow and a saturated blue with equal HSL lightness can land
//! on opposite sides.

use swatch_color::Color;

/// Swatches darker than this get a lightened label.
pub const DARK_THRESHOLD: f64 = 0.15;

/// HSL lightness added to labels on dark swatches.
pub const LIGHTEN_BY: f64 = 0.25;

/// HSL lightness removed from labels on light swatches.
pub const DARKEN_BY: f64 = 0.35;

/// Label color for text drawn on `background`.
#[must_use]
pub fn text_color(background: Color) -> Color {
    if background.luminance() < DARK_THRESHOLD {
        background.shift_hsl_lightness(LIGHTEN_BY)
    } else {
        background.shift_hsl_lightness(-DARKEN_BY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_label_is_lightened() {
        assert_eq!(text_color(Color::BLACK).to_hex(), "#404040");
    }

    #[test]
    fn white_label_is_darkened() {
        assert_eq!(text_color(Color::WHITE).to_hex(), "#a6a6a6");
    }

    #[test]
    fn label_keeps_hue() {
        let bg = Color::from_hex("#1d3557").unwrap();
        let (h_bg, _, _) = bg.to_hsl();
        let (h_fg, _, _) = text_color(bg).to_hsl();
        assert!((h_bg.unwrap() - h_fg.unwrap()).abs() < 0.5);
    }

    #[test]
    fn direction_follows_luminance() {
        let dark = Color::from_hex("#2b2d42").unwrap();
        assert!(text_color(dark).luminance() > dark.luminance());

        let light = Color::from_hex("#edf2f4").unwrap();
        assert!(text_color(light).luminance() < light.luminance());
    }
}
