// SPDX-License-Identifier: MIT
//! Interpolation modes — the color space a scale blends in.

use std::fmt;
use std::str::FromStr;

use swatch_color::Color;
use swatch_color::space::interpolate_hue;

use crate::error::PaletteError;

/// Color space used to blend between two neighbouring scale stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Gamma-encoded sRGB, component-wise.
    Rgb,
    /// sRGB mixed through squared channels (approximately linear light).
    Lrgb,
    /// CIE L*a*b*, component-wise.
    #[default]
    Lab,
    /// CIE LCh(ab), hue along the shorter arc. Also accepted as `hcl`.
    Lch,
    /// HSL, hue along the shorter arc.
    Hsl,
    /// Oklab, component-wise.
    Oklab,
    /// OKLCH, hue along the shorter arc.
    Oklch,
}

impl Mode {
    /// Every mode, in display order.
    pub const ALL: [Self; 7] = [
        Self::Rgb,
        Self::Lrgb,
        Self::Lab,
        Self::Lch,
        Self::Hsl,
        Self::Oklab,
        Self::Oklch,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Lrgb => "lrgb",
            Self::Lab => "lab",
            Self::Lch => "lch",
            Self::Hsl => "hsl",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
        }
    }

    /// Canonical names of every mode.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.name()).collect()
    }

    /// Look up a mode by name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if name == "hcl" {
            return Some(Self::Lch);
        }
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Blend `a` toward `b` by `f` in `[0, 1]`.
    #[must_use]
    pub fn mix(self, a: Color, b: Color, f: f64) -> Color {
        match self {
            Self::Rgb => Color::srgb(lerp(a.r, b.r, f), lerp(a.g, b.g, f), lerp(a.b, b.b, f)),
            Self::Lrgb => Color::srgb(
                lrgb_channel(a.r, b.r, f),
                lrgb_channel(a.g, b.g, f),
                lrgb_channel(a.b, b.b, f),
            ),
            Self::Lab => {
                let (l1, a1, b1) = a.to_lab();
                let (l2, a2, b2) = b.to_lab();
                Color::from_lab(lerp(l1, l2, f), lerp(a1, a2, f), lerp(b1, b2, f))
            }
            Self::Oklab => {
                let (l1, a1, b1) = a.to_oklab();
                let (l2, a2, b2) = b.to_oklab();
                Color::from_oklab(lerp(l1, l2, f), lerp(a1, a2, f), lerp(b1, b2, f))
            }
            Self::Lch => {
                let (l1, c1, h1) = a.to_lch();
                let (l2, c2, h2) = b.to_lch();
                Color::from_lch(lerp(l1, l2, f), lerp(c1, c2, f), mix_hue(h1, h2, f))
            }
            Self::Oklch => {
                let (l1, c1, h1) = a.to_oklch();
                let (l2, c2, h2) = b.to_oklch();
                Color::from_oklch(lerp(l1, l2, f), lerp(c1, c2, f), mix_hue(h1, h2, f))
            }
            Self::Hsl => {
                let (h1, s1, l1) = a.to_hsl();
                let (h2, s2, l2) = b.to_hsl();
                Color::from_hsl(mix_hue(h1, h2, f), lerp(s1, s2, f), lerp(l1, l2, f))
            }
        }
    }
}

#[inline]
fn lerp(a: f64, b: f64, f: f64) -> f64 {
    (b - a).mul_add(f, a)
}

#[inline]
fn lrgb_channel(a: f64, b: f64, f: f64) -> f64 {
    (a * a).mul_add(1.0 - f, b * b * f).sqrt()
}

/// Shortest-arc hue blend; an undefined hue takes the other endpoint's.
fn mix_hue(h1: Option<f64>, h2: Option<f64>, f: f64) -> f64 {
    match (h1, h2) {
        (Some(h1), Some(h2)) => interpolate_hue(h1, h2, f),
        (Some(h), None) | (None, Some(h)) => h,
        (None, None) => 0.0,
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PaletteError::UnknownMode(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn default_is_lab() {
        assert_eq!(Mode::default(), Mode::Lab);
    }

    #[test]
    fn parse_names_case_insensitive() {
        assert_eq!("LAB".parse::<Mode>().unwrap(), Mode::Lab);
        assert_eq!("Oklch".parse::<Mode>().unwrap(), Mode::Oklch);
        assert_eq!("hcl".parse::<Mode>().unwrap(), Mode::Lch);
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_mode_lists_choices() {
        let err = "cmyk".parse::<Mode>().unwrap_err();
        assert_eq!(err, PaletteError::UnknownMode("cmyk".into()));
        let msg = err.to_string();
        assert!(msg.contains("cmyk") && msg.contains("oklch"), "{msg}");
    }

    #[test]
    fn endpoints_are_exact() {
        let a = hex("#1e3a5f");
        let b = hex("#f2c14e");
        for mode in Mode::ALL {
            assert_eq!(mode.mix(a, b, 0.0).to_hex(), "#1e3a5f", "{mode} at 0");
            assert_eq!(mode.mix(a, b, 1.0).to_hex(), "#f2c14e", "{mode} at 1");
        }
    }

    #[test]
    fn rgb_midpoint() {
        let mid = Mode::Rgb.mix(Color::BLACK, Color::WHITE, 0.5);
        assert_eq!(mid.to_hex(), "#808080");
    }

    /// Squared mixing lands brighter than plain sRGB averaging.
    #[test]
    fn lrgb_midpoint_is_brighter() {
        let mid = Mode::Lrgb.mix(Color::BLACK, Color::WHITE, 0.5);
        assert_eq!(mid.to_hex(), "#b4b4b4");
    }

    /// Black to white through Lab stays neutral gray.
    #[test]
    fn lab_gray_stays_gray() {
        let (r, g, b) = Mode::Lab.mix(Color::BLACK, Color::WHITE, 0.5).to_rgb8();
        assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1, "({r}, {g}, {b})");
    }

    /// Red to blue in HSL goes the short way, through magenta.
    #[test]
    fn hsl_takes_short_arc() {
        let mid = Mode::Hsl.mix(hex("#ff0000"), hex("#0000ff"), 0.5);
        assert_eq!(mid.to_hex(), "#ff00ff");
    }

    /// A gray endpoint borrows the other color's hue.
    #[test]
    fn achromatic_borrows_hue() {
        let red = hex("#ff0000");
        let mid = Mode::Hsl.mix(hex("#808080"), red, 0.5);
        let (h, _, _) = mid.to_hsl();
        assert!(h.unwrap().abs() < 1e-6 || (h.unwrap() - 360.0).abs() < 1e-6, "h = {h:?}");
    }
}
