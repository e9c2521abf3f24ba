// SPDX-License-Identifier: MIT
//
// The swatch color type — sRGB storage, perceptual constructors.
//
// A `Color` is stored as three sRGB channels in `f64`. Storage stays
// unclamped so that a trip through Lab or LCh and back does not lose the
// out-of-gamut overshoot mid-interpolation; clamping happens only when the
// color leaves the crate as hex or 8-bit values.
//
// Every other space (HSLuv, Lab, LCh, HSL, Oklab, OKLCH) is reached through
// a pair of `from_*` / `to_*` methods that route through `space.rs` and
// `hsluv.rs`.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::hsluv::{hsluv_to_srgb, srgb_to_hsluv};
use crate::space::{
    ab_to_polar, hsl_to_srgb, lab_to_srgb, linear_srgb_to_oklab, linear_to_srgb,
    oklab_to_linear_srgb, polar_to_ab, srgb_to_hsl, srgb_to_lab, srgb_to_linear,
};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with `f64` channels.
///
/// Channels are nominally in `[0.0, 1.0]`. Colors produced by converting
/// from wider spaces may overshoot; [`to_hex`](Self::to_hex) and
/// [`to_rgb8`](Self::to_rgb8) clamp.
///
/// # Examples
///
/// ```
/// use swatch_color::Color;
///
/// // Parse and format hex
/// let coral = Color::from_hex("#ff7f50").unwrap();
/// assert_eq!(coral.to_hex(), "#ff7f50");
///
/// // Build from HSLuv (the generator's working space)
/// let muted = Color::from_hsluv(250.0, 30.0, 40.0);
///
/// // Inspect in CIE Lab
/// let (l, _a, _b) = muted.to_lab();
/// assert!((l - 40.0).abs() < 0.5);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Red, 0.0 to 1.0.
    pub r: f64,
    /// Green, 0.0 to 1.0.
    pub g: f64,
    /// Blue, 0.0 to 1.0.
    pub b: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from sRGB channels (0.0 to 1.0).
    #[inline]
    #[must_use]
    pub const fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Parse a hex color string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the `#`,
    /// in either case.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] if the string is not a valid
    /// hex color.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_string()))
    }

    /// Create a color from HSLuv.
    ///
    /// - `h`: hue in degrees
    /// - `s`: saturation, 0 to 100
    /// - `l`: lightness, 0 to 100
    #[must_use]
    pub fn from_hsluv(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = hsluv_to_srgb(h, s, l);
        Self { r, g, b }
    }

    /// Create a color from CIE L*a*b* (D65).
    #[must_use]
    pub fn from_lab(l: f64, a: f64, b: f64) -> Self {
        let (r, g, bl) = lab_to_srgb(l, a, b);
        Self { r, g, b: bl }
    }

    /// Create a color from CIE LCh(ab). `h` is in degrees.
    #[must_use]
    pub fn from_lch(l: f64, c: f64, h: f64) -> Self {
        let (a, b) = polar_to_ab(c, h);
        Self::from_lab(l, a, b)
    }

    /// Create a color from HSL. `h` in degrees, `s` and `l` in [0, 1].
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let (r, g, b) = hsl_to_srgb(h, s, l);
        Self { r, g, b }
    }

    /// Create a color from Oklab.
    #[must_use]
    pub fn from_oklab(l: f64, a: f64, b: f64) -> Self {
        let (r, g, bl) = oklab_to_linear_srgb(l, a, b);
        Self::from_linear(r, g, bl)
    }

    /// Create a color from OKLCH. `h` is in degrees.
    #[must_use]
    pub fn from_oklch(l: f64, c: f64, h: f64) -> Self {
        let (a, b) = polar_to_ab(c, h);
        Self::from_oklab(l, a, b)
    }

    /// Create a color from linear-light sRGB channels.
    #[must_use]
    pub fn from_linear(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: linear_to_srgb(r),
            g: linear_to_srgb(g),
            b: linear_to_srgb(b),
        }
    }

    /// Pure black.
    pub const BLACK: Self = Self::srgb(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::srgb(1.0, 1.0, 1.0);

    // ─── Conversions ─────────────────────────────────────────────────────

    /// HSLuv `(h, s, l)`; saturation and lightness in 0–100.
    #[must_use]
    pub fn to_hsluv(self) -> (f64, f64, f64) {
        srgb_to_hsluv(self.r, self.g, self.b)
    }

    /// CIE L*a*b* `(l, a, b)`.
    #[must_use]
    pub fn to_lab(self) -> (f64, f64, f64) {
        srgb_to_lab(self.r, self.g, self.b)
    }

    /// CIE LCh(ab) `(l, c, h)`. Hue is `None` for achromatic colors.
    #[must_use]
    pub fn to_lch(self) -> (f64, f64, Option<f64>) {
        let (l, a, b) = self.to_lab();
        let (c, h) = ab_to_polar(a, b);
        (l, c, h)
    }

    /// HSL `(h, s, l)`. Hue is `None` for grays.
    #[must_use]
    pub fn to_hsl(self) -> (Option<f64>, f64, f64) {
        srgb_to_hsl(self.r, self.g, self.b)
    }

    /// Oklab `(l, a, b)`.
    #[must_use]
    pub fn to_oklab(self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_linear();
        linear_srgb_to_oklab(r, g, b)
    }

    /// OKLCH `(l, c, h)`. Hue is `None` for achromatic colors.
    #[must_use]
    pub fn to_oklch(self) -> (f64, f64, Option<f64>) {
        let (l, a, b) = self.to_oklab();
        let (c, h) = ab_to_polar(a, b);
        (l, c, h)
    }

    /// Linear-light sRGB channels.
    #[must_use]
    pub fn to_linear(self) -> (f64, f64, f64) {
        (srgb_to_linear(self.r), srgb_to_linear(self.g), srgb_to_linear(self.b))
    }

    // ─── Gamut & Output ──────────────────────────────────────────────────

    /// Clamp every channel into `[0, 1]`.
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit sRGB with clamping.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Convert to a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    // ─── Perceptual Queries ──────────────────────────────────────────────

    /// WCAG 2.1 relative luminance, 0.0 (black) to 1.0 (white).
    ///
    ///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    #[must_use]
    pub fn luminance(self) -> f64 {
        let (r, g, b) = self.clamped().to_linear();
        0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
    }

    /// Return a copy with HSL lightness shifted by `amount` (clamped to [0, 1]).
    ///
    /// Hue and saturation are preserved; grays stay gray.
    #[must_use]
    pub fn shift_hsl_lightness(self, amount: f64) -> Self {
        let (h, s, l) = self.clamped().to_hsl();
        Self::from_hsl(h.unwrap_or(0.0), s, (l + amount).clamp(0.0, 1.0))
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::srgb({:.4}, {:.4}, {:.4})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        // Compare with small epsilon for floating point
        const EPS: f64 = 1e-9;
        (self.r - other.r).abs() < EPS
            && (self.g - other.g).abs() < EPS
            && (self.b - other.b).abs() < EPS
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();

    match digits.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(digits[0])?;
            let g = parse_hex_digit(digits[1])?;
            let b = parse_hex_digit(digits[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&digits[0..2])?;
            let g = parse_hex_byte(&digits[2..4])?;
            let b = parse_hex_byte(&digits[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.clamp(0.0, 1.0).mul_add(255.0, 0.5).floor().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::from_hex("#ff8000").unwrap();
        assert_eq!(color.to_rgb8(), (255, 128, 0));
    }

    #[test]
    fn hex_parsing_short() {
        let color = Color::from_hex("#f80").unwrap();
        assert_eq!(color.to_rgb8(), (255, 136, 0));
    }

    #[test]
    fn hex_parsing_no_hash_uppercase() {
        let color = Color::from_hex("00FF7F").unwrap();
        assert_eq!(color.to_rgb8(), (0, 255, 127));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Color::from_hex("xyz").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#ff000080").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn hex_error_names_input() {
        let err = Color::from_hex("#zz").unwrap_err();
        assert_eq!(err.to_string(), "invalid hex color: \"#zz\"");
    }

    #[test]
    fn hex_roundtrip() {
        let original = "#c86432";
        let color: Color = original.parse().unwrap();
        assert_eq!(color.to_hex(), original);
    }

    #[test]
    fn hex_clamps_out_of_gamut() {
        let color = Color::srgb(1.3, -0.2, 0.5);
        assert_eq!(color.clamped(), Color::srgb(1.0, 0.0, 0.5));
        assert_eq!(color.to_hex(), "#ff0080");
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(format!("{}", Color::rgb8(1, 2, 3)), "#010203");
    }

    // ── Spaces ───────────────────────────────────────────────────────────

    #[test]
    fn hsluv_roundtrip_via_color() {
        let color = Color::from_hsluv(140.0, 70.0, 60.0);
        let (h, s, l) = color.to_hsluv();
        assert!(approx_eq(h, 140.0, 1e-4), "h = {h}");
        assert!(approx_eq(s, 70.0, 1e-4), "s = {s}");
        assert!(approx_eq(l, 60.0, 1e-4), "l = {l}");
    }

    #[test]
    fn hsluv_lightness_matches_lab_lightness() {
        // HSLuv lightness is CIE L*, shared with Lab.
        let color = Color::from_hsluv(30.0, 80.0, 45.0);
        let (l, _, _) = color.to_lab();
        assert!(approx_eq(l, 45.0, 0.05), "Lab L = {l}");
    }

    #[test]
    fn lch_gray_has_no_hue() {
        let (_, c, h) = Color::rgb8(128, 128, 128).to_lch();
        assert!(c < 1e-3, "gray chroma {c}");
        assert!(h.is_none());
    }

    #[test]
    fn lch_roundtrip() {
        let original = Color::rgb8(40, 120, 200);
        let (l, c, h) = original.to_lch();
        let back = Color::from_lch(l, c, h.unwrap());
        assert_eq!(back.to_hex(), original.to_hex());
    }

    #[test]
    fn oklch_roundtrip() {
        let original = Color::rgb8(220, 60, 90);
        let (l, c, h) = original.to_oklch();
        let back = Color::from_oklch(l, c, h.unwrap());
        assert_eq!(back.to_hex(), original.to_hex());
    }

    #[test]
    fn hsl_roundtrip() {
        let original = Color::rgb8(12, 200, 99);
        let (h, s, l) = original.to_hsl();
        let back = Color::from_hsl(h.unwrap(), s, l);
        assert_eq!(back.to_hex(), original.to_hex());
    }

    // ── Luminance ────────────────────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(Color::BLACK.luminance(), 0.0, 1e-9));
    }

    #[test]
    fn luminance_white_is_one() {
        assert!(approx_eq(Color::WHITE.luminance(), 1.0, 1e-9));
    }

    #[test]
    fn luminance_pure_green() {
        let lum = Color::srgb(0.0, 1.0, 0.0).luminance();
        assert!(approx_eq(lum, 0.7152, 1e-4), "Green luminance: {lum}");
    }

    // ── HSL lightness shift ──────────────────────────────────────────────

    #[test]
    fn shift_hsl_lightness_up_and_down() {
        let base = Color::from_hsl(200.0, 0.5, 0.4);
        let (_, _, up) = base.shift_hsl_lightness(0.25).to_hsl();
        let (_, _, down) = base.shift_hsl_lightness(-0.35).to_hsl();
        assert!(approx_eq(up, 0.65, 1e-9), "up = {up}");
        assert!(approx_eq(down, 0.05, 1e-9), "down = {down}");
    }

    #[test]
    fn shift_hsl_lightness_clamps() {
        assert_eq!(Color::WHITE.shift_hsl_lightness(0.25).to_hex(), "#ffffff");
        assert_eq!(Color::BLACK.shift_hsl_lightness(-0.35).to_hex(), "#000000");
    }

    #[test]
    fn color_equality_with_epsilon() {
        assert_eq!(Color::srgb(0.5, 0.25, 0.125), Color::srgb(0.5, 0.25, 0.125));
        assert_ne!(Color::srgb(0.5, 0.25, 0.125), Color::srgb(0.5, 0.25, 0.126));
    }
}
