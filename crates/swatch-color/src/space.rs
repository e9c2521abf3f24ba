// SPDX-License-Identifier: MIT
//
// Color space conversion functions.
//
// Every function here is pure and works on plain `f64` tuples. The `Color`
// type in `color.rs` is a thin sRGB wrapper that routes through these.
//
// Pipelines:
//
//   sRGB ↔ Linear sRGB ↔ XYZ (D65) ↔ CIE L*a*b* ↔ LCh(ab)
//   sRGB ↔ Linear sRGB ↔ Oklab ↔ OKLCH
//   sRGB ↔ HSL
//
// HSLuv has its own module because it needs the gamut-boundary geometry.
//
// Hue angles are in degrees, normalized to [0, 360). Achromatic colors have
// no meaningful hue; the polar conversions report `None` for those so the
// interpolator can borrow the other endpoint's hue instead of spinning
// through red.
#![allow(clippy::many_single_char_names)]

// ─── Constants ───────────────────────────────────────────────────────────────

/// D65 reference white, X component (Y is 1.0).
pub const WHITE_X: f64 = 0.950_470;
/// D65 reference white, Z component.
pub const WHITE_Z: f64 = 1.088_830;

// CIE Lab piecewise constants: t0 = 4/29, t1 = 6/29, t2 = 3·t1², t3 = t1³.
const LAB_T0: f64 = 0.137_931_034;
const LAB_T1: f64 = 0.206_896_552;
const LAB_T2: f64 = 0.128_418_55;
const LAB_T3: f64 = 0.008_856_452;

/// Chroma below this is treated as achromatic in the polar spaces.
const ACHROMATIC_EPS: f64 = 1e-4;

// ─── Hue Helpers ─────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Interpolate between two hue angles taking the shortest path.
#[inline]
#[must_use]
pub fn interpolate_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Linear sRGB ↔ XYZ ───────────────────────────────────────────────────────

/// Linear sRGB to CIE XYZ (D65).
#[inline]
#[must_use]
pub fn linear_srgb_to_xyz(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let x = 0.180_437_5f64.mul_add(b, 0.412_456_4f64.mul_add(r, 0.357_576_1 * g));
    let y = 0.072_175_0f64.mul_add(b, 0.212_672_9f64.mul_add(r, 0.715_152_2 * g));
    let z = 0.950_304_1f64.mul_add(b, 0.019_333_9f64.mul_add(r, 0.119_192_0 * g));
    (x, y, z)
}

/// CIE XYZ (D65) to linear sRGB. Results may fall outside [0, 1].
#[inline]
#[must_use]
pub fn xyz_to_linear_srgb(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let r = 0.498_531_4f64.mul_add(-z, 3.240_454_2f64.mul_add(x, -(1.537_138_5 * y)));
    let g = 0.041_556_0f64.mul_add(z, (-0.969_266_0f64).mul_add(x, 1.876_010_8 * y));
    let b = 1.057_225_2f64.mul_add(z, 0.055_643_4f64.mul_add(x, -(0.204_025_9 * y)));
    (r, g, b)
}

// ─── XYZ ↔ CIE L*a*b* ────────────────────────────────────────────────────────

#[inline]
fn xyz_lab(t: f64) -> f64 {
    if t > LAB_T3 { t.cbrt() } else { t / LAB_T2 + LAB_T0 }
}

#[inline]
fn lab_xyz(t: f64) -> f64 {
    if t > LAB_T1 { t * t * t } else { LAB_T2 * (t - LAB_T0) }
}

/// sRGB (0.0–1.0) → CIE L*a*b*. L is in [0, 100].
#[must_use]
pub fn srgb_to_lab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (x, y, z) = linear_srgb_to_xyz(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let fx = xyz_lab(x / WHITE_X);
    let fy = xyz_lab(y);
    let fz = xyz_lab(z / WHITE_Z);
    let l = 116f64.mul_add(fy, -16.0);
    (l.max(0.0), 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// CIE L*a*b* → sRGB (may be out of gamut).
#[must_use]
pub fn lab_to_srgb(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let fy = (l + 16.0) / 116.0;
    let fx = a.mul_add(1.0 / 500.0, fy);
    let fz = b.mul_add(-1.0 / 200.0, fy);
    let (r, g, bl) = xyz_to_linear_srgb(WHITE_X * lab_xyz(fx), lab_xyz(fy), WHITE_Z * lab_xyz(fz));
    (linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(bl))
}

// ─── Cartesian ↔ Polar ───────────────────────────────────────────────────────
//
// Shared by Lab ↔ LCh and Oklab ↔ OKLCH.

/// Convert (a, b) to (chroma, hue). Hue is `None` for achromatic input.
#[inline]
#[must_use]
pub fn ab_to_polar(a: f64, b: f64) -> (f64, Option<f64>) {
    let c = a.hypot(b);
    if c < ACHROMATIC_EPS {
        (c, None)
    } else {
        (c, Some(normalize_hue(b.atan2(a).to_degrees())))
    }
}

/// Convert (chroma, hue) to (a, b).
#[inline]
#[must_use]
pub fn polar_to_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Björn Ottosson's Oklab, via the intermediate LMS cone response space.
// Reference: https://bottosson.github.io/posts/oklab/

/// Convert Oklab (L, a, b) to linear sRGB.
#[inline]
#[must_use]
pub fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    // Oklab → LMS (cube roots)
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    // Undo cube root
    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → Linear sRGB
    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

/// Convert linear sRGB to Oklab (L, a, b).
#[inline]
#[must_use]
pub fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    // Linear sRGB → LMS
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785 * m_));
    let a = 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205 * m_)));
    let b_ok = 0.808_675_766f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_));

    (l_ok, a, b_ok)
}

// ─── HSL ─────────────────────────────────────────────────────────────────────

/// sRGB (0.0–1.0) → HSL. Saturation and lightness are in [0, 1]; hue is
/// `None` for grays.
#[must_use]
pub fn srgb_to_hsl(r: f64, g: f64, b: f64) -> (Option<f64>, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta.abs() < f64::EPSILON {
        return (None, 0.0, l);
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    #[allow(clippy::float_cmp)]
    let h = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };

    (Some(normalize_hue(h * 60.0)), s, l)
}

/// HSL → sRGB. `h` in degrees, `s` and `l` in [0, 1].
#[must_use]
pub fn hsl_to_srgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (l, l, l);
    }

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let t1 = 2.0f64.mul_add(l, -t2);
    let h = normalize_hue(h) / 360.0;

    let channel = |t: f64| {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };
        if 6.0 * t < 1.0 {
            ((t2 - t1) * 6.0).mul_add(t, t1)
        } else if 2.0 * t < 1.0 {
            t2
        } else if 3.0 * t < 2.0 {
            ((t2 - t1) * (2.0 / 3.0 - t)).mul_add(6.0, t1)
        } else {
            t1
        }
    };

    (channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn gamma_roundtrip() {
        for i in 0..=20 {
            let c = f64::from(i) / 20.0;
            let back = linear_to_srgb(srgb_to_linear(c));
            assert!(approx_eq(c, back, 1e-9), "{c} -> {back}");
        }
    }

    #[test]
    fn xyz_roundtrip() {
        let (x, y, z) = linear_srgb_to_xyz(0.2, 0.5, 0.8);
        let (r, g, b) = xyz_to_linear_srgb(x, y, z);
        assert!(approx_eq(r, 0.2, 1e-5));
        assert!(approx_eq(g, 0.5, 1e-5));
        assert!(approx_eq(b, 0.8, 1e-5));
    }

    #[test]
    fn white_is_lab_100() {
        let (l, a, b) = srgb_to_lab(1.0, 1.0, 1.0);
        assert!(approx_eq(l, 100.0, 0.01), "L = {l}");
        assert!(approx_eq(a, 0.0, 0.01), "a = {a}");
        assert!(approx_eq(b, 0.0, 0.01), "b = {b}");
    }

    #[test]
    fn red_lab_known_values() {
        let (l, a, b) = srgb_to_lab(1.0, 0.0, 0.0);
        assert!(approx_eq(l, 53.24, 0.05), "L = {l}");
        assert!(approx_eq(a, 80.09, 0.05), "a = {a}");
        assert!(approx_eq(b, 67.20, 0.05), "b = {b}");
    }

    #[test]
    fn lab_roundtrip() {
        let (l, a, b) = srgb_to_lab(0.3, 0.6, 0.9);
        let (r, g, bl) = lab_to_srgb(l, a, b);
        assert!(approx_eq(r, 0.3, 1e-4));
        assert!(approx_eq(g, 0.6, 1e-4));
        assert!(approx_eq(bl, 0.9, 1e-4));
    }

    #[test]
    fn polar_gray_has_no_hue() {
        let (c, h) = ab_to_polar(0.0, 0.0);
        assert!(approx_eq(c, 0.0, 1e-12));
        assert!(h.is_none());
    }

    #[test]
    fn polar_roundtrip() {
        let (c, h) = ab_to_polar(-20.0, 35.0);
        let (a, b) = polar_to_ab(c, h.unwrap());
        assert!(approx_eq(a, -20.0, 1e-9));
        assert!(approx_eq(b, 35.0, 1e-9));
    }

    #[test]
    fn oklab_white_is_one() {
        let (l, a, b) = linear_srgb_to_oklab(1.0, 1.0, 1.0);
        assert!(approx_eq(l, 1.0, 1e-3), "L = {l}");
        assert!(approx_eq(a, 0.0, 1e-3));
        assert!(approx_eq(b, 0.0, 1e-3));
    }

    #[test]
    fn oklab_roundtrip() {
        let (l, a, b) = linear_srgb_to_oklab(0.1, 0.4, 0.7);
        let (r, g, bl) = oklab_to_linear_srgb(l, a, b);
        assert!(approx_eq(r, 0.1, 1e-5));
        assert!(approx_eq(g, 0.4, 1e-5));
        assert!(approx_eq(bl, 0.7, 1e-5));
    }

    #[test]
    fn hsl_known_values() {
        let (h, s, l) = srgb_to_hsl(1.0, 0.0, 0.0);
        assert!(approx_eq(h.unwrap(), 0.0, 1e-9));
        assert!(approx_eq(s, 1.0, 1e-9));
        assert!(approx_eq(l, 0.5, 1e-9));

        let (h, _, _) = srgb_to_hsl(0.0, 0.0, 1.0);
        assert!(approx_eq(h.unwrap(), 240.0, 1e-9));
    }

    #[test]
    fn hsl_gray_has_no_hue() {
        let (h, s, l) = srgb_to_hsl(0.5, 0.5, 0.5);
        assert!(h.is_none());
        assert!(approx_eq(s, 0.0, 1e-12));
        assert!(approx_eq(l, 0.5, 1e-12));
    }

    #[test]
    fn hsl_roundtrip() {
        let (h, s, l) = srgb_to_hsl(0.2, 0.7, 0.4);
        let (r, g, b) = hsl_to_srgb(h.unwrap(), s, l);
        assert!(approx_eq(r, 0.2, 1e-9));
        assert!(approx_eq(g, 0.7, 1e-9));
        assert!(approx_eq(b, 0.4, 1e-9));
    }

    #[test]
    fn hue_interpolation_shortest_path() {
        let h = interpolate_hue(10.0, 350.0, 0.5);
        assert!(h < 1e-9 || h > 359.999, "Expected hue near 0/360, got {h}");
    }

    #[test]
    fn normalize_negative_hue() {
        assert!(approx_eq(normalize_hue(-30.0), 330.0, 1e-9));
        assert!(approx_eq(normalize_hue(720.0), 0.0, 1e-9));
    }
}
