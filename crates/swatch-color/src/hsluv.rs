// SPDX-License-Identifier: MIT
//
// HSLuv — a human-friendly alternative to HSL.
//
// HSLuv is CIE LCh(uv) with the chroma axis stretched so that saturation
// 100% always sits exactly on the sRGB gamut boundary for the given
// lightness and hue. Lightness is perceptual (CIE L*), so two colors with
// the same L look equally bright regardless of hue — which plain HSL
// cannot promise.
//
// Pipeline:
//
//   HSLuv ↔ LCh(uv) ↔ Luv ↔ XYZ ↔ Linear sRGB ↔ sRGB
//
// Reference: https://www.hsluv.org/math/
#![allow(clippy::many_single_char_names)]

use crate::space::{linear_to_srgb, normalize_hue, srgb_to_linear};

// ─── Constants ───────────────────────────────────────────────────────────────

/// XYZ → linear sRGB, rows are (r, g, b).
const M: [[f64; 3]; 3] = [
    [3.240_969_941_904_521, -1.537_383_177_570_093, -0.498_610_760_293],
    [-0.969_243_636_280_87, 1.875_967_501_507_72, 0.041_555_057_407_175],
    [0.055_630_079_696_993, -0.203_976_958_888_97, 1.056_971_514_242_878],
];

/// Linear sRGB → XYZ, rows are (x, y, z).
const M_INV: [[f64; 3]; 3] = [
    [0.412_390_799_265_95, 0.357_584_339_383_87, 0.180_480_788_401_83],
    [0.212_639_005_871_51, 0.715_168_678_767_75, 0.072_192_315_360_733],
    [0.019_330_818_715_591, 0.119_194_779_794_62, 0.950_532_152_249_66],
];

const REF_U: f64 = 0.197_830_006_642_83;
const REF_V: f64 = 0.468_319_994_938_79;
const KAPPA: f64 = 903.296_296_296_296_3;
const EPSILON: f64 = 0.008_856_451_679_035_63;

/// Lightness at or above this is pure white.
const L_MAX: f64 = 99.999_999_9;
/// Lightness at or below this is pure black.
const L_MIN: f64 = 0.000_000_01;

// ─── Gamut Geometry ──────────────────────────────────────────────────────────

/// A line `y = slope·x + intercept` in the (u, v) chroma plane.
#[derive(Debug, Clone, Copy)]
struct Line {
    slope: f64,
    intercept: f64,
}

/// The six lines bounding the sRGB gamut at lightness `l`.
///
/// Each RGB channel contributes two lines: where it hits 0 and where it
/// hits 1.
fn gamut_bounds(l: f64) -> [Line; 6] {
    let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut lines = [Line { slope: 0.0, intercept: 0.0 }; 6];
    for (c, row) in M.iter().enumerate() {
        let [m1, m2, m3] = *row;
        for t in 0..2u8 {
            let tf = f64::from(t);
            let top1 = 284_517.0f64.mul_add(m1, -(94_839.0 * m3)) * sub2;
            let top2 = (838_422.0f64.mul_add(m3, 769_860.0f64.mul_add(m2, 731_718.0 * m1)) * l)
                .mul_add(sub2, -(769_860.0 * tf * l));
            let bottom = 632_260.0f64.mul_add(m3, -(126_452.0 * m2)).mul_add(sub2, 126_452.0 * tf);
            lines[c * 2 + usize::from(t)] = Line {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }
    lines
}

/// The largest in-gamut chroma for lightness `l` and hue `h` (degrees).
fn max_chroma(l: f64, h: f64) -> f64 {
    let h_rad = h.to_radians();
    let (sin, cos) = h_rad.sin_cos();
    gamut_bounds(l)
        .iter()
        .filter_map(|line| {
            let length = line.intercept / line.slope.mul_add(-cos, sin);
            (length >= 0.0).then_some(length)
        })
        .fold(f64::MAX, f64::min)
}

// ─── L* ↔ Y ──────────────────────────────────────────────────────────────────

#[inline]
fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        l / KAPPA
    } else {
        ((l + 16.0) / 116.0).powi(3)
    }
}

#[inline]
fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y * KAPPA
    } else {
        116.0f64.mul_add(y.cbrt(), -16.0)
    }
}

#[inline]
fn dot(row: &[f64; 3], (a, b, c): (f64, f64, f64)) -> f64 {
    row[2].mul_add(c, row[0].mul_add(a, row[1] * b))
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// HSLuv → sRGB (0.0–1.0).
///
/// - `h`: hue in degrees (any value, wrapped)
/// - `s`: saturation, 0 to 100
/// - `l`: lightness, 0 to 100
#[must_use]
pub fn hsluv_to_srgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if l > L_MAX {
        return (1.0, 1.0, 1.0);
    }
    if l < L_MIN {
        return (0.0, 0.0, 0.0);
    }

    let h = normalize_hue(h);
    let c = max_chroma(l, h) / 100.0 * s;

    // LCh(uv) → Luv
    let h_rad = h.to_radians();
    let u = h_rad.cos() * c;
    let v = h_rad.sin() * c;

    // Luv → XYZ
    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;
    let y = l_to_y(l);
    let x = -(9.0 * y * var_u) / (var_u - 4.0).mul_add(var_v, -(var_u * var_v));
    let z = var_v.mul_add(-x, (15.0 * var_v).mul_add(-y, 9.0 * y)) / (3.0 * var_v);

    // XYZ → sRGB
    let xyz = (x, y, z);
    (
        linear_to_srgb(dot(&M[0], xyz)),
        linear_to_srgb(dot(&M[1], xyz)),
        linear_to_srgb(dot(&M[2], xyz)),
    )
}

/// sRGB (0.0–1.0) → HSLuv `(h, s, l)`.
///
/// Grays report hue 0 and saturation 0.
#[must_use]
pub fn srgb_to_hsluv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let lin = (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let x = dot(&M_INV[0], lin);
    let y = dot(&M_INV[1], lin);
    let z = dot(&M_INV[2], lin);

    // XYZ → Luv
    let l = y_to_l(y);
    if l < L_MIN {
        return (0.0, 0.0, 0.0);
    }
    let divider = 3.0f64.mul_add(z, 15.0f64.mul_add(y, x));
    let var_u = 4.0 * x / divider;
    let var_v = 9.0 * y / divider;
    let u = 13.0 * l * (var_u - REF_U);
    let v = 13.0 * l * (var_v - REF_V);

    // Luv → LCh(uv)
    let c = u.hypot(v);
    let h = if c < 1e-8 {
        0.0
    } else {
        normalize_hue(v.atan2(u).to_degrees())
    };

    if l > L_MAX {
        return (h, 0.0, 100.0);
    }

    let s = c / max_chroma(l, h) * 100.0;
    (h, s, l)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
