// SPDX-License-Identifier: MIT
//! Continuous color scale over `[0, 1]`.
//!
//! Stops sit at evenly spaced positions `i / (n - 1)`. A lookup remaps `t`
//! through the edge padding, clamps, finds the two bracketing stops and
//! blends them in the scale's [`Mode`]. Resampling a scale to `n` evenly
//! spaced lookups is how the generator turns its raw color list into the
//! final palette.
//!
//! ```text
//!   padding p = 0.2
//!
//!   input  t: 0 ─────────────────────────── 1
//!   lookup  :      0.2 ─────────────── 0.8
//!   stops   : ●──────────●──────────●──────────●
//! ```

use swatch_color::Color;

use crate::error::PaletteError;
use crate::mode::Mode;

/// An ordered, immutable list of color stops with a blend mode and padding.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    stops: Vec<Color>,
    mode: Mode,
    padding: f64,
}

impl Scale {
    /// Build a scale from at least one color. Mode defaults to Lab, no padding.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyScale`] if `colors` is empty.
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyScale);
        }
        Ok(Self {
            stops: colors,
            mode: Mode::default(),
            padding: 0.0,
        })
    }

    /// Build a scale from hex strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Color`] for the first unparsable string, or
    /// [`PaletteError::EmptyScale`] for an empty list.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let stops = colors
            .iter()
            .map(|s| Color::from_hex(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(stops)
    }

    /// Set the blend mode.
    #[must_use]
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Trim `padding` from both ends of the domain before every lookup.
    ///
    /// Values outside `[0, 0.5]` are accepted here; lookups clamp, so an
    /// oversized padding simply collapses toward the middle of the scale.
    /// Generation parameters validate the range up front.
    #[must_use]
    pub const fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Color at position `t` in `[0, 1]`.
    #[must_use]
    pub fn at(&self, t: f64) -> Color {
        let t = self.padding.mul_add(-2.0, 1.0).mul_add(t, self.padding);
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let last = self.stops.len() - 1;
        if last == 0 {
            return self.stops[0];
        }

        let scaled = t * last as f64;
        let lo = (scaled.floor() as usize).min(last);
        let f = scaled - lo as f64;
        if lo == last || f <= 0.0 {
            return self.stops[lo];
        }
        self.mode.mix(self.stops[lo], self.stops[lo + 1], f)
    }

    /// `n` evenly spaced colors. A single sample is taken from the middle.
    #[must_use]
    pub fn sample(&self, n: usize) -> Vec<Color> {
        match n {
            0 => Vec::new(),
            1 => vec![self.at(0.5)],
            _ => {
                let denom = (n - 1) as f64;
                (0..n).map(|i| self.at(i as f64 / denom)).collect()
            }
        }
    }

    /// `n` evenly spaced colors as `#rrggbb` strings.
    #[must_use]
    pub fn colors(&self, n: usize) -> Vec<String> {
        self.sample(n).into_iter().map(Color::to_hex).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bw() -> Scale {
        Scale::from_hex(&["#000000", "#ffffff"]).unwrap().mode(Mode::Rgb)
    }

    #[test]
    fn empty_scale_is_an_error() {
        assert_eq!(Scale::new(Vec::new()).unwrap_err(), PaletteError::EmptyScale);
        let none: [&str; 0] = [];
        assert_eq!(Scale::from_hex(&none).unwrap_err(), PaletteError::EmptyScale);
    }

    #[test]
    fn bad_hex_is_an_error() {
        let err = Scale::from_hex(&["#000000", "nope"]).unwrap_err();
        assert!(matches!(err, PaletteError::Color(_)), "{err:?}");
    }

    #[test]
    fn stops_are_hit_exactly() {
        let scale = Scale::from_hex(&["#102030", "#a0b0c0", "#ffeedd"]).unwrap();
        assert_eq!(scale.colors(3), vec!["#102030", "#a0b0c0", "#ffeedd"]);
    }

    #[test]
    fn single_color_scale() {
        let scale = Scale::from_hex(&["#336699"]).unwrap().padding(0.3);
        assert_eq!(scale.colors(4), vec!["#336699"; 4]);
    }

    #[test]
    fn single_sample_is_midpoint() {
        assert_eq!(bw().colors(1), vec!["#808080"]);
    }

    #[test]
    fn zero_samples() {
        assert!(bw().colors(0).is_empty());
    }

    #[test]
    fn rgb_resample() {
        assert_eq!(bw().colors(5), vec!["#000000", "#404040", "#808080", "#bfbfbf", "#ffffff"]);
    }

    /// Padding pulls both ends toward the middle.
    #[test]
    fn padding_trims_both_ends() {
        let out = bw().padding(0.25).colors(3);
        assert_eq!(out, vec!["#404040", "#808080", "#bfbfbf"]);
    }

    /// Half padding collapses every lookup onto the midpoint.
    #[test]
    fn half_padding_collapses() {
        let out = bw().padding(0.5).colors(4);
        assert_eq!(out, vec!["#808080"; 4]);
    }

    #[test]
    fn out_of_range_positions_clamp() {
        let scale = bw();
        assert_eq!(scale.at(-3.0).to_hex(), "#000000");
        assert_eq!(scale.at(7.0).to_hex(), "#ffffff");
        assert_eq!(scale.at(f64::NAN).to_hex(), "#000000");
    }

    #[test]
    fn lab_scale_keeps_endpoints() {
        let scale = Scale::from_hex(&["#2d1b4e", "#e07a5f", "#f4f1de"]).unwrap();
        let out = scale.colors(7);
        assert_eq!(out.first().map(String::as_str), Some("#2d1b4e"));
        assert_eq!(out.last().map(String::as_str), Some("#f4f1de"));
        assert_eq!(out[3], "#e07a5f");
    }
}
