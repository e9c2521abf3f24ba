// SPDX-License-Identifier: MIT
//! Ambient background gradient.
//!
//! The page background runs top to bottom through every palette color.
//! The first stop is pinned at `12vmin` and the last at `69%`; the stops in
//! between are spread evenly across that span, the way CSS positions stops
//! that carry no explicit length.

use std::fmt;

use swatch_color::Color;

use crate::error::PaletteError;
use crate::mode::Mode;

/// Position of the first stop.
pub const FIRST_STOP: Length = Length::Vmin(12.0);

/// Position of the last stop.
pub const LAST_STOP: Length = Length::Percent(69.0);

/// A CSS stop position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Percent of the gradient line (the viewport height here).
    Percent(f64),
    /// Percent of the smaller viewport side.
    Vmin(f64),
}

impl Length {
    /// Position as a fraction of a `height`-tall gradient line in a
    /// `width` × `height` viewport.
    #[must_use]
    pub fn resolve(self, width: f64, height: f64) -> f64 {
        match self {
            Self::Percent(p) => p / 100.0,
            Self::Vmin(v) => {
                if height <= 0.0 {
                    0.0
                } else {
                    v / 100.0 * width.min(height) / height
                }
            }
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Vmin(v) => write!(f, "{v}vmin"),
        }
    }
}

/// Top-to-bottom gradient through a palette.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundGradient {
    colors: Vec<Color>,
}

impl BackgroundGradient {
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyScale`] for an empty palette.
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyScale);
        }
        Ok(Self { colors })
    }

    /// # Errors
    ///
    /// Returns [`PaletteError::Color`] for an unparsable entry or
    /// [`PaletteError::EmptyScale`] for an empty palette.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteError> {
        let colors = colors
            .iter()
            .map(|s| Color::from_hex(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// CSS `background` value.
    ///
    /// A single color yields one double-position stop.
    #[must_use]
    pub fn to_css(&self) -> String {
        let last = self.colors.len() - 1;
        let stops: Vec<String> = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, c)| match (i == 0, i == last) {
                (true, true) => format!("{c} {FIRST_STOP} {LAST_STOP}"),
                (true, false) => format!("{c} {FIRST_STOP}"),
                (false, true) => format!("{c} {LAST_STOP}"),
                (false, false) => c.to_hex(),
            })
            .collect();
        format!("linear-gradient(to bottom, {})", stops.join(", "))
    }

    /// Stop positions (fractions of the height) for a viewport.
    ///
    /// Later stops never sit before earlier ones.
    #[must_use]
    pub fn resolve(&self, width: f64, height: f64) -> Vec<f64> {
        let first = FIRST_STOP.resolve(width, height);
        let last = LAST_STOP.resolve(width, height).max(first);
        let n = self.colors.len();
        if n == 1 {
            return vec![first];
        }
        let step = (last - first) / (n - 1) as f64;
        (0..n).map(|i| (i as f64).mul_add(step, first)).collect()
    }

    /// Color at fraction `y` (0 top, 1 bottom), blended in sRGB.
    #[must_use]
    pub fn sample(&self, y: f64, width: f64, height: f64) -> Color {
        let positions = self.resolve(width, height);
        let last = self.colors.len() - 1;
        if y <= positions[0] {
            return self.colors[0];
        }
        if y >= positions[last] {
            return self.colors[last];
        }
        let hi = positions.iter().position(|&p| p > y).unwrap_or(last);
        let lo = hi - 1;
        let span = positions[hi] - positions[lo];
        let f = if span > 0.0 { (y - positions[lo]) / span } else { 1.0 };
        Mode::Rgb.mix(self.colors[lo], self.colors[hi], f)
    }
}
