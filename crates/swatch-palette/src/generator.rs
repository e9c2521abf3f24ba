// SPDX-License-Identifier: MIT
//! Palette generation.
//!
//! A palette is built in two passes. First a raw color list is laid out in
//! HSLuv:
//!
//! ```text
//!   opening anchor │ ramp anchors (part - 1) │ vivid (part + rem - 1) │ closing anchor
//!   dark, base hue │ base hue, eased L ramp  │ any of the six hues    │ light, base hue
//! ```
//!
//! Then the list (optionally shuffled) becomes a padded [`Scale`] which is
//! resampled to exactly `total` colors. The raw list length does not have
//! to equal `total`; resampling absorbs the difference.

use log::debug;
use rand::Rng;
use swatch_color::Color;

use crate::error::PaletteError;
use crate::hues::HueSet;
use crate::mode::Mode;
use crate::random::{random_int, random_real, shuffle};
use crate::scale::Scale;

/// Exponent of the anchor lightness ramp.
const RAMP_EASING: f64 = 1.5;

/// Closing anchor lightness plus base lightness.
const LIGHTNESS_CEILING: f64 = 90.0;

// ---------------------------------------------------------------------------
// Color specs
// ---------------------------------------------------------------------------

/// One HSLuv color: hue in degrees, saturation and lightness in 0–100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSpec {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl ColorSpec {
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self { hue, saturation, lightness }
    }

    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_hsluv(self.hue, self.saturation, self.lightness)
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_color().to_hex()
    }
}

// ---------------------------------------------------------------------------
// Segment sizes
// ---------------------------------------------------------------------------

/// How many colors each middle segment of the raw list gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments {
    /// `floor(total / parts)`.
    pub part: usize,
    /// `total mod parts`.
    pub remainder: usize,
}

impl Segments {
    /// # Errors
    ///
    /// Returns [`PaletteError::ZeroParts`] if `parts` is zero.
    pub const fn new(total: usize, parts: usize) -> Result<Self, PaletteError> {
        if parts == 0 {
            return Err(PaletteError::ZeroParts);
        }
        Ok(Self {
            part: total / parts,
            remainder: total % parts,
        })
    }

    /// Ramp anchors between the opening and closing anchors. Zero when
    /// `total < parts`.
    #[must_use]
    pub const fn ramp(self) -> usize {
        self.part.saturating_sub(1)
    }

    /// Vivid colors.
    #[must_use]
    pub const fn vivid(self) -> usize {
        (self.part + self.remainder).saturating_sub(1)
    }

    /// Length of the whole raw list, both anchors included.
    #[must_use]
    pub const fn raw_len(self) -> usize {
        2 + self.ramp() + self.vivid()
    }
}

// ---------------------------------------------------------------------------
// Raw palette
// ---------------------------------------------------------------------------

/// The ordered raw color list with the draws that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPalette {
    pub hues: HueSet,
    pub base_saturation: f64,
    pub base_lightness: f64,
    pub segments: Segments,
    specs: Vec<ColorSpec>,
}

impl RawPalette {
    /// Every spec in order: opening, ramp, vivid, closing.
    #[must_use]
    pub fn specs(&self) -> &[ColorSpec] {
        &self.specs
    }

    #[must_use]
    pub fn opening(&self) -> ColorSpec {
        self.specs[0]
    }

    #[must_use]
    pub fn ramp(&self) -> &[ColorSpec] {
        &self.specs[1..=self.segments.ramp()]
    }

    #[must_use]
    pub fn vivid(&self) -> &[ColorSpec] {
        let start = 1 + self.segments.ramp();
        &self.specs[start..start + self.segments.vivid()]
    }

    #[must_use]
    pub fn closing(&self) -> ColorSpec {
        self.specs[self.specs.len() - 1]
    }
}

/// Lay out the raw HSLuv color list for a palette of `total` colors split
/// into `parts` gradient segments.
///
/// # Errors
///
/// Returns [`PaletteError::ZeroParts`] if `parts` is zero.
pub fn raw_color_specs<R: Rng + ?Sized>(
    rng: &mut R,
    total: usize,
    parts: usize,
) -> Result<RawPalette, PaletteError> {
    let segments = Segments::new(total, parts)?;

    let hues = HueSet::random(rng);
    let base_hue = hues.anchor();
    let base_saturation = f64::from(random_int(rng, 5, 40));
    let base_lightness = f64::from(random_int(rng, 0, 20));
    let range_lightness = LIGHTNESS_CEILING - base_lightness;

    let mut specs = Vec::with_capacity(segments.raw_len());

    specs.push(ColorSpec::new(
        base_hue,
        base_saturation,
        base_lightness * random_real(rng, 0.25, 0.75),
    ));

    let ramp = segments.ramp();
    for i in 0..ramp {
        // ramp > 0 implies part >= 2, so the divisor is never zero.
        let progress = (i as f64 / ramp as f64).powf(RAMP_EASING);
        specs.push(ColorSpec::new(
            base_hue,
            base_saturation,
            range_lightness.mul_add(progress, base_lightness),
        ));
    }

    let min_sat = random_int(rng, 50, 70);
    let max_sat = min_sat + 30;
    let min_light = random_int(rng, 45, 80);
    let max_light = (min_light + 40).min(95);

    for _ in 0..segments.vivid() {
        let hue = hues.pick(rng);
        let saturation = f64::from(random_int(rng, min_sat, max_sat));
        let lightness = f64::from(random_int(rng, min_light, max_light));
        specs.push(ColorSpec::new(hue, saturation, lightness));
    }

    specs.push(ColorSpec::new(base_hue, base_saturation, range_lightness));

    debug!(
        "raw palette: base hue {base_hue}, sat {base_saturation}, light {base_lightness}, \
         ramp {ramp}, vivid {}",
        segments.vivid()
    );

    Ok(RawPalette {
        hues,
        base_saturation,
        base_lightness,
        segments,
        specs,
    })
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Inputs to [`generate_palette`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    /// Number of colors in the palette.
    pub total: usize,
    /// Interpolation space for the final resampling.
    pub mode: Mode,
    /// Fraction trimmed from each end of the scale, in `[0, 0.5]`.
    pub padding: f64,
    /// Number of gradient segments the raw list is split into.
    pub parts: usize,
    /// Shuffle the raw list before resampling.
    pub random_order: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            total: 6,
            mode: Mode::Lab,
            padding: 0.175,
            parts: 4,
            random_order: false,
        }
    }
}

impl GenerationParameters {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self { total, ..Self::default() }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub const fn with_parts(mut self, parts: usize) -> Self {
        self.parts = parts;
        self
    }

    #[must_use]
    pub const fn with_random_order(mut self, random_order: bool) -> Self {
        self.random_order = random_order;
        self
    }

    /// Check every precondition.
    ///
    /// # Errors
    ///
    /// [`PaletteError::ZeroTotal`], [`PaletteError::ZeroParts`] or
    /// [`PaletteError::InvalidPadding`].
    pub fn validate(&self) -> Result<(), PaletteError> {
        if self.total == 0 {
            return Err(PaletteError::ZeroTotal);
        }
        if self.parts == 0 {
            return Err(PaletteError::ZeroParts);
        }
        if !self.padding.is_finite() || !(0.0..=0.5).contains(&self.padding) {
            return Err(PaletteError::InvalidPadding(self.padding));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A finished palette: exactly `total` `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<String>);

impl Palette {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// The accent color.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a palette of exactly `params.total` colors.
///
/// # Errors
///
/// Returns the error from [`GenerationParameters::validate`]; generation
/// itself cannot fail.
pub fn generate_palette<R: Rng + ?Sized>(
    rng: &mut R,
    params: &GenerationParameters,
) -> Result<Palette, PaletteError> {
    params.validate()?;
    debug!(
        "generating {} colors: mode {}, padding {}, parts {}, random order {}",
        params.total, params.mode, params.padding, params.parts, params.random_order
    );

    let raw = raw_color_specs(rng, params.total, params.parts)?;
    let mut colors: Vec<Color> = raw.specs().iter().map(|s| s.to_color()).collect();
    if params.random_order {
        colors = shuffle(rng, &colors);
    }

    // Quantize to 8-bit first so the scale blends exactly the hex stops.
    let stops = colors.into_iter().map(|c| {
        let (r, g, b) = c.to_rgb8();
        Color::rgb8(r, g, b)
    });
    let scale = Scale::new(stops.collect())?
        .mode(params.mode)
        .padding(params.padding);

    Ok(Palette(scale.colors(params.total)))
}

/// [`generate_palette`] with the thread-local random source.
///
/// # Errors
///
/// See [`generate_palette`].
pub fn generate_palette_unseeded(params: &GenerationParameters) -> Result<Palette, PaletteError> {
    generate_palette(&mut rand::rng(), params)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
