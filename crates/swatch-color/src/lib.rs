// SPDX-License-Identifier: MIT
//
// swatch-color — color science for the swatch palette generator.
//
// Palettes are generated in HSLuv (a perceptually uniform take on HSL) and
// smoothed by interpolating in CIE Lab, LCh, Oklab or one of the simpler
// RGB/HSL spaces. This crate owns every conversion between those spaces and
// sRGB, plus hex parsing/formatting and WCAG relative luminance.
//
// Conversion pipelines:
//
//   HSLuv ↔ LCh(uv) ↔ Luv ↔ XYZ ↔ Linear sRGB ↔ sRGB ↔ hex
//   CIE Lab ↔ XYZ (D65)
//   Oklab ↔ LMS ↔ Linear sRGB
//
// All math is `f64`. Colors are stored as unclamped sRGB; output clamps.

pub mod color;
pub mod error;
pub mod hsluv;
pub mod space;

pub use color::Color;
pub use error::ColorError;
