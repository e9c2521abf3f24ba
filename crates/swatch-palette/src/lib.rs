// SPDX-License-Identifier: MIT
//! # swatch-palette — random perceptual palette generation
//!
//! Builds palettes of any size from a handful of random draws. Each palette
//! has a low-saturation anchor gradient on its base hue and a burst of
//! vivid accents around the hue wheel, smoothed by resampling through a
//! padded perceptual color scale.
//!
//! # Architecture
//!
//! ```text
//! GenerationParameters + Rng
//!     │
//!     ▼
//! hues.rs:      six hues 60° apart around a random base
//!     │
//!     ▼
//! generator.rs: raw HSLuv list (anchors, eased ramp, vivid burst)
//!     │
//!     ▼
//! random.rs:    optional shuffle
//!     │
//!     ▼
//! scale.rs:     padded scale, blended per mode.rs, resampled to `total`
//!     │
//!     ▼
//! Palette (exactly `total` hex colors)
//! ```
//!
//! `contrast.rs` and `gradient.rs` serve the presentation side: label
//! colors for swatches and the background gradient.
//!
//! Generation is a pure function of its parameters and the random source.
//! Pass a seeded `StdRng` for repeatable palettes.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Small index and count casts to `f64` for positions and ramps.
#![allow(clippy::cast_precision_loss)]
// Scale positions are clamped to [0, 1] before flooring to an index.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod contrast;
pub mod error;
pub mod generator;
pub mod gradient;
pub mod hues;
pub mod mode;
pub mod random;
pub mod scale;

pub use error::PaletteError;
pub use generator::{
    ColorSpec, GenerationParameters, Palette, RawPalette, generate_palette,
    generate_palette_unseeded, raw_color_specs,
};
pub use gradient::BackgroundGradient;
pub use hues::HueSet;
pub use mode::Mode;
pub use scale::Scale;
