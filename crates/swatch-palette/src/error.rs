// SPDX-License-Identifier: MIT
//! Errors raised by palette generation and color scales.

use swatch_color::ColorError;
use thiserror::Error;

/// Invalid generation parameters or scale inputs.
///
/// Parameters are never silently corrected: a zero `total`, zero `parts`
/// or out-of-range `padding` is reported to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// `total` was zero.
    #[error("total must be at least 1")]
    ZeroTotal,

    /// `parts` was zero.
    #[error("parts must be at least 1")]
    ZeroParts,

    /// `padding` was not a finite value in `[0, 0.5]`.
    #[error("padding must be within [0, 0.5], got {0}")]
    InvalidPadding(f64),

    /// The interpolation mode name is not recognized.
    #[error("unknown interpolation mode {0:?} (expected one of: {names})", names = crate::mode::Mode::names().join(", "))]
    UnknownMode(String),

    /// A color scale was built from an empty list.
    #[error("a color scale needs at least one color")]
    EmptyScale,

    /// A scale input was not a valid color.
    #[error(transparent)]
    Color(#[from] ColorError),
}
