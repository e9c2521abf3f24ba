// SPDX-License-Identifier: MIT
//
// Error type for color parsing.

use thiserror::Error;

/// Errors produced while reading colors from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not `#RGB` or `#RRGGBB` hex.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}
