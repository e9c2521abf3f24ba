// SPDX-License-Identifier: MIT
//! Naming-service failures.

use thiserror::Error;

/// Why a name lookup failed. Lookups are never retried; callers leave the
/// names empty and carry on.
#[derive(Debug, Error)]
pub enum NamingError {
    /// Nothing to look up.
    #[error("no colors to name")]
    EmptyRequest,

    /// A color was not a `#rrggbb` string.
    #[error("not a hex color: {0:?}")]
    InvalidColor(String),

    /// Connection, TLS or timeout failure.
    #[error("naming service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("naming service returned HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("malformed naming response: {0}")]
    Decode(#[from] serde_json::Error),
}
