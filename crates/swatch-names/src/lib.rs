// SPDX-License-Identifier: MIT
//! # swatch-names — human-readable color names
//!
//! Names palette colors through the color.pizza HTTP API. Lookups are
//! best-effort: they run off the main thread, are never retried, and a
//! failure only means the swatches go unnamed.

pub mod client;
pub mod error;
pub mod lookup;

pub use client::{ColorName, ColorPizza, NamesResponse, NamingClient};
pub use error::NamingError;
pub use lookup::{Lookup, spawn_lookup};
