// SPDX-License-Identifier: MIT
//! Background name lookups.
//!
//! A lookup runs on its own thread and reports back over a channel, tagged
//! with the palette generation it was started for. The palette may have
//! been regenerated by the time the answer arrives; the receiver compares
//! generations and drops stale answers.
//!
//! ```text
//!   main thread                         lookup thread
//!   ───────────                         ─────────────
//!   spawn_lookup(gen 3) ──────────────► client.names()
//!   new_colors()  (gen 4)                    │
//!   spawn_lookup(gen 4) ──► …                │
//!   rx.try_recv() ◄─────── Lookup{gen 3} ◄───┘   (stale, dropped)
//! ```

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use log::debug;

use crate::client::{ColorName, NamingClient};
use crate::error::NamingError;

/// A finished lookup.
#[derive(Debug)]
pub struct Lookup {
    /// Palette generation the lookup was started for.
    pub generation: u64,
    pub result: Result<Vec<ColorName>, NamingError>,
}

/// Look up names for `colors` on a new thread and send the outcome on `tx`.
///
/// A receiver that has gone away is not an error; the answer is dropped.
pub fn spawn_lookup(
    client: Arc<dyn NamingClient>,
    colors: Vec<String>,
    generation: u64,
    tx: Sender<Lookup>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let result = client.names(&colors);
        if tx.send(Lookup { generation, result }).is_err() {
            debug!("lookup for generation {generation} finished after receiver closed");
        }
    })
}
