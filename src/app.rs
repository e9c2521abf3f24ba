// SPDX-License-Identifier: MIT
//
// Application state — everything the presentation layer shows.
//
// One owned struct replaces the page-level reactive object: the palette,
// its names, and the user-adjustable settings. Every setter that affects
// generation regenerates immediately. Each regeneration bumps `generation`
// so name lookups started for an older palette can be recognised and
// dropped when they arrive.

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use swatch_names::Lookup;
use swatch_palette::{BackgroundGradient, GenerationParameters, Mode, PaletteError, generate_palette};

use crate::config::Settings;

/// The palette and the knobs that produced it.
#[derive(Debug)]
pub struct AppState {
    /// Current palette, `#rrggbb`.
    pub colors: Vec<String>,
    /// Names for `colors`, positional. Empty until a lookup lands.
    pub names: Vec<String>,
    pub amount: usize,
    /// Gradient segments passed to the generator as `parts`.
    pub colors_in_gradient: usize,
    pub random_order: bool,
    pub has_gradients: bool,
    pub padding: f64,
    pub mode: Mode,
    pub settings_visible: bool,
    /// Bumped on every regeneration.
    pub generation: u64,
    rng: StdRng,
}

impl AppState {
    /// Build the state and generate the first palette.
    pub fn new(settings: &Settings) -> Result<Self, PaletteError> {
        let rng = settings
            .seed
            .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
        let mut state = Self {
            colors: Vec::new(),
            names: Vec::new(),
            amount: settings.amount,
            colors_in_gradient: settings.parts.min(settings.amount),
            random_order: settings.random_order,
            has_gradients: settings.gradient,
            padding: settings.padding,
            mode: settings.mode,
            settings_visible: false,
            generation: 0,
            rng,
        };
        state.new_colors()?;
        Ok(state)
    }

    pub const fn parameters(&self) -> GenerationParameters {
        GenerationParameters {
            total: self.amount,
            mode: self.mode,
            padding: self.padding,
            parts: self.colors_in_gradient,
            random_order: self.random_order,
        }
    }

    /// Generate a fresh palette and forget the old names.
    pub fn new_colors(&mut self) -> Result<(), PaletteError> {
        let params = self.parameters();
        let palette = generate_palette(&mut self.rng, &params)?;
        self.colors = palette.into_inner();
        self.names.clear();
        self.generation += 1;
        debug!("generation {}: {:?}", self.generation, self.colors);
        Ok(())
    }

    /// Change the palette size. The gradient segment count never exceeds it.
    pub fn set_amount(&mut self, amount: usize) -> Result<(), PaletteError> {
        self.update(|s| {
            s.amount = amount;
            s.colors_in_gradient = s.colors_in_gradient.min(amount);
        })
    }

    pub fn set_colors_in_gradient(&mut self, parts: usize) -> Result<(), PaletteError> {
        self.update(|s| s.colors_in_gradient = parts)
    }

    pub fn set_random_order(&mut self, random_order: bool) -> Result<(), PaletteError> {
        self.update(|s| s.random_order = random_order)
    }

    pub fn set_padding(&mut self, padding: f64) -> Result<(), PaletteError> {
        self.update(|s| s.padding = padding)
    }

    pub fn toggle_settings(&mut self) {
        self.settings_visible = !self.settings_visible;
    }

    pub fn toggle_gradient(&mut self) {
        self.has_gradients = !self.has_gradients;
    }

    /// Take a finished lookup. Returns whether names were stored.
    ///
    /// Lookups for an older palette are dropped. A failed lookup leaves the
    /// swatches unnamed.
    pub fn apply_names(&mut self, lookup: Lookup) -> bool {
        if lookup.generation != self.generation {
            debug!(
                "dropping names for generation {} (current {})",
                lookup.generation, self.generation
            );
            return false;
        }
        match lookup.result {
            Ok(names) => {
                self.names = names.into_iter().map(|n| n.name).collect();
                true
            }
            Err(e) => {
                warn!("color names unavailable: {e}");
                self.names.clear();
                false
            }
        }
    }

    /// Name for the color at `index`, if one has arrived.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// The controls' background: the last palette color.
    pub fn accent(&self) -> Option<&str> {
        self.colors.last().map(String::as_str)
    }

    pub fn gradient(&self) -> Result<BackgroundGradient, PaletteError> {
        BackgroundGradient::from_hex(&self.colors)
    }

    /// Apply a settings change and regenerate; roll back if the new
    /// settings are invalid.
    fn update(&mut self, change: impl FnOnce(&mut Self)) -> Result<(), PaletteError> {
        let before = (self.amount, self.colors_in_gradient, self.random_order, self.padding);
        change(self);
        if let Err(e) = self.parameters().validate() {
            (self.amount, self.colors_in_gradient, self.random_order, self.padding) = before;
            return Err(e);
        }
        self.new_colors()
    }
}
