// SPDX-License-Identifier: MIT
//
// Command-line arguments.
//
// Every setting is optional here so that an absent flag falls through to
// the config file and then to the built-in default (see `config.rs`).
// Switches come in on/off pairs; the last one given wins.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Random perceptual color palettes for the terminal.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "swatch", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Number of colors in the palette.
    #[arg(short = 'n', long)]
    pub amount: Option<usize>,

    /// Number of gradient segments (colors in the anchor gradient).
    #[arg(short = 'p', long)]
    pub parts: Option<usize>,

    /// Fraction trimmed from each end of the color scale, 0 to 0.5.
    #[arg(long)]
    pub padding: Option<f64>,

    /// Interpolation space: rgb, lrgb, lab, lch (hcl), hsl, oklab, oklch.
    #[arg(long)]
    pub mode: Option<String>,

    /// Shuffle the raw colors before smoothing.
    #[arg(long, overrides_with = "no_random_order")]
    pub random_order: bool,

    /// Keep the raw colors in generation order.
    #[arg(long, overrides_with = "random_order")]
    pub no_random_order: bool,

    /// Seed the random source for a repeatable palette.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Look up color names.
    #[arg(long, overrides_with = "no_names")]
    pub names: bool,

    /// Skip the color naming lookup.
    #[arg(long, overrides_with = "names")]
    pub no_names: bool,

    /// Draw the background gradient strip.
    #[arg(long, overrides_with = "no_gradient")]
    pub gradient: bool,

    /// Do not draw the background gradient strip.
    #[arg(long, overrides_with = "gradient")]
    pub no_gradient: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Swatches)]
    pub format: Format,

    /// Keep the palette open and accept commands (r, n, p, pad, o, g, s, q).
    #[arg(short, long)]
    pub interactive: bool,

    /// Read settings from this TOML file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// `--random-order` / `--no-random-order`, if either was given.
    pub const fn random_order_flag(&self) -> Option<bool> {
        switch(self.random_order, self.no_random_order)
    }

    /// `--names` / `--no-names`, if either was given.
    pub const fn names_flag(&self) -> Option<bool> {
        switch(self.names, self.no_names)
    }

    /// `--gradient` / `--no-gradient`, if either was given.
    pub const fn gradient_flag(&self) -> Option<bool> {
        switch(self.gradient, self.no_gradient)
    }
}

const fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// How the palette is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Colored blocks with hex labels and names.
    #[default]
    Swatches,
    /// One `#rrggbb` per line.
    Hex,
    /// A JSON object with colors and names.
    Json,
    /// CSS custom properties and the background gradient.
    Css,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["swatch"]).unwrap();
        assert_eq!(cli.amount, None);
        assert_eq!(cli.format, Format::Swatches);
        assert!(!cli.interactive);
        assert_eq!(cli.random_order_flag(), None);
        assert_eq!(cli.names_flag(), None);
        assert_eq!(cli.gradient_flag(), None);
    }

    #[test]
    fn short_and_long_flags() {
        let cli = Cli::try_parse_from([
            "swatch", "-n", "9", "-p", "3", "--padding", "0.2", "--mode", "oklch",
            "--random-order", "--seed", "42", "--format", "json", "-i",
        ])
        .unwrap();
        assert_eq!(cli.amount, Some(9));
        assert_eq!(cli.parts, Some(3));
        assert_eq!(cli.padding, Some(0.2));
        assert_eq!(cli.mode.as_deref(), Some("oklch"));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.random_order_flag(), Some(true));
        assert!(cli.interactive);
    }

    #[test]
    fn last_switch_wins() {
        let cli = Cli::try_parse_from([
            "swatch", "--names", "--no-names", "--no-gradient", "--gradient",
            "--random-order", "--no-random-order",
        ])
        .unwrap();
        assert_eq!(cli.names_flag(), Some(false));
        assert_eq!(cli.gradient_flag(), Some(true));
        assert_eq!(cli.random_order_flag(), Some(false));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["swatch", "--format", "png"]).is_err());
    }
}
