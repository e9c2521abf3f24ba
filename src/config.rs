// SPDX-License-Identifier: MIT
//
// Layered configuration: built-in defaults, then an optional TOML file,
// then command-line flags.
//
// The file lives at `<config dir>/swatch/config.toml` unless `--config`
// names another one. A missing default file is normal; a missing or broken
// file that was asked for explicitly is an error. The file is only ever
// read.
//
//   # ~/.config/swatch/config.toml
//   amount = 8
//   parts = 3
//   padding = 0.2
//   mode = "oklch"
//   random_order = false
//   gradient = true
//   names = true
//   naming_url = "https://api.color.pizza"
//   naming_timeout_secs = 10

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use swatch_palette::{GenerationParameters, Mode};

use crate::cli::Cli;

/// Settings as written in the config file. Absent keys take defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub amount: usize,
    pub parts: usize,
    pub padding: f64,
    pub mode: String,
    pub random_order: bool,
    pub gradient: bool,
    pub names: bool,
    pub naming_url: String,
    pub naming_timeout_secs: u64,
}

impl Default for FileConfig {
    fn default() -> Self {
        let params = GenerationParameters::default();
        Self {
            amount: params.total,
            parts: params.parts,
            padding: params.padding,
            mode: params.mode.name().to_string(),
            random_order: params.random_order,
            gradient: true,
            names: true,
            naming_url: swatch_names::client::DEFAULT_BASE_URL.to_string(),
            naming_timeout_secs: swatch_names::client::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Default config file location.
pub fn default_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("swatch").join("config.toml"))
}

/// Parse config file contents.
pub fn parse(content: &str) -> Result<FileConfig> {
    Ok(toml::from_str(content)?)
}

/// Load the config file. `explicit` comes from `--config`.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => match default_path() {
            Some(p) => (p, false),
            None => return Ok(FileConfig::default()),
        },
    };

    match fs::read_to_string(&path) {
        Ok(content) => {
            log::debug!("loading config from {}", path.display());
            parse(&content).with_context(|| format!("invalid config file {}", path.display()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => Ok(FileConfig::default()),
        Err(e) => Err(e).with_context(|| format!("cannot read config file {}", path.display())),
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub amount: usize,
    pub parts: usize,
    pub padding: f64,
    pub mode: Mode,
    pub random_order: bool,
    pub gradient: bool,
    pub names: bool,
    pub naming_url: String,
    pub naming_timeout: Duration,
    pub seed: Option<u64>,
}

impl Settings {
    /// Lay command-line flags over the file config and check the result.
    pub fn resolve(file: FileConfig, cli: &Cli) -> Result<Self> {
        let mode_name = cli.mode.as_deref().unwrap_or(&file.mode);
        let mode: Mode = mode_name.parse()?;

        let settings = Self {
            amount: cli.amount.unwrap_or(file.amount),
            parts: cli.parts.unwrap_or(file.parts),
            padding: cli.padding.unwrap_or(file.padding),
            mode,
            random_order: cli.random_order_flag().unwrap_or(file.random_order),
            gradient: cli.gradient_flag().unwrap_or(file.gradient),
            names: cli.names_flag().unwrap_or(file.names),
            naming_url: file.naming_url,
            naming_timeout: Duration::from_secs(file.naming_timeout_secs),
            seed: cli.seed,
        };
        settings.generation_parameters().validate()?;
        if settings.naming_timeout.is_zero() {
            bail!("naming_timeout_secs must be at least 1");
        }
        Ok(settings)
    }

    pub const fn generation_parameters(&self) -> GenerationParameters {
        GenerationParameters {
            total: self.amount,
            mode: self.mode,
            padding: self.padding,
            parts: self.parts,
            random_order: self.random_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("swatch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn empty_file_is_defaults() {
        assert_eq!(parse("").unwrap(), FileConfig::default());
    }

    #[test]
    fn partial_file() {
        let file = parse("amount = 9\nmode = \"oklch\"\n").unwrap();
        assert_eq!(file.amount, 9);
        assert_eq!(file.mode, "oklch");
        assert_eq!(file.parts, 4);
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(parse("colour = 3").is_err());
    }

    #[test]
    fn defaults_resolve() {
        let s = Settings::resolve(FileConfig::default(), &cli(&[])).unwrap();
        assert_eq!(s.generation_parameters(), GenerationParameters::default());
        assert!(s.gradient && s.names);
        assert_eq!(s.naming_url, "https://api.color.pizza");
        assert_eq!(s.seed, None);
    }

    #[test]
    fn flags_override_file() {
        let file = parse("amount = 9\nparts = 2\nmode = \"hsl\"\nnames = true").unwrap();
        let s = Settings::resolve(file, &cli(&["-n", "5", "--mode", "lch", "--no-names"])).unwrap();
        assert_eq!((s.amount, s.parts, s.mode, s.names), (5, 2, Mode::Lch, false));
    }

    #[test]
    fn switches_undo_file_settings() {
        let file = parse("random_order = true\ngradient = false\nnames = false").unwrap();
        let s = Settings::resolve(file.clone(), &cli(&[])).unwrap();
        assert_eq!((s.random_order, s.gradient, s.names), (true, false, false));

        let flags = ["--no-random-order", "--gradient", "--names"];
        let s = Settings::resolve(file, &cli(&flags)).unwrap();
        assert_eq!((s.random_order, s.gradient, s.names), (false, true, true));
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(Settings::resolve(FileConfig::default(), &cli(&["-n", "0"])).is_err());
        assert!(Settings::resolve(FileConfig::default(), &cli(&["--padding", "0.7"])).is_err());
        assert!(Settings::resolve(FileConfig::default(), &cli(&["--mode", "cmyk"])).is_err());
        let file = parse("naming_timeout_secs = 0").unwrap();
        assert!(Settings::resolve(file, &cli(&[])).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = load(Some(Path::new("/nonexistent/swatch/config.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("cannot read config file"), "{err:#}");
    }

    #[test]
    fn explicit_file_is_read() {
        let path = std::env::temp_dir().join(format!("swatch-config-{}.toml", std::process::id()));
        fs::write(&path, "amount = 12\n").unwrap();
        let file = load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(file.amount, 12);
    }
}
