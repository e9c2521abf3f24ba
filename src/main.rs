// SPDX-License-Identifier: MIT
//
// swatch — random perceptual color palettes in the terminal.
//
// This is the binary that wires the crates together:
//
//   swatch-palette → palette generation, label contrast, background gradient
//   swatch-names   → color names from the naming service
//
// Flow:
//
//   CLI + config file → Settings → AppState::new → generate_palette
//   AppState.colors → spawn_lookup (background thread) → apply_names
//   AppState → render (swatches / hex / json / css) → stdout
//
// In interactive mode a line-based loop reads commands from stdin, applies
// them to the state, and repaints. Name lookups run off the main thread;
// answers for a palette that has since been replaced are dropped.

mod ansi;
mod app;
mod cli;
mod command;
mod config;
mod render;
mod terminal;

use std::io::{self, BufRead, Write};
use std::process;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use swatch_names::{ColorPizza, Lookup, NamingClient, spawn_lookup};

use crate::app::AppState;
use crate::cli::{Cli, Format};
use crate::command::{Command, CommandResult};
use crate::config::Settings;
use crate::render::RenderFlags;

/// How long a repaint waits for names of a fresh palette.
const NAME_WAIT: Duration = Duration::from_millis(1500);

// ─── Naming ─────────────────────────────────────────────────────────────────

/// Background name lookups for the current palette.
struct Namer {
    client: Arc<dyn NamingClient>,
    tx: Sender<Lookup>,
    rx: Receiver<Lookup>,
}

impl Namer {
    fn new(settings: &Settings) -> Result<Option<Self>> {
        if !settings.names {
            return Ok(None);
        }
        let client = ColorPizza::with_base_url(&settings.naming_url, settings.naming_timeout)
            .context("cannot set up the naming client")?;
        let (tx, rx) = mpsc::channel();
        Ok(Some(Self {
            client: Arc::new(client),
            tx,
            rx,
        }))
    }

    /// Start a lookup for the state's current palette.
    fn request(&self, state: &AppState) {
        // Detached: the thread ends once the client returns.
        let _handle = spawn_lookup(
            Arc::clone(&self.client),
            state.colors.clone(),
            state.generation,
            self.tx.clone(),
        );
    }

    /// Apply whatever has arrived, waiting up to `wait` for the current
    /// generation's answer.
    fn collect(&self, state: &mut AppState, wait: Duration) {
        let deadline = Instant::now() + wait;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(lookup) => {
                    let current = lookup.generation == state.generation;
                    state.apply_names(lookup);
                    if current {
                        return;
                    }
                }
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => {
                    if !wait.is_zero() {
                        info!("names not ready for generation {}", state.generation);
                    }
                    return;
                }
            }
        }
    }
}

// ─── One-shot output ────────────────────────────────────────────────────────

fn print_once(cli: &Cli, state: &mut AppState, namer: Option<&Namer>) -> Result<()> {
    let wants_names = matches!(cli.format, Format::Swatches | Format::Json);
    if let Some(namer) = namer.filter(|_| wants_names) {
        namer.request(state);
        namer.collect(state, NAME_WAIT * 4);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Swatches => {
            let color = terminal::stdout_is_tty();
            let flags = RenderFlags::for_state(state, color, false);
            render::view(&mut out, state, terminal::width(), flags)?;
        }
        Format::Hex => render::hex_list(&mut out, state)?,
        Format::Json => render::json(&mut out, state)?,
        Format::Css => render::css(&mut out, state)?,
    }
    out.flush()?;
    Ok(())
}

// ─── Interactive loop ───────────────────────────────────────────────────────

fn interactive(state: &mut AppState, namer: Option<&Namer>) -> Result<()> {
    let color = terminal::stdout_is_tty();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut status: Option<String> = None;
    let mut named_generation = 0;

    loop {
        if let Some(namer) = namer {
            if named_generation != state.generation {
                namer.request(state);
                named_generation = state.generation;
                namer.collect(state, NAME_WAIT);
            } else {
                namer.collect(state, Duration::ZERO);
            }
        }

        {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if color {
                ansi::clear_screen(&mut out)?;
            }
            let flags = RenderFlags::for_state(state, color, true);
            let width = terminal::width();
            render::view(&mut out, state, width, flags)?;
            if let Some(msg) = status.take() {
                writeln!(out, "{msg}")?;
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("cannot read command")?;
        match Command::parse(&line).execute(state) {
            CommandResult::Ok(msg) => status = msg,
            CommandResult::Err(msg) => {
                warn!("{msg}");
                status = Some(msg);
            }
            CommandResult::Quit => return Ok(()),
        }
    }
}

// ─── Entry Point ────────────────────────────────────────────────────────────

fn run() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let file = config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(file, &cli)?;
    let mut state = AppState::new(&settings).context("cannot generate palette")?;
    let namer = Namer::new(&settings)?;

    if cli.interactive {
        interactive(&mut state, namer.as_ref())
    } else {
        print_once(&cli, &mut state, namer.as_ref())
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("swatch: {e:#}");
        process::exit(1);
    }
}
