// SPDX-License-Identifier: MIT
//
// Presentation: painting the palette to a writer.
//
// Layout (swatches format):
//
//   ┌──────────────────────────────┐
//   │ swatch 1: hex + name         │  ← 3 rows each, label in contrast color
//   │ …                            │
//   ├──────────────────────────────┤
//   │ gradient strip               │  ← half-block cells, optional
//   ├──────────────────────────────┤
//   │ settings panel               │  ← when visible
//   ├──────────────────────────────┤
//   │ footer (accent color)        │
//   └──────────────────────────────┘
//
// Without `COLOR` (stdout is not a terminal) the same content is written
// as plain text.

use std::io::Write;

use anyhow::Result;
use bitflags::bitflags;
use serde::Serialize;
use swatch_color::Color;
use swatch_palette::contrast::text_color;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ansi;
use crate::app::AppState;

/// Rows in the gradient strip; each holds two samples.
pub const GRADIENT_ROWS: usize = 8;

/// Commands listed in the footer.
pub const HELP: &str = "r refresh · n <amount> · p <parts> · pad <0-0.5> · o order · g gradient · s settings · q quit";

bitflags! {
    /// What to draw.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RenderFlags: u8 {
        /// 24-bit ANSI colors.
        const COLOR    = 0b0001;
        /// Gradient strip below the swatches.
        const GRADIENT = 0b0010;
        /// Settings panel.
        const SETTINGS = 0b0100;
        /// Command footer.
        const FOOTER   = 0b1000;
    }
}

impl RenderFlags {
    /// Flags for the current state.
    #[must_use]
    pub fn for_state(state: &AppState, color: bool, interactive: bool) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::COLOR, color);
        flags.set(Self::GRADIENT, state.has_gradients);
        flags.set(Self::SETTINGS, state.settings_visible);
        flags.set(Self::FOOTER, interactive);
        flags
    }
}

/// Pad or truncate `text` to exactly `width` terminal columns.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        let pad = width - text.width();
        return format!("{text}{}", " ".repeat(pad));
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// One full-width line on `background` in `foreground`.
fn painted_line(
    w: &mut impl Write,
    text: &str,
    width: usize,
    background: Color,
    foreground: Color,
    bold: bool,
) -> Result<()> {
    ansi::bg(w, background)?;
    ansi::fg(w, foreground)?;
    if bold {
        ansi::bold(w)?;
    }
    w.write_all(fit(text, width).as_bytes())?;
    ansi::reset(w)?;
    writeln!(w)?;
    Ok(())
}

/// Every swatch, top to bottom.
pub fn swatches(w: &mut impl Write, state: &AppState, width: usize, flags: RenderFlags) -> Result<()> {
    for (i, hex) in state.colors.iter().enumerate() {
        let name = state.name(i).unwrap_or("");
        if !flags.contains(RenderFlags::COLOR) {
            writeln!(w, "{}", format!("{hex}  {name}").trim_end())?;
            continue;
        }
        let background = Color::from_hex(hex)?;
        let label = text_color(background);
        painted_line(w, "", width, background, label, false)?;
        painted_line(w, &format!("  {hex}"), width, background, label, true)?;
        painted_line(w, &format!("  {name}"), width, background, label, false)?;
    }
    Ok(())
}

/// The background gradient squeezed into a strip of [`GRADIENT_ROWS`].
///
/// Each cell is an upper half block: foreground is the top sample,
/// background the bottom one.
pub fn gradient_strip(w: &mut impl Write, state: &AppState, width: usize) -> Result<()> {
    let gradient = state.gradient()?;
    let samples = GRADIENT_ROWS * 2;
    // Cells are about twice as tall as wide.
    let (vw, vh) = (width as f64, samples as f64);
    let at = |k: usize| gradient.sample((k as f64 + 0.5) / samples as f64, vw, vh);

    for row in 0..GRADIENT_ROWS {
        ansi::fg(w, at(row * 2))?;
        ansi::bg(w, at(row * 2 + 1))?;
        w.write_all("▀".repeat(width).as_bytes())?;
        ansi::reset(w)?;
        writeln!(w)?;
    }
    Ok(())
}

/// Current settings, one per line.
pub fn settings_lines(state: &AppState) -> Vec<String> {
    let on_off = |b: bool| if b { "on" } else { "off" };
    vec![
        format!("amount             {}", state.amount),
        format!("colors in gradient {}", state.colors_in_gradient),
        format!("padding            {}", state.padding),
        format!("mode               {}", state.mode),
        format!("random order       {}", on_off(state.random_order)),
        format!("gradients          {}", on_off(state.has_gradients)),
    ]
}

fn settings_panel(w: &mut impl Write, state: &AppState, width: usize, color: bool) -> Result<()> {
    for line in settings_lines(state) {
        if color {
            painted_line(w, &format!("  {line}"), width, Color::BLACK, Color::WHITE, false)?;
        } else {
            writeln!(w, "{line}")?;
        }
    }
    Ok(())
}

fn footer(w: &mut impl Write, state: &AppState, width: usize, color: bool) -> Result<()> {
    match state.accent() {
        Some(accent) if color => {
            let background = Color::from_hex(accent)?;
            painted_line(w, &format!(" {HELP}"), width, background, text_color(background), false)
        }
        _ => {
            writeln!(w, "{HELP}")?;
            Ok(())
        }
    }
}

/// The whole swatches view.
pub fn view(w: &mut impl Write, state: &AppState, width: usize, flags: RenderFlags) -> Result<()> {
    let color = flags.contains(RenderFlags::COLOR);
    swatches(w, state, width, flags)?;
    if color && flags.contains(RenderFlags::GRADIENT) {
        gradient_strip(w, state, width)?;
    }
    if flags.contains(RenderFlags::SETTINGS) {
        settings_panel(w, state, width, color)?;
    }
    if flags.contains(RenderFlags::FOOTER) {
        footer(w, state, width, color)?;
    }
    Ok(())
}

// ─── Plain formats ──────────────────────────────────────────────────────────

/// One hex color per line.
pub fn hex_list(w: &mut impl Write, state: &AppState) -> Result<()> {
    for hex in &state.colors {
        writeln!(w, "{hex}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonPalette<'a> {
    colors: &'a [String],
    names: &'a [String],
    accent: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gradient: Option<String>,
}

/// The palette as a JSON object.
pub fn json(w: &mut impl Write, state: &AppState) -> Result<()> {
    let gradient = if state.has_gradients {
        Some(state.gradient()?.to_css())
    } else {
        None
    };
    let out = JsonPalette {
        colors: &state.colors,
        names: &state.names,
        accent: state.accent(),
        gradient,
    };
    serde_json::to_writer_pretty(&mut *w, &out)?;
    writeln!(w)?;
    Ok(())
}

/// CSS custom properties, plus the page background when gradients are on.
pub fn css(w: &mut impl Write, state: &AppState) -> Result<()> {
    writeln!(w, ":root {{")?;
    for (i, hex) in state.colors.iter().enumerate() {
        writeln!(w, "  --swatch-{}: {hex};", i + 1)?;
    }
    if let Some(accent) = state.accent() {
        writeln!(w, "  --swatch-accent: {accent};")?;
    }
    writeln!(w, "}}")?;
    if state.has_gradients {
        writeln!(w)?;
        writeln!(w, "body {{")?;
        writeln!(w, "  background: {};", state.gradient()?.to_css())?;
        writeln!(w, "}}")?;
    }
    Ok(())
}
