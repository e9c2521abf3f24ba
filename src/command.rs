// SPDX-License-Identifier: MIT
//
// Interactive commands.
//
// | Command      | Action                                   |
// |--------------|------------------------------------------|
// | `r` / Enter  | New palette                              |
// | `n <amount>` | Palette size                             |
// | `p <parts>`  | Gradient segments                        |
// | `pad <p>`    | Scale padding, 0 to 0.5                  |
// | `o`          | Toggle random order                      |
// | `g`          | Toggle the gradient strip                |
// | `s`          | Toggle the settings panel                |
// | `q`          | Quit                                     |

use std::str::FromStr;

use crate::app::AppState;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Refresh,
    Amount(usize),
    Parts(usize),
    Padding(f64),
    ToggleOrder,
    ToggleGradient,
    ToggleSettings,
    Help,
    Quit,
    /// Known command, bad or missing argument. Holds the message.
    Invalid(String),
    /// Unknown command — contains the full input for error reporting.
    Unknown(String),
}

/// Outcome of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command succeeded. Optional message for the status line.
    Ok(Option<String>),
    /// Command failed. Error message for the status line.
    Err(String),
    Quit,
}

fn argument<T: FromStr>(name: &str, arg: Option<&str>) -> Result<T, String> {
    let arg = arg.ok_or_else(|| format!("{name}: missing value"))?;
    arg.parse().map_err(|_| format!("{name}: not a number: {arg}"))
}

impl Command {
    /// Parse one input line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Self::Refresh;
        };
        let arg = words.next();

        let parsed = match head {
            "r" | "refresh" => Ok(Self::Refresh),
            "n" | "amount" => argument("amount", arg).map(Self::Amount),
            "p" | "parts" => argument("parts", arg).map(Self::Parts),
            "pad" | "padding" => argument("padding", arg).map(Self::Padding),
            "o" | "order" => Ok(Self::ToggleOrder),
            "g" | "gradient" => Ok(Self::ToggleGradient),
            "s" | "settings" => Ok(Self::ToggleSettings),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            _ => return Self::Unknown(line.trim().to_string()),
        };
        match (parsed, words.next()) {
            (Ok(_), Some(extra)) => Self::Invalid(format!("{head}: unexpected argument {extra}")),
            (Ok(cmd), None) => cmd,
            (Err(msg), _) => Self::Invalid(msg),
        }
    }

    /// Apply the command to `state`.
    pub fn execute(self, state: &mut AppState) -> CommandResult {
        let outcome = match self {
            Self::Refresh => state.new_colors(),
            Self::Amount(n) => state.set_amount(n),
            Self::Parts(n) => state.set_colors_in_gradient(n),
            Self::Padding(p) => state.set_padding(p),
            Self::ToggleOrder => state.set_random_order(!state.random_order),
            Self::ToggleGradient => {
                state.toggle_gradient();
                Ok(())
            }
            Self::ToggleSettings => {
                state.toggle_settings();
                Ok(())
            }
            Self::Help => return CommandResult::Ok(Some(crate::render::HELP.to_string())),
            Self::Quit => return CommandResult::Quit,
            Self::Invalid(msg) => return CommandResult::Err(msg),
            Self::Unknown(input) => return CommandResult::Err(format!("unknown command: {input}")),
        };
        match outcome {
            Ok(()) => CommandResult::Ok(None),
            Err(e) => CommandResult::Err(e.to_string()),
        }
    }
}
