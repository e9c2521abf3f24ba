// SPDX-License-Identifier: MIT
//
// Terminal queries: size and whether stdout is a terminal.
//
// Safety: `ioctl(TIOCGWINSZ)` and `isatty` are the standard POSIX
// interfaces for these queries; each unsafe block is a single call.
#![allow(unsafe_code)]

/// Columns assumed when stdout is not a terminal.
pub const FALLBACK_COLS: u16 = 48;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub cols: u16,
    pub rows: u16,
}

/// Query the current terminal size via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

/// Width to render at: the terminal's, or [`FALLBACK_COLS`].
#[must_use]
pub fn width() -> usize {
    usize::from(get_size().map_or(FALLBACK_COLS, |s| s.cols))
}

/// Check whether stdout is connected to a terminal.
#[cfg(unix)]
#[must_use]
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn stdout_is_tty() -> bool {
    false
}
