//! Notification display infrastructure module
//!
//! Provides the desktop backend (notify-rust) plus stdout and no-op
//! backends for headless environments and tests.

mod noop;
mod notify_rust;
mod stdout;

pub use noop::NoOpDisplay;
pub use notify_rust::NotifyRustDisplay;
pub use stdout::StdoutDisplay;

use std::fmt;
use std::str::FromStr;

use crate::application::ports::NotificationDisplay;

/// Available display backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayKind {
    /// Desktop notification via notify-rust (default)
    #[default]
    Desktop,
    /// Write the resolved request as one JSON line to stdout
    Stdout,
    /// Discard requests
    NoOp,
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayKind::Desktop => write!(f, "desktop"),
            DisplayKind::Stdout => write!(f, "stdout"),
            DisplayKind::NoOp => write!(f, "noop"),
        }
    }
}

/// Error type for parsing a display backend name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDisplayKindError {
    pub input: String,
}

impl fmt::Display for ParseDisplayKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown display backend \"{}\". Valid backends: desktop, stdout, noop",
            self.input
        )
    }
}

impl std::error::Error for ParseDisplayKindError {}

impl FromStr for DisplayKind {
    type Err = ParseDisplayKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(DisplayKind::Desktop),
            "stdout" => Ok(DisplayKind::Stdout),
            "noop" => Ok(DisplayKind::NoOp),
            other => Err(ParseDisplayKindError {
                input: other.to_string(),
            }),
        }
    }
}

/// Create the display backend for the given kind
pub fn create_display(kind: DisplayKind, app_name: &str) -> Box<dyn NotificationDisplay> {
    match kind {
        DisplayKind::Desktop => Box::new(NotifyRustDisplay::with_app_name(app_name)),
        DisplayKind::Stdout => Box::new(StdoutDisplay::new()),
        DisplayKind::NoOp => Box::new(NoOpDisplay::new()),
    }
}
