//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the desktop notification
//! daemon, stdin event streams, and the XDG config directory.

pub mod config;
pub mod display;
pub mod signing;
pub mod source;

// Re-export adapters
pub use config::XdgConfigStore;
pub use display::{create_display, DisplayKind, NoOpDisplay, NotifyRustDisplay, StdoutDisplay};
pub use signing::resolve_signing;
pub use source::JsonLinesSource;
