//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::infrastructure::DisplayKind;

/// PushCourier - push payload to notification dispatcher
#[derive(Parser, Debug)]
#[command(name = "push-courier")]
#[command(version = "0.1.0")]
#[command(about = "Dispatch push payloads as desktop notifications")]
#[command(long_about = None)]
pub struct Cli {
    /// Read a single payload from FILE instead of stdin
    #[arg(short = 'p', long, value_name = "FILE", conflicts_with = "listen")]
    pub payload: Option<PathBuf>,

    /// Consume newline-delimited payloads from stdin until EOF
    #[arg(short = 'l', long)]
    pub listen: bool,

    /// Notification app name
    #[arg(long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Fixed notification icon (freedesktop name or path)
    #[arg(short = 'i', long, value_name = "ICON", env = "PUSH_COURIER_ICON")]
    pub icon: Option<String>,

    /// Display backend
    #[arg(short = 'D', long, value_name = "BACKEND", env = "PUSH_COURIER_DISPLAY")]
    pub display: Option<DisplayArg>,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Resolve release signing configuration
    Signing {
        /// Keystore properties file
        #[arg(long, value_name = "FILE", default_value = "key.properties")]
        properties: PathBuf,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Display backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DisplayArg {
    Desktop,
    Stdout,
    Noop,
}

impl From<DisplayArg> for DisplayKind {
    fn from(arg: DisplayArg) -> Self {
        match arg {
            DisplayArg::Desktop => DisplayKind::Desktop,
            DisplayArg::Stdout => DisplayKind::Stdout,
            DisplayArg::Noop => DisplayKind::NoOp,
        }
    }
}

impl From<DisplayKind> for DisplayArg {
    fn from(kind: DisplayKind) -> Self {
        match kind {
            DisplayKind::Desktop => DisplayArg::Desktop,
            DisplayKind::Stdout => DisplayArg::Stdout,
            DisplayKind::NoOp => DisplayArg::Noop,
        }
    }
}

/// Parsed dispatch options (one-shot and listen modes)
#[derive(Debug, Clone)]
pub struct DispatchOptions {
    pub app_name: String,
    pub icon: String,
    pub display: DisplayKind,
    pub payload: Option<PathBuf>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["app_name", "icon", "display"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
