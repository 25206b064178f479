//! CLI presenter for output formatting

use colored::*;

use crate::domain::push::NotificationRequest;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Summarize a dispatched request on stderr
    pub fn dispatched(&self, request: &NotificationRequest) {
        let data_keys = request
            .options
            .data
            .as_ref()
            .map(|d| d.len())
            .unwrap_or(0);
        eprintln!(
            "{} Dispatched \"{}\" ({} data keys)",
            "→".cyan(),
            request.title,
            data_keys
        );
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::push::{PushPayload, DEFAULT_ICON};

    #[test]
    fn presenter_creates() {
        let _presenter = Presenter::new();
    }

    #[test]
    fn dispatched_counts_data_keys() {
        // Exercise the formatting path; output goes to stderr
        let presenter = Presenter::new();
        let request = NotificationRequest::resolve(&PushPayload::empty(), DEFAULT_ICON);
        presenter.dispatched(&request);
    }
}
