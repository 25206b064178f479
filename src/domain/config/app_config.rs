//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::push::DEFAULT_ICON;

/// Default notification app name
pub const DEFAULT_APP_NAME: &str = "push-courier";

/// Default display backend name
pub const DEFAULT_DISPLAY: &str = "desktop";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub icon: Option<String>,
    pub display: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            icon: Some(DEFAULT_ICON.to_string()),
            display: Some(DEFAULT_DISPLAY.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            icon: other.icon.or(self.icon),
            display: other.display.or(self.display),
        }
    }

    /// Get app name, or the fixed default if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get notification icon, or the fixed default if not set
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }

    /// Get display backend name, or "desktop" if not set
    pub fn display_or_default(&self) -> &str {
        self.display.as_deref().unwrap_or(DEFAULT_DISPLAY)
    }
}
