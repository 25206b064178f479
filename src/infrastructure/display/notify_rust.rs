//! Desktop notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux.

use async_trait::async_trait;

use crate::application::ports::{DisplayError, NotificationDisplay};
use crate::domain::push::NotificationRequest;

/// Desktop display backend using notify-rust
pub struct NotifyRustDisplay {
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustDisplay {
    /// Create a new notify-rust display
    pub fn new() -> Self {
        Self {
            app_name: "push-courier".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationDisplay for NotifyRustDisplay {
    async fn show(&self, request: &NotificationRequest) -> Result<(), DisplayError> {
        let app_name = self.app_name.clone();
        let request = request.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut notification = notify_rust::Notification::new();
            notification
                .appname(&app_name)
                .summary(&request.title)
                .body(&request.options.body)
                .icon(&request.options.icon);

            // Pass-through data travels as custom hints so an action handler
            // can read it back later
            if let Some(data) = &request.options.data {
                for (key, value) in data {
                    notification.hint(notify_rust::Hint::Custom(key.clone(), value.clone()));
                }
            }

            notification
                .show()
                .map_err(|e| DisplayError::ShowFailed(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| DisplayError::ShowFailed(format!("Task join error: {}", e)))?
    }
}
