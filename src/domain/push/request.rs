//! Resolved notification request value object

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::payload::PushPayload;

/// Title substituted when the payload carries none
pub const DEFAULT_TITLE: &str = "Notification";

/// Icon used when none is configured (freedesktop icon name)
pub const DEFAULT_ICON: &str = "dialog-information";

/// Display options for a resolved notification request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOptions {
    pub body: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<HashMap<String, String>>,
}

/// A fully resolved notification request, ready to display.
///
/// Resolution is a pure transformation from [`PushPayload`]:
/// - `title` falls back to [`DEFAULT_TITLE`] when absent upstream
/// - `body` falls back to the empty string
/// - `icon` is fixed per dispatcher instance, never taken from the payload
/// - `data` is passed through verbatim, including absence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub options: NotificationOptions,
}

impl NotificationRequest {
    /// Resolve a payload into a displayable request using a fixed icon
    pub fn resolve(payload: &PushPayload, icon: &str) -> Self {
        let title = payload.title().unwrap_or(DEFAULT_TITLE).to_string();
        let body = payload.body().unwrap_or("").to_string();

        Self {
            title,
            options: NotificationOptions {
                body,
                icon: icon.to_string(),
                data: payload.data.clone(),
            },
        }
    }
}
