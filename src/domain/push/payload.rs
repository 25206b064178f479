//! Inbound push payload value object

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::PayloadError;

/// Display content carried inside a push payload.
/// Both fields are optional; the dispatcher substitutes defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// A push payload as delivered by the messaging backend.
///
/// The shape mirrors what FCM hands to a background handler: an optional
/// `notification` block with display content and an optional string-keyed
/// `data` map that is passed through verbatim for the receiving application
/// to interpret later. Unknown fields are ignored; real payloads carry
/// extra routing keys this component never looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<NotificationContent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<HashMap<String, String>>,
}

impl PushPayload {
    /// Create an empty payload (no notification block, no data)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a payload from a JSON document
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| PayloadError {
            message: e.to_string(),
        })
    }

    /// The title carried by the payload, if any
    pub fn title(&self) -> Option<&str> {
        self.notification.as_ref()?.title.as_deref()
    }

    /// The body carried by the payload, if any
    pub fn body(&self) -> Option<&str> {
        self.notification.as_ref()?.body.as_deref()
    }
}
