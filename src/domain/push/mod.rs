//! Push payload and notification request value objects

pub mod payload;
pub mod request;

pub use payload::{NotificationContent, PushPayload};
pub use request::{NotificationOptions, NotificationRequest, DEFAULT_ICON, DEFAULT_TITLE};
