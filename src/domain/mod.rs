//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod push;
pub mod signing;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use push::{NotificationContent, NotificationOptions, NotificationRequest, PushPayload};
pub use signing::{KeystoreProperties, SigningConfig};
