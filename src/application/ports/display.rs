//! Notification display port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::push::NotificationRequest;

/// Display errors
#[derive(Debug, Clone, Error)]
pub enum DisplayError {
    #[error("Notification display unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to show notification: {0}")]
    ShowFailed(String),
}

/// Port for the host environment's notification-display capability
#[async_trait]
pub trait NotificationDisplay: Send + Sync {
    /// Show a resolved notification request.
    ///
    /// # Arguments
    /// * `request` - The resolved title/body/icon/data bundle
    ///
    /// # Returns
    /// Ok(()) once the display call has been issued, error otherwise
    async fn show(&self, request: &NotificationRequest) -> Result<(), DisplayError>;
}

/// Blanket implementation for boxed display types
#[async_trait]
impl NotificationDisplay for Box<dyn NotificationDisplay> {
    async fn show(&self, request: &NotificationRequest) -> Result<(), DisplayError> {
        self.as_ref().show(request).await
    }
}
