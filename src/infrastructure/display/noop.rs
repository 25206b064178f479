//! No-op display adapter
//!
//! Used when notifications are disabled.

use async_trait::async_trait;

use crate::application::ports::{DisplayError, NotificationDisplay};
use crate::domain::push::NotificationRequest;

/// No-op display that does nothing
pub struct NoOpDisplay;

impl NoOpDisplay {
    /// Create a new no-op display
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationDisplay for NoOpDisplay {
    async fn show(&self, _request: &NotificationRequest) -> Result<(), DisplayError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::push::{PushPayload, DEFAULT_ICON};

    #[tokio::test]
    async fn noop_returns_ok() {
        let display = NoOpDisplay::new();
        let request = NotificationRequest::resolve(&PushPayload::empty(), DEFAULT_ICON);
        assert!(display.show(&request).await.is_ok());
    }
}
