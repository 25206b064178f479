//! Stdout display adapter
//!
//! Writes each resolved request as one JSON line. Used in headless
//! environments and by the integration tests.

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{DisplayError, NotificationDisplay};
use crate::domain::push::NotificationRequest;

/// Display backend that prints requests to stdout as JSON lines
pub struct StdoutDisplay;

impl StdoutDisplay {
    /// Create a new stdout display
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationDisplay for StdoutDisplay {
    async fn show(&self, request: &NotificationRequest) -> Result<(), DisplayError> {
        let mut line = serde_json::to_string(request)
            .map_err(|e| DisplayError::ShowFailed(e.to_string()))?;
        line.push('\n');

        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(line.as_bytes())
            .await
            .map_err(|e| DisplayError::ShowFailed(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| DisplayError::ShowFailed(e.to_string()))?;

        Ok(())
    }
}
