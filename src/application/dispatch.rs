//! Push dispatch use case

use thiserror::Error;

use crate::domain::push::{NotificationRequest, PushPayload};

use super::ports::{DisplayError, NotificationDisplay};

/// Errors from the dispatch use case
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Display failed: {0}")]
    Display(#[from] DisplayError),
}

/// Converts an inbound push payload into exactly one displayed notification.
///
/// The use case holds no state across invocations: each dispatch is an
/// independent, pure resolution followed by a single fire-and-forget display
/// call. There is no retry, no deduplication, and no ordering guarantee
/// between events; display failures propagate to the caller unmodified.
pub struct DispatchUseCase<D>
where
    D: NotificationDisplay,
{
    display: D,
    icon: String,
}

impl<D> DispatchUseCase<D>
where
    D: NotificationDisplay,
{
    /// Create a new use case with a display backend and a fixed icon path
    pub fn new(display: D, icon: impl Into<String>) -> Self {
        Self {
            display,
            icon: icon.into(),
        }
    }

    /// Resolve the payload and issue one display call.
    ///
    /// Returns the resolved request so the caller can present it.
    pub async fn dispatch(&self, payload: &PushPayload) -> Result<NotificationRequest, DispatchError> {
        let request = NotificationRequest::resolve(payload, &self.icon);
        self.display.show(&request).await?;
        Ok(request)
    }
}
