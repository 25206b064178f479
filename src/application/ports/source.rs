//! Payload source port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::push::PushPayload;

/// Payload source errors
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("Failed to read payload event: {0}")]
    Read(String),

    #[error("Malformed payload: {0}")]
    Malformed(String),
}

/// Port for the host environment's inbound event stream.
///
/// The dispatcher is dormant until the source yields a payload; it never
/// polls. `None` means the stream has ended.
#[async_trait]
pub trait PayloadSource: Send {
    /// Wait for and return the next inbound payload.
    async fn next(&mut self) -> Result<Option<PushPayload>, SourceError>;
}
