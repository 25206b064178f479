//! Signal handling for listen mode

use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;

/// Shutdown reasons delivered to the listen loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    Interrupt,
    Terminate,
}

/// Listens for SIGINT/SIGTERM and delivers them as shutdown events.
///
/// The listen loop selects between this and the payload source so an idle
/// stream can still be interrupted.
pub struct ShutdownListener {
    receiver: mpsc::Receiver<ShutdownReason>,
}

impl ShutdownListener {
    /// Create a new listener and start watching for shutdown signals
    pub fn new() -> Result<Self, std::io::Error> {
        let (tx, rx) = mpsc::channel(2);

        let tx_int = tx.clone();
        let mut sigint = signal(SignalKind::interrupt())?;
        tokio::spawn(async move {
            sigint.recv().await;
            let _ = tx_int.send(ShutdownReason::Interrupt).await;
        });

        let mut sigterm = signal(SignalKind::terminate())?;
        tokio::spawn(async move {
            sigterm.recv().await;
            let _ = tx.send(ShutdownReason::Terminate).await;
        });

        Ok(Self { receiver: rx })
    }

    /// Wait for the next shutdown signal
    pub async fn recv(&mut self) -> Option<ShutdownReason> {
        self.receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shutdown_reason_equality() {
        assert_eq!(ShutdownReason::Interrupt, ShutdownReason::Interrupt);
        assert_ne!(ShutdownReason::Interrupt, ShutdownReason::Terminate);
    }
}
