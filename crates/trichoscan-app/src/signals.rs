//! OS signal handling for graceful shutdown

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::message::Message;
use trichoscan_core::prelude::*;

/// Spawn a task that listens for OS signals and sends quit messages.
///
/// The task ends on its own once `shutdown_rx` turns `true`.
pub fn spawn_signal_handler(
    tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = wait_for_signal() => {
                if let Err(e) = result {
                    error!("Signal handler error: {}", e);
                    return;
                }
                info!("Shutdown signal received");
                let _ = tx.send(Message::Quit).await;
            }
            _ = async {
                let _ = shutdown_rx.wait_for(|stop| *stop).await;
            } => {
                debug!("Signal handler stopped");
            }
        }
    })
}

/// Wait for a termination signal
async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        tokio::select! {
            _ = sigint.recv() => {
                info!("Received SIGINT");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM");
            }
        }

        Ok(())
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        info!("Received Ctrl+C");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    #[tokio::test]
    async fn test_signal_handler_spawn() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = spawn_signal_handler(tx, shutdown_rx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        // No signal sent yet
        assert!(rx.try_recv().is_err());
        assert!(!handle.is_finished());
        handle.abort();
    }

    #[tokio::test]
    async fn test_signal_handler_stops_on_shutdown() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = spawn_signal_handler(tx, shutdown_rx);
        shutdown_tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("handler exits after shutdown")
            .unwrap();
        assert!(rx.try_recv().is_err());
    }
}
